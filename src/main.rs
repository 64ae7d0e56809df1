use std::net::SocketAddr;

use tokio::net::TcpListener;

use fortune_cookie::infrastructure::observability::{TracingConfig, init_tracing};
use fortune_cookie::presentation::{
    AppState, Environment, FortuneCookieState, Settings, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.enable_json,
            settings.logging.level.clone(),
        ),
        settings.server.port,
    );

    let fortune = FortuneCookieState::from_settings(&settings.fortune)?;
    tracing::info!(
        enabled = settings.fortune.enabled,
        include_in_response = settings.fortune.include_in_response,
        include_in_header = settings.fortune.include_in_header,
        fortunes_count = settings.fortune.fortunes_count,
        "Fortune cookie configured"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let router = create_router(AppState::new(fortune));

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
