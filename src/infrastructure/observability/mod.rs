mod init_tracing;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use tracing_config::{DEFAULT_LOG_FILTER, TracingConfig};
