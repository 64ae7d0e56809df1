use axum::Json;
use rand::Rng;
use serde::Serialize;

#[derive(Serialize)]
pub struct LuckyNumberResponse {
    pub number: u8,
}

pub async fn lucky_number_handler() -> Json<LuckyNumberResponse> {
    let number = rand::thread_rng().gen_range(1..=99);
    Json(LuckyNumberResponse { number })
}

/// Returns a JSON array, which is passed through without a fortune.
pub async fn lucky_numbers_handler() -> Json<Vec<u8>> {
    let mut rng = rand::thread_rng();
    Json((0..6).map(|_| rng.gen_range(1..=45)).collect())
}
