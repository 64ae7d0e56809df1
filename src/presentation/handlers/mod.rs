mod greeting;
mod health;
mod lucky;

pub use greeting::{greeting_handler, plain_text_handler};
pub use health::health_handler;
pub use lucky::{lucky_number_handler, lucky_numbers_handler};
