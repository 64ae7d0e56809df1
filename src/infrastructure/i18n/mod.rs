mod accept_language;
mod json_message_catalog;

pub use accept_language::{negotiate_locale, parse_accept_language};
pub use json_message_catalog::JsonMessageCatalog;
