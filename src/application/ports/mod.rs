mod fortune_provider;
mod message_catalog;

pub use fortune_provider::FortuneProvider;
pub use message_catalog::{CatalogError, MessageCatalog};
