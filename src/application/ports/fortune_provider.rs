use crate::domain::{FortuneContext, FortuneKey, Locale};

pub trait FortuneProvider: Send + Sync {
    fn generate_key(&self) -> FortuneKey;

    /// Resolves `key` for `locale`. Always yields a message.
    fn fortune(&self, key: &FortuneKey, locale: &Locale) -> String;

    fn draw(&self, locale: &Locale) -> FortuneContext {
        let key = self.generate_key();
        let message = self.fortune(&key, locale);
        FortuneContext::new(key, locale.clone(), message)
    }
}
