use super::Locale;

/// Translation backend. English input, target language given by the locale.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("no translations available for locale '{0}'")]
    UnsupportedLocale(String),
    #[error("no '{locale}' translation for '{text}'")]
    Missing { locale: String, text: String },
    #[error("translation backend unavailable: {0}")]
    Backend(String),
}

/// English-only translator; every other locale is unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError> {
        if locale.is_english() {
            Ok(text.to_string())
        } else {
            Err(TranslationError::UnsupportedLocale(locale.code().to_string()))
        }
    }
}
