use super::translator::{TranslationError, Translator};
use super::Locale;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Offline translator backed by a `lang,source,translated` CSV glossary.
#[derive(Debug, Clone, Default)]
pub struct GlossaryTranslator {
    entries: HashMap<(String, String), String>,
    locales: HashSet<String>,
}

#[derive(Debug, Deserialize)]
struct GlossaryRow {
    lang: String,
    source: String,
    translated: String,
}

impl GlossaryTranslator {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GlossaryError> {
        let file = std::fs::File::open(path.as_ref())?;
        let glossary = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            entries = glossary.len(),
            locales = glossary.locales.len(),
            "translation glossary loaded"
        );
        Ok(glossary)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GlossaryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut glossary = Self::default();

        for row in csv_reader.deserialize::<GlossaryRow>() {
            let row = row?;
            if row.translated.is_empty() {
                continue;
            }
            glossary.insert(&row.lang, row.source, row.translated);
        }

        Ok(glossary)
    }

    pub fn insert(&mut self, lang: &str, source: impl Into<String>, translated: impl Into<String>) {
        let code = Locale::new(lang).code().to_string();
        self.locales.insert(code.clone());
        self.entries.insert((code, source.into()), translated.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for GlossaryTranslator {
    fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError> {
        if locale.is_english() {
            return Ok(text.to_string());
        }
        if !self.locales.contains(locale.code()) {
            return Err(TranslationError::UnsupportedLocale(locale.code().to_string()));
        }

        self.entries
            .get(&(locale.code().to_string(), text.to_string()))
            .cloned()
            .ok_or_else(|| TranslationError::Missing {
                locale: locale.code().to_string(),
                text: text.to_string(),
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("failed to read translation glossary: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid translation glossary: {0}")]
    Csv(#[from] csv::Error),
}
