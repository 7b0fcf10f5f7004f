//! Display decoration for categorized schemes.
//!
//! Nothing here feeds back into matching; the presenter only receives buckets
//! that were already computed.

pub mod form;
pub mod glossary;
pub mod translator;

pub use form::{FormField, FormFieldOptions, FormOption, FormOptions};
pub use glossary::{GlossaryError, GlossaryTranslator};
pub use translator::{IdentityTranslator, TranslationError, Translator};

use crate::schemes::{CategorizedSchemes, SchemeBucket, SchemeName, SchemeRecord};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

const ENGLISH: &str = "en";

/// Target language code, lowercased. Blank means English.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() {
            Self::english()
        } else {
            Self(code)
        }
    }

    pub fn english() -> Self {
        Self(ENGLISH.to_string())
    }

    pub fn from_optional(code: Option<&str>) -> Self {
        code.map(Self::new).unwrap_or_else(Self::english)
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `"{translated} ({original})"` for non-English locales, the original when
/// the locale is English or the translator fails.
pub fn annotate<T: Translator + ?Sized>(translator: &T, text: &str, locale: &Locale) -> String {
    if locale.is_english() {
        return text.to_string();
    }

    match translator.translate(text, locale) {
        Ok(translated) => format!("{translated} ({text})"),
        Err(err) => {
            debug!(locale = %locale, error = %err, "label left untranslated");
            text.to_string()
        }
    }
}

/// Translated text alone, falling back to the original.
pub fn translate_or_original<T: Translator + ?Sized>(
    translator: &T,
    text: &str,
    locale: &Locale,
) -> String {
    if locale.is_english() {
        return text.to_string();
    }

    translator.translate(text, locale).unwrap_or_else(|err| {
        debug!(locale = %locale, error = %err, "text left untranslated");
        text.to_string()
    })
}

/// Display form of one matched scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeCard {
    /// Untranslated name, usable as a lookup key.
    pub key: SchemeName,
    pub name: String,
    pub description: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnTitles {
    pub all: String,
    pub central: String,
    pub state: String,
}

/// Rendered buckets plus the localized chrome around them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentedSchemes {
    pub locale: Locale,
    pub titles: ColumnTitles,
    /// Shown in place of an empty bucket.
    pub none_text: String,
    pub all: Vec<SchemeCard>,
    pub central: Vec<SchemeCard>,
    pub state: Vec<SchemeCard>,
}

impl PresentedSchemes {
    pub fn bucket(&self, bucket: SchemeBucket) -> &[SchemeCard] {
        match bucket {
            SchemeBucket::All => &self.all,
            SchemeBucket::Central => &self.central,
            SchemeBucket::State => &self.state,
        }
    }

    pub fn title(&self, bucket: SchemeBucket) -> &str {
        match bucket {
            SchemeBucket::All => &self.titles.all,
            SchemeBucket::Central => &self.titles.central,
            SchemeBucket::State => &self.titles.state,
        }
    }
}

pub struct SchemePresenter<T: ?Sized> {
    translator: Arc<T>,
}

impl<T: ?Sized> Clone for SchemePresenter<T> {
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
        }
    }
}

impl<T: Translator + ?Sized> SchemePresenter<T> {
    pub fn new(translator: Arc<T>) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Cards are built once per entry of `all` and split by scheme type, the
    /// same partition `categorize` uses for the central and state buckets.
    pub fn present(&self, schemes: &CategorizedSchemes<'_>, locale: &Locale) -> PresentedSchemes {
        let mut all = Vec::with_capacity(schemes.all.len());
        let mut central = Vec::with_capacity(schemes.central.len());
        let mut state = Vec::with_capacity(schemes.state.len());

        for scheme in &schemes.all {
            let card = self.card(scheme, locale);
            if scheme.is_central() {
                central.push(card.clone());
            } else {
                state.push(card.clone());
            }
            all.push(card);
        }

        PresentedSchemes {
            locale: locale.clone(),
            titles: ColumnTitles {
                all: annotate(&*self.translator, SchemeBucket::All.title(), locale),
                central: annotate(&*self.translator, SchemeBucket::Central.title(), locale),
                state: annotate(&*self.translator, SchemeBucket::State.title(), locale),
            },
            none_text: annotate(&*self.translator, "None", locale),
            all,
            central,
            state,
        }
    }

    fn card(&self, scheme: &SchemeRecord, locale: &Locale) -> SchemeCard {
        SchemeCard {
            key: scheme.name.clone(),
            name: annotate(&*self.translator, scheme.name.as_str(), locale),
            description: translate_or_original(&*self.translator, &scheme.description, locale),
            website: scheme.website_or_default().to_string(),
        }
    }
}
