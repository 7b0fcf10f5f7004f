use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use yojana::briefing::EligibilityDigest;
use yojana::config::{CatalogConfig, TranslationConfig};
use yojana::error::AppError;
use yojana::presentation::{
    GlossaryError, GlossaryTranslator, IdentityTranslator, Locale, TranslationError, Translator,
};
use yojana::schemes::{
    CachedCatalog, CatalogError, CatalogProvider, CsvCatalogProvider, SchemeCatalog,
    SchemeService,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Translator selected by configuration.
pub(crate) enum ConfiguredTranslator {
    English(IdentityTranslator),
    Glossary(GlossaryTranslator),
}

impl ConfiguredTranslator {
    pub(crate) fn load(glossary_csv: Option<&Path>) -> Result<Self, GlossaryError> {
        match glossary_csv {
            Some(path) => Ok(Self::Glossary(GlossaryTranslator::from_path(path)?)),
            None => Ok(Self::English(IdentityTranslator)),
        }
    }
}

impl Translator for ConfiguredTranslator {
    fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError> {
        match self {
            ConfiguredTranslator::English(inner) => inner.translate(text, locale),
            ConfiguredTranslator::Glossary(inner) => inner.translate(text, locale),
        }
    }
}

/// Catalog source selected by configuration: cached snapshot or a fresh read per request.
pub(crate) enum ConfiguredCatalog {
    Cached(CachedCatalog<CsvCatalogProvider>),
    Direct(CsvCatalogProvider),
}

impl ConfiguredCatalog {
    pub(crate) fn from_config(config: &CatalogConfig) -> Self {
        let provider = CsvCatalogProvider::new(config.schemes_csv.clone());
        if config.cache {
            Self::Cached(CachedCatalog::new(provider))
        } else {
            Self::Direct(provider)
        }
    }
}

impl CatalogProvider for ConfiguredCatalog {
    fn load_catalog(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        match self {
            ConfiguredCatalog::Cached(inner) => inner.load_catalog(),
            ConfiguredCatalog::Direct(inner) => inner.load_catalog(),
        }
    }
}

pub(crate) type AppSchemeService = SchemeService<
    ConfiguredCatalog,
    ConfiguredTranslator,
    EligibilityDigest<ConfiguredTranslator>,
>;

pub(crate) fn build_service(
    catalog: &CatalogConfig,
    translation: &TranslationConfig,
) -> Result<Arc<AppSchemeService>, AppError> {
    let translator = Arc::new(ConfiguredTranslator::load(
        translation.glossary_csv.as_deref(),
    )?);
    let briefings = Arc::new(EligibilityDigest::new(Arc::clone(&translator)));

    Ok(Arc::new(SchemeService::new(
        Arc::new(ConfiguredCatalog::from_config(catalog)),
        translator,
        briefings,
    )))
}
