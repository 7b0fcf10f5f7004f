use std::sync::Arc;

use tracing::{info, warn};

use super::catalog::{CatalogError, CatalogProvider};
use super::categorize::categorize;
use super::profile::ProfileForm;
use super::vocabulary::VocabularyError;
use crate::briefing::{Briefing, BriefingError, BriefingRequest, BriefingService};
use crate::presentation::{FormOptions, Locale, PresentedSchemes, SchemePresenter, Translator};

/// Service composing the catalog provider, presenter and briefing backend.
///
/// Each call takes its own catalog snapshot and profile; nothing is retained
/// between requests.
pub struct SchemeService<P, T: ?Sized, B> {
    catalog: Arc<P>,
    presenter: SchemePresenter<T>,
    briefings: Arc<B>,
}

impl<P, T, B> SchemeService<P, T, B>
where
    P: CatalogProvider + 'static,
    T: Translator + ?Sized + 'static,
    B: BriefingService + 'static,
{
    pub fn new(catalog: Arc<P>, translator: Arc<T>, briefings: Arc<B>) -> Self {
        Self {
            catalog,
            presenter: SchemePresenter::new(translator),
            briefings,
        }
    }

    pub fn catalog(&self) -> &P {
        &self.catalog
    }

    /// Match a profile against the current catalog and render the three buckets.
    pub fn eligible(
        &self,
        form: ProfileForm,
        locale: &Locale,
    ) -> Result<PresentedSchemes, SchemeServiceError> {
        let profile = form.into_profile()?;
        let catalog = self.catalog.load_catalog()?;
        if catalog.is_empty() {
            warn!("scheme catalog is empty; every bucket will be empty");
        }

        let buckets = categorize(&*catalog, &profile);
        info!(
            locale = %locale,
            catalog = catalog.len(),
            matched = buckets.all.len(),
            central = buckets.central.len(),
            state = buckets.state.len(),
            "schemes categorized"
        );

        Ok(self.presenter.present(&buckets, locale))
    }

    /// Briefing for one scheme, looked up by its untranslated name.
    pub fn briefing(
        &self,
        scheme_name: &str,
        form: ProfileForm,
        locale: &Locale,
    ) -> Result<Briefing, SchemeServiceError> {
        let profile = form.into_profile()?;
        let catalog = self.catalog.load_catalog()?;
        let scheme = catalog
            .find(scheme_name)
            .ok_or_else(|| SchemeServiceError::UnknownScheme(scheme_name.to_string()))?;

        let request = BriefingRequest::new(scheme, &profile, locale);
        Ok(self.briefings.brief(scheme, &request)?)
    }

    pub fn form_options(&self, locale: &Locale) -> FormOptions {
        FormOptions::localized(self.presenter.translator(), locale)
    }
}

/// Error raised by the scheme service.
#[derive(Debug, thiserror::Error)]
pub enum SchemeServiceError {
    #[error(transparent)]
    Profile(#[from] VocabularyError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("no scheme named '{0}'")]
    UnknownScheme(String),
    #[error(transparent)]
    Briefing(#[from] BriefingError),
}
