use super::{CatalogError, CatalogProvider, SchemeCatalog};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Process-wide catalog snapshot over another provider.
///
/// Readers receive an `Arc` to the current snapshot. `refresh` loads a complete
/// new catalog before swapping it in, so a categorization in flight keeps the
/// snapshot it started with.
pub struct CachedCatalog<P> {
    provider: P,
    current: RwLock<Option<Arc<SchemeCatalog>>>,
}

impl<P: CatalogProvider> CachedCatalog<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            current: RwLock::new(None),
        }
    }

    /// Current snapshot, loading it on first use.
    pub fn snapshot(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        if let Some(catalog) = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(catalog));
        }

        self.refresh()
    }

    /// Reload from the underlying provider and swap the snapshot.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn refresh(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        let fresh = self.provider.load_catalog()?;
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&fresh));
        debug!(schemes = fresh.len(), "catalog snapshot swapped");
        Ok(fresh)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: CatalogProvider> CatalogProvider for CachedCatalog<P> {
    fn load_catalog(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        self.snapshot()
    }
}
