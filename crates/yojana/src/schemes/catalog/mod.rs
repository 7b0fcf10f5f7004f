mod cache;
mod normalizer;
mod parser;

pub use cache::CachedCatalog;

use crate::schemes::domain::{SchemeName, SchemeRecord};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Ordered, read-only collection of scheme records with unique names.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    records: Vec<SchemeRecord>,
    loaded_at: DateTime<Utc>,
}

impl SchemeCatalog {
    /// Strict constructor: a repeated name is an error.
    pub fn new(records: Vec<SchemeRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if !seen.insert(&record.name) {
                return Err(CatalogError::DuplicateName {
                    name: record.name.clone(),
                    position: index + 1,
                });
            }
        }

        Ok(Self {
            records,
            loaded_at: Utc::now(),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Lenient constructor used for exported data: the first record with a
    /// given name wins and later repeats are skipped.
    pub fn first_wins(records: Vec<SchemeRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if seen.contains(&record.name) {
                warn!(name = %record.name, row = index + 1, "duplicate scheme name skipped");
                continue;
            }
            seen.insert(record.name.clone());
            kept.push(record);
        }

        Self {
            records: kept,
            loaded_at: Utc::now(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::first_wins(parser::parse_records(reader)?))
    }

    pub fn records(&self) -> &[SchemeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn find(&self, name: &str) -> Option<&SchemeRecord> {
        self.records
            .iter()
            .find(|record| record.name.as_str() == name)
    }

    pub fn central_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_central()).count()
    }
}

impl<'a> IntoIterator for &'a SchemeCatalog {
    type Item = &'a SchemeRecord;
    type IntoIter = std::slice::Iter<'a, SchemeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Source of the authoritative scheme catalog for one categorization.
pub trait CatalogProvider: Send + Sync {
    fn load_catalog(&self) -> Result<Arc<SchemeCatalog>, CatalogError>;
}

/// Failures raised while obtaining a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scheme catalog data: {0}")]
    Csv(#[from] csv::Error),
    #[error("scheme name '{name}' appears more than once (record {position})")]
    DuplicateName { name: SchemeName, position: usize },
}

/// Reads the tabular export from disk on every load.
#[derive(Debug, Clone)]
pub struct CsvCatalogProvider {
    path: PathBuf,
}

impl CsvCatalogProvider {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for CsvCatalogProvider {
    fn load_catalog(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        let file = std::fs::File::open(&self.path)?;
        let catalog = SchemeCatalog::from_reader(file)?;
        info!(
            path = %self.path.display(),
            schemes = catalog.len(),
            central = catalog.central_count(),
            "scheme catalog loaded"
        );
        Ok(Arc::new(catalog))
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Arc<SchemeCatalog>,
}

impl StaticCatalog {
    pub fn new(catalog: SchemeCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn load_catalog(&self) -> Result<Arc<SchemeCatalog>, CatalogError> {
        Ok(Arc::clone(&self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::categorize;
    use crate::schemes::domain::{SchemeType, UserProfile};
    use std::io::Cursor;

    #[test]
    fn strict_constructor_rejects_duplicate_names() {
        let records = vec![
            SchemeRecord::new("PM-KISAN", "first", SchemeType::Central),
            SchemeRecord::new("Ujjwala", "second", SchemeType::Central),
            SchemeRecord::new("PM-KISAN", "third", SchemeType::State),
        ];

        match SchemeCatalog::new(records).expect_err("duplicate rejected") {
            CatalogError::DuplicateName { name, position } => {
                assert_eq!(name.as_str(), "PM-KISAN");
                assert_eq!(position, 3);
            }
            other => panic!("expected duplicate name error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_rows_keep_first_and_still_match() {
        let catalog = SchemeCatalog::from_reader(Cursor::new(
            "name,description,type,min_age\n\
             PM-KISAN,Income support,Central,18\n\
             KALIA,Farmer aid,State,18\n\
             KALIA,Second copy,Central,60\n",
        ))
        .expect("duplicates do not fail the load");

        assert_eq!(catalog.len(), 2);
        let kalia = catalog.find("KALIA").expect("first copy kept");
        assert_eq!(kalia.description, "Farmer aid");
        assert_eq!(kalia.scheme_type, SchemeType::State);

        let profile = UserProfile {
            age: 30,
            ..UserProfile::default()
        };
        let buckets = categorize(&catalog, &profile);
        assert_eq!(buckets.all.len(), 2);
        assert_eq!(buckets.central.len(), 1);
        assert_eq!(buckets.state.len(), 1);
    }

    #[test]
    fn find_looks_up_by_exact_name() {
        let catalog = SchemeCatalog::from_reader(Cursor::new(
            "name,description,type\nPM-KISAN,Income support,Central\nKALIA,Farmer aid,State\n",
        ))
        .expect("catalog parses");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.central_count(), 1);
        assert_eq!(
            catalog.find("KALIA").map(|record| record.scheme_type),
            Some(SchemeType::State)
        );
        assert!(catalog.find("kalia").is_none());
    }

    #[test]
    fn csv_provider_propagates_io_errors() {
        let provider = CsvCatalogProvider::new("./does-not-exist.csv");
        match provider.load_catalog().expect_err("expected io error") {
            CatalogError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
