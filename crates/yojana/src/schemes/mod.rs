//! Scheme catalog, applicant profile and the eligibility core.

pub mod catalog;
mod categorize;
pub mod domain;
pub mod eligibility;
pub mod profile;
pub mod router;
pub mod service;
pub mod vocabulary;

pub use catalog::{
    CachedCatalog, CatalogError, CatalogProvider, CsvCatalogProvider, SchemeCatalog,
    StaticCatalog,
};
pub use categorize::{categorize, CategorizedSchemes, SchemeBucket};
pub use domain::{
    Constraint, Gender, Residence, SchemeName, SchemeRecord, SchemeType, UserProfile, YesNo,
    DEFAULT_SCHEME_PORTAL,
};
pub use eligibility::{explain, is_eligible, Ineligibility, Predicate};
pub use profile::ProfileForm;
pub use router::scheme_router;
pub use service::{SchemeService, SchemeServiceError};
pub use vocabulary::{Vocabulary, VocabularyError};
