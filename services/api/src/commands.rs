use crate::infra::build_service;
use clap::Args;
use std::path::PathBuf;
use yojana::config::{AppConfig, CatalogConfig, TranslationConfig};
use yojana::error::AppError;
use yojana::presentation::{Locale, PresentedSchemes};
use yojana::schemes::{
    explain, CatalogProvider, ProfileForm, SchemeBucket, SchemeCatalog, SchemeServiceError,
    UserProfile,
};

#[derive(Args, Debug, Default)]
pub(crate) struct MatchArgs {
    /// Applicant age in whole years; anything else counts as 0
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Male, Female or Other
    #[arg(long)]
    pub(crate) gender: Option<String>,
    #[arg(long)]
    pub(crate) state: Option<String>,
    #[arg(long)]
    pub(crate) occupation: Option<String>,
    /// Urban or Rural
    #[arg(long)]
    pub(crate) residence: Option<String>,
    /// Yes or No
    #[arg(long)]
    pub(crate) minority: Option<String>,
    /// Yes or No
    #[arg(long)]
    pub(crate) disabled: Option<String>,
    #[arg(long)]
    pub(crate) caste: Option<String>,
    #[arg(long)]
    pub(crate) salary: Option<String>,
    /// Scheme catalog CSV (defaults to APP_SCHEMES_CSV)
    #[arg(long)]
    pub(crate) schemes: Option<PathBuf>,
    /// Glossary CSV used for non-English output (defaults to APP_GLOSSARY_CSV)
    #[arg(long)]
    pub(crate) glossary: Option<PathBuf>,
    /// Output language code
    #[arg(long)]
    pub(crate) lang: Option<String>,
    /// List the failed rules for every scheme that did not match
    #[arg(long)]
    pub(crate) explain: bool,
}

impl MatchArgs {
    fn profile_form(&self) -> ProfileForm {
        ProfileForm {
            age: self.age.clone(),
            gender: self.gender.clone(),
            state: self.state.clone(),
            occupation: self.occupation.clone(),
            residence: self.residence.clone(),
            minority: self.minority.clone(),
            disabled: self.disabled.clone(),
            caste: self.caste.clone(),
            salary: self.salary.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Scheme catalog CSV (defaults to APP_SCHEMES_CSV)
    #[arg(long)]
    pub(crate) schemes: Option<PathBuf>,
    /// Print every scheme name
    #[arg(long)]
    pub(crate) list: bool,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_config = CatalogConfig {
        schemes_csv: args
            .schemes
            .clone()
            .unwrap_or(config.catalog.schemes_csv),
        cache: false,
    };
    let translation_config = TranslationConfig {
        glossary_csv: args.glossary.clone().or(config.translation.glossary_csv),
    };

    let service = build_service(&catalog_config, &translation_config)?;
    let locale = Locale::from_optional(args.lang.as_deref());
    let presented = service.eligible(args.profile_form(), &locale)?;
    render_presented(&presented);

    if args.explain {
        let profile = args
            .profile_form()
            .into_profile()
            .map_err(SchemeServiceError::from)?;
        let catalog = service.catalog().load_catalog()?;
        render_gaps(&catalog, &profile);
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_config = CatalogConfig {
        schemes_csv: args.schemes.unwrap_or(config.catalog.schemes_csv),
        cache: false,
    };
    let service = build_service(&catalog_config, &TranslationConfig::default())?;
    let catalog = service.catalog().load_catalog()?;

    let central = catalog.central_count();
    println!("Scheme catalog: {}", catalog_config.schemes_csv.display());
    println!(
        "Loaded at {}",
        catalog.loaded_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Schemes: {} total | {} central | {} state",
        catalog.len(),
        central,
        catalog.len() - central
    );

    if args.list {
        println!();
        for scheme in catalog.iter() {
            println!("  - [{}] {}", scheme.scheme_type.label(), scheme.name);
        }
    }

    Ok(())
}

fn render_presented(presented: &PresentedSchemes) {
    println!("Eligible schemes (language: {})", presented.locale);

    for bucket in [SchemeBucket::All, SchemeBucket::Central, SchemeBucket::State] {
        let cards = presented.bucket(bucket);
        println!("\n{} ({})", presented.title(bucket), cards.len());
        if cards.is_empty() {
            println!("  {}", presented.none_text);
            continue;
        }

        for card in cards {
            println!("  - {}", card.name);
            if !card.description.is_empty() {
                println!("    {}", card.description);
            }
            println!("    {}", card.website);
        }
    }
}

fn render_gaps(catalog: &SchemeCatalog, profile: &UserProfile) {
    println!("\nNot eligible");
    let mut shown = 0usize;
    for scheme in catalog.iter() {
        let gaps = explain(scheme, profile);
        if gaps.is_empty() {
            continue;
        }
        shown += 1;
        println!("  - {}", scheme.name);
        for gap in gaps {
            println!("      {}: {}", gap.predicate.label(), gap.detail);
        }
    }

    if shown == 0 {
        println!("  None");
    }
}
