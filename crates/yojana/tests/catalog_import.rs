use std::sync::Arc;
use yojana::briefing::EligibilityDigest;
use yojana::presentation::{IdentityTranslator, Locale};
use yojana::schemes::{
    categorize, CachedCatalog, CatalogProvider, CsvCatalogProvider, ProfileForm, SchemeCatalog,
    SchemeService, UserProfile, DEFAULT_SCHEME_PORTAL,
};

const SAMPLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/schemes_sample.csv");

fn sample_catalog() -> SchemeCatalog {
    let data = include_bytes!("data/schemes_sample.csv");
    SchemeCatalog::from_reader(&data[..]).expect("sample catalog parses")
}

fn names(bucket: &[&yojana::schemes::SchemeRecord]) -> Vec<String> {
    bucket.iter().map(|scheme| scheme.name.to_string()).collect()
}

fn form(pairs: &[(&str, &str)]) -> ProfileForm {
    let mut form = ProfileForm::default();
    for (field, value) in pairs {
        let value = Some(value.to_string());
        match *field {
            "age" => form.age = value,
            "gender" => form.gender = value,
            "state" => form.state = value,
            "occupation" => form.occupation = value,
            "residence" => form.residence = value,
            "minority" => form.minority = value,
            "disabled" => form.disabled = value,
            other => panic!("unexpected field {other}"),
        }
    }
    form
}

fn bihar_farmer() -> UserProfile {
    form(&[
        ("age", "25"),
        ("gender", "Male"),
        ("state", "Bihar"),
        ("occupation", "Farmer"),
        ("residence", "Rural"),
        ("minority", "No"),
        ("disabled", "No"),
    ])
    .into_profile()
    .expect("valid profile")
}

#[test]
fn sample_catalog_loads_in_file_order() {
    let catalog = sample_catalog();

    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.central_count(), 7);
    assert_eq!(catalog.records()[0].name.as_str(), "PM-KISAN");
    assert_eq!(
        catalog
            .find("Kerala Karunya Benevolent Fund")
            .expect("kerala scheme")
            .website_or_default(),
        DEFAULT_SCHEME_PORTAL
    );
}

#[test]
fn farmer_profile_matches_expected_schemes() {
    let catalog = sample_catalog();
    let buckets = categorize(&catalog, &bihar_farmer());

    let expected = vec![
        "PM-KISAN",
        "Ayushman Bharat PM-JAY",
        "Pradhan Mantri Awas Yojana Gramin",
        "Atal Pension Yojana",
    ];
    assert_eq!(names(&buckets.all), expected);
    assert_eq!(names(&buckets.central), expected);
    assert!(buckets.state.is_empty());
}

#[test]
fn minority_student_profile_splits_central_and_state() {
    let catalog = sample_catalog();
    let profile = form(&[
        ("age", "17"),
        ("gender", "Female"),
        ("state", "Bihar"),
        ("occupation", "Student"),
        ("residence", "Urban"),
        ("minority", "Yes"),
        ("disabled", "No"),
    ])
    .into_profile()
    .expect("valid profile");

    let buckets = categorize(&catalog, &profile);

    assert_eq!(
        names(&buckets.all),
        vec![
            "Ayushman Bharat PM-JAY",
            "Mukhyamantri Kanya Utthan Yojana",
            "Post Matric Scholarship for Minorities",
        ]
    );
    assert_eq!(
        names(&buckets.central),
        vec![
            "Ayushman Bharat PM-JAY",
            "Post Matric Scholarship for Minorities"
        ]
    );
    assert_eq!(names(&buckets.state), vec!["Mukhyamantri Kanya Utthan Yojana"]);
}

#[test]
fn unrecognized_gender_rule_matches_nobody() {
    let catalog = sample_catalog();
    let mahila = catalog
        .find("Mahila Samman Savings Certificate")
        .expect("scheme present");

    for gender in ["Male", "Female", "Other"] {
        let profile = form(&[("age", "40"), ("gender", gender)])
            .into_profile()
            .expect("valid profile");
        assert!(!yojana::schemes::is_eligible(mahila, &profile));
    }
}

#[test]
fn service_reads_catalog_from_disk_once_when_cached() {
    let cached = CachedCatalog::new(CsvCatalogProvider::new(SAMPLE_PATH));
    let first = cached.load_catalog().expect("loads");

    let translator = Arc::new(IdentityTranslator);
    let service = SchemeService::new(
        Arc::new(cached),
        Arc::clone(&translator),
        Arc::new(EligibilityDigest::new(translator)),
    );

    let presented = service
        .eligible(
            form(&[("age", "70"), ("disabled", "Yes")]),
            &Locale::english(),
        )
        .expect("categorized");

    assert!(Arc::ptr_eq(
        &first,
        &service.catalog().snapshot().expect("cached snapshot")
    ));
    assert_eq!(
        presented
            .central
            .iter()
            .map(|card| card.key.as_str())
            .collect::<Vec<_>>(),
        vec![
            "Ayushman Bharat PM-JAY",
            "Indira Gandhi National Disability Pension"
        ]
    );
    assert_eq!(presented.state.len(), 0);

    let briefing = service
        .briefing(
            "Bihar Student Credit Card",
            form(&[("age", "70"), ("state", "Bihar")]),
            &Locale::english(),
        )
        .expect("briefing");
    assert!(!briefing.eligible);
    assert!(briefing.text.contains("Apply at https://www.7nishchay-yuvaupmission.bihar.gov.in"));
}
