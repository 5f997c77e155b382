use signup_core::catalog::StepKind;
use signup_core::{Variant, Wizard, WizardConfig};
use std::fs;
use tempfile::tempdir;

const TEAM_CATALOG: &str = r#"
schema_version = 1

[[plans]]
id = "starter"
name = "Starter"
monthly_price = 4
yearly_price = 40

[[plans]]
id = "team"
name = "Team"
monthly_price = 20
yearly_price = 200

[[add_ons]]
id = "sso"
name = "Single Sign-On"
description = "SAML login for your team"
monthly_price = 5
yearly_price = 50

[[steps]]
kind = "personal_info"
title = "About You"
description = "Who is signing up?"

[[steps]]
kind = "plan_selection"
title = "Choose a Plan"
description = "Monthly or yearly."

[[steps]]
kind = "add_ons"
title = "Extras"
description = "Optional extras."

[[steps]]
kind = "summary"
title = "Review"
description = "Check and confirm."
"#;

#[test]
fn builtin_variants_have_expected_steps() {
    let full = WizardConfig::full().steps();
    assert_eq!(full.len(), 4);
    assert_eq!(full[3].kind, StepKind::Summary);
    assert_eq!(full[3].index, 4);

    let minimal = WizardConfig::minimal().steps();
    assert_eq!(minimal.len(), 2);
    assert_eq!(minimal[1].title, "Select Your Plan");
}

#[test]
fn loads_catalog_from_file() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("catalog.toml");
    fs::write(&path, TEAM_CATALOG).expect("write catalog");

    let config = WizardConfig::from_catalog_file(&path, Variant::Full).expect("config");
    assert_eq!(config.catalog.plans.len(), 2);
    let steps = config.steps();
    assert_eq!(steps[0].title, "About You");
    assert_eq!(steps[3].title, "Review");

    let wizard = Wizard::new(config, signup_core::Transcript::new()).expect("wizard");
    assert_eq!(wizard.form().plan_choice.id, "starter");
}

#[test]
fn missing_catalog_file_is_reported() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("nope.toml");
    let err = WizardConfig::from_catalog_file(&path, Variant::Full).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read"));
}

#[test]
fn invalid_catalog_file_is_rejected() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("catalog.toml");
    fs::write(&path, "schema_version = 1\nplans = []\n").expect("write catalog");
    let err = WizardConfig::from_catalog_file(&path, Variant::Full).unwrap_err();
    assert!(format!("{:#}", err).contains("at least one plan"));
}

#[test]
fn minimal_variant_needs_plan_as_second_step() {
    let doc = TEAM_CATALOG.replacen(
        "kind = \"plan_selection\"\ntitle = \"Choose a Plan\"",
        "kind = \"plan_selection_later\"\ntitle = \"Choose a Plan\"",
        1,
    );
    // Unknown kinds are a parse error.
    assert!(signup_core::catalog::parse_catalog_toml(&doc).is_err());

    let mut catalog = signup_core::catalog::parse_catalog_toml(TEAM_CATALOG).unwrap();
    catalog.steps.swap(1, 2);
    let err = WizardConfig::new(Variant::Minimal, catalog.clone()).unwrap_err();
    assert!(err.to_string().contains("no plan_selection step"));
    assert!(WizardConfig::new(Variant::Full, catalog).is_ok());
}

#[test]
fn catalog_whose_total_overflows_is_rejected() {
    let doc = TEAM_CATALOG
        .replacen("monthly_price = 20", "monthly_price = 4000000000", 1)
        .replacen("monthly_price = 5", "monthly_price = 400000000", 1);
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("catalog.toml");
    fs::write(&path, doc).expect("write catalog");

    let err = WizardConfig::from_catalog_file(&path, Variant::Full).unwrap_err();
    assert!(format!("{:#}", err).contains("monthly prices are too large"));
}
