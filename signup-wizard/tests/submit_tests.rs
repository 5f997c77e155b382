use signup_core::{Cadence, WizardConfig};
use signup_wizard::submit::{catalog_lines, run_submit, SubmitRequest};

fn request() -> SubmitRequest {
    SubmitRequest {
        name: "Stephen King".to_string(),
        email: "stephenking@lorem.com".to_string(),
        phone: "+1 234 567 890".to_string(),
        plan: Some("arcade".to_string()),
        yearly: false,
        add_ons: vec!["online-services".to_string(), "larger-storage".to_string()],
    }
}

#[test]
fn full_submission_confirms_with_expected_total() {
    let report = run_submit(WizardConfig::full(), &request()).expect("submit");
    assert!(report.confirmed);
    assert_eq!(report.summary.total, 12);
    assert_eq!(report.form.plan_choice.id, "arcade");
    assert_eq!(report.form.add_ons.len(), 2);
    assert_eq!(
        report.transcript.last().map(String::as_str),
        Some("🎉 Thank you! Your subscription is confirmed.")
    );
    assert!(report
        .transcript
        .iter()
        .any(|line| line == "🧾 Total (per month)  $12/mo"));
}

#[test]
fn repeated_add_on_is_selected_once() {
    let mut req = request();
    req.add_ons.push("online-services".to_string());
    req.yearly = true;
    let report = run_submit(WizardConfig::full(), &req).expect("submit");
    assert_eq!(report.form.cadence, Cadence::Yearly);
    assert_eq!(report.form.add_ons.len(), 2);
    assert_eq!(report.summary.total, 120);
}

#[test]
fn missing_phone_fails_on_first_step() {
    let mut req = request();
    req.phone.clear();
    let err = run_submit(WizardConfig::full(), &req).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("step 1 (Personal Info)"));
    assert!(message.contains("Required fields are empty: phone"));
}

#[test]
fn missing_plan_is_a_validation_failure() {
    let mut req = request();
    req.plan = None;
    let err = run_submit(WizardConfig::full(), &req).unwrap_err();
    assert!(err.to_string().contains("Please select a plan."));
}

#[test]
fn unknown_plan_is_rejected_before_any_step() {
    let mut req = request();
    req.plan = Some("platinum".to_string());
    let err = run_submit(WizardConfig::full(), &req).unwrap_err();
    assert!(err.to_string().contains("Unknown plan: platinum"));
}

#[test]
fn minimal_variant_confirms_on_plan_step() {
    let mut req = request();
    req.add_ons.clear();
    req.plan = Some("pro".to_string());
    req.yearly = true;
    let report = run_submit(WizardConfig::minimal(), &req).expect("submit");
    assert_eq!(report.form.plan_choice.yearly_price, 150);
    assert!(report.form.add_ons.is_empty());
    assert_eq!(report.summary.total, 150);
}

#[test]
fn minimal_variant_rejects_add_ons() {
    let err = run_submit(WizardConfig::minimal(), &request()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("the minimal variant has no add-ons step"));
    assert!(message.contains("online-services, larger-storage"));
}

#[test]
fn catalog_listing_shows_both_cadences() {
    let lines = catalog_lines(&WizardConfig::full());
    assert_eq!(lines[0], "📋 Plans");
    assert!(lines.iter().any(|l| l.contains("Pro") && l.contains("$150/yr")));
    assert!(lines
        .iter()
        .any(|l| l.contains("Online Services") && l.contains("+$1/mo")));
    assert!(lines.iter().any(|l| l == "  4. Finishing Up"));
}
