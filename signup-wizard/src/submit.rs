//! Scripted, non-interactive signup: fills the draft from arguments and walks
//! the wizard to confirmation with a text transcript as the renderer.

use anyhow::Result;
use signup_core::errors::SignupError;
use signup_core::pricing::{format_add_on_price, format_price};
use signup_core::{
    price_of, Cadence, FormData, StepKind, Summary, Transcript, Wizard, WizardConfig,
};

#[derive(Debug, Clone, Default)]
pub struct SubmitRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: Option<String>,
    pub yearly: bool,
    pub add_ons: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitReport {
    pub confirmed: bool,
    pub form: FormData,
    pub summary: Summary,
    pub transcript: Vec<String>,
}

/// Drive every step of the wizard and confirm. Fails with the validation
/// message of the first step that does not submit.
pub fn run_submit(config: WizardConfig, request: &SubmitRequest) -> Result<SubmitReport> {
    let variant = config.variant;
    let mut wizard = Wizard::new(config, Transcript::new())?;

    wizard.set_field(signup_core::Field::Name, request.name.as_str());
    wizard.set_field(signup_core::Field::Email, request.email.as_str());
    wizard.set_field(signup_core::Field::Phone, request.phone.as_str());
    if let Some(plan) = request.plan.as_deref() {
        wizard.select_plan(plan)?;
    }
    if request.yearly {
        wizard.set_cadence(Cadence::Yearly);
    }
    let has_add_ons_step = wizard
        .steps()
        .iter()
        .any(|step| step.kind == StepKind::AddOns);
    if !has_add_ons_step && !request.add_ons.is_empty() {
        return Err(SignupError::ValidationFailed(format!(
            "the {} variant has no add-ons step, so --add-on {} cannot be applied",
            variant,
            request.add_ons.join(", ")
        ))
        .into());
    }
    for id in &request.add_ons {
        if !wizard.draft().is_add_on_selected(id) {
            wizard.toggle_add_on(id)?;
        }
    }

    while !wizard.is_terminal_step() {
        if !wizard.proceed() {
            return Err(step_failure(&wizard).into());
        }
    }
    if !wizard.confirm()? {
        return Err(step_failure(&wizard).into());
    }

    let summary = wizard.summary();
    let (transcript, form) = wizard.into_parts();
    Ok(SubmitReport {
        confirmed: true,
        form,
        summary,
        transcript: transcript.into_lines(),
    })
}

fn step_failure(wizard: &Wizard<Transcript>) -> SignupError {
    let message = wizard
        .last_error()
        .map(|err| err.to_string())
        .unwrap_or_else(|| "step could not be submitted".to_string());
    SignupError::ValidationFailed(format!(
        "step {} ({}): {}",
        wizard.current_index(),
        wizard.current_step().title,
        message
    ))
}

/// Plans and add-ons with both cadences' prices.
pub fn catalog_lines(config: &WizardConfig) -> Vec<String> {
    let catalog = &config.catalog;
    let mut lines = vec!["📋 Plans".to_string()];
    for plan in &catalog.plans {
        lines.push(format!(
            "  {:<10} {:<10} {:>8} {:>8}",
            plan.id,
            plan.name,
            format_price(price_of(plan, Cadence::Monthly), Cadence::Monthly),
            format_price(price_of(plan, Cadence::Yearly), Cadence::Yearly),
        ));
    }
    if !catalog.add_ons.is_empty() {
        lines.push("🧩 Add-ons".to_string());
        for add_on in &catalog.add_ons {
            lines.push(format!(
                "  {:<22} {:<22} {:>8} {:>8}  {}",
                add_on.id,
                add_on.name,
                format_add_on_price(price_of(add_on, Cadence::Monthly), Cadence::Monthly),
                format_add_on_price(price_of(add_on, Cadence::Yearly), Cadence::Yearly),
                add_on.description,
            ));
        }
    }
    lines.push(format!("🧭 Steps ({} variant)", config.variant));
    for step in config.steps() {
        lines.push(format!("  {}. {}", step.index, step.title));
    }
    lines
}
