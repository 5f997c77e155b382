//! Step controller: the wizard session and its state machine.
//!
//! A `Wizard` owns the submitted `FormData`, the unsubmitted `Draft` and the
//! renderer. Steps are numbered 1..=N. Proceeding submits the current step
//! and moves forward only if validation passes; going back never touches
//! submitted data. On step N the primary action is Confirm, which ends the
//! session for good.

use crate::catalog::{Catalog, Step, StepKind};
use crate::config::WizardConfig;
use crate::errors::SignupError;
use crate::form::{Draft, Field, FormData};
use crate::pricing::{Cadence, Summary};
use crate::render::{PrimaryAction, Render};
use crate::validation::{self, ValidationError};
use anyhow::Result;
use std::collections::BTreeSet;

/// Next index after a submission attempt.
pub fn advance(index: usize, submitted: bool) -> usize {
    if submitted {
        index + 1
    } else {
        index
    }
}

/// Previous index, never below step 1.
pub fn retreat(index: usize) -> usize {
    index.saturating_sub(1).max(1)
}

pub struct Wizard<R: Render> {
    catalog: Catalog,
    steps: Vec<Step>,
    current: usize,
    form: FormData,
    draft: Draft,
    field_errors: BTreeSet<Field>,
    last_error: Option<ValidationError>,
    confirmed: bool,
    renderer: R,
}

impl<R: Render> Wizard<R> {
    /// Start a session on step 1 and render it.
    pub fn new(config: WizardConfig, renderer: R) -> Result<Self> {
        config.validate()?;
        let steps = config.steps();
        let form = FormData::new(&config.catalog)?;
        let mut wizard = Self {
            catalog: config.catalog,
            steps,
            current: 1,
            form,
            draft: Draft::default(),
            field_errors: BTreeSet::new(),
            last_error: None,
            confirmed: false,
            renderer,
        };
        log::info!("👋 Signup wizard started ({} steps)", wizard.steps.len());
        wizard.render_step();
        Ok(wizard)
    }

    /// End the session, handing back the renderer and the submitted data.
    pub fn into_parts(self) -> (R, FormData) {
        (self.renderer, self.form)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current - 1]
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_terminal_step(&self) -> bool {
        self.current == self.steps.len()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.is_terminal_step() {
            PrimaryAction::Confirm
        } else {
            PrimaryAction::Proceed
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn field_errors(&self) -> &BTreeSet<Field> {
        &self.field_errors
    }

    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Summary of what has been submitted so far.
    pub fn summary(&self) -> Summary {
        Summary::from_form(&self.form)
    }

    // ------------------------------------------------------------------
    // Draft edits
    // ------------------------------------------------------------------

    /// Editing a flagged field clears its flag; it is not re-validated until
    /// the next submission.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.confirmed {
            return;
        }
        self.draft.set_value(field, value.into());
        if self.field_errors.remove(&field) {
            self.renderer.clear_field_error(field);
            if self.field_errors.is_empty() {
                self.last_error = None;
            }
        }
    }

    pub fn select_plan(&mut self, id: &str) -> Result<()> {
        if self.confirmed {
            return Ok(());
        }
        if self.catalog.plan(id).is_none() {
            return Err(SignupError::UnknownPlan(id.to_string()).into());
        }
        log::debug!("plan highlighted: {}", id);
        self.draft.plan = Some(id.to_string());
        if self.last_error == Some(ValidationError::NoPlanSelected) {
            self.last_error = None;
        }
        Ok(())
    }

    pub fn set_cadence(&mut self, cadence: Cadence) {
        if self.confirmed {
            return;
        }
        log::debug!("cadence set: {}", cadence);
        self.draft.cadence = cadence;
    }

    pub fn toggle_cadence(&mut self) -> Cadence {
        let next = self.draft.cadence.toggled();
        self.set_cadence(next);
        self.draft.cadence
    }

    /// Flip an add-on in the draft; returns whether it is now selected.
    pub fn toggle_add_on(&mut self, id: &str) -> Result<bool> {
        if self.catalog.add_on(id).is_none() {
            return Err(SignupError::UnknownAddOn(id.to_string()).into());
        }
        if self.confirmed {
            return Ok(self.draft.is_add_on_selected(id));
        }
        let selected = if self.draft.add_ons.remove(id) {
            false
        } else {
            self.draft.add_ons.insert(id.to_string());
            true
        };
        log::debug!("add-on {} selected={}", id, selected);
        if selected && self.last_error == Some(ValidationError::NoAddOnSelected) {
            self.last_error = None;
        }
        Ok(selected)
    }

    // ------------------------------------------------------------------
    // Submission and transitions
    // ------------------------------------------------------------------

    /// Validate the current step and, on success, copy its draft input into
    /// the form data. Nothing in the form data changes on failure.
    pub fn submit_current_step(&mut self) -> bool {
        if self.confirmed {
            return false;
        }
        let kind = self.current_step().kind;
        let outcome = match kind {
            StepKind::PersonalInfo => self.submit_personal_info(),
            StepKind::PlanSelection => self.submit_plan(),
            StepKind::AddOns => self.submit_add_ons(),
            StepKind::Summary => Ok(()),
        };

        match outcome {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                log::warn!("⚠️ Step {} not submitted: {}", self.current, err);
                self.last_error = Some(err);
                false
            }
        }
    }

    fn submit_personal_info(&mut self) -> Result<(), ValidationError> {
        for field in std::mem::take(&mut self.field_errors) {
            self.renderer.clear_field_error(field);
        }
        match validation::validate_personal_info(&self.draft) {
            Ok(user_info) => {
                self.form.user_info = user_info;
                Ok(())
            }
            Err(err) => {
                if let ValidationError::MissingFields(fields) = &err {
                    for field in fields {
                        self.renderer.render_field_error(*field);
                        self.field_errors.insert(*field);
                    }
                }
                Err(err)
            }
        }
    }

    fn submit_plan(&mut self) -> Result<(), ValidationError> {
        let (cadence, plan) = validation::validate_plan(&self.draft, &self.catalog)?;
        log::info!("💳 Plan submitted: {} ({})", plan.name, cadence);
        self.form.cadence = cadence;
        self.form.plan_choice = plan;
        Ok(())
    }

    fn submit_add_ons(&mut self) -> Result<(), ValidationError> {
        let add_ons = validation::validate_add_ons(&self.draft, &self.catalog)?;
        log::info!("🧩 {} add-on(s) submitted", add_ons.len());
        self.form.add_ons = add_ons;
        let summary = self.summary();
        self.renderer.render_summary(&summary);
        Ok(())
    }

    /// Primary action on every step but the last. Returns true if the wizard
    /// moved forward.
    pub fn proceed(&mut self) -> bool {
        if self.confirmed || self.is_terminal_step() {
            return false;
        }
        let from_kind = self.current_step().kind;
        let submitted = self.submit_current_step();
        self.current = advance(self.current, submitted);
        if submitted {
            log::info!("➡️ Step {} of {}", self.current, self.steps.len());
            if self.current_step().kind == StepKind::Summary && from_kind != StepKind::AddOns {
                let summary = self.summary();
                self.renderer.render_summary(&summary);
            }
        }
        self.render_step();
        submitted
    }

    /// Go back one step. Submitted data is left alone.
    pub fn previous(&mut self) -> usize {
        if self.confirmed {
            return self.current;
        }
        self.current = retreat(self.current);
        self.last_error = None;
        log::info!("⬅️ Step {} of {}", self.current, self.steps.len());
        self.render_step();
        self.current
    }

    /// Terminal action. Returns Ok(false) if the last step fails validation.
    pub fn confirm(&mut self) -> Result<bool> {
        if self.confirmed {
            return Err(SignupError::AlreadyConfirmed.into());
        }
        if !self.is_terminal_step() {
            return Err(SignupError::NotOnFinalStep {
                current: self.current,
                total: self.steps.len(),
            }
            .into());
        }
        if !self.submit_current_step() {
            self.render_step();
            return Ok(false);
        }
        self.confirmed = true;
        log::info!("🎉 Subscription confirmed");
        self.renderer.show_confirmation();
        Ok(true)
    }

    fn render_step(&mut self) {
        let index = self.current;
        let action = self.primary_action();
        let step = &self.steps[index - 1];
        self.renderer.show_step(&step.title, &step.description);
        self.renderer.set_previous_visible(index > 1);
        self.renderer.set_step_indicator(index);
        self.renderer.show_form(index);
        self.renderer.set_primary_action(action);
    }
}
