//! Render layer contract.
//!
//! The controller never touches a UI directly; it calls into a `Render`
//! implementation after every state change. The terminal UI implements it,
//! and so does [`Transcript`], which just records what would be shown.

use crate::form::Field;
use crate::pricing::Summary;
use crate::validation::FIELD_REQUIRED;

/// The primary button: proceed to the next step, or confirm on the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Proceed,
    Confirm,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Proceed => "Next Step",
            PrimaryAction::Confirm => "Confirm",
        }
    }
}

pub trait Render {
    fn show_step(&mut self, title: &str, description: &str);
    fn set_previous_visible(&mut self, visible: bool);
    fn set_step_indicator(&mut self, index: usize);
    fn show_form(&mut self, index: usize);
    fn render_field_error(&mut self, field: Field);
    fn clear_field_error(&mut self, field: Field);
    fn render_summary(&mut self, summary: &Summary);
    fn set_primary_action(&mut self, action: PrimaryAction);
    fn show_confirmation(&mut self);
}

/// Text renderer: one line per render call.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn push(&mut self, line: String) {
        log::debug!("render: {}", line);
        self.lines.push(line);
    }
}

impl Render for Transcript {
    fn show_step(&mut self, title: &str, description: &str) {
        self.push(format!("🧭 {} - {}", title, description));
    }

    fn set_previous_visible(&mut self, visible: bool) {
        let state = if visible { "shown" } else { "hidden" };
        self.push(format!("⬅️ Go Back: {}", state));
    }

    fn set_step_indicator(&mut self, index: usize) {
        self.push(format!("📍 Step {}", index));
    }

    fn show_form(&mut self, index: usize) {
        self.push(format!("📝 Form {}", index));
    }

    fn render_field_error(&mut self, field: Field) {
        self.push(format!("❌ {}: {}", field.label(), FIELD_REQUIRED));
    }

    fn clear_field_error(&mut self, field: Field) {
        self.push(format!("🧹 {}: cleared", field.label()));
    }

    fn render_summary(&mut self, summary: &Summary) {
        for line in summary.lines() {
            self.push(format!("🧾 {}", line));
        }
    }

    fn set_primary_action(&mut self, action: PrimaryAction) {
        self.push(format!("▶ {}", action.label()));
    }

    fn show_confirmation(&mut self) {
        self.push("🎉 Thank you! Your subscription is confirmed.".to_string());
    }
}
