//! What is currently on screen, as set by the step controller.

use signup_core::render::{PrimaryAction, Render};
use signup_core::{Field, Summary};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct ScreenState {
    pub title: String,
    pub description: String,
    pub previous_visible: bool,
    pub step_indicator: usize,
    pub visible_form: usize,
    pub field_errors: BTreeSet<Field>,
    pub summary: Option<Summary>,
    pub primary_action: PrimaryAction,
    pub confirmed: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            previous_visible: false,
            step_indicator: 1,
            visible_form: 1,
            field_errors: BTreeSet::new(),
            summary: None,
            primary_action: PrimaryAction::Proceed,
            confirmed: false,
        }
    }
}

impl Render for ScreenState {
    fn show_step(&mut self, title: &str, description: &str) {
        self.title = title.to_string();
        self.description = description.to_string();
    }

    fn set_previous_visible(&mut self, visible: bool) {
        self.previous_visible = visible;
    }

    fn set_step_indicator(&mut self, index: usize) {
        self.step_indicator = index;
    }

    fn show_form(&mut self, index: usize) {
        self.visible_form = index;
    }

    fn render_field_error(&mut self, field: Field) {
        self.field_errors.insert(field);
    }

    fn clear_field_error(&mut self, field: Field) {
        self.field_errors.remove(&field);
    }

    fn render_summary(&mut self, summary: &Summary) {
        self.summary = Some(summary.clone());
    }

    fn set_primary_action(&mut self, action: PrimaryAction) {
        self.primary_action = action;
    }

    fn show_confirmation(&mut self) {
        self.confirmed = true;
    }
}
