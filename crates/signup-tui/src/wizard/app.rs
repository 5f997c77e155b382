//! Key handling: maps terminal events onto step controller operations.

use super::screen::ScreenState;
use crate::input::InputField;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use signup_core::render::PrimaryAction;
use signup_core::{Field, StepKind, Wizard, WizardConfig};

/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
    Confirmed,
}

pub struct App {
    pub wizard: Wizard<ScreenState>,
    pub inputs: Vec<(Field, InputField)>,
    pub focus: usize,
    pub plan_index: usize,
    pub add_on_index: usize,
    pub status_message: String,
}

impl App {
    pub fn new(config: WizardConfig) -> Result<Self> {
        let wizard = Wizard::new(config, ScreenState::default())?;
        Ok(Self {
            wizard,
            inputs: Field::ALL
                .into_iter()
                .map(|field| (field, InputField::default()))
                .collect(),
            focus: 0,
            plan_index: 0,
            add_on_index: 0,
            status_message: "👋 Welcome! Let's get you subscribed.".to_string(),
        })
    }

    pub fn screen(&self) -> &ScreenState {
        self.wizard.renderer()
    }

    pub fn current_kind(&self) -> StepKind {
        self.wizard.current_step().kind
    }

    pub fn focused_field(&self) -> Field {
        self.inputs[self.focus].0
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> InputResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }

        if self.wizard.is_confirmed() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
                _ => InputResult::Continue,
            };
        }

        match key.code {
            KeyCode::Enter => return self.primary_action(),
            KeyCode::Esc => {
                self.go_back();
                return InputResult::Continue;
            }
            _ => {}
        }

        match self.current_kind() {
            StepKind::PersonalInfo => self.handle_personal_info_input(key),
            StepKind::PlanSelection => self.handle_plan_input(key),
            StepKind::AddOns => self.handle_add_on_input(key),
            StepKind::Summary => match key.code {
                KeyCode::Char('q') => InputResult::Quit,
                _ => InputResult::Continue,
            },
        }
    }

    fn primary_action(&mut self) -> InputResult {
        match self.wizard.primary_action() {
            PrimaryAction::Proceed => {
                if self.wizard.proceed() {
                    self.status_message =
                        format!("✅ Step {} saved.", self.wizard.current_index() - 1);
                    self.sync_cursors();
                } else {
                    self.report_validation();
                }
                InputResult::Continue
            }
            PrimaryAction::Confirm => match self.wizard.confirm() {
                Ok(true) => {
                    self.status_message = "🎉 Subscription confirmed.".to_string();
                    InputResult::Confirmed
                }
                Ok(false) => {
                    self.report_validation();
                    InputResult::Continue
                }
                Err(err) => {
                    self.status_message = format!("❌ {}", err);
                    InputResult::Continue
                }
            },
        }
    }

    fn go_back(&mut self) {
        if self.wizard.current_index() > 1 {
            self.wizard.previous();
            self.status_message = String::new();
            self.sync_cursors();
        }
    }

    fn report_validation(&mut self) {
        self.status_message = match self.wizard.last_error() {
            Some(err) => format!("❌ {}", err),
            None => "❌ Step could not be submitted.".to_string(),
        };
    }

    /// Put the plan cursor on the highlighted plan when (re)entering a step.
    fn sync_cursors(&mut self) {
        if let Some(selected) = self.wizard.draft().plan.as_deref() {
            if let Some(pos) = self
                .wizard
                .catalog()
                .plans
                .iter()
                .position(|plan| plan.id == selected)
            {
                self.plan_index = pos;
            }
        }
    }

    fn handle_personal_info_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                Self::adjust_index(self.inputs.len(), &mut self.focus, 1);
            }
            KeyCode::BackTab | KeyCode::Up => {
                Self::adjust_index(self.inputs.len(), &mut self.focus, -1);
            }
            _ => {
                let (field, input) = &mut self.inputs[self.focus];
                if input.handle_key(key) {
                    let field = *field;
                    let value = input.value().to_string();
                    self.wizard.set_field(field, value);
                    if self.wizard.field_errors().is_empty() {
                        self.status_message = String::new();
                    }
                }
            }
        }
        InputResult::Continue
    }

    fn handle_plan_input(&mut self, key: KeyEvent) -> InputResult {
        let len = self.wizard.catalog().plans.len();
        match key.code {
            KeyCode::Up | KeyCode::Left => Self::adjust_index(len, &mut self.plan_index, -1),
            KeyCode::Down | KeyCode::Right => Self::adjust_index(len, &mut self.plan_index, 1),
            KeyCode::Char(' ') => {
                if let Some(id) = self
                    .wizard
                    .catalog()
                    .plans
                    .get(self.plan_index)
                    .map(|plan| plan.id.clone())
                {
                    match self.wizard.select_plan(&id) {
                        Ok(()) => self.status_message = String::new(),
                        Err(err) => self.status_message = format!("❌ {}", err),
                    }
                }
            }
            KeyCode::Tab | KeyCode::Char('t') => {
                let cadence = self.wizard.toggle_cadence();
                self.status_message = format!("🔁 Billing {}", cadence);
            }
            KeyCode::Char('q') => return InputResult::Quit,
            _ => {}
        }
        InputResult::Continue
    }

    fn handle_add_on_input(&mut self, key: KeyEvent) -> InputResult {
        let len = self.wizard.catalog().add_ons.len();
        match key.code {
            KeyCode::Up => Self::adjust_index(len, &mut self.add_on_index, -1),
            KeyCode::Down => Self::adjust_index(len, &mut self.add_on_index, 1),
            KeyCode::Char(' ') => {
                if let Some(id) = self
                    .wizard
                    .catalog()
                    .add_ons
                    .get(self.add_on_index)
                    .map(|add_on| add_on.id.clone())
                {
                    match self.wizard.toggle_add_on(&id) {
                        Ok(_) => self.status_message = String::new(),
                        Err(err) => self.status_message = format!("❌ {}", err),
                    }
                }
            }
            KeyCode::Char('q') => return InputResult::Quit,
            _ => {}
        }
        InputResult::Continue
    }

    fn adjust_index(len: usize, index: &mut usize, delta: isize) {
        if len == 0 {
            *index = 0;
            return;
        }
        let len_i = len as isize;
        let mut next = *index as isize + delta;
        if next < 0 {
            next = len_i - 1;
        } else if next >= len_i {
            next = 0;
        }
        *index = next as usize;
    }
}
