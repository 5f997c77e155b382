use super::super::app::App;
use signup_core::pricing::{format_add_on_price, format_price};
use signup_core::validation::FIELD_REQUIRED;
use signup_core::{price_of, Cadence, StepKind};

pub(super) const CONFIRMED_TITLE: &str = "Thank you!";

pub(super) const CONFIRMED_BODY: &str = "Thanks for confirming your subscription! \
We hope you have fun using our platform. If you ever need support, please feel \
free to email us at support@loremgaming.com.";

/// Body of the visible form, one line per list row.
pub(super) fn build_step_lines(app: &App) -> Vec<String> {
    let screen = app.screen();
    if screen.confirmed {
        return vec![
            format!("🎉 {}", CONFIRMED_TITLE),
            String::new(),
            CONFIRMED_BODY.to_string(),
            String::new(),
            "⌨️ Press Enter to exit.".to_string(),
        ];
    }

    let mut lines = vec![screen.description.clone(), String::new()];

    match app.current_kind() {
        StepKind::PersonalInfo => {
            for (pos, (field, input)) in app.inputs.iter().enumerate() {
                let focused = pos == app.focus;
                let marker = if focused { "▶" } else { " " };
                lines.push(format!("{} {}", marker, field.label()));
                let value = if focused {
                    input.with_cursor()
                } else if input.value().is_empty() {
                    field.placeholder().to_string()
                } else {
                    input.value().to_string()
                };
                lines.push(format!("    [{}]", value));
                if screen.field_errors.contains(field) {
                    lines.push(format!("    ❌ {}", FIELD_REQUIRED));
                }
            }
        }
        StepKind::PlanSelection => {
            let draft = app.wizard.draft();
            for (pos, plan) in app.wizard.catalog().plans.iter().enumerate() {
                let cursor = if pos == app.plan_index { "▶" } else { " " };
                let chosen = if draft.plan.as_deref() == Some(plan.id.as_str()) {
                    "(•)"
                } else {
                    "( )"
                };
                let mut line = format!(
                    "{} {} {:<10} {}",
                    cursor,
                    chosen,
                    plan.name,
                    format_price(price_of(plan, draft.cadence), draft.cadence)
                );
                if let Some(promotion) = draft.cadence.promotion() {
                    line.push_str(&format!("  {}", promotion));
                }
                lines.push(line);
            }
            lines.push(String::new());
            lines.push(cadence_toggle_line(draft.cadence));
        }
        StepKind::AddOns => {
            // Add-on prices follow the submitted cadence, not the draft toggle.
            let cadence = app.wizard.form().cadence;
            let draft = app.wizard.draft();
            for (pos, add_on) in app.wizard.catalog().add_ons.iter().enumerate() {
                let cursor = if pos == app.add_on_index { "▶" } else { " " };
                let checked = if draft.is_add_on_selected(&add_on.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                lines.push(format!(
                    "{} {} {:<22} {}",
                    cursor,
                    checked,
                    add_on.name,
                    format_add_on_price(price_of(add_on, cadence), cadence)
                ));
                if !add_on.description.is_empty() {
                    lines.push(format!("        {}", add_on.description));
                }
            }
        }
        StepKind::Summary => match &screen.summary {
            Some(summary) => {
                lines.push(format!("🧾 {}  {}", summary.plan.name, summary.plan.price));
                for add_on in &summary.add_ons {
                    lines.push(format!("   {}  {}", add_on.name, add_on.price));
                }
                lines.push(String::new());
                lines.push(format!("💰 {}  {}", summary.total_label, summary.total_price));
            }
            None => lines.push("🧾 Nothing to summarize yet.".to_string()),
        },
    }

    lines
}

fn cadence_toggle_line(cadence: Cadence) -> String {
    match cadence {
        Cadence::Monthly => "🔁 [Monthly] / Yearly".to_string(),
        Cadence::Yearly => "🔁 Monthly / [Yearly]".to_string(),
    }
}

pub(super) fn expected_actions(app: &App) -> String {
    if app.screen().confirmed {
        return "Enter: exit".to_string();
    }
    let primary = format!("Enter: {}", app.screen().primary_action.label());
    let back = if app.screen().previous_visible {
        " | Esc: Go Back"
    } else {
        ""
    };
    let step_keys = match app.current_kind() {
        StepKind::PersonalInfo => "Tab/↑↓: field | type to edit",
        StepKind::PlanSelection => "↑↓: move | Space: choose | t: monthly/yearly | q: quit",
        StepKind::AddOns => "↑↓: move | Space: toggle | q: quit",
        StepKind::Summary => "q: quit",
    };
    format!("{}{} | {} | Ctrl+C: quit", primary, back, step_keys)
}

pub(super) fn status_message(app: &App) -> String {
    ensure_emoji_prefix(app.status_message.clone())
}

fn ensure_emoji_prefix(message: String) -> String {
    match message.chars().next() {
        Some(first) if first.is_ascii_alphanumeric() => format!("ℹ️ {}", message),
        _ => message,
    }
}
