//! Signup wizard TUI (Ratatui-based)
//!
//! One screen per wizard step: a step sidebar, the active form and a key
//! legend. All state changes go through the `signup_core` step controller.

pub mod app;
pub mod screen;
mod ui;

pub use app::{App, InputResult};
pub use screen::ScreenState;
pub use ui::dump_step;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use signup_core::{Field, FormData, StepKind, WizardConfig};
use std::io;
use std::time::Duration;

/// How an interactive session ended.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub confirmed: bool,
    pub form: FormData,
}

/// Run the wizard in the terminal until the user confirms or quits.
pub fn run(config: WizardConfig) -> Result<Outcome> {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "No TTY detected. The signup wizard requires an interactive terminal.\n\
             Use `signup submit` for scripted signups."
        );
    }

    let mut app = App::new(config)?;

    let mut terminal = setup_terminal()?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal before reporting any loop error.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let confirmed = result?;
    Ok(Outcome {
        confirmed,
        form: app.wizard.form().clone(),
    })
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode plus the alternate screen. Raw mode is switched back off if any
/// later setup step fails.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    restore_on_error(enter_alternate_screen(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<bool> {
    let mut confirmed = false;
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_input(key) {
                    InputResult::Quit => {
                        log::info!("👋 Wizard closed (confirmed: {})", confirmed);
                        return Ok(confirmed);
                    }
                    InputResult::Confirmed => confirmed = true,
                    InputResult::Continue => {}
                }
            }
        }
    }
}

/// Drive a sample session through every step and render each screen as text.
pub fn dump_session(config: WizardConfig) -> Result<Vec<String>> {
    let mut app = App::new(config)?;
    let mut dumps = Vec::new();

    loop {
        dumps.push(dump_step(&app));
        match app.current_kind() {
            StepKind::PersonalInfo => {
                for (field, input) in app.inputs.iter_mut() {
                    let sample = match field {
                        Field::Name => "Stephen King",
                        Field::Email => "stephenking@lorem.com",
                        Field::Phone => "+1 234 567 890",
                    };
                    input.set_value(sample);
                    app.wizard.set_field(*field, sample);
                }
            }
            StepKind::PlanSelection => {
                let id = app
                    .wizard
                    .catalog()
                    .default_plan()
                    .map(|plan| plan.id.clone())
                    .ok_or_else(|| anyhow::anyhow!("catalog has no plans"))?;
                app.wizard.select_plan(&id)?;
            }
            StepKind::AddOns => {
                if let Some(id) = app.wizard.catalog().add_ons.first().map(|a| a.id.clone()) {
                    app.wizard.toggle_add_on(&id)?;
                }
            }
            StepKind::Summary => {}
        }

        if app.wizard.is_terminal_step() {
            if !app.wizard.confirm()? {
                anyhow::bail!("sample session failed on step {}", app.wizard.current_index());
            }
            dumps.push(dump_step(&app));
            return Ok(dumps);
        }
        if !app.wizard.proceed() {
            anyhow::bail!("sample session failed on step {}", app.wizard.current_index());
        }
    }
}

/// Print every step of a sample session, as the `--dump-tui` flag does.
pub fn dump_all_steps(config: WizardConfig) -> Result<()> {
    for dump in dump_session(config)? {
        println!("{}", dump);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_runs_restore() {
        let restored = Cell::new(false);
        let result: Result<()> =
            restore_on_error(Err(anyhow::anyhow!("no alternate screen")), || {
                restored.set(true)
            });
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_keeps_terminal_state() {
        let restored = Cell::new(false);
        let result = restore_on_error(Ok(7), || restored.set(true));
        assert_eq!(result.expect("ok"), 7);
        assert!(!restored.get());
    }
}
