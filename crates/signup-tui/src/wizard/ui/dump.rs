use super::super::app::App;
use super::content::{build_step_lines, expected_actions, status_message};
use super::sidebar::build_step_sidebar;

pub fn dump_step(app: &App) -> String {
    let screen = app.screen();
    let body = build_step_lines(app);
    let body_lines = if body.is_empty() {
        "(no body content)".to_string()
    } else {
        body.join("\n")
    };
    let status = status_message(app);
    let actions = expected_actions(app);

    format!(
        "STEP {}/{}: {}\n\n- Header: Subscription Signup\n- Steps:\n{}\n- Body contents:\n{}\n- Status: {}\n- Expected user actions (keys): {}\n",
        screen.step_indicator,
        app.wizard.step_count(),
        screen.title,
        build_step_sidebar(app),
        body_lines,
        status,
        actions
    )
}
