use super::super::app::App;

pub(super) fn build_step_sidebar(app: &App) -> String {
    let current = app.screen().step_indicator;
    let confirmed = app.screen().confirmed;
    app.wizard
        .steps()
        .iter()
        .map(|step| {
            let marker = if confirmed || step.index < current {
                "✓"
            } else if step.index == current {
                "▶"
            } else {
                " "
            };
            format!("{} {}. {}", marker, step.index, step.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
