use super::super::app::App;
use super::content::{build_step_lines, expected_actions, status_message, CONFIRMED_TITLE};
use super::sidebar::build_step_sidebar;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let screen = app.screen();

    // Title | Body | Key legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Sidebar + form
                Constraint::Length(4), // Status + keys
            ]
            .as_ref(),
        )
        .split(f.area());

    let progress = if screen.confirmed {
        Span::styled("CONFIRMED", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("Step {}/{}", screen.step_indicator, app.wizard.step_count()),
            Style::default().fg(Color::Yellow),
        )
    };
    let title_line = Line::from(vec![
        Span::styled("Subscription Signup", Style::default().fg(Color::White)),
        Span::raw(" | "),
        progress,
    ]);
    f.render_widget(
        Block::default().borders(Borders::ALL).title(title_line),
        main_chunks[0],
    );

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
        .split(main_chunks[1]);

    let sidebar = Paragraph::new(build_step_sidebar(app))
        .block(Block::default().borders(Borders::ALL).title("Steps"));
    f.render_widget(sidebar, body_chunks[0]);

    let form_title = if screen.confirmed {
        CONFIRMED_TITLE.to_string()
    } else {
        screen.title.clone()
    };
    if screen.confirmed {
        let body = Paragraph::new(build_step_lines(app).join("\n"))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(form_title));
        f.render_widget(body, body_chunks[1]);
    } else {
        let items = build_step_lines(app)
            .into_iter()
            .map(|line| {
                let style = if line.contains('❌') {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                ListItem::new(line).style(style)
            })
            .collect::<Vec<_>>();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(form_title));
        f.render_widget(list, body_chunks[1]);
    }

    let legend_text = format!("{}\n{}", status_message(app), expected_actions(app));
    let legend =
        Paragraph::new(legend_text).block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(legend, main_chunks[2]);
}
