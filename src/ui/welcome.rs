use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let plan = app.plan();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.title().to_uppercase(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    if let Some(tagline) = app.tagline() {
        content.push(Line::from(tagline.fg(Color::DarkGray)));
    }
    content.push(Line::from(
        format!(
            "{} rounds · {} coins each",
            app.total_items(),
            plan.coins_per_correct
        )
        .fg(Color::DarkGray),
    ));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "ENTER",
        Style::default().fg(Color::Green).bold(),
    )));
    content.push(Line::from("to start".fg(Color::DarkGray)));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
