use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.score();
    let total = app.total_items();
    let percentage = calculate_percentage(score, total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage, grade_color);
    render_rewards(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ROUND COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_rewards(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    if let Some(grant) = app.last_grant() {
        lines.push(Line::from(Span::styled(
            format!("+{} coins   +{} xp", grant.coins, grant.xp),
            Style::default().fg(Color::Yellow).bold(),
        )));
    }

    let wallet = app.profile();
    lines.push(Line::from(""));
    lines.push(Line::from(
        format!("wallet: {} coins · {} xp", wallet.coins, wallet.xp).fg(Color::DarkGray),
    ));

    if let Some(next) = app.next_game() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("up next: ", Style::default().fg(Color::DarkGray)),
            Span::styled(next.title.as_str(), Style::default().fg(Color::White)),
        ]));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r replay  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
