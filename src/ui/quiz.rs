use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let item = app.current_item();
    let has_detail = item.prompt.detail.is_some();
    let chunks = create_layout(area, has_detail);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], app);

    let choices_chunk = if has_detail {
        render_detail(frame, chunks[2], item.prompt.detail.as_deref().unwrap_or(""));
        chunks[3]
    } else {
        chunks[2]
    };
    render_choices(frame, choices_chunk, app);

    let footer_chunk = if has_detail { chunks[4] } else { chunks[3] };
    render_footer(frame, footer_chunk, app);
}

fn create_layout(area: Rect, has_detail: bool) -> std::rc::Rc<[Rect]> {
    if has_detail {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area)
    } else {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .margin(2)
        .split(area)
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!("{}/{}", app.item_number(), app.total_items());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let prompt = &app.current_item().prompt;
    let headline = match &prompt.emoji {
        Some(emoji) => format!("{}  {}", emoji, prompt.text),
        None => prompt.text.clone(),
    };

    let widget = Paragraph::new(headline)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_detail(frame: &mut Frame, area: Rect, detail: &str) {
    let widget = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .fg(Color::Gray);
    frame.render_widget(widget, area);
}

fn render_choices(frame: &mut Frame, area: Rect, app: &App) {
    let item = app.current_item();
    let selected = app.selected_choice();
    let mut lines: Vec<Line> = Vec::with_capacity(item.choices.len() * 2);

    for (index, choice) in item.choices.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = (b'A' + index as u8) as char;

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(choice.display.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Flash banner while the item is locked, controls otherwise.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let widget = match app.flash() {
        Some(cue) if cue.was_correct => Paragraph::new(Span::styled(
            format!("correct  +{}", cue.points_awarded),
            Style::default().fg(Color::Green).bold(),
        ))
        .alignment(Alignment::Center),
        Some(_) => Paragraph::new(Span::styled(
            "not this time",
            Style::default().fg(Color::Red).bold(),
        ))
        .alignment(Alignment::Center),
        None => Paragraph::new("j/k navigate  ·  enter select  ·  q quit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
    };
    frame.render_widget(widget, area);
}
