//! Form field rendering for the contact form

use crate::state::{ContactField, SubjectTopic};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border/title styling shared by text and select fields. The validation
/// message, when present, is shown as the block's bottom title.
fn field_block(field: ContactField, error: Option<&'static str>, is_active: bool) -> Block<'_> {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(msg) = error {
        block = block.title_bottom(
            Line::from(format!(" {msg} ")).style(Style::default().fg(Color::Red)),
        );
    }

    block
}

/// Draw a free-text field (name, email, message)
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: ContactField,
    value: &str,
    error: Option<&'static str>,
    is_active: bool,
) {
    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(field, error, is_active);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the subject dropdown (a cycling selection rather than free text)
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    selected: Option<SubjectTopic>,
    error: Option<&'static str>,
    is_active: bool,
) {
    let field = ContactField::Subject;

    let mut spans = match selected {
        Some(topic) => vec![Span::raw(topic.label())],
        None => vec![Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )],
    };
    if is_active {
        spans.push(Span::styled(
            "  ↑/↓ change",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = field_block(field, error, is_active);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
