//! About section rendering

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    lines.push(Line::from(app.profile.about.as_str()));
    lines.push(Line::from(""));

    for fact in &app.profile.facts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", fact.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(fact.value.as_str()),
        ]));
    }

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}
