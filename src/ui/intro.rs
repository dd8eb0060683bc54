//! Intro name card rendering

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let Some(ref intro) = app.intro_state else {
        return;
    };
    let area = frame.area();

    // Card centered vertically, shifted up as the rise animation runs
    let center = area.height / 2;
    let offset = intro.offset.round() as u16;
    let top = center.saturating_sub(1).saturating_sub(offset);
    if top == 0 && offset > 0 {
        return; // scrolled off
    }

    let card_area = Rect {
        x: 0,
        y: top,
        width: area.width,
        height: area.height.saturating_sub(top).min(4),
    };

    let lines = vec![
        Line::from(app.profile.owner.name.as_str())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
        Line::from(app.profile.owner.title.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        Line::from(""),
        Line::from("press any key")
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
    ];

    frame.render_widget(Paragraph::new(lines), card_area);
}
