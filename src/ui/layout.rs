//! Page chrome (header, status bar)

use crate::app::App;
use crate::platform::{COPY_EMAIL_SHORTCUT, SEND_SHORTCUT};
use crate::state::View;
use chrono::{Datelike, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header (name, title, nav)
            Constraint::Min(0),    // Section content
            Constraint::Length(1), // Status bar / footer
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the page header: owner name, title and the section nav
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut nav_spans: Vec<Span> = vec![];
    for (idx, view) in View::NAV.iter().enumerate() {
        if idx > 0 {
            nav_spans.push(Span::styled("  |  ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *view == app.state.current_view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        nav_spans.push(Span::styled(view.label(), style));
    }

    let lines = vec![
        Line::from(Span::styled(
            app.profile.owner.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.profile.owner.title.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(nav_spans),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar: key hints, clipboard feedback and the footer
/// copyright line
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        view_hints(&app.state.current_view),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Copyright + quit hint, right-aligned
    let footer = format!(
        " © {} {} | ^C:quit ",
        Utc::now().year(),
        app.profile.owner.name
    );
    let footer_area = Rect {
        x: area.x + area.width.saturating_sub(footer.len() as u16),
        y: area.y,
        width: footer.len().min(area.width as usize) as u16,
        height: 1,
    };
    let footer_widget =
        Paragraph::new(footer).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(footer_widget, footer_area);
}

/// Get keyboard hints for the current view
fn view_hints(view: &View) -> String {
    match view {
        View::Intro => "Press any key to skip".to_string(),
        View::About => " a/p/c:section  Tab:next  j/k:scroll  q:quit".to_string(),
        View::Projects => " a/p/c:section  Tab:next  j/k:select  q:quit".to_string(),
        View::Contact => format!(
            " Tab:next field  {SEND_SHORTCUT}:send  {COPY_EMAIL_SHORTCUT}:copy email  Esc:back"
        ),
    }
}
