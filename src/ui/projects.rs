//! Projects section rendering

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows per project card (borders + title gap + summary)
const CARD_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Projects ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = app
        .profile
        .projects
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, project) in app.profile.projects.iter().enumerate() {
        let is_selected = idx == app.state.selected_project;
        draw_card(frame, chunks[idx], &project.title, &project.summary, is_selected);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, title: &str, summary: &str, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(ratatui::text::Span::styled(format!(" {title} "), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let card = Paragraph::new(summary).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(card, area);
}
