//! Contact section rendering (the form)

use super::components::{draw_select_field, draw_text_field, render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{ContactField, ContactFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 7;
const BANNER_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact;

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT), // Success banner slot
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Subject
            Constraint::Length(MESSAGE_HEIGHT), // Message
            Constraint::Length(BUTTON_HEIGHT), // Send button
            Constraint::Length(1),             // Email line
            Constraint::Min(0),
        ])
        .split(inner);

    if form.success_visible() {
        draw_success_banner(frame, chunks[0]);
    }

    draw_text_field(
        frame,
        chunks[1],
        ContactField::Name,
        &form.values.name,
        form.errors.get(ContactField::Name),
        form.focus == ContactFocus::Name,
    );

    draw_text_field(
        frame,
        chunks[2],
        ContactField::Email,
        &form.values.email,
        form.errors.get(ContactField::Email),
        form.focus == ContactFocus::Email,
    );

    draw_select_field(
        frame,
        chunks[3],
        form.values.subject,
        form.errors.get(ContactField::Subject),
        form.focus == ContactFocus::Subject,
    );

    draw_text_field(
        frame,
        chunks[4],
        ContactField::Message,
        &form.values.message,
        form.errors.get(ContactField::Message),
        form.focus == ContactFocus::Message,
    );

    // Button row: keep the button narrow, web-form style
    let button_area = Rect {
        width: chunks[5].width.min(12),
        ..chunks[5]
    };
    render_button(frame, button_area, "Send", form.focus == ContactFocus::Send);

    let email_line = Paragraph::new(Line::from(format!(
        "✉ {}",
        app.profile.contact_email
    )))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(email_line, chunks[6]);
}

fn draw_success_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(" ✓ Your message has been sent. Thank you! ")
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(banner, area);
}
