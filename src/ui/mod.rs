//! UI module for rendering the TUI

mod about;
mod components;
mod contact;
mod intro;
mod layout;
mod projects;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    if app.in_intro() {
        intro::draw(frame, app);
        return;
    }

    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Intro => {}
        View::About => about::draw(frame, content_area, app),
        View::Projects => projects::draw(frame, content_area, app),
        View::Contact => contact::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
