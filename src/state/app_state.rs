//! Application state definitions

use crate::state::ContactForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Intro name card
    Intro,
    #[default]
    About,
    Projects,
    Contact,
}

impl View {
    /// Views reachable from the header nav, in page order
    pub const NAV: [View; 3] = [View::About, View::Projects, View::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Intro => "",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Next nav section (wraps). Intro is not part of the nav cycle.
    pub fn next_section(&self) -> Self {
        match self {
            Self::About => Self::Projects,
            Self::Projects => Self::Contact,
            Self::Contact => Self::About,
            Self::Intro => Self::About,
        }
    }

    /// Previous nav section (wraps)
    pub fn prev_section(&self) -> Self {
        match self {
            Self::About => Self::Contact,
            Self::Projects => Self::About,
            Self::Contact => Self::Projects,
            Self::Intro => Self::About,
        }
    }
}

/// All mutable UI state outside the intro animation
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,

    // Scrolling (About view content)
    pub scroll_offset: usize,

    // Project list selection
    pub selected_project: usize,

    // Contact form controller
    pub contact: ContactForm,
}

impl AppState {
    /// Switch section, resetting per-section scroll state
    pub fn goto(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Move project selection down
    pub fn select_next_project(&mut self, count: usize) {
        if count > 0 && self.selected_project < count - 1 {
            self.selected_project += 1;
        }
    }

    /// Move project selection up
    pub fn select_prev_project(&mut self) {
        if self.selected_project > 0 {
            self.selected_project -= 1;
        }
    }
}
