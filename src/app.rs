//! Application wiring and event handling

use crate::config::TuiConfig;
use crate::content::Profile;
use crate::state::{AppState, ContactFocus, IntroState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Page content
    pub profile: Profile,
    /// Whether the app should quit
    quit: bool,
    /// Clipboard feedback message
    pub copy_message: Option<String>,
    /// Intro animation state, `None` once finished or skipped
    pub intro_state: Option<IntroState>,
}

impl App {
    /// Create a new App instance from the on-disk config
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config, using defaults: {err:#}");
            TuiConfig::default()
        });

        let profile = match config.profile_path.as_deref() {
            Some(path) => Profile::from_file(path.as_ref()).unwrap_or_else(|err| {
                tracing::warn!("failed to load profile override, using built-in: {err}");
                Profile::default()
            }),
            None => Profile::default(),
        };

        Self::from_parts(&config, profile)
    }

    /// Assemble an App from already-resolved parts
    #[allow(clippy::field_reassign_with_default)]
    pub fn from_parts(config: &TuiConfig, profile: Profile) -> Self {
        let skip_intro = config.skip_intro.unwrap_or(false);
        let mut state = AppState::default();

        if skip_intro {
            state.current_view = View::About;
        } else {
            state.current_view = View::Intro;
        }

        Self {
            state,
            profile,
            quit: false,
            copy_message: None,
            intro_state: (!skip_intro).then(IntroState::new),
        }
    }

    /// Advance the intro animation; transitions to the About view when done
    pub fn update_intro(&mut self, terminal_height: u16) {
        if let Some(ref mut intro) = self.intro_state {
            intro.update(terminal_height);
            if intro.is_done() {
                self.intro_state = None;
                self.state.goto(View::About);
            }
        }
    }

    /// Per-tick housekeeping: expire the contact success banner
    pub fn tick(&mut self) {
        self.state.contact.tick();
    }

    /// Check if the intro is still playing
    pub fn in_intro(&self) -> bool {
        matches!(self.state.current_view, View::Intro)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit (not during the intro, where any key skips)
        if !self.in_intro()
            && key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view {
            View::Intro => self.handle_intro_key(key),
            View::About => self.handle_about_key(key),
            View::Projects => self.handle_projects_key(key),
            View::Contact => self.handle_contact_key(key),
        }
    }

    fn handle_intro_key(&mut self, _key: KeyEvent) -> Result<()> {
        if let Some(ref mut intro) = self.intro_state {
            intro.skip();
        }
        Ok(())
    }

    fn handle_about_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            _ => self.handle_nav_key(key),
        }
        Ok(())
    }

    fn handle_projects_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.select_next_project(self.profile.projects.len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_project(),
            _ => self.handle_nav_key(key),
        }
        Ok(())
    }

    /// Section switching shared by the non-form views
    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') => self.state.goto(View::About),
            KeyCode::Char('p') => self.state.goto(View::Projects),
            KeyCode::Char('c') => self.state.goto(View::Contact),
            KeyCode::Right | KeyCode::Tab => {
                let next = self.state.current_view.next_section();
                self.state.goto(next);
            }
            KeyCode::Left | KeyCode::BackTab => {
                let prev = self.state.current_view.prev_section();
                self.state.goto(prev);
            }
            _ => {}
        }
    }

    /// Keys in the Contact view. Printable characters go into the focused
    /// field, so section switching is only reachable via Esc here.
    fn handle_contact_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_subject = self.state.contact.focus == ContactFocus::Subject;

        match key.code {
            KeyCode::Tab => self.state.contact.focus_next(),
            KeyCode::BackTab => self.state.contact.focus_prev(),
            KeyCode::Esc => self.state.goto(View::About),
            // Send shortcut works from any focus position
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact();
            }
            KeyCode::Char('e') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_contact_email();
            }
            // Subject is a selection; arrows and space cycle its topics
            KeyCode::Up if on_subject => self.state.contact.subject_prev(),
            KeyCode::Down | KeyCode::Char(' ') if on_subject => self.state.contact.subject_next(),
            KeyCode::Up => self.state.contact.focus_prev(),
            KeyCode::Down => self.state.contact.focus_next(),
            KeyCode::Enter => match self.state.contact.focus {
                // Enter inside the message body inserts a newline; everywhere
                // else it submits, like the page form it mirrors
                ContactFocus::Message => self.state.contact.newline(),
                _ => self.submit_contact(),
            },
            KeyCode::Backspace => self.state.contact.backspace(),
            KeyCode::Char(c) => self.state.contact.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Run the submission pipeline. Nothing leaves the process: a valid
    /// form is wiped and acknowledged with the success banner.
    fn submit_contact(&mut self) {
        if self.state.contact.submit() {
            tracing::info!("contact form submitted");
        } else {
            tracing::debug!("contact form rejected by validation");
        }
    }

    /// Copy the public contact email to the system clipboard
    fn copy_contact_email(&mut self) {
        match self.copy_to_clipboard(&self.profile.contact_email) {
            Ok(()) => self.copy_message = Some("Email address copied".to_string()),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err:#}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.in_intro() => {
                if let Some(ref mut intro) = self.intro_state {
                    intro.skip();
                }
            }
            MouseEventKind::ScrollDown => match self.state.current_view {
                View::About => self.state.scroll_down(),
                View::Projects => self.state.select_next_project(self.profile.projects.len()),
                _ => {}
            },
            MouseEventKind::ScrollUp => match self.state.current_view {
                View::About => self.state.scroll_up(),
                View::Projects => self.state.select_prev_project(),
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactField;
    use pretty_assertions::assert_eq;

    fn test_app() -> App {
        let config = TuiConfig {
            skip_intro: Some(true),
            profile_path: None,
        };
        App::from_parts(&config, Profile::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    mod startup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_skip_intro_starts_on_about() {
            let app = test_app();
            assert_eq!(app.state.current_view, View::About);
            assert!(app.intro_state.is_none());
        }

        #[test]
        fn test_default_config_starts_in_intro() {
            let app = App::from_parts(&TuiConfig::default(), Profile::default());
            assert_eq!(app.state.current_view, View::Intro);
            assert!(app.intro_state.is_some());
        }

        #[test]
        fn test_any_key_skips_intro() {
            let mut app = App::from_parts(&TuiConfig::default(), Profile::default());
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            app.update_intro(24);
            assert_eq!(app.state.current_view, View::About);
            assert!(app.intro_state.is_none());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_section_keys_switch_views() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('p'))).unwrap();
            assert_eq!(app.state.current_view, View::Projects);
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            assert_eq!(app.state.current_view, View::Contact);
        }

        #[test]
        fn test_tab_cycles_sections_outside_contact() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.current_view, View::Projects);
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert_eq!(app.state.current_view, View::About);
        }

        #[test]
        fn test_esc_leaves_contact_without_clearing_values() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            type_str(&mut app, "Ada");
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::About);
            assert_eq!(app.state.contact.values.name, "Ada");
        }

        #[test]
        fn test_q_quits_in_about_but_not_in_contact() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(!app.should_quit());
            assert_eq!(app.state.contact.values.name, "q");

            app.handle_key(key(KeyCode::Esc)).unwrap();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits_globally() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_project_selection_moves() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('p'))).unwrap();
            app.handle_key(key(KeyCode::Char('j'))).unwrap();
            assert_eq!(app.state.selected_project, 1);
            app.handle_key(key(KeyCode::Char('k'))).unwrap();
            assert_eq!(app.state.selected_project, 0);
        }
    }

    mod contact_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        /// Fill the whole form through the key handler
        fn fill_valid_form(app: &mut App) {
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            type_str(app, "Ada Lovelace");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(app, "ada@example.org");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap(); // pick first topic
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(app, "A sufficiently long message.");
        }

        #[test]
        fn test_typing_validates_the_edited_field_only() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            type_str(&mut app, "A");
            assert!(app.state.contact.errors.name.is_some());
            assert!(app.state.contact.errors.email.is_none());

            type_str(&mut app, "da");
            assert!(app.state.contact.errors.name.is_none());
        }

        #[test]
        fn test_enter_on_send_submits_valid_form() {
            let mut app = test_app();
            fill_valid_form(&mut app);
            app.handle_key(key(KeyCode::Tab)).unwrap(); // onto Send
            assert_eq!(app.state.contact.focus, ContactFocus::Send);

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.contact.success_visible());
            assert_eq!(app.state.contact.values.name, "");
        }

        #[test]
        fn test_ctrl_s_submits_from_any_focus() {
            let mut app = test_app();
            fill_valid_form(&mut app);
            // Still focused on the message field
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.contact.success_visible());
        }

        #[test]
        fn test_enter_on_empty_form_surfaces_every_error() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            for field in ContactField::ALL {
                assert!(app.state.contact.errors.get(field).is_some());
            }
            assert!(!app.state.contact.success_visible());
        }

        #[test]
        fn test_enter_in_message_adds_newline_not_submit() {
            let mut app = test_app();
            fill_valid_form(&mut app);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.contact.success_visible());
            assert!(app.state.contact.values.message.ends_with('\n'));
        }

        #[test]
        fn test_subject_arrows_cycle_topics() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.contact.focus, ContactFocus::Subject);

            app.handle_key(key(KeyCode::Down)).unwrap();
            assert!(app.state.contact.values.subject.is_some());
            let first = app.state.contact.values.subject;
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_ne!(app.state.contact.values.subject, first);
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.state.contact.values.subject, first);
        }
    }
}
