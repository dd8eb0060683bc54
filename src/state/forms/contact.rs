//! Contact form state and submission logic
//!
//! The form owns its field values, the per-field error messages, the focus
//! position, and the transient success banner. Every edit stores the raw
//! value verbatim and synchronously revalidates the edited field only;
//! submission revalidates everything.

use super::field::{ContactField, ContactFocus, SubjectTopic};
use super::validation::validate;
use std::time::{Duration, Instant};

/// Raw values as typed by the user. Name, email and message are kept
/// verbatim (untrimmed); the subject is the selected topic, if any.
#[derive(Debug, Clone, Default)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub subject: Option<SubjectTopic>,
    pub message: String,
}

impl ContactValues {
    /// String view of a field, as fed to the validator. An unselected
    /// subject reads as the empty string.
    pub fn value_of(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => self.subject.map(|t| t.slug()).unwrap_or(""),
            ContactField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject = None;
        self.message.clear();
    }
}

/// Current validation message per field. `None` = valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Subject => self.subject,
            ContactField::Message => self.message,
        }
    }

    fn set(&mut self, field: ContactField, error: Option<&'static str>) {
        match field {
            ContactField::Name => self.name = error,
            ContactField::Email => self.email = error,
            ContactField::Subject => self.subject = error,
            ContactField::Message => self.message = error,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

/// One-shot success window, re-armed on every accepted submission. The
/// deadline lives here rather than in a spawned timer, so a later
/// submission supersedes the earlier window instead of racing it.
#[derive(Debug, Clone, Copy)]
pub struct SuccessBanner {
    shown_at: Instant,
}

impl SuccessBanner {
    /// How long the banner stays up after an accepted submission
    pub const VISIBLE_FOR: Duration = Duration::from_secs(4);

    fn armed() -> Self {
        Self {
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::VISIBLE_FOR
    }
}

/// The contact form controller
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub values: ContactValues,
    pub errors: ContactErrors,
    pub focus: ContactFocus,
    success: Option<SuccessBanner>,
}

impl ContactForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field. The subject is a selection,
    /// not free text, so it ignores typed characters.
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        match field {
            ContactField::Name => self.values.name.push(c),
            ContactField::Email => self.values.email.push(c),
            ContactField::Subject => return,
            ContactField::Message => self.values.message.push(c),
        }
        self.revalidate(field);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        match field {
            ContactField::Name => {
                self.values.name.pop();
            }
            ContactField::Email => {
                self.values.email.pop();
            }
            ContactField::Subject => return,
            ContactField::Message => {
                self.values.message.pop();
            }
        }
        self.revalidate(field);
    }

    /// Enter inside the message field inserts a newline
    pub fn newline(&mut self) {
        if self.focus.field() == Some(ContactField::Message) {
            self.values.message.push('\n');
            self.revalidate(ContactField::Message);
        }
    }

    /// Select the next subject topic (wraps; starts at the first topic)
    pub fn subject_next(&mut self) {
        self.values.subject = Some(match self.values.subject {
            Some(topic) => topic.next(),
            None => SubjectTopic::ALL[0],
        });
        self.revalidate(ContactField::Subject);
    }

    /// Select the previous subject topic
    pub fn subject_prev(&mut self) {
        self.values.subject = Some(match self.values.subject {
            Some(topic) => topic.prev(),
            None => SubjectTopic::ALL[SubjectTopic::ALL.len() - 1],
        });
        self.revalidate(ContactField::Subject);
    }

    /// Store a raw value into one field and revalidate that field only.
    /// The value is kept verbatim; other fields' errors are untouched.
    #[allow(dead_code)]
    pub fn set_value(&mut self, field: ContactField, raw: &str) {
        match field {
            ContactField::Name => self.values.name = raw.to_string(),
            ContactField::Email => self.values.email = raw.to_string(),
            ContactField::Subject => {
                self.values.subject = SubjectTopic::ALL
                    .into_iter()
                    .find(|t| t.slug() == raw.trim());
            }
            ContactField::Message => self.values.message = raw.to_string(),
        }
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: ContactField) {
        let error = validate(field, self.values.value_of(field));
        self.errors.set(field, error);
    }

    /// Recompute every field's error from the current values. Returns true
    /// when the form is submittable.
    pub fn validate_all(&mut self) -> bool {
        for field in ContactField::ALL {
            self.revalidate(field);
        }
        self.errors.is_clear()
    }

    /// Attempt submission. On failure the values are preserved and the
    /// freshly computed errors stay visible. On success the form is wiped
    /// and the success banner is (re-)armed.
    pub fn submit(&mut self) -> bool {
        if !self.validate_all() {
            return false;
        }
        self.values.clear();
        self.errors.clear();
        self.focus = ContactFocus::default();
        self.success = Some(SuccessBanner::armed());
        true
    }

    /// Drop the success banner once its window has passed. Called from the
    /// event loop tick.
    pub fn tick(&mut self) {
        if self.success.as_ref().is_some_and(SuccessBanner::is_expired) {
            self.success = None;
        }
    }

    pub fn success_visible(&self) -> bool {
        self.success.is_some()
    }
}
