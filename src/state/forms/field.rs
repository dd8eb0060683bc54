//! Contact form field identifiers and the subject topic list

/// The four fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "you@example.com",
            Self::Subject => "-- pick a subject --",
            Self::Message => "Write your message here…",
        }
    }

    /// Message is the only multi-line field
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Selectable subject topics (the page's dropdown options)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectTopic {
    General,
    Collaboration,
    Feedback,
    Other,
}

impl SubjectTopic {
    pub const ALL: [SubjectTopic; 4] = [
        SubjectTopic::General,
        SubjectTopic::Collaboration,
        SubjectTopic::Feedback,
        SubjectTopic::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Collaboration => "Project Collaboration",
            Self::Feedback => "Suggestion / Feedback",
            Self::Other => "Other",
        }
    }

    /// Stable value used when the topic is treated as a raw form value
    pub fn slug(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Collaboration => "collaboration",
            Self::Feedback => "feedback",
            Self::Other => "other",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::General => Self::Collaboration,
            Self::Collaboration => Self::Feedback,
            Self::Feedback => Self::Other,
            Self::Other => Self::General,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::General => Self::Other,
            Self::Collaboration => Self::General,
            Self::Feedback => Self::Collaboration,
            Self::Other => Self::Feedback,
        }
    }
}

/// Focus position inside the contact form: the four fields plus the send
/// button row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFocus {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl ContactFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Send,
            Self::Send => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Send,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
            Self::Send => Self::Message,
        }
    }

    /// The field under focus, if focus is not on the button row
    pub fn field(&self) -> Option<ContactField> {
        match self {
            Self::Name => Some(ContactField::Name),
            Self::Email => Some(ContactField::Email),
            Self::Subject => Some(ContactField::Subject),
            Self::Message => Some(ContactField::Message),
            Self::Send => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod contact_field {
        use super::*;

        #[test]
        fn test_all_lists_fields_in_display_order() {
            assert_eq!(ContactField::ALL.len(), 4);
            assert_eq!(ContactField::ALL[0], ContactField::Name);
            assert_eq!(ContactField::ALL[3], ContactField::Message);
        }

        #[test]
        fn test_only_message_is_multiline() {
            assert!(ContactField::Message.is_multiline());
            assert!(!ContactField::Name.is_multiline());
            assert!(!ContactField::Email.is_multiline());
            assert!(!ContactField::Subject.is_multiline());
        }

        #[test]
        fn test_labels_are_nonempty() {
            for field in ContactField::ALL {
                assert!(!field.label().is_empty());
                assert!(!field.placeholder().is_empty());
            }
        }
    }

    mod subject_topic {
        use super::*;

        #[test]
        fn test_next_cycles_through_all_topics() {
            let mut topic = SubjectTopic::General;
            for _ in 0..SubjectTopic::ALL.len() {
                topic = topic.next();
            }
            assert_eq!(topic, SubjectTopic::General);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for topic in SubjectTopic::ALL {
                assert_eq!(topic.next().prev(), topic);
            }
        }

        #[test]
        fn test_slugs_are_unique() {
            let slugs: Vec<_> = SubjectTopic::ALL.iter().map(|t| t.slug()).collect();
            let mut deduped = slugs.clone();
            deduped.dedup();
            assert_eq!(slugs, deduped);
        }
    }

    mod contact_focus {
        use super::*;

        #[test]
        fn test_default_is_name() {
            assert_eq!(ContactFocus::default(), ContactFocus::Name);
        }

        #[test]
        fn test_next_wraps_from_send_to_name() {
            assert_eq!(ContactFocus::Send.next(), ContactFocus::Name);
        }

        #[test]
        fn test_prev_wraps_from_name_to_send() {
            assert_eq!(ContactFocus::Name.prev(), ContactFocus::Send);
        }

        #[test]
        fn test_field_is_none_on_send() {
            assert!(ContactFocus::Send.field().is_none());
            assert_eq!(ContactFocus::Email.field(), Some(ContactField::Email));
        }

        #[test]
        fn test_full_cycle_visits_every_position() {
            let mut focus = ContactFocus::Name;
            let mut seen = vec![focus];
            loop {
                focus = focus.next();
                if focus == ContactFocus::Name {
                    break;
                }
                seen.push(focus);
            }
            assert_eq!(seen.len(), 5);
        }
    }
}
