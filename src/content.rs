//! Portfolio profile content
//!
//! Everything the app renders outside the contact form is inert data: the
//! owner card, the about section, the project cards and the public contact
//! details. The built-in profile can be replaced by pointing
//! `profile_path` in the config at a JSON file with the same shape.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from loading a profile override file
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed profile: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The person the page is about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub title: String,
}

/// One label/value row in the about section's info list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// One project card (title + short description)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub summary: String,
}

/// Complete page content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub owner: Owner,
    pub about: String,
    pub facts: Vec<Fact>,
    pub projects: Vec<ProjectCard>,
    /// Public email shown in the contact section (copyable)
    pub contact_email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner: Owner {
                name: "Yusuf Kaymaz".to_string(),
                title: "Software Engineering Student".to_string(),
            },
            about: "Hi! I'm Yusuf Kaymaz, a software engineering student at \
                    Firat University. I'm interested in AI (LLMs, NLP), the Go \
                    language, cyber security, and building automation bots for \
                    crypto markets."
                .to_string(),
            facts: vec![
                Fact {
                    label: "Student No".to_string(),
                    value: "230541084".to_string(),
                },
                Fact {
                    label: "Department".to_string(),
                    value: "Software Engineering".to_string(),
                },
                Fact {
                    label: "University".to_string(),
                    value: "Firat University".to_string(),
                },
            ],
            projects: vec![
                ProjectCard {
                    title: "Crypto Signal Telegram Bot".to_string(),
                    summary: "News-driven automation bot written in Go. Tracks \
                              breaking news in crypto markets and pushes \
                              signals over Telegram."
                        .to_string(),
                },
                ProjectCard {
                    title: "Secret Knock Lock".to_string(),
                    summary: "Arduino project with a piezo sensor, built on \
                              Tinkercad. Unlocks a door when a specific knock \
                              rhythm is tapped out."
                        .to_string(),
                },
            ],
            contact_email: "yusufkaymaz@firat.example.edu".to_string(),
        }
    }
}

impl Profile {
    /// Load a profile from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
