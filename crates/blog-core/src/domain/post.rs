use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sanitize::{plain_text, sanitize_html, truncate_escaped};

/// Image shown for posts submitted without one.
pub const PLACEHOLDER_IMAGE: &str = "placeholderimg.jpg";

/// Post entity - a blog post as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub body: String,
    pub created: DateTime<Utc>,
}

/// Normalized write payload for creating or replacing a post.
///
/// Fields are private so every draft has gone through [`PostDraft::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    title: String,
    image: String,
    body: String,
}

impl PostDraft {
    /// Build a draft from raw user input: the body is sanitized and a
    /// missing or blank image falls back to [`PLACEHOLDER_IMAGE`].
    pub fn new(title: impl Into<String>, image: Option<String>, body: &str) -> Self {
        let image = image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Self {
            title: title.into(),
            image,
            body: sanitize_html(body),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Post {
    /// Create a new post from a draft with a fresh id and creation time.
    pub fn create(draft: PostDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            image: draft.image,
            body: draft.body,
            created: Utc::now(),
        }
    }

    /// Replace the editable fields. `id` and `created` never change.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.image = draft.image;
        self.body = draft.body;
    }

    /// Plain-text preview of the body, at most `max_chars` characters.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = plain_text(&self.body);
        let cut = truncate_escaped(&text, max_chars);
        if cut.len() < text.len() {
            format!("{}...", cut.trim_end())
        } else {
            text
        }
    }

    /// Creation date as `Tue Mar 05 2024`.
    pub fn created_label(&self) -> String {
        self.created.format("%a %b %d %Y").to_string()
    }
}
