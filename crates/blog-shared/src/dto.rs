//! Data Transfer Objects - payloads submitted by the post forms.

use serde::{Deserialize, Serialize};

/// Fields of the new/edit post form (`application/x-www-form-urlencoded`).
///
/// Every field is optional on the wire; a missing title or body is treated
/// as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub body: String,
}
