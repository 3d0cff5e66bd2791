//! Domain entities - the core business objects.

mod post;

pub use post::{PLACEHOLDER_IMAGE, Post, PostDraft};
