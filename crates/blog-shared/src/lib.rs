//! # Blog Shared
//!
//! Types exchanged between the HTML forms and the server.

pub mod dto;

pub use dto::PostForm;
