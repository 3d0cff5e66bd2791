//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate holds the post model, body sanitization and the store port;
//! it has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod sanitize;

pub use error::StoreError;
