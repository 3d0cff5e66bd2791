//! # Blog Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;
