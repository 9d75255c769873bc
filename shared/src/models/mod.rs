//! Data models
//!
//! Shared between the onboarding server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod aggregate;
pub mod document;
pub mod education;
pub mod employee;
pub mod submission;
pub mod work_history;

// Re-exports
pub use aggregate::*;
pub use document::*;
pub use education::*;
pub use employee::*;
pub use submission::*;
pub use work_history::*;
