//! Database access layer
//!
//! Row-level statements. Functions taking `&mut PgConnection` are meant to run
//! inside a caller-owned transaction (`&mut *tx`); functions taking `&PgPool`
//! are single-statement operations.

pub mod documents;
pub mod education;
pub mod employees;
pub mod work_history;

pub type DbResult<T> = Result<T, sqlx::Error>;
