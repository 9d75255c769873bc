//! onboarding-server: employee onboarding backend
//!
//! Accepts onboarding submissions (profile, education, work history and
//! identity/certificate documents), stores them atomically in PostgreSQL and
//! serves them back as one nested aggregate.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod intake;
pub mod services;
pub mod state;
