//! Shared types for the employee onboarding service
//!
//! Domain models for the employee aggregate, the submission payload and the
//! unified error system used by the server and its clients.

pub mod error;
pub mod lenient;
pub mod models;
