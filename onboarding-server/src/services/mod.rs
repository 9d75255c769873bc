//! Employee onboarding services
//!
//! Transaction boundaries live here; handlers stay thin and the `db` layer
//! only runs single statements.

pub mod reader;
pub mod records;
pub mod writer;

pub use reader::load_employee;
pub use records::{delete_all_employees, list_employees, update_status};
pub use writer::submit_employee;
