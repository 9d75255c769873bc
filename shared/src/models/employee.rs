//! Employee Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default workflow status of a fresh submission
pub const DEFAULT_STATUS: &str = "pending";

/// Default department of a fresh submission
pub const DEFAULT_DEPARTMENT: &str = "Not Assigned";

/// Employee profile row
///
/// Address and bank blocks are stored as flat columns; the JSON shape mirrors
/// the column layout with camelCase names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: Option<String>,
    pub father_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub email: Option<String>,
    pub alt_email: Option<String>,
    pub mobile: Option<String>,
    pub alt_mobile: Option<String>,
    /// National identity number
    pub aadhar: Option<String>,
    /// Tax identity number
    pub pan: Option<String>,

    pub permanent_street: Option<String>,
    pub permanent_city: Option<String>,
    pub permanent_state: Option<String>,
    pub permanent_zipcode: Option<String>,
    pub permanent_country: Option<String>,

    pub current_street: Option<String>,
    pub current_city: Option<String>,
    pub current_state: Option<String>,
    pub current_zipcode: Option<String>,
    pub current_country: Option<String>,

    pub account_holder_name: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub bank_branch: Option<String>,
    pub account_type: Option<String>,

    pub status: String,
    pub department: String,
    pub submission_date: DateTime<Utc>,
}

/// List entry (GET /api/employees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: String,
    pub submission_date: DateTime<Utc>,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Status update result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StatusUpdated {
    pub id: i64,
    pub status: String,
}
