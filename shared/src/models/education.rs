//! Education Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::DocumentView;
use crate::lenient;

/// Education entry as submitted
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub stream: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub board: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub year_of_passing: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub percentage: Option<Decimal>,
}

/// Education row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub id: i64,
    pub level: Option<String>,
    pub stream: Option<String>,
    pub institution: Option<String>,
    pub board: Option<String>,
    pub year_of_passing: Option<i32>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub percentage: Option<Decimal>,
}

/// Education record with its certificate attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    #[serde(flatten)]
    pub record: EducationRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<DocumentView>,
}

impl From<EducationRecord> for EducationView {
    fn from(record: EducationRecord) -> Self {
        Self {
            record,
            certificate: None,
        }
    }
}
