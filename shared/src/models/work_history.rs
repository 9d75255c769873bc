//! Work History Model

use serde::{Deserialize, Serialize};

use super::document::DocumentView;
use crate::lenient;

/// Experience type of a work-history row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    /// No prior employment; exactly one row, no company fields
    Fresher,
    /// One row per prior employer
    Experienced,
}

impl ExperienceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fresher => "fresher",
            Self::Experienced => "experienced",
        }
    }
}

/// Work-history entry as submitted
///
/// Only the number of `documents` matters: the files themselves arrive in
/// the `workDocuments` upload group, consumed in entry order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistoryEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub experience_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub employment_period: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub reason_for_leaving: Option<String>,
    #[serde(default, rename = "documents", deserialize_with = "lenient::array_len")]
    pub declared_documents: usize,
}

impl WorkHistoryEntry {
    pub fn is_fresher(&self) -> bool {
        self.experience_type.as_deref() == Some(ExperienceType::Fresher.as_str())
    }
}

/// Work-history row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct WorkHistoryRecord {
    pub id: i64,
    pub experience_type: String,
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub employment_period: Option<String>,
    pub location: Option<String>,
    pub reason_for_leaving: Option<String>,
}

/// Work-history record with its documents attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkHistoryView {
    #[serde(flatten)]
    pub record: WorkHistoryRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentView>,
}

impl From<WorkHistoryRecord> for WorkHistoryView {
    fn from(record: WorkHistoryRecord) -> Self {
        Self {
            record,
            documents: Vec::new(),
        }
    }
}
