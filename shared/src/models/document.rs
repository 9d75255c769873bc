//! Document Model
//!
//! Uploaded files are stored base64-encoded next to the metadata the client
//! declared for them.

use serde::{Deserialize, Serialize};

/// Document type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Aadhar,
    Pan,
    Education,
    Work,
}

impl DocumentKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhar => "aadhar",
            Self::Pan => "pan",
            Self::Education => "education",
            Self::Work => "work",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "aadhar" => Some(Self::Aadhar),
            "pan" => Some(Self::Pan),
            "education" => Some(Self::Education),
            "work" => Some(Self::Work),
            _ => None,
        }
    }
}

/// Document row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DocumentRow {
    pub id: i64,
    pub document_type: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    /// Base64 text
    pub file_data: String,
    pub education_id: Option<i64>,
    pub work_history_id: Option<i64>,
}

impl DocumentRow {
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::parse(&self.document_type)
    }

    pub fn to_view(&self) -> DocumentView {
        DocumentView {
            id: self.id,
            name: self.file_name.clone(),
            media_type: self.file_type.clone(),
            size: self.file_size,
            data: self.file_data.clone(),
        }
    }
}

/// Document as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentView {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub size: i64,
    pub data: String,
}

/// Flat grouping of an employee's documents by tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentGroups {
    pub aadhar: Option<DocumentView>,
    pub pan: Option<DocumentView>,
    pub education: Vec<DocumentView>,
    pub work: Vec<DocumentView>,
}
