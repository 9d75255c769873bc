//! Unified error codes for the onboarding service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Document / upload errors
//! - 2xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so API clients can switch
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request
    InvalidRequest = 5,
    /// Date field could not be parsed
    InvalidDate = 6,

    // ==================== 1xxx: Documents ====================
    /// A single uploaded file exceeds the per-file ceiling
    FileTooLarge = 1001,
    /// The files of one submission exceed the aggregate ceiling
    UploadTooLarge = 1002,
    /// Media type or extension outside PDF/JPEG/PNG
    UnsupportedFileType = 1003,
    /// More files than a group allows
    TooManyFiles = 1004,
    /// File part under a name no group accepts
    UnexpectedFileField = 1005,
    /// A work-history entry declares more documents than were uploaded
    WorkDocumentsMissing = 1006,

    // ==================== 2xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 2001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidDate => "Invalid date",

            // Documents
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UploadTooLarge => "Total size of uploaded files exceeds 10MB.",
            ErrorCode::UnsupportedFileType => {
                "File type not supported. Only PDF, JPG, JPEG, PNG allowed."
            }
            ErrorCode::TooManyFiles => "Too many files uploaded",
            ErrorCode::UnexpectedFileField => "Unexpected file field",
            ErrorCode::WorkDocumentsMissing => "Not enough work documents uploaded",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidDate),

            // Documents
            1001 => Ok(ErrorCode::FileTooLarge),
            1002 => Ok(ErrorCode::UploadTooLarge),
            1003 => Ok(ErrorCode::UnsupportedFileType),
            1004 => Ok(ErrorCode::TooManyFiles),
            1005 => Ok(ErrorCode::UnexpectedFileField),
            1006 => Ok(ErrorCode::WorkDocumentsMissing),

            // Employee
            2001 => Ok(ErrorCode::EmployeeNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidDate.code(), 6);
        assert_eq!(ErrorCode::FileTooLarge.code(), 1001);
        assert_eq!(ErrorCode::WorkDocumentsMissing.code(), 1006);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 2001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::UploadTooLarge).unwrap();
        assert_eq!(json, "1002");

        let json = serde_json::to_string(&ErrorCode::InvalidRequest).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::EmployeeNotFound);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("4");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_try_from_covers_every_code() {
        let codes = [
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidDate,
            ErrorCode::FileTooLarge,
            ErrorCode::UploadTooLarge,
            ErrorCode::UnsupportedFileType,
            ErrorCode::TooManyFiles,
            ErrorCode::UnexpectedFileField,
            ErrorCode::WorkDocumentsMissing,
            ErrorCode::EmployeeNotFound,
            ErrorCode::InternalError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found");
        assert_eq!(
            ErrorCode::UploadTooLarge.message(),
            "Total size of uploaded files exceeds 10MB."
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
