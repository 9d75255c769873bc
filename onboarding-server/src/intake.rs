//! Multipart intake
//!
//! Turns a `multipart/form-data` submission into an [`EmployeeSubmission`]
//! plus the uploaded files, grouped by the form field they arrived under.
//! Per-file limits (size, media type, group counts) are enforced here, before
//! the aggregate writer runs.

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use base64::Engine;
use http::StatusCode;
use serde_json::{Map, Value};
use shared::error::{AppError, ErrorCode};
use shared::models::EmployeeSubmission;

/// Maximum size of one uploaded file (1MB)
pub const MAX_FILE_SIZE: usize = 1024 * 1024;

/// Maximum request body size (15MB)
pub const MAX_BODY_SIZE: usize = 15 * 1024 * 1024;

/// Accepted file extensions
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// Accepted media types
const SUPPORTED_MEDIA_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/jpg", "image/png"];

/// Upload group a file part belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileGroup {
    Aadhar,
    Pan,
    EducationCertificates,
    WorkDocuments,
}

impl FileGroup {
    pub fn from_field(name: &str) -> Option<Self> {
        match name {
            "aadharDocument" => Some(Self::Aadhar),
            "panDocument" => Some(Self::Pan),
            "educationCertificates" => Some(Self::EducationCertificates),
            "workDocuments" => Some(Self::WorkDocuments),
            _ => None,
        }
    }

    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Aadhar => "aadharDocument",
            Self::Pan => "panDocument",
            Self::EducationCertificates => "educationCertificates",
            Self::WorkDocuments => "workDocuments",
        }
    }

    pub const fn max_count(&self) -> usize {
        match self {
            Self::Aadhar | Self::Pan => 1,
            Self::EducationCertificates => 5,
            Self::WorkDocuments => 10,
        }
    }
}

/// One uploaded file, held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// Original filename as sent by the client
    pub name: String,
    /// Declared media type
    pub media_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Base64 text stored in the documents table
    pub fn encoded(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

/// Files of one submission, by group
#[derive(Debug, Clone, Default)]
pub struct UploadedFiles {
    pub aadhar: Option<UploadedFile>,
    pub pan: Option<UploadedFile>,
    pub education: Vec<UploadedFile>,
    pub work: Vec<UploadedFile>,
}

impl UploadedFiles {
    pub fn count(&self, group: FileGroup) -> usize {
        match group {
            FileGroup::Aadhar => usize::from(self.aadhar.is_some()),
            FileGroup::Pan => usize::from(self.pan.is_some()),
            FileGroup::EducationCertificates => self.education.len(),
            FileGroup::WorkDocuments => self.work.len(),
        }
    }

    /// Add a file to its group, refusing to go past the group's capacity
    pub fn push(&mut self, group: FileGroup, file: UploadedFile) -> Result<(), AppError> {
        if self.count(group) >= group.max_count() {
            return Err(AppError::with_message(
                ErrorCode::TooManyFiles,
                format!(
                    "Too many files for '{}' (max {})",
                    group.field_name(),
                    group.max_count()
                ),
            ));
        }
        match group {
            FileGroup::Aadhar => self.aadhar = Some(file),
            FileGroup::Pan => self.pan = Some(file),
            FileGroup::EducationCertificates => self.education.push(file),
            FileGroup::WorkDocuments => self.work.push(file),
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedFile> {
        self.aadhar
            .iter()
            .chain(self.pan.iter())
            .chain(self.education.iter())
            .chain(self.work.iter())
    }

    /// Combined byte size of every file
    pub fn total_size(&self) -> usize {
        self.iter().map(UploadedFile::size).sum()
    }
}

/// Media type of a part as declared, guessed from the filename when the client sent none
pub fn resolve_media_type(declared: Option<&str>, file_name: &str) -> String {
    match declared {
        Some(media_type) if !media_type.trim().is_empty() => media_type.to_string(),
        _ => mime_guess::from_path(file_name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string(),
    }
}

/// `type/subtype` of a media type, lowercased and without parameters
fn media_type_essence(media_type: &str) -> Option<String> {
    media_type
        .trim()
        .parse::<mime_guess::Mime>()
        .ok()
        .map(|mime| mime.essence_str().to_ascii_lowercase())
}

/// Only PDF, JPEG and PNG are accepted; media type and extension must both agree
pub fn check_file_type(file_name: &str, media_type: &str) -> Result<(), AppError> {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let essence = media_type_essence(media_type).unwrap_or_default();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        && SUPPORTED_MEDIA_TYPES.contains(&essence.as_str())
    {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::UnsupportedFileType)
            .with_detail("file", file_name)
            .with_detail("type", media_type))
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::with_message(ErrorCode::UploadTooLarge, e.body_text())
    } else {
        AppError::invalid_request(format!("Invalid multipart request: {}", e.body_text()))
    }
}

/// Read a file part, stopping as soon as it exceeds [`MAX_FILE_SIZE`]
async fn read_file(mut field: Field<'_>, file_name: &str) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if data.len() + chunk.len() > MAX_FILE_SIZE {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File too large: {file_name} (max {}MB)",
                    MAX_FILE_SIZE / 1024 / 1024
                ),
            ));
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

/// Split a multipart body into the submission fields and the uploaded files
pub async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(EmployeeSubmission, UploadedFiles), AppError> {
    let mut fields = Map::new();
    let mut files = UploadedFiles::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        let Some(file_name) = field.file_name().map(str::to_string) else {
            let text = field.text().await.map_err(multipart_error)?;
            fields.insert(name, Value::String(text));
            continue;
        };

        let group = FileGroup::from_field(&name).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::UnexpectedFileField,
                format!("Unexpected file field: {name}"),
            )
        })?;
        let media_type = resolve_media_type(field.content_type(), &file_name);
        check_file_type(&file_name, &media_type)?;

        let data = read_file(field, &file_name).await?;
        tracing::debug!(
            field = %name,
            file = %file_name,
            size = data.len(),
            "Received upload"
        );
        files.push(
            group,
            UploadedFile {
                name: file_name,
                media_type,
                data,
            },
        )?;
    }

    let submission = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::invalid_request(format!("Invalid form fields: {e}")))?;
    Ok((submission, files))
}
