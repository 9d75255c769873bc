//! Aggregate writer: one submission, one transaction
//!
//! Inserts the employee, its identity documents, education rows (each with the
//! certificate uploaded at the same position) and work history, then commits.
//! Any failure rolls the whole submission back.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    DEFAULT_DEPARTMENT, DEFAULT_STATUS, DocumentKind, EducationEntry, EmployeeSubmission,
    WorkHistoryEntry,
};
use sqlx::{PgConnection, PgPool};

use crate::db::documents::{self, DocumentOwner};
use crate::db::employees::{self, NewEmployee};
use crate::db::{education, work_history};
use crate::error::ServiceResult;
use crate::intake::{UploadedFile, UploadedFiles};

/// Maximum combined size of all files in one submission (10MB)
pub const MAX_TOTAL_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// How the work-history rows of a submission are written.
///
/// The first entry decides: a `fresher` first entry (or no entries at all)
/// yields a single fresher row, anything else makes every entry experienced.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkHistoryPlan {
    Fresher,
    Experienced(Vec<WorkHistoryEntry>),
}

impl WorkHistoryPlan {
    pub fn from_entries(entries: Vec<WorkHistoryEntry>) -> Self {
        match entries.first() {
            Some(first) if !first.is_fresher() => Self::Experienced(entries),
            _ => Self::Fresher,
        }
    }
}

/// Hands out consecutive slices of the `workDocuments` group, in entry order
pub struct WorkDocumentCursor<'a> {
    files: &'a [UploadedFile],
    next: usize,
}

impl<'a> WorkDocumentCursor<'a> {
    pub fn new(files: &'a [UploadedFile]) -> Self {
        Self { files, next: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.files.len() - self.next
    }

    /// Consume as many files as the entry declares
    pub fn take(&mut self, entry: &WorkHistoryEntry) -> Result<&'a [UploadedFile], AppError> {
        let wanted = entry.declared_documents;
        let remaining = self.remaining();
        if wanted > remaining {
            let company = entry.company_name.as_deref().unwrap_or("unnamed employer");
            return Err(AppError::with_message(
                ErrorCode::WorkDocumentsMissing,
                format!(
                    "Not enough work documents uploaded for {company}. Expected {wanted}, found {remaining} remaining."
                ),
            )
            .with_detail("expected", wanted)
            .with_detail("remaining", remaining));
        }
        let files = &self.files[self.next..self.next + wanted];
        self.next += wanted;
        Ok(files)
    }
}

/// Submission after list parsing, coercion and the size check
#[derive(Debug)]
pub struct PreparedSubmission {
    pub fields: EmployeeSubmission,
    pub dob: Option<NaiveDate>,
    pub submission_date: DateTime<Utc>,
    pub status: String,
    pub department: String,
    pub education: Vec<EducationEntry>,
    pub work_history: WorkHistoryPlan,
}

/// Reject submissions whose files exceed [`MAX_TOTAL_UPLOAD_SIZE`] together
pub fn check_total_size(files: &UploadedFiles) -> Result<(), AppError> {
    let total = files.total_size();
    if total > MAX_TOTAL_UPLOAD_SIZE {
        return Err(AppError::new(ErrorCode::UploadTooLarge)
            .with_detail("total", total)
            .with_detail("max", MAX_TOTAL_UPLOAD_SIZE));
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn parse_dob(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    non_empty(value)
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| {
                AppError::with_message(ErrorCode::InvalidDate, format!("Invalid dob: {v}"))
            })
        })
        .transpose()
}

/// RFC 3339 or a bare date (midnight UTC); absent means `now`
pub fn parse_submission_date(
    value: Option<&str>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    let Some(v) = non_empty(value) else {
        return Ok(now);
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(v) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(v, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| {
            AppError::with_message(
                ErrorCode::InvalidDate,
                format!("Invalid submissionDate: {v}"),
            )
        })
}

/// Normalize a submission before any row is written
pub fn prepare(
    mut submission: EmployeeSubmission,
    files: &UploadedFiles,
    now: DateTime<Utc>,
) -> Result<PreparedSubmission, AppError> {
    let education = submission
        .education
        .take()
        .map(|list| list.into_entries())
        .transpose()
        .map_err(|e| AppError::invalid_request(format!("Invalid education list: {e}")))?
        .unwrap_or_default();
    let work_entries = submission
        .work_history
        .take()
        .map(|list| list.into_entries_or_empty())
        .transpose()
        .map_err(|e| AppError::invalid_request(format!("Invalid workHistory list: {e}")))?
        .unwrap_or_default();

    check_total_size(files)?;

    let dob = parse_dob(submission.dob.as_deref())?;
    let submission_date = parse_submission_date(submission.submission_date.as_deref(), now)?;
    // Defaults apply only to absent fields; an empty value is stored as sent
    let status = submission
        .status
        .clone()
        .unwrap_or_else(|| DEFAULT_STATUS.to_string());
    let department = submission
        .department
        .clone()
        .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string());

    Ok(PreparedSubmission {
        fields: submission,
        dob,
        submission_date,
        status,
        department,
        education,
        work_history: WorkHistoryPlan::from_entries(work_entries),
    })
}

/// Persist one submission atomically and return the new employee id
pub async fn submit_employee(
    pool: &PgPool,
    submission: EmployeeSubmission,
    files: UploadedFiles,
) -> ServiceResult<i64> {
    let prepared = prepare(submission, &files, Utc::now())?;
    tracing::debug!(work_history = ?prepared.work_history, "Received work history");

    let mut tx = pool.begin().await?;
    match write_aggregate(&mut *tx, &prepared, &files).await {
        Ok(employee_id) => {
            tx.commit().await?;
            tracing::info!(employee_id, "Employee submission stored");
            Ok(employee_id)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Rollback failed");
            }
            tracing::warn!(error = %e, "Employee submission rolled back");
            Err(e)
        }
    }
}

async fn write_aggregate(
    conn: &mut PgConnection,
    prepared: &PreparedSubmission,
    files: &UploadedFiles,
) -> ServiceResult<i64> {
    let employee_id = employees::insert_employee(
        conn,
        &NewEmployee {
            fields: &prepared.fields,
            dob: prepared.dob,
            status: &prepared.status,
            department: &prepared.department,
            submission_date: prepared.submission_date,
        },
    )
    .await?;

    if let Some(file) = &files.aadhar {
        documents::insert_document(
            conn,
            employee_id,
            DocumentKind::Aadhar,
            file,
            DocumentOwner::Employee,
        )
        .await?;
    }
    if let Some(file) = &files.pan {
        documents::insert_document(conn, employee_id, DocumentKind::Pan, file, DocumentOwner::Employee)
            .await?;
    }

    // Certificates pair with education entries by position
    for (index, entry) in prepared.education.iter().enumerate() {
        let education_id = education::insert_education(conn, employee_id, entry).await?;
        if let Some(certificate) = files.education.get(index) {
            documents::insert_document(
                conn,
                employee_id,
                DocumentKind::Education,
                certificate,
                DocumentOwner::Education(education_id),
            )
            .await?;
        }
    }

    match &prepared.work_history {
        WorkHistoryPlan::Experienced(entries) => {
            let mut cursor = WorkDocumentCursor::new(&files.work);
            for entry in entries {
                let work_id = work_history::insert_experienced(conn, employee_id, entry).await?;
                let docs = cursor.take(entry)?;
                if docs.is_empty() {
                    tracing::warn!(
                        employee_id,
                        company = entry.company_name.as_deref().unwrap_or_default(),
                        "No documents provided for work history"
                    );
                }
                for doc in docs {
                    tracing::debug!(employee_id, work_history_id = work_id, file = %doc.name, "Inserting work document");
                    documents::insert_document(
                        conn,
                        employee_id,
                        DocumentKind::Work,
                        doc,
                        DocumentOwner::WorkHistory(work_id),
                    )
                    .await?;
                }
            }
        }
        WorkHistoryPlan::Fresher => {
            work_history::insert_fresher(conn, employee_id).await?;
        }
    }

    Ok(employee_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::FileGroup;
    use chrono::TimeZone;
    use shared::models::EntryList;

    fn entry(company: &str, docs: usize) -> WorkHistoryEntry {
        WorkHistoryEntry {
            experience_type: Some("experienced".into()),
            company_name: Some(company.into()),
            declared_documents: docs,
            ..Default::default()
        }
    }

    fn fresher() -> WorkHistoryEntry {
        WorkHistoryEntry {
            experience_type: Some("fresher".into()),
            ..Default::default()
        }
    }

    fn upload(name: &str, size: usize) -> UploadedFile {
        UploadedFile {
            name: name.into(),
            media_type: "application/pdf".into(),
            data: vec![7u8; size],
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_or_fresher_first_lists_are_fresher() {
        assert_eq!(WorkHistoryPlan::from_entries(vec![]), WorkHistoryPlan::Fresher);
        assert_eq!(
            WorkHistoryPlan::from_entries(vec![fresher(), entry("Acme", 0)]),
            WorkHistoryPlan::Fresher
        );
    }

    #[test]
    fn first_entry_decides_experienced() {
        // A later fresher marker is coerced into an experienced row
        let plan = WorkHistoryPlan::from_entries(vec![entry("Acme", 1), fresher()]);
        match plan {
            WorkHistoryPlan::Experienced(entries) => assert_eq!(entries.len(), 2),
            other => panic!("expected experienced plan, got {other:?}"),
        }

        let untyped = WorkHistoryEntry {
            company_name: Some("Initech".into()),
            ..Default::default()
        };
        assert!(matches!(
            WorkHistoryPlan::from_entries(vec![untyped]),
            WorkHistoryPlan::Experienced(_)
        ));
    }

    #[test]
    fn cursor_consumes_files_in_entry_order() {
        let files = vec![upload("a.pdf", 1), upload("b.pdf", 1), upload("c.pdf", 1)];
        let mut cursor = WorkDocumentCursor::new(&files);

        let first = cursor.take(&entry("Acme", 2)).unwrap();
        assert_eq!(
            first.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["a.pdf", "b.pdf"]
        );
        assert!(cursor.take(&entry("Globex", 0)).unwrap().is_empty());
        let third = cursor.take(&entry("Initech", 1)).unwrap();
        assert_eq!(third[0].name, "c.pdf");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn cursor_rejects_over_declared_entries() {
        let files = vec![upload("a.pdf", 1)];
        let mut cursor = WorkDocumentCursor::new(&files);
        cursor.take(&entry("Acme", 1)).unwrap();

        let err = cursor.take(&entry("Globex", 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::WorkDocumentsMissing);
        assert_eq!(
            err.message,
            "Not enough work documents uploaded for Globex. Expected 1, found 0 remaining."
        );
    }

    #[test]
    fn total_size_ceiling() {
        let mut files = UploadedFiles::default();
        for i in 0..10 {
            files
                .push(FileGroup::WorkDocuments, upload(&format!("{i}.pdf"), 1024 * 1024))
                .unwrap();
        }
        assert!(check_total_size(&files).is_ok());

        files.push(FileGroup::Aadhar, upload("a.pdf", 1)).unwrap();
        let err = check_total_size(&files).unwrap_err();
        assert_eq!(err.code, ErrorCode::UploadTooLarge);
    }

    #[test]
    fn dates_are_coerced() {
        assert_eq!(parse_dob(None).unwrap(), None);
        assert_eq!(parse_dob(Some(" ")).unwrap(), None);
        assert_eq!(
            parse_dob(Some("1996-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(1996, 2, 29)
        );
        assert_eq!(
            parse_dob(Some("29/02/1996")).unwrap_err().code,
            ErrorCode::InvalidDate
        );

        assert_eq!(parse_submission_date(None, now()).unwrap(), now());
        assert_eq!(
            parse_submission_date(Some("2025-01-15T10:00:00+05:30"), now()).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 4, 30, 0).unwrap()
        );
        assert_eq!(
            parse_submission_date(Some("2025-01-15"), now()).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
        );
        assert!(parse_submission_date(Some("yesterday"), now()).is_err());
    }

    #[test]
    fn prepare_applies_defaults_and_parses_lists() {
        let submission = EmployeeSubmission {
            name: Some("Asha".into()),
            education: Some(EntryList::Serialized(
                r#"[{"level":"10th"},{"level":"12th"}]"#.into(),
            )),
            work_history: Some(EntryList::Entries(vec![entry("Acme", 1)])),
            ..Default::default()
        };
        let prepared = prepare(submission, &UploadedFiles::default(), now()).unwrap();

        assert_eq!(prepared.status, "pending");
        assert_eq!(prepared.department, "Not Assigned");
        assert_eq!(prepared.submission_date, now());
        assert_eq!(prepared.education.len(), 2);
        assert!(matches!(prepared.work_history, WorkHistoryPlan::Experienced(ref e) if e.len() == 1));
        assert!(prepared.fields.education.is_none());
    }

    #[test]
    fn prepare_without_lists_is_a_fresher_without_education() {
        let prepared = prepare(
            EmployeeSubmission {
                department: Some("Engineering".into()),
                ..Default::default()
            },
            &UploadedFiles::default(),
            now(),
        )
        .unwrap();
        assert!(prepared.education.is_empty());
        assert_eq!(prepared.work_history, WorkHistoryPlan::Fresher);
        assert_eq!(prepared.department, "Engineering");
    }

    #[test]
    fn non_array_work_history_falls_back_to_fresher() {
        for text in ["null", "{}", "{\"experienceType\":\"experienced\"}"] {
            let prepared = prepare(
                EmployeeSubmission {
                    work_history: Some(EntryList::Serialized(text.into())),
                    ..Default::default()
                },
                &UploadedFiles::default(),
                now(),
            )
            .unwrap();
            assert_eq!(prepared.work_history, WorkHistoryPlan::Fresher, "{text}");
        }
    }

    #[test]
    fn empty_status_and_department_are_kept() {
        let prepared = prepare(
            EmployeeSubmission {
                status: Some(String::new()),
                department: Some(String::new()),
                ..Default::default()
            },
            &UploadedFiles::default(),
            now(),
        )
        .unwrap();
        assert_eq!(prepared.status, "");
        assert_eq!(prepared.department, "");
    }

    #[test]
    fn prepare_rejects_malformed_lists_and_oversize_uploads() {
        let err = prepare(
            EmployeeSubmission {
                work_history: Some(EntryList::Serialized("{not json".into())),
                ..Default::default()
            },
            &UploadedFiles::default(),
            now(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);

        let mut files = UploadedFiles::default();
        for i in 0..5 {
            files
                .push(
                    FileGroup::EducationCertificates,
                    upload(&format!("{i}.pdf"), 1024 * 1024),
                )
                .unwrap();
        }
        for i in 0..6 {
            files
                .push(FileGroup::WorkDocuments, upload(&format!("w{i}.pdf"), 1024 * 1024))
                .unwrap();
        }
        let err = prepare(EmployeeSubmission::default(), &files, now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::UploadTooLarge);
    }
}
