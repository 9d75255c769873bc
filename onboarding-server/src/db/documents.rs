//! Document database operations

use shared::models::{DocumentKind, DocumentRow};
use sqlx::PgConnection;

use super::DbResult;
use crate::intake::UploadedFile;

/// Record a document hangs off besides its employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOwner {
    /// Attached to the employee only (aadhar, pan)
    Employee,
    Education(i64),
    WorkHistory(i64),
}

impl DocumentOwner {
    fn education_id(self) -> Option<i64> {
        match self {
            Self::Education(id) => Some(id),
            _ => None,
        }
    }

    fn work_history_id(self) -> Option<i64> {
        match self {
            Self::WorkHistory(id) => Some(id),
            _ => None,
        }
    }
}

pub async fn insert_document(
    conn: &mut PgConnection,
    employee_id: i64,
    kind: DocumentKind,
    file: &UploadedFile,
    owner: DocumentOwner,
) -> DbResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO documents (
            employee_id, document_type, file_name, file_type, file_size, file_data,
            education_id, work_history_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(employee_id)
    .bind(kind.as_str())
    .bind(&file.name)
    .bind(&file.media_type)
    .bind(file.size() as i64)
    .bind(file.encoded())
    .bind(owner.education_id())
    .bind(owner.work_history_id())
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn list_documents(
    conn: &mut PgConnection,
    employee_id: i64,
) -> DbResult<Vec<DocumentRow>> {
    sqlx::query_as(
        r#"
        SELECT id, document_type, file_name, file_type, file_size, file_data,
               education_id, work_history_id
        FROM documents
        WHERE employee_id = $1
        ORDER BY id
        "#,
    )
    .bind(employee_id)
    .fetch_all(conn)
    .await
}
