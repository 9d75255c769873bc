//! Aggregate reader

use shared::error::AppError;
use shared::models::EmployeeAggregate;
use sqlx::PgPool;

use crate::db::{documents, education, employees, work_history};
use crate::error::ServiceResult;

/// Load one employee with education, work history and documents attached.
///
/// All four reads share one transaction so the aggregate is a consistent
/// snapshot.
pub async fn load_employee(pool: &PgPool, id: i64) -> ServiceResult<EmployeeAggregate> {
    let mut tx = pool.begin().await?;

    let Some(employee) = employees::find_employee(&mut *tx, id).await? else {
        tx.rollback().await?;
        return Err(AppError::employee_not_found(id).into());
    };

    let education = education::list_education(&mut *tx, id).await?;
    let work_history = work_history::list_work_history(&mut *tx, id).await?;
    let documents = documents::list_documents(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::debug!(
        employee_id = id,
        education = education.len(),
        work_history = work_history.len(),
        documents = documents.len(),
        "Loaded employee aggregate"
    );

    Ok(EmployeeAggregate::assemble(
        employee,
        education,
        work_history,
        documents,
    ))
}
