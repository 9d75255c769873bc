//! Listing, status updates and bulk delete

use shared::error::AppError;
use shared::models::{EmployeeSummary, StatusUpdated};
use sqlx::PgPool;

use crate::db::employees;
use crate::error::ServiceResult;

/// Employee summaries, newest submission first
pub async fn list_employees(pool: &PgPool) -> ServiceResult<Vec<EmployeeSummary>> {
    Ok(employees::list_employees(pool).await?)
}

/// Set the status of one employee; the value is stored as given
pub async fn update_status(pool: &PgPool, id: i64, status: &str) -> ServiceResult<StatusUpdated> {
    let updated = employees::update_status(pool, id, status)
        .await?
        .ok_or_else(|| AppError::employee_not_found(id))?;
    tracing::info!(employee_id = id, status = %updated.status, "Employee status updated");
    Ok(updated)
}

/// Remove every employee and all dependent rows in one transaction
pub async fn delete_all_employees(pool: &PgPool) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;
    employees::delete_all(&mut *tx).await?;
    tx.commit().await?;
    tracing::warn!("All employee records deleted");
    Ok(())
}
