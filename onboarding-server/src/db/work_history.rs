//! Work history database operations

use shared::models::{ExperienceType, WorkHistoryEntry, WorkHistoryRecord};
use sqlx::PgConnection;

use super::DbResult;

pub async fn insert_experienced(
    conn: &mut PgConnection,
    employee_id: i64,
    entry: &WorkHistoryEntry,
) -> DbResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO work_history (
            employee_id, experience_type, company_name, designation,
            employment_period, location, reason_for_leaving
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(employee_id)
    .bind(ExperienceType::Experienced.as_str())
    .bind(&entry.company_name)
    .bind(&entry.designation)
    .bind(&entry.employment_period)
    .bind(&entry.location)
    .bind(&entry.reason_for_leaving)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Single fresher row, no company fields
pub async fn insert_fresher(conn: &mut PgConnection, employee_id: i64) -> DbResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO work_history (employee_id, experience_type) VALUES ($1, $2) RETURNING id",
    )
    .bind(employee_id)
    .bind(ExperienceType::Fresher.as_str())
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn list_work_history(
    conn: &mut PgConnection,
    employee_id: i64,
) -> DbResult<Vec<WorkHistoryRecord>> {
    sqlx::query_as(
        r#"
        SELECT id, experience_type, company_name, designation,
               employment_period, location, reason_for_leaving
        FROM work_history
        WHERE employee_id = $1
        ORDER BY id
        "#,
    )
    .bind(employee_id)
    .fetch_all(conn)
    .await
}
