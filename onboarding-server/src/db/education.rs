//! Education database operations

use shared::models::{EducationEntry, EducationRecord};
use sqlx::PgConnection;

use super::DbResult;

pub async fn insert_education(
    conn: &mut PgConnection,
    employee_id: i64,
    entry: &EducationEntry,
) -> DbResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO education (
            employee_id, level, stream, institution, board, year_of_passing, percentage
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(employee_id)
    .bind(&entry.level)
    .bind(&entry.stream)
    .bind(&entry.institution)
    .bind(&entry.board)
    .bind(entry.year_of_passing)
    .bind(entry.percentage)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn list_education(
    conn: &mut PgConnection,
    employee_id: i64,
) -> DbResult<Vec<EducationRecord>> {
    sqlx::query_as(
        r#"
        SELECT id, level, stream, institution, board, year_of_passing, percentage
        FROM education
        WHERE employee_id = $1
        ORDER BY id
        "#,
    )
    .bind(employee_id)
    .fetch_all(conn)
    .await
}
