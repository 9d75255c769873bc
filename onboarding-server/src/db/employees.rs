//! Employee database operations

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{Employee, EmployeeSubmission, EmployeeSummary, StatusUpdated};
use sqlx::{PgConnection, PgPool};

use super::DbResult;

/// Employee row to insert: submitted text fields plus the coerced ones
pub struct NewEmployee<'a> {
    pub fields: &'a EmployeeSubmission,
    pub dob: Option<NaiveDate>,
    pub status: &'a str,
    pub department: &'a str,
    pub submission_date: DateTime<Utc>,
}

pub async fn insert_employee(conn: &mut PgConnection, row: &NewEmployee<'_>) -> DbResult<i64> {
    let f = row.fields;
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO employees (
            name, father_name, dob, email, alt_email, mobile, alt_mobile, aadhar, pan,
            permanent_street, permanent_city, permanent_state, permanent_zipcode, permanent_country,
            current_street, current_city, current_state, current_zipcode, current_country,
            account_holder_name, bank_name, account_number, ifsc_code, bank_branch, account_type,
            status, department, submission_date
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28)
        RETURNING id
        "#,
    )
    .bind(&f.name)
    .bind(&f.father_name)
    .bind(row.dob)
    .bind(&f.email)
    .bind(&f.alt_email)
    .bind(&f.mobile)
    .bind(&f.alt_mobile)
    .bind(&f.aadhar)
    .bind(&f.pan)
    .bind(&f.permanent_street)
    .bind(&f.permanent_city)
    .bind(&f.permanent_state)
    .bind(&f.permanent_zipcode)
    .bind(&f.permanent_country)
    .bind(&f.current_street)
    .bind(&f.current_city)
    .bind(&f.current_state)
    .bind(&f.current_zipcode)
    .bind(&f.current_country)
    .bind(&f.account_holder_name)
    .bind(&f.bank_name)
    .bind(&f.account_number)
    .bind(&f.ifsc_code)
    .bind(&f.bank_branch)
    .bind(&f.account_type)
    .bind(row.status)
    .bind(row.department)
    .bind(row.submission_date)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn find_employee(conn: &mut PgConnection, id: i64) -> DbResult<Option<Employee>> {
    sqlx::query_as(
        r#"
        SELECT id, name, father_name, dob, email, alt_email, mobile, alt_mobile, aadhar, pan,
               permanent_street, permanent_city, permanent_state, permanent_zipcode, permanent_country,
               current_street, current_city, current_state, current_zipcode, current_country,
               account_holder_name, bank_name, account_number, ifsc_code, bank_branch, account_type,
               status, department, submission_date
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn list_employees(pool: &PgPool) -> DbResult<Vec<EmployeeSummary>> {
    sqlx::query_as(
        r#"
        SELECT id, name, email, status, submission_date
        FROM employees
        ORDER BY submission_date DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn update_status(
    pool: &PgPool,
    id: i64,
    status: &str,
) -> DbResult<Option<StatusUpdated>> {
    sqlx::query_as("UPDATE employees SET status = $1 WHERE id = $2 RETURNING id, status")
        .bind(status)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Remove every onboarding row, children before parents
pub async fn delete_all(conn: &mut PgConnection) -> DbResult<()> {
    for statement in [
        "DELETE FROM documents",
        "DELETE FROM education",
        "DELETE FROM work_history",
        "DELETE FROM employees",
    ] {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}
