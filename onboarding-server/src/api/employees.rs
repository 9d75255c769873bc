//! Employee onboarding API
//!
//! POST   /api/employees             : submit an employee (multipart, JSON or form)
//! GET    /api/employees             : list summaries
//! GET    /api/employees/{id}        : full aggregate
//! PATCH  /api/employees/{id}/status : update status
//! DELETE /api/employees             : delete everything

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::{Form, Json};
use http::StatusCode;
use http::header::CONTENT_TYPE;
use shared::error::{AppError, AppResult};
use shared::models::{
    EmployeeAggregate, EmployeeSubmission, EmployeeSummary, MessageResponse, StatusUpdate,
    StatusUpdated, SubmissionCreated,
};

use crate::intake::{self, UploadedFiles};
use crate::services;
use crate::state::AppState;

fn path_id(id: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::invalid_request(format!("Invalid employee id: {}", e.body_text())))
}

fn json_error(e: JsonRejection) -> AppError {
    AppError::invalid_request(e.body_text())
}

fn form_error(e: FormRejection) -> AppError {
    AppError::invalid_request(e.body_text())
}

/// Read the submission according to the request content type
async fn read_submission(
    state: &AppState,
    request: Request,
) -> AppResult<(EmployeeSubmission, UploadedFiles)> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        intake::read_multipart(multipart).await
    } else if content_type.starts_with("application/json") {
        let Json(submission) = Json::<EmployeeSubmission>::from_request(request, state)
            .await
            .map_err(json_error)?;
        Ok((submission, UploadedFiles::default()))
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(submission) = Form::<EmployeeSubmission>::from_request(request, state)
            .await
            .map_err(form_error)?;
        Ok((submission, UploadedFiles::default()))
    } else {
        Err(AppError::invalid_request(format!(
            "Unsupported content type: {content_type}"
        )))
    }
}

/// POST /api/employees
pub async fn submit(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<(StatusCode, Json<SubmissionCreated>)> {
    let (submission, files) = read_submission(&state, request).await?;
    let employee_id = services::submit_employee(&state.pool, submission, files).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionCreated {
            message: "Employee data submitted successfully".to_string(),
            employee_id,
        }),
    ))
}

/// GET /api/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeSummary>>> {
    let employees = services::list_employees(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<EmployeeAggregate>> {
    let id = path_id(id)?;
    let aggregate = services::load_employee(&state.pool, id).await?;
    Ok(Json(aggregate))
}

/// PATCH /api/employees/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> AppResult<Json<StatusUpdated>> {
    let id = path_id(id)?;
    let Json(payload) = payload.map_err(json_error)?;
    let updated = services::update_status(&state.pool, id, &payload.status).await?;
    Ok(Json(updated))
}

/// DELETE /api/employees
pub async fn delete_all(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    services::delete_all_employees(&state.pool).await?;
    Ok(Json(MessageResponse {
        message: "All employee records deleted successfully".to_string(),
    }))
}
