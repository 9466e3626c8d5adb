use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{
    data_transfer_checks, data_transfer_checks::Entity as DataTransferChecks,
};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::services::ChecklistService;

#[derive(Serialize, Deserialize)]
pub struct CreateCheckRequest {
    pub project_id: i32,
    pub module_name: Option<String>,
    pub desktop_table: String,
    pub web_table: String,
    pub desktop_count: Option<i32>,
    pub web_count: Option<i32>,
    pub status: Option<String>,
    pub is_completed: Option<bool>,
    pub remarks: Option<String>,
    pub checked_by: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateCheckRequest {
    pub id: Option<i32>,
    pub module_name: Option<String>,
    pub desktop_table: String,
    pub web_table: String,
    pub desktop_count: Option<i32>,
    pub web_count: Option<i32>,
    pub status: String,
    pub is_completed: bool,
    pub remarks: Option<String>,
    pub checked_by: Option<String>,
}

pub async fn list_checks(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<data_transfer_checks::Model>>> {
    let checks = DataTransferChecks::find().all(&state.db).await?;
    Ok(Json(checks))
}

/// Listing a project's checklist seeds it from the field-master template the
/// first time around.
pub async fn list_checks_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<data_transfer_checks::Model>>> {
    let checklist_service = ChecklistService::new(state.db.clone());
    checklist_service.ensure_template_rows(project_id).await?;

    let checks = DataTransferChecks::find()
        .filter(data_transfer_checks::Column::ProjectId.eq(project_id))
        .order_by_asc(data_transfer_checks::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(checks))
}

pub async fn create_check(
    State(state): State<AppState>,
    Json(payload): Json<CreateCheckRequest>,
) -> ApiResult<Json<data_transfer_checks::Model>> {
    let now = Utc::now();
    let check = data_transfer_checks::ActiveModel {
        project_id: Set(payload.project_id),
        module_name: Set(payload.module_name),
        desktop_table: Set(payload.desktop_table),
        web_table: Set(payload.web_table),
        desktop_count: Set(payload.desktop_count),
        web_count: Set(payload.web_count),
        status: Set(payload.status.unwrap_or_else(|| "Pending".to_string())),
        is_completed: Set(payload.is_completed.unwrap_or(false)),
        remarks: Set(payload.remarks),
        checked_by: Set(payload.checked_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let check = check.insert(&state.db).await?;
    Ok(Json(check))
}

pub async fn get_check(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<data_transfer_checks::Model>> {
    let check = DataTransferChecks::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Transfer check", id))?;

    Ok(Json(check))
}

pub async fn update_check(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCheckRequest>,
) -> ApiResult<Json<data_transfer_checks::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let check = DataTransferChecks::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Transfer check", id))?;

    let mut check: data_transfer_checks::ActiveModel = check.into();
    check.module_name = Set(payload.module_name);
    check.desktop_table = Set(payload.desktop_table);
    check.web_table = Set(payload.web_table);
    check.desktop_count = Set(payload.desktop_count);
    check.web_count = Set(payload.web_count);
    check.status = Set(payload.status);
    check.is_completed = Set(payload.is_completed);
    check.remarks = Set(payload.remarks);
    check.checked_by = Set(payload.checked_by);
    check.updated_at = Set(Utc::now());

    let check = check.update(&state.db).await?;
    Ok(Json(check))
}

pub async fn delete_check(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let check = DataTransferChecks::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Transfer check", id))?;

    DataTransferChecks::delete_by_id(check.id)
        .exec(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
