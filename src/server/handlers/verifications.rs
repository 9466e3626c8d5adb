use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{
    verification_records, verification_records::Entity as VerificationRecords,
};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub project_id: i32,
    pub check_name: String,
    pub sql_query: Option<String>,
    pub expected_value: Option<String>,
    pub actual_value: Option<String>,
    pub status: Option<String>,
    pub is_verified: Option<bool>,
    pub verified_by: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateRecordRequest {
    pub id: Option<i32>,
    pub check_name: String,
    pub sql_query: Option<String>,
    pub expected_value: Option<String>,
    pub actual_value: Option<String>,
    pub status: String,
    pub is_verified: bool,
    pub verified_by: Option<String>,
}

pub async fn list_records(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<verification_records::Model>>> {
    let records = VerificationRecords::find().all(&state.db).await?;
    Ok(Json(records))
}

pub async fn list_records_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<verification_records::Model>>> {
    let records = VerificationRecords::find()
        .filter(verification_records::Column::ProjectId.eq(project_id))
        .order_by_asc(verification_records::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(records))
}

pub async fn create_record(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecordRequest>,
) -> ApiResult<Json<verification_records::Model>> {
    let now = Utc::now();
    let record = verification_records::ActiveModel {
        project_id: Set(payload.project_id),
        check_name: Set(payload.check_name),
        sql_query: Set(payload.sql_query),
        expected_value: Set(payload.expected_value),
        actual_value: Set(payload.actual_value),
        status: Set(payload.status.unwrap_or_else(|| "Pending".to_string())),
        is_verified: Set(payload.is_verified.unwrap_or(false)),
        verified_by: Set(payload.verified_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let record = record.insert(&state.db).await?;
    Ok(Json(record))
}

pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<verification_records::Model>> {
    let record = VerificationRecords::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Verification record", id))?;

    Ok(Json(record))
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRecordRequest>,
) -> ApiResult<Json<verification_records::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let record = VerificationRecords::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Verification record", id))?;

    let mut record: verification_records::ActiveModel = record.into();
    record.check_name = Set(payload.check_name);
    record.sql_query = Set(payload.sql_query);
    record.expected_value = Set(payload.expected_value);
    record.actual_value = Set(payload.actual_value);
    record.status = Set(payload.status);
    record.is_verified = Set(payload.is_verified);
    record.verified_by = Set(payload.verified_by);
    record.updated_at = Set(Utc::now());

    let record = record.update(&state.db).await?;
    Ok(Json(record))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let record = VerificationRecords::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Verification record", id))?;

    VerificationRecords::delete_by_id(record.id)
        .exec(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
