use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::database::entities::{
    dynamic_module_data, dynamic_module_data::Entity as DynamicModuleData,
};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub project_id: i32,
    pub group_id: i32,
    pub field_values: Value,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    pub id: Option<i32>,
    pub field_values: Value,
}

/// Submissions must be JSON objects keyed by field name; the server stores
/// them opaquely.
fn validate_field_values(values: &Value) -> ApiResult<String> {
    if !values.is_object() {
        return Err(ApiError::validation("field_values must be a JSON object"));
    }
    serde_json::to_string(values).map_err(|err| ApiError::Internal(err.into()))
}

pub async fn list_entries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<dynamic_module_data::Model>>> {
    let entries = DynamicModuleData::find().all(&state.db).await?;
    Ok(Json(entries))
}

pub async fn list_entries_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<dynamic_module_data::Model>>> {
    let entries = DynamicModuleData::find()
        .filter(dynamic_module_data::Column::ProjectId.eq(project_id))
        .order_by_asc(dynamic_module_data::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateEntryRequest>,
) -> ApiResult<Json<dynamic_module_data::Model>> {
    let serialized = validate_field_values(&payload.field_values)?;

    let now = Utc::now();
    let entry = dynamic_module_data::ActiveModel {
        project_id: Set(payload.project_id),
        group_id: Set(payload.group_id),
        field_values: Set(serialized),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let entry = entry.insert(&state.db).await?;
    Ok(Json(entry))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<dynamic_module_data::Model>> {
    let entry = DynamicModuleData::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Dynamic data entry", id))?;

    Ok(Json(entry))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEntryRequest>,
) -> ApiResult<Json<dynamic_module_data::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }
    let serialized = validate_field_values(&payload.field_values)?;

    let entry = DynamicModuleData::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Dynamic data entry", id))?;

    let mut entry: dynamic_module_data::ActiveModel = entry.into();
    entry.field_values = Set(serialized);
    entry.updated_at = Set(Utc::now());

    let entry = entry.update(&state.db).await?;
    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let entry = DynamicModuleData::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Dynamic data entry", id))?;

    DynamicModuleData::delete_by_id(entry.id)
        .exec(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
