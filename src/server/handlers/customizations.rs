use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{
    customization_points, customization_points::Entity as CustomizationPoints,
};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreatePointRequest {
    pub project_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub customization_type: String,
    pub status: Option<String>,
    pub is_billable: Option<bool>,
    pub estimated_hours: Option<f64>,
    pub estimated_cost: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdatePointRequest {
    pub id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub customization_type: String,
    pub status: String,
    pub is_billable: bool,
    pub estimated_hours: Option<f64>,
    pub estimated_cost: Option<f64>,
}

pub async fn list_points(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<customization_points::Model>>> {
    let points = CustomizationPoints::find().all(&state.db).await?;
    Ok(Json(points))
}

pub async fn list_points_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<customization_points::Model>>> {
    let points = CustomizationPoints::find()
        .filter(customization_points::Column::ProjectId.eq(project_id))
        .order_by_asc(customization_points::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(points))
}

pub async fn create_point(
    State(state): State<AppState>,
    Json(payload): Json<CreatePointRequest>,
) -> ApiResult<Json<customization_points::Model>> {
    let now = Utc::now();
    let point = customization_points::ActiveModel {
        project_id: Set(payload.project_id),
        title: Set(payload.title),
        description: Set(payload.description),
        customization_type: Set(payload.customization_type),
        status: Set(payload.status.unwrap_or_else(|| "Requested".to_string())),
        is_billable: Set(payload.is_billable.unwrap_or(false)),
        estimated_hours: Set(payload.estimated_hours),
        estimated_cost: Set(payload.estimated_cost),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let point = point.insert(&state.db).await?;
    Ok(Json(point))
}

pub async fn get_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<customization_points::Model>> {
    let point = CustomizationPoints::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Customization point", id))?;

    Ok(Json(point))
}

pub async fn update_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePointRequest>,
) -> ApiResult<Json<customization_points::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let point = CustomizationPoints::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Customization point", id))?;

    let mut point: customization_points::ActiveModel = point.into();
    point.title = Set(payload.title);
    point.description = Set(payload.description);
    point.customization_type = Set(payload.customization_type);
    point.status = Set(payload.status);
    point.is_billable = Set(payload.is_billable);
    point.estimated_hours = Set(payload.estimated_hours);
    point.estimated_cost = Set(payload.estimated_cost);
    point.updated_at = Set(Utc::now());

    let point = point.update(&state.db).await?;
    Ok(Json(point))
}

pub async fn delete_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let point = CustomizationPoints::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Customization point", id))?;

    CustomizationPoints::delete_by_id(point.id)
        .exec(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
