use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::database::entities::{projects, projects::Entity as Projects};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::services::{CloneService, DashboardService, ProjectDashboard};

#[derive(Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub client_name: String,
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    pub id: Option<i32>,
    pub client_name: String,
    pub status: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<projects::Model>>> {
    let projects = Projects::find().all(&state.db).await?;
    Ok(Json(projects))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> ApiResult<Json<projects::Model>> {
    let now = Utc::now();
    let project = projects::ActiveModel {
        client_name: Set(payload.client_name),
        status: Set(payload.status.unwrap_or_else(|| "Planned".to_string())),
        description: Set(payload.description),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let project = project.insert(&state.db).await?;
    Ok(Json(project))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<projects::Model>> {
    let project = Projects::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Project", id))?;

    Ok(Json(project))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectRequest>,
) -> ApiResult<Json<projects::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let project = Projects::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Project", id))?;

    let mut project: projects::ActiveModel = project.into();
    project.client_name = Set(payload.client_name);
    project.status = Set(payload.status);
    project.description = Set(payload.description);
    if let Some(is_active) = payload.is_active {
        project.is_active = Set(is_active);
    }
    project.updated_at = Set(Utc::now());

    let project = project.update(&state.db).await?;
    Ok(Json(project))
}

/// Soft delete: flips `is_active` rather than removing the row, so child
/// records stay reachable for reporting.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let project = Projects::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Project", id))?;

    let mut project: projects::ActiveModel = project.into();
    project.is_active = Set(false);
    project.updated_at = Set(Utc::now());
    project.update(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn project_dashboard(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProjectDashboard>> {
    Projects::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Project", id))?;

    let dashboard_service = DashboardService::new(state.db.clone());
    let dashboard = dashboard_service.project_dashboard(id).await?;
    Ok(Json(dashboard))
}

pub async fn clone_project(
    State(state): State<AppState>,
    Path((source_id, target_id)): Path<(i32, i32)>,
) -> ApiResult<Json<Value>> {
    let clone_service = CloneService::new(state.db.clone());
    let cloned = clone_service
        .clone_project_data(source_id, target_id)
        .await?;

    if !cloned {
        return Err(ApiError::NotFound(format!(
            "Project {} or {}",
            source_id, target_id
        )));
    }

    Ok(Json(json!({ "cloned": true })))
}
