use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::database::entities::{migration_issues, migration_issues::Entity as MigrationIssues};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::services::generate_issue_id;

#[derive(Serialize, Deserialize)]
pub struct CreateIssueRequest {
    /// Optional; the server generates an `ISS-<projectId>-<HHmmss>-<seq>` id
    /// when absent.
    pub issue_id: Option<String>,
    pub project_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub reported_by: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateIssueRequest {
    pub issue_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub reported_by: Option<String>,
    pub assigned_to: Option<String>,
    pub resolution: Option<String>,
}

pub async fn list_issues(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<migration_issues::Model>>> {
    let issues = MigrationIssues::find().all(&state.db).await?;
    Ok(Json(issues))
}

pub async fn list_issues_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<migration_issues::Model>>> {
    let issues = MigrationIssues::find()
        .filter(migration_issues::Column::ProjectId.eq(project_id))
        .order_by_asc(migration_issues::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(issues))
}

pub async fn create_issue(
    State(state): State<AppState>,
    Json(payload): Json<CreateIssueRequest>,
) -> ApiResult<Json<migration_issues::Model>> {
    let now = Utc::now();

    let issue_id = match payload.issue_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            let existing = MigrationIssues::find()
                .filter(migration_issues::Column::ProjectId.eq(payload.project_id))
                .count(&state.db)
                .await?;
            generate_issue_id(payload.project_id, now, existing as usize + 1)
        }
    };

    let issue = migration_issues::ActiveModel {
        issue_id: Set(issue_id.clone()),
        issue_number: Set(issue_id),
        project_id: Set(payload.project_id),
        title: Set(payload.title),
        description: Set(payload.description),
        status: Set(payload.status.unwrap_or_else(|| "Open".to_string())),
        priority: Set(payload.priority.unwrap_or_else(|| "Medium".to_string())),
        reported_by: Set(payload.reported_by),
        assigned_to: Set(payload.assigned_to),
        resolution: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let issue = issue.insert(&state.db).await?;
    Ok(Json(issue))
}

pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<migration_issues::Model>> {
    let issue = MigrationIssues::find_by_id(id.clone())
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue", &id))?;

    Ok(Json(issue))
}

pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateIssueRequest>,
) -> ApiResult<Json<migration_issues::Model>> {
    if payload
        .issue_id
        .as_ref()
        .is_some_and(|body_id| body_id != &id)
    {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let issue = MigrationIssues::find_by_id(id.clone())
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue", &id))?;

    let mut issue: migration_issues::ActiveModel = issue.into();
    issue.title = Set(payload.title);
    issue.description = Set(payload.description);
    issue.status = Set(payload.status);
    issue.priority = Set(payload.priority);
    issue.reported_by = Set(payload.reported_by);
    issue.assigned_to = Set(payload.assigned_to);
    issue.resolution = Set(payload.resolution);
    issue.updated_at = Set(Utc::now());

    let issue = issue.update(&state.db).await?;
    Ok(Json(issue))
}

pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let issue = MigrationIssues::find_by_id(id.clone())
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue", &id))?;

    MigrationIssues::delete_by_id(issue.issue_id)
        .exec(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
