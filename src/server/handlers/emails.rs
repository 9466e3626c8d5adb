use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{project_emails, project_emails::Entity as ProjectEmails};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateEmailRequest {
    pub project_id: i32,
    pub subject: String,
    pub body: Option<String>,
    pub from_address: String,
    pub to_address: String,
    pub sent_at: Option<chrono::DateTime<Utc>>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateEmailRequest {
    pub id: Option<i32>,
    pub subject: String,
    pub body: Option<String>,
    pub from_address: String,
    pub to_address: String,
    pub sent_at: Option<chrono::DateTime<Utc>>,
}

pub async fn list_emails(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<project_emails::Model>>> {
    let emails = ProjectEmails::find().all(&state.db).await?;
    Ok(Json(emails))
}

pub async fn list_emails_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<project_emails::Model>>> {
    let emails = ProjectEmails::find()
        .filter(project_emails::Column::ProjectId.eq(project_id))
        .order_by_asc(project_emails::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(emails))
}

pub async fn create_email(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmailRequest>,
) -> ApiResult<Json<project_emails::Model>> {
    let email = project_emails::ActiveModel {
        project_id: Set(payload.project_id),
        subject: Set(payload.subject),
        body: Set(payload.body),
        from_address: Set(payload.from_address),
        to_address: Set(payload.to_address),
        sent_at: Set(payload.sent_at),
        attachment_path: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let email = email.insert(&state.db).await?;
    Ok(Json(email))
}

pub async fn get_email(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<project_emails::Model>> {
    let email = ProjectEmails::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Email", id))?;

    Ok(Json(email))
}

pub async fn update_email(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEmailRequest>,
) -> ApiResult<Json<project_emails::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let email = ProjectEmails::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Email", id))?;

    let mut email: project_emails::ActiveModel = email.into();
    email.subject = Set(payload.subject);
    email.body = Set(payload.body);
    email.from_address = Set(payload.from_address);
    email.to_address = Set(payload.to_address);
    email.sent_at = Set(payload.sent_at);

    let email = email.update(&state.db).await?;
    Ok(Json(email))
}

pub async fn delete_email(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let email = ProjectEmails::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Email", id))?;

    ProjectEmails::delete_by_id(email.id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Stores the first file part under the upload root and records its relative
/// path on the email row.
pub async fn upload_attachment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> ApiResult<Json<project_emails::Model>> {
    let email = ProjectEmails::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Email", id))?;

    let field = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::validation(format!("invalid multipart body: {}", err)))?
        .ok_or_else(|| ApiError::validation("no file part in request"))?;

    let file_name = field
        .file_name()
        .map(|name| name.to_string())
        .ok_or_else(|| ApiError::validation("file part has no file name"))?;
    let bytes = field
        .bytes()
        .await
        .map_err(|err| ApiError::validation(format!("failed to read file part: {}", err)))?;

    let relative_path = state.storage.store(&file_name, &bytes).await?;

    let mut email: project_emails::ActiveModel = email.into();
    email.attachment_path = Set(Some(relative_path));

    let email = email.update(&state.db).await?;
    Ok(Json(email))
}
