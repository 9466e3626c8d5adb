use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{users, users::Entity as Users};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub id: Option<i32>,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<users::Model>>> {
    let users = Users::find()
        .order_by_asc(users::Column::Username)
        .all(&state.db)
        .await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<Json<users::Model>> {
    let user = users::ActiveModel {
        username: Set(payload.username),
        display_name: Set(payload.display_name),
        email: Set(payload.email),
        role: Set(payload.role.unwrap_or_else(|| "member".to_string())),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let user = user.insert(&state.db).await?;
    Ok(Json(user))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<users::Model>> {
    let user = Users::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User", id))?;

    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<users::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let user = Users::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User", id))?;

    let mut user: users::ActiveModel = user.into();
    user.username = Set(payload.username);
    user.display_name = Set(payload.display_name);
    user.email = Set(payload.email);
    user.role = Set(payload.role);
    user.is_active = Set(payload.is_active);

    let user = user.update(&state.db).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let user = Users::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User", id))?;

    Users::delete_by_id(user.id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
