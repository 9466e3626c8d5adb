use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{web_tables, web_tables::Entity as WebTables};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateTableRequest {
    pub module_id: Option<i32>,
    pub table_name: String,
    pub display_name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateTableRequest {
    pub id: Option<i32>,
    pub module_id: Option<i32>,
    pub table_name: String,
    pub display_name: Option<String>,
    pub is_active: bool,
}

pub async fn list_tables(State(state): State<AppState>) -> ApiResult<Json<Vec<web_tables::Model>>> {
    let tables = WebTables::find()
        .order_by_asc(web_tables::Column::TableName)
        .all(&state.db)
        .await?;
    Ok(Json(tables))
}

pub async fn create_table(
    State(state): State<AppState>,
    Json(payload): Json<CreateTableRequest>,
) -> ApiResult<Json<web_tables::Model>> {
    let table = web_tables::ActiveModel {
        module_id: Set(payload.module_id),
        table_name: Set(payload.table_name),
        display_name: Set(payload.display_name),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    };

    let table = table.insert(&state.db).await?;
    Ok(Json(table))
}

pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<web_tables::Model>> {
    let table = WebTables::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Web table", id))?;

    Ok(Json(table))
}

pub async fn update_table(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTableRequest>,
) -> ApiResult<Json<web_tables::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let table = WebTables::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Web table", id))?;

    let mut table: web_tables::ActiveModel = table.into();
    table.module_id = Set(payload.module_id);
    table.table_name = Set(payload.table_name);
    table.display_name = Set(payload.display_name);
    table.is_active = Set(payload.is_active);

    let table = table.update(&state.db).await?;
    Ok(Json(table))
}

pub async fn delete_table(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let table = WebTables::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Web table", id))?;

    WebTables::delete_by_id(table.id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
