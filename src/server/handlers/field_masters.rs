use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{
    field_masters, field_masters::Entity as FieldMasters, field_masters::FieldDataType,
};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateFieldRequest {
    pub group_id: i32,
    pub field_name: String,
    pub field_label: Option<String>,
    pub data_type: String,
    pub options: Option<String>,
    pub is_required: Option<bool>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateFieldRequest {
    pub id: Option<i32>,
    pub group_id: i32,
    pub field_name: String,
    pub field_label: Option<String>,
    pub data_type: String,
    pub options: Option<String>,
    pub is_required: bool,
    pub sort_order: i32,
    pub is_active: bool,
}

fn validate_data_type(value: &str) -> ApiResult<()> {
    match FieldDataType::parse(value) {
        Some(_) => Ok(()),
        None => Err(ApiError::validation(format!(
            "unknown data type: {}",
            value
        ))),
    }
}

pub async fn list_fields(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<field_masters::Model>>> {
    let fields = FieldMasters::find()
        .order_by_asc(field_masters::Column::GroupId)
        .order_by_asc(field_masters::Column::SortOrder)
        .all(&state.db)
        .await?;
    Ok(Json(fields))
}

pub async fn list_fields_for_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> ApiResult<Json<Vec<field_masters::Model>>> {
    let fields = FieldMasters::find()
        .filter(field_masters::Column::GroupId.eq(group_id))
        .filter(field_masters::Column::IsActive.eq(true))
        .order_by_asc(field_masters::Column::SortOrder)
        .all(&state.db)
        .await?;
    Ok(Json(fields))
}

pub async fn create_field(
    State(state): State<AppState>,
    Json(payload): Json<CreateFieldRequest>,
) -> ApiResult<Json<field_masters::Model>> {
    validate_data_type(&payload.data_type)?;

    let field = field_masters::ActiveModel {
        group_id: Set(payload.group_id),
        field_name: Set(payload.field_name),
        field_label: Set(payload.field_label),
        data_type: Set(payload.data_type),
        options: Set(payload.options),
        is_required: Set(payload.is_required.unwrap_or(false)),
        sort_order: Set(payload.sort_order.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    };

    let field = field.insert(&state.db).await?;
    Ok(Json(field))
}

pub async fn get_field(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<field_masters::Model>> {
    let field = FieldMasters::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Field", id))?;

    Ok(Json(field))
}

pub async fn update_field(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFieldRequest>,
) -> ApiResult<Json<field_masters::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }
    validate_data_type(&payload.data_type)?;

    let field = FieldMasters::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Field", id))?;

    let mut field: field_masters::ActiveModel = field.into();
    field.group_id = Set(payload.group_id);
    field.field_name = Set(payload.field_name);
    field.field_label = Set(payload.field_label);
    field.data_type = Set(payload.data_type);
    field.options = Set(payload.options);
    field.is_required = Set(payload.is_required);
    field.sort_order = Set(payload.sort_order);
    field.is_active = Set(payload.is_active);

    let field = field.update(&state.db).await?;
    Ok(Json(field))
}

pub async fn delete_field(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let field = FieldMasters::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Field", id))?;

    FieldMasters::delete_by_id(field.id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
