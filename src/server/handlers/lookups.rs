use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{lookup_data, lookup_data::Entity as LookupData};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateLookupRequest {
    pub lookup_type: String,
    pub code: String,
    pub label: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateLookupRequest {
    pub id: Option<i32>,
    pub lookup_type: String,
    pub code: String,
    pub label: String,
    pub sort_order: i32,
    pub is_active: bool,
}

pub async fn list_lookups(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<lookup_data::Model>>> {
    let lookups = LookupData::find()
        .order_by_asc(lookup_data::Column::LookupType)
        .order_by_asc(lookup_data::Column::SortOrder)
        .all(&state.db)
        .await?;
    Ok(Json(lookups))
}

pub async fn list_lookups_by_type(
    State(state): State<AppState>,
    Path(lookup_type): Path<String>,
) -> ApiResult<Json<Vec<lookup_data::Model>>> {
    let lookups = LookupData::find()
        .filter(lookup_data::Column::LookupType.eq(lookup_type))
        .filter(lookup_data::Column::IsActive.eq(true))
        .order_by_asc(lookup_data::Column::SortOrder)
        .all(&state.db)
        .await?;
    Ok(Json(lookups))
}

pub async fn create_lookup(
    State(state): State<AppState>,
    Json(payload): Json<CreateLookupRequest>,
) -> ApiResult<Json<lookup_data::Model>> {
    let lookup = lookup_data::ActiveModel {
        lookup_type: Set(payload.lookup_type),
        code: Set(payload.code),
        label: Set(payload.label),
        sort_order: Set(payload.sort_order.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    };

    let lookup = lookup.insert(&state.db).await?;
    Ok(Json(lookup))
}

pub async fn get_lookup(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<lookup_data::Model>> {
    let lookup = LookupData::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Lookup", id))?;

    Ok(Json(lookup))
}

pub async fn update_lookup(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLookupRequest>,
) -> ApiResult<Json<lookup_data::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let lookup = LookupData::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Lookup", id))?;

    let mut lookup: lookup_data::ActiveModel = lookup.into();
    lookup.lookup_type = Set(payload.lookup_type);
    lookup.code = Set(payload.code);
    lookup.label = Set(payload.label);
    lookup.sort_order = Set(payload.sort_order);
    lookup.is_active = Set(payload.is_active);

    let lookup = lookup.update(&state.db).await?;
    Ok(Json(lookup))
}

pub async fn delete_lookup(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let lookup = LookupData::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Lookup", id))?;

    LookupData::delete_by_id(lookup.id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
