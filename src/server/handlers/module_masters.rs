use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::{module_masters, module_masters::Entity as ModuleMasters};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct CreateModuleRequest {
    pub module_name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateModuleRequest {
    pub id: Option<i32>,
    pub module_name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

pub async fn list_modules(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<module_masters::Model>>> {
    let modules = ModuleMasters::find()
        .order_by_asc(module_masters::Column::ModuleName)
        .all(&state.db)
        .await?;
    Ok(Json(modules))
}

pub async fn create_module(
    State(state): State<AppState>,
    Json(payload): Json<CreateModuleRequest>,
) -> ApiResult<Json<module_masters::Model>> {
    let module = module_masters::ActiveModel {
        module_name: Set(payload.module_name),
        description: Set(payload.description),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    };

    let module = module.insert(&state.db).await?;
    Ok(Json(module))
}

pub async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<module_masters::Model>> {
    let module = ModuleMasters::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Module", id))?;

    Ok(Json(module))
}

pub async fn update_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateModuleRequest>,
) -> ApiResult<Json<module_masters::Model>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::validation("route id does not match body id"));
    }

    let module = ModuleMasters::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Module", id))?;

    let mut module: module_masters::ActiveModel = module.into();
    module.module_name = Set(payload.module_name);
    module.description = Set(payload.description);
    module.is_active = Set(payload.is_active);

    let module = module.update(&state.db).await?;
    Ok(Json(module))
}

pub async fn delete_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let module = ModuleMasters::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Module", id))?;

    ModuleMasters::delete_by_id(module.id)
        .exec(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
