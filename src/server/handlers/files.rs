use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

/// Staging endpoint for spreadsheet imports: stores the uploaded file and
/// returns its relative path for a later processing request. Downloads are
/// served from `/api/files/download`.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<Value>> {
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

    Ok(Json(json!({
        "file_name": file_name,
        "path": relative_path,
        "size": bytes.len(),
    })))
}
