use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::setoran::dtos::SetoranDto;
use crate::features::setoran::models::Setoran;
use crate::features::setoran::services::SetoranService;
use crate::shared::types::ApiResponse;

/// Add a tax deposit record
#[utoipa::path(
    post,
    path = "/setoranpajak",
    request_body = SetoranDto,
    responses(
        (status = 200, description = "Deposit record created", body = ApiResponse<Setoran>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Deposit id already exists")
    ),
    tag = "setoranpajak"
)]
pub async fn add_setoran(
    State(service): State<Arc<SetoranService>>,
    AppJson(dto): AppJson<SetoranDto>,
) -> Result<Json<ApiResponse<Setoran>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let setoran = service.create(dto)?;
    Ok(Json(ApiResponse::success(
        Some(setoran),
        Some("Data Setoran Pajak Objek Wisata Berhasil Ditambahkan".to_string()),
    )))
}

/// List tax deposit records
#[utoipa::path(
    get,
    path = "/setoranpajak",
    responses(
        (status = 200, description = "All deposit records", body = ApiResponse<Vec<Setoran>>),
    ),
    tag = "setoranpajak"
)]
pub async fn get_setoran(
    State(service): State<Arc<SetoranService>>,
) -> Result<Json<ApiResponse<Vec<Setoran>>>> {
    Ok(Json(ApiResponse::success(Some(service.list()), None)))
}

/// Get the first deposit record with the given status
#[utoipa::path(
    get,
    path = "/setoranpajak/{status_setoran}",
    params(("status_setoran" = String, Path, description = "Deposit status, e.g. 'tepat waktu'")),
    responses(
        (status = 200, description = "Deposit record found", body = ApiResponse<Setoran>),
        (status = 404, description = "No deposit with that status")
    ),
    tag = "setoranpajak"
)]
pub async fn get_setoran_by_status(
    State(service): State<Arc<SetoranService>>,
    Path(status_setoran): Path<String>,
) -> Result<Json<ApiResponse<Setoran>>> {
    let setoran = service.get_by_status(&status_setoran)?;
    Ok(Json(ApiResponse::success(Some(setoran), None)))
}
