use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::pajak::dtos::PajakDto;
use crate::features::pajak::models::Pajak;
use crate::features::pajak::services::PajakService;
use crate::shared::types::ApiResponse;

/// Add a tax record
#[utoipa::path(
    post,
    path = "/pajak",
    request_body = PajakDto,
    responses(
        (status = 200, description = "Tax record created", body = ApiResponse<Pajak>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Tax record id already exists")
    ),
    tag = "pajak"
)]
pub async fn add_pajak(
    State(service): State<Arc<PajakService>>,
    AppJson(dto): AppJson<PajakDto>,
) -> Result<Json<ApiResponse<Pajak>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pajak = service.create(dto)?;
    Ok(Json(ApiResponse::success(
        Some(pajak),
        Some("Data Pajak Berhasil Ditambahkan".to_string()),
    )))
}

/// List all tax records
#[utoipa::path(
    get,
    path = "/pajak",
    responses(
        (status = 200, description = "All tax records", body = ApiResponse<Vec<Pajak>>),
    ),
    tag = "pajak"
)]
pub async fn list_pajak(
    State(service): State<Arc<PajakService>>,
) -> Result<Json<ApiResponse<Vec<Pajak>>>> {
    Ok(Json(ApiResponse::success(
        Some(service.list()),
        Some("Data Pajak Berhasil Diambil".to_string()),
    )))
}

/// Get a tax record by id
#[utoipa::path(
    get,
    path = "/pajak/{id_pajak}",
    params(("id_pajak" = String, Path, description = "Tax record id")),
    responses(
        (status = 200, description = "Tax record found", body = ApiResponse<Pajak>),
        (status = 404, description = "Tax record not found")
    ),
    tag = "pajak"
)]
pub async fn get_pajak_by_id(
    State(service): State<Arc<PajakService>>,
    Path(id_pajak): Path<String>,
) -> Result<Json<ApiResponse<Pajak>>> {
    let pajak = service.get(&id_pajak)?;
    Ok(Json(ApiResponse::success(
        Some(pajak),
        Some("Data Pajak Berhasil Diambil".to_string()),
    )))
}

/// Replace a tax record by id
#[utoipa::path(
    put,
    path = "/pajak/{id_pajak}",
    params(("id_pajak" = String, Path, description = "Tax record id")),
    request_body = PajakDto,
    responses(
        (status = 200, description = "Tax record updated", body = ApiResponse<Pajak>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tax record not found")
    ),
    tag = "pajak"
)]
pub async fn update_pajak_by_id(
    State(service): State<Arc<PajakService>>,
    Path(id_pajak): Path<String>,
    AppJson(dto): AppJson<PajakDto>,
) -> Result<Json<ApiResponse<Pajak>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pajak = service.update(&id_pajak, dto)?;
    Ok(Json(ApiResponse::success(
        Some(pajak),
        Some("Data Pajak Berhasil Diperbarui".to_string()),
    )))
}

/// Delete a tax record by id
#[utoipa::path(
    delete,
    path = "/pajak/{id_pajak}",
    params(("id_pajak" = String, Path, description = "Tax record id")),
    responses(
        (status = 200, description = "Tax record deleted"),
        (status = 404, description = "Tax record not found")
    ),
    tag = "pajak"
)]
pub async fn delete_pajak_by_id(
    State(service): State<Arc<PajakService>>,
    Path(id_pajak): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&id_pajak)?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data Pajak Berhasil Dihapus".to_string()),
    )))
}
