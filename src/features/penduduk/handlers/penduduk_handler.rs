use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::penduduk::dtos::PendudukDto;
use crate::features::penduduk::models::Penduduk;
use crate::features::penduduk::services::PendudukService;
use crate::shared::types::ApiResponse;

/// Add a resident to the civil register
#[utoipa::path(
    post,
    path = "/penduduk",
    request_body = PendudukDto,
    responses(
        (status = 200, description = "Resident created", body = ApiResponse<Penduduk>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "NIK already registered")
    ),
    tag = "penduduk"
)]
pub async fn post_penduduk(
    State(service): State<Arc<PendudukService>>,
    AppJson(dto): AppJson<PendudukDto>,
) -> Result<Json<ApiResponse<Penduduk>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let penduduk = service.create(dto)?;
    Ok(Json(ApiResponse::success(
        Some(penduduk),
        Some("Data Penduduk Berhasil Ditambahkan".to_string()),
    )))
}

/// List residents
#[utoipa::path(
    get,
    path = "/penduduk",
    responses(
        (status = 200, description = "All residents", body = ApiResponse<Vec<Penduduk>>),
    ),
    tag = "penduduk"
)]
pub async fn get_penduduk(
    State(service): State<Arc<PendudukService>>,
) -> Result<Json<ApiResponse<Vec<Penduduk>>>> {
    Ok(Json(ApiResponse::success(Some(service.list()), None)))
}

/// Get a resident by NIK
#[utoipa::path(
    get,
    path = "/penduduk/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Resident found", body = ApiResponse<Penduduk>),
        (status = 404, description = "Resident not found")
    ),
    tag = "penduduk"
)]
pub async fn get_penduduk_by_nik(
    State(service): State<Arc<PendudukService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<Penduduk>>> {
    let penduduk = service.get(nik)?;
    Ok(Json(ApiResponse::success(Some(penduduk), None)))
}

/// Replace a resident by NIK
#[utoipa::path(
    put,
    path = "/penduduk/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    request_body = PendudukDto,
    responses(
        (status = 200, description = "Resident updated", body = ApiResponse<Penduduk>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Resident not found")
    ),
    tag = "penduduk"
)]
pub async fn update_penduduk_by_nik(
    State(service): State<Arc<PendudukService>>,
    Path(nik): Path<i64>,
    AppJson(dto): AppJson<PendudukDto>,
) -> Result<Json<ApiResponse<Penduduk>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let penduduk = service.update(nik, dto)?;
    Ok(Json(ApiResponse::success(
        Some(penduduk),
        Some("Data Penduduk Berhasil Diperbarui".to_string()),
    )))
}

/// Delete a resident by NIK
#[utoipa::path(
    delete,
    path = "/penduduk/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Resident deleted"),
        (status = 404, description = "Resident not found")
    ),
    tag = "penduduk"
)]
pub async fn delete_penduduk_by_nik(
    State(service): State<Arc<PendudukService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(nik)?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data Penduduk Berhasil Dihapus".to_string()),
    )))
}
