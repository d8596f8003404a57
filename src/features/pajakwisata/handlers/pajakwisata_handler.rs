use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::pajakwisata::dtos::PajakwisataDto;
use crate::features::pajakwisata::models::Pajakwisata;
use crate::features::pajakwisata::services::MergeService;
use crate::shared::types::ApiResponse;

/// Merged tax + tourism view of the whole register
#[utoipa::path(
    get,
    path = "/pajakwisata",
    responses(
        (status = 200, description = "Merged records", body = ApiResponse<Vec<Pajakwisata>>),
        (status = 502, description = "Tourism service unavailable")
    ),
    tag = "pajakwisata"
)]
pub async fn get_pajak_wisata(
    State(service): State<Arc<MergeService>>,
) -> Result<Json<ApiResponse<Vec<Pajakwisata>>>> {
    let merged = service.merge_all().await?;
    Ok(Json(ApiResponse::success(
        Some(merged),
        Some("Data berhasil diambil".to_string()),
    )))
}

/// Merged view of one tax record, joined by id
#[utoipa::path(
    get,
    path = "/pajakwisata/{id_pajak}",
    params(("id_pajak" = String, Path, description = "Tax record id")),
    responses(
        (status = 200, description = "Merged record", body = ApiResponse<Pajakwisata>),
        (status = 404, description = "Tax record unknown, or no tourism object matches it"),
        (status = 502, description = "Tourism service unavailable")
    ),
    tag = "pajakwisata"
)]
pub async fn get_pajak_wisata_by_id(
    State(service): State<Arc<MergeService>>,
    Path(id_pajak): Path<String>,
) -> Result<Json<ApiResponse<Pajakwisata>>> {
    let merged = service.merge_by_key(&id_pajak).await?;
    Ok(Json(ApiResponse::success(
        Some(merged),
        Some("Data berhasil diambil".to_string()),
    )))
}

/// Create a merged record (tax fields are stored, tourism fields echoed)
#[utoipa::path(
    post,
    path = "/pajakwisata",
    request_body = PajakwisataDto,
    responses(
        (status = 200, description = "Merged record created", body = ApiResponse<Pajakwisata>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Tax record id already exists")
    ),
    tag = "pajakwisata"
)]
pub async fn create_pajak_wisata(
    State(service): State<Arc<MergeService>>,
    AppJson(dto): AppJson<PajakwisataDto>,
) -> Result<Json<ApiResponse<Pajakwisata>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let merged = service.create_merged(dto)?;
    Ok(Json(ApiResponse::success(
        Some(merged),
        Some("Data Pajak Objek Wisata berhasil ditambahkan".to_string()),
    )))
}

/// Replace the tax fields of a merged record
#[utoipa::path(
    put,
    path = "/pajakwisata/{id_pajak}",
    params(("id_pajak" = String, Path, description = "Tax record id")),
    request_body = PajakwisataDto,
    responses(
        (status = 200, description = "Merged record updated", body = ApiResponse<Pajakwisata>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tax record not found")
    ),
    tag = "pajakwisata"
)]
pub async fn update_pajak_wisata(
    State(service): State<Arc<MergeService>>,
    Path(id_pajak): Path<String>,
    AppJson(dto): AppJson<PajakwisataDto>,
) -> Result<Json<ApiResponse<Pajakwisata>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let merged = service.update_merged(&id_pajak, dto)?;
    Ok(Json(ApiResponse::success(
        Some(merged),
        Some("Data berhasil diupdate".to_string()),
    )))
}

/// Delete the tax record behind a merged record
#[utoipa::path(
    delete,
    path = "/pajakwisata/{id_pajak}",
    params(("id_pajak" = String, Path, description = "Tax record id")),
    responses(
        (status = 200, description = "Merged record deleted"),
        (status = 404, description = "Tax record not found")
    ),
    tag = "pajakwisata"
)]
pub async fn delete_pajak_wisata(
    State(service): State<Arc<MergeService>>,
    Path(id_pajak): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_merged(&id_pajak)?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data berhasil dihapus".to_string()),
    )))
}
