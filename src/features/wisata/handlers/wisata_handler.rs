use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::wisata::models::Wisata;
use crate::features::wisata::services::WisataService;
use crate::shared::types::ApiResponse;

/// List tourism objects from the sibling tourism service
#[utoipa::path(
    get,
    path = "/wisata",
    responses(
        (status = 200, description = "All tourism objects", body = ApiResponse<Vec<Wisata>>),
        (status = 502, description = "Tourism service unavailable")
    ),
    tag = "wisata"
)]
pub async fn list_wisata(
    State(service): State<Arc<WisataService>>,
) -> Result<Json<ApiResponse<Vec<Wisata>>>> {
    let data = service.list().await?;
    Ok(Json(ApiResponse::success(
        Some(data),
        Some("Data Objek Wisata Berhasil Diambil".to_string()),
    )))
}

/// Get a tourism object by id
#[utoipa::path(
    get,
    path = "/wisata/{id_wisata}",
    params(("id_wisata" = String, Path, description = "Tourism object id")),
    responses(
        (status = 200, description = "Tourism object found", body = ApiResponse<Wisata>),
        (status = 404, description = "Tourism object not found"),
        (status = 502, description = "Tourism service unavailable")
    ),
    tag = "wisata"
)]
pub async fn get_wisata_by_id(
    State(service): State<Arc<WisataService>>,
    Path(id_wisata): Path<String>,
) -> Result<Json<ApiResponse<Wisata>>> {
    let wisata = service.get_by_id(&id_wisata).await?;
    Ok(Json(ApiResponse::success(
        Some(wisata),
        Some("Data Objek Wisata Berhasil Diambil".to_string()),
    )))
}
