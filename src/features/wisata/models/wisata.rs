use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tourism object as served by the sibling tourism service.
///
/// Never stored locally; every read fetches a fresh list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Wisata {
    pub id_wisata: String,
    pub nama_objek: String,
}
