use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::pajak::models::Pajak;
use crate::features::wisata::models::Wisata;

/// Combined view of a tax record and its tourism object.
///
/// Every field is nullable and serializes as an explicit `null` when the
/// contributing side did not provide it, so consumers can tell "not provided"
/// from "provided as zero/empty". Local side owns the tax fields, remote side
/// owns `id_wisata` and `nama_objek`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pajakwisata {
    pub id_pajak: Option<String>,
    pub id_wisata: Option<String>,
    pub nama_objek: Option<String>,
    pub status_kepemilikan: Option<String>,
    pub jenis_pajak: Option<String>,
    pub tarif_pajak: Option<f64>,
    pub besar_pajak: Option<i64>,
}

impl Pajakwisata {
    /// Build one merged row from whichever sides are present. A missing side
    /// contributes nulls for all of its fields.
    pub fn from_parts(pajak: Option<&Pajak>, wisata: Option<&Wisata>) -> Self {
        Self {
            id_pajak: pajak.map(|p| p.id_pajak.clone()),
            id_wisata: wisata.map(|w| w.id_wisata.clone()),
            nama_objek: wisata.map(|w| w.nama_objek.clone()),
            status_kepemilikan: pajak.map(|p| p.status_kepemilikan.clone()),
            jenis_pajak: pajak.map(|p| p.jenis_pajak.clone()),
            tarif_pajak: pajak.map(|p| p.tarif_pajak),
            besar_pajak: pajak.map(|p| p.besar_pajak),
        }
    }
}

/// How `merge_all` pairs local tax records with fetched tourism objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Pair the i-th tax record with the i-th tourism object, padding the
    /// shorter side with nulls. Kept for compatibility with the historical
    /// behavior; pairs unrelated entities whenever the two sources are not
    /// already aligned.
    Positional,
    /// Pair by `id_wisata == id_pajak`; tax records without a match get null
    /// tourism fields. The corrected default.
    KeyMatch,
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(MergePolicy::Positional),
            "key_match" => Ok(MergePolicy::KeyMatch),
            other => Err(format!(
                "unknown merge policy '{}' (expected 'positional' or 'key_match')",
                other
            )),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::Positional => write!(f, "positional"),
            MergePolicy::KeyMatch => write!(f, "key_match"),
        }
    }
}
