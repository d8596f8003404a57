use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::pajak::models::Pajak;
use crate::features::pajakwisata::dtos::PajakwisataDto;
use crate::features::pajakwisata::models::{MergePolicy, Pajakwisata};
use crate::features::wisata::clients::WisataClient;
use crate::features::wisata::models::Wisata;
use crate::shared::store::{MemStore, ReplaceError};

/// Merge engine combining the local tax register with the live tourism list.
///
/// Stateless per call: every operation takes one remote fetch (which is the
/// only way it can fail wholesale) plus in-memory scans over the shared tax
/// store. Nothing computed from one remote snapshot survives into the next
/// call.
pub struct MergeService {
    pajak_store: Arc<MemStore<Pajak>>,
    wisata_client: Arc<WisataClient>,
    policy: MergePolicy,
}

impl MergeService {
    pub fn new(
        pajak_store: Arc<MemStore<Pajak>>,
        wisata_client: Arc<WisataClient>,
        policy: MergePolicy,
    ) -> Self {
        Self {
            pajak_store,
            wisata_client,
            policy,
        }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Merge the whole tax register with a fresh tourism snapshot.
    ///
    /// Under `Positional` the output has `max(local, remote)` rows and the
    /// shorter side pads with nulls; under `KeyMatch` there is one row per
    /// tax record, with tourism fields null when no object matches its id.
    pub async fn merge_all(&self) -> Result<Vec<Pajakwisata>> {
        let wisata = self.wisata_client.fetch_all().await?;
        let pajak = self.pajak_store.list_all();

        let merged = match self.policy {
            MergePolicy::Positional => {
                let rows = pajak.len().max(wisata.len());
                (0..rows)
                    .map(|i| Pajakwisata::from_parts(pajak.get(i), wisata.get(i)))
                    .collect()
            }
            MergePolicy::KeyMatch => pajak
                .iter()
                .map(|p| {
                    let partner = find_by_id(&wisata, &p.id_pajak);
                    Pajakwisata::from_parts(Some(p), partner)
                })
                .collect(),
        };

        Ok(merged)
    }

    /// Merge one tax record with its tourism object, joined by key.
    ///
    /// Always key-based regardless of the configured list policy (the
    /// historical by-id lookup never paired positionally). The two miss cases
    /// stay distinguishable: unknown tax id and missing tourism counterpart
    /// produce different NotFound messages, and a partial record is never
    /// returned.
    pub async fn merge_by_key(&self, id_pajak: &str) -> Result<Pajakwisata> {
        let wisata = self.wisata_client.fetch_all().await?;

        let pajak = self
            .pajak_store
            .find(&id_pajak.to_string())
            .ok_or_else(|| AppError::NotFound(format!("Tax record '{}' not found", id_pajak)))?;

        let partner = find_by_id(&wisata, &pajak.id_pajak).ok_or_else(|| {
            AppError::NotFound(format!(
                "No tourism object matches tax record '{}'",
                id_pajak
            ))
        })?;

        Ok(Pajakwisata::from_parts(Some(&pajak), Some(partner)))
    }

    /// Store the local-owned subset of a merged record as a new tax record.
    /// Tourism fields are echoed back but never persisted anywhere.
    pub fn create_merged(&self, dto: PajakwisataDto) -> Result<Pajakwisata> {
        let local = dto.local_record();
        if !self.pajak_store.insert(local) {
            return Err(AppError::DuplicateKey(format!(
                "Tax record '{}' already exists",
                dto.id_pajak
            )));
        }
        Ok(dto.into_merged())
    }

    /// Wholesale replace of the local-owned subset at `id_pajak`.
    pub fn update_merged(&self, id_pajak: &str, dto: PajakwisataDto) -> Result<Pajakwisata> {
        match self
            .pajak_store
            .replace(&id_pajak.to_string(), dto.local_record())
        {
            Ok(()) => Ok(dto.into_merged()),
            Err(ReplaceError::Missing) => Err(AppError::NotFound(format!(
                "Tax record '{}' not found",
                id_pajak
            ))),
            Err(ReplaceError::DuplicateKey) => Err(AppError::DuplicateKey(format!(
                "Tax record '{}' already exists",
                dto.id_pajak
            ))),
        }
    }

    pub fn delete_merged(&self, id_pajak: &str) -> Result<()> {
        if !self.pajak_store.delete(&id_pajak.to_string()) {
            return Err(AppError::NotFound(format!(
                "Tax record '{}' not found",
                id_pajak
            )));
        }
        Ok(())
    }
}

fn find_by_id<'a>(wisata: &'a [Wisata], id: &str) -> Option<&'a Wisata> {
    wisata.iter().find(|w| w.id_wisata == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote::RemoteClient;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pajak(id: &str, tarif: f64, besar: i64) -> Pajak {
        Pajak {
            id_pajak: id.to_string(),
            status_kepemilikan: "Swasta".to_string(),
            jenis_pajak: "Pajak Pertahanan Nilai (PPN)".to_string(),
            tarif_pajak: tarif,
            besar_pajak: besar,
        }
    }

    fn dto(id: &str) -> PajakwisataDto {
        PajakwisataDto {
            id_pajak: id.to_string(),
            id_wisata: Some("W9".to_string()),
            nama_objek: Some("Bromo".to_string()),
            status_kepemilikan: "Swasta".to_string(),
            jenis_pajak: "Pajak Pertahanan Nilai (PPN)".to_string(),
            tarif_pajak: 0.11,
            besar_pajak: 20_000_000,
        }
    }

    async fn mock_wisata(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/wisata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn service_with(
        server: &MockServer,
        local: Vec<Pajak>,
        policy: MergePolicy,
    ) -> (MergeService, Arc<MemStore<Pajak>>) {
        let store = Arc::new(MemStore::new(local));
        let remote = RemoteClient::new(Duration::from_secs(2)).unwrap();
        let client = Arc::new(WisataClient::new(remote, format!("{}/wisata", server.uri())));
        (
            MergeService::new(Arc::clone(&store), client, policy),
            store,
        )
    }

    // Positional merge length is max(local, remote), padding with nulls.
    #[tokio::test]
    async fn positional_merge_length_is_max_of_both_sides() {
        let server = MockServer::start().await;
        mock_wisata(
            &server,
            serde_json::json!([
                {"id_wisata": "W1", "nama_objek": "Pantai"},
                {"id_wisata": "W2", "nama_objek": "Gunung"},
                {"id_wisata": "W3", "nama_objek": "Candi"},
            ]),
        )
        .await;

        let (svc, _) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 1), pajak("PJ002", 0.11, 2)],
            MergePolicy::Positional,
        );

        let merged = svc.merge_all().await.unwrap();
        assert_eq!(merged.len(), 3);

        // paired rows carry both sides
        assert_eq!(merged[0].id_pajak.as_deref(), Some("PJ001"));
        assert_eq!(merged[0].id_wisata.as_deref(), Some("W1"));
        // the unmatched remote row has every local field null
        assert_eq!(merged[2].id_wisata.as_deref(), Some("W3"));
        assert!(merged[2].id_pajak.is_none());
        assert!(merged[2].status_kepemilikan.is_none());
        assert!(merged[2].tarif_pajak.is_none());
        assert!(merged[2].besar_pajak.is_none());
    }

    // Scenario: one local record, empty remote list.
    #[tokio::test]
    async fn positional_merge_with_empty_remote_keeps_local_rows() {
        let server = MockServer::start().await;
        mock_wisata(&server, serde_json::json!([])).await;

        let (svc, _) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 50_000_000)],
            MergePolicy::Positional,
        );

        let merged = svc.merge_all().await.unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id_pajak.as_deref(), Some("PJ001"));
        assert_eq!(merged[0].tarif_pajak, Some(0.11));
        assert!(merged[0].id_wisata.is_none());
        assert!(merged[0].nama_objek.is_none());
    }

    // Scenario: two local, one remote; trailing row pads tourism side.
    #[tokio::test]
    async fn positional_merge_pads_short_remote_side() {
        let server = MockServer::start().await;
        mock_wisata(
            &server,
            serde_json::json!([{"id_wisata": "W1", "nama_objek": "Pantai"}]),
        )
        .await;

        let (svc, _) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 1), pajak("PJ002", 0.11, 2)],
            MergePolicy::Positional,
        );

        let merged = svc.merge_all().await.unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id_pajak.as_deref(), Some("PJ001"));
        assert_eq!(merged[0].nama_objek.as_deref(), Some("Pantai"));
        assert_eq!(merged[1].id_pajak.as_deref(), Some("PJ002"));
        assert!(merged[1].id_wisata.is_none());
        assert!(merged[1].nama_objek.is_none());
    }

    #[tokio::test]
    async fn key_match_merge_joins_by_id_not_position() {
        let server = MockServer::start().await;
        // remote list ordered differently from the local register
        mock_wisata(
            &server,
            serde_json::json!([
                {"id_wisata": "PJ002", "nama_objek": "Gunung"},
                {"id_wisata": "PJ001", "nama_objek": "Pantai"},
            ]),
        )
        .await;

        let (svc, _) = service_with(
            &server,
            vec![
                pajak("PJ001", 0.11, 1),
                pajak("PJ002", 0.11, 2),
                pajak("PJ003", 0.0, 0),
            ],
            MergePolicy::KeyMatch,
        );

        let merged = svc.merge_all().await.unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].nama_objek.as_deref(), Some("Pantai"));
        assert_eq!(merged[1].nama_objek.as_deref(), Some("Gunung"));
        // no counterpart: tourism fields null, local fields intact
        assert!(merged[2].id_wisata.is_none());
        assert_eq!(merged[2].id_pajak.as_deref(), Some("PJ003"));
    }

    // Remote failure is total for both merge operations.
    #[tokio::test]
    async fn remote_503_fails_wholesale() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wisata"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let (svc, _) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 1)],
            MergePolicy::Positional,
        );

        assert!(matches!(
            svc.merge_all().await,
            Err(AppError::RemoteUnavailable(_))
        ));
        assert!(matches!(
            svc.merge_by_key("PJ001").await,
            Err(AppError::RemoteUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn merge_by_key_distinguishes_local_miss_from_join_miss() {
        let server = MockServer::start().await;
        mock_wisata(
            &server,
            serde_json::json!([{"id_wisata": "PJ001", "nama_objek": "Pantai"}]),
        )
        .await;

        let (svc, _) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 1), pajak("PJ002", 0.11, 2)],
            MergePolicy::KeyMatch,
        );

        let found = svc.merge_by_key("PJ001").await.unwrap();
        assert_eq!(found.nama_objek.as_deref(), Some("Pantai"));

        let local_miss = svc.merge_by_key("PJ999").await.unwrap_err();
        let join_miss = svc.merge_by_key("PJ002").await.unwrap_err();
        match (&local_miss, &join_miss) {
            (AppError::NotFound(a), AppError::NotFound(b)) => {
                assert!(a.contains("PJ999"));
                assert!(b.contains("tourism object"));
            }
            other => panic!("expected two NotFound errors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_merged_stores_only_the_local_subset() {
        let server = MockServer::start().await;
        mock_wisata(&server, serde_json::json!([])).await;

        let (svc, store) = service_with(&server, vec![], MergePolicy::KeyMatch);

        let echoed = svc.create_merged(dto("PJ010")).unwrap();
        // echo keeps the remote-owned fields the caller sent
        assert_eq!(echoed.id_wisata.as_deref(), Some("W9"));

        // but the store holds only the tax record
        let stored = store.find(&"PJ010".to_string()).unwrap();
        assert_eq!(stored.besar_pajak, 20_000_000);
    }

    #[tokio::test]
    async fn create_merged_rejects_duplicate_and_leaves_store_untouched() {
        let server = MockServer::start().await;
        mock_wisata(&server, serde_json::json!([])).await;

        let (svc, store) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 50_000_000)],
            MergePolicy::KeyMatch,
        );

        let err = svc.create_merged(dto("PJ001")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.find(&"PJ001".to_string()).unwrap().besar_pajak,
            50_000_000
        );
    }

    #[tokio::test]
    async fn delete_then_merge_by_key_is_not_found() {
        let server = MockServer::start().await;
        mock_wisata(
            &server,
            serde_json::json!([{"id_wisata": "PJ001", "nama_objek": "Pantai"}]),
        )
        .await;

        let (svc, _) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 1)],
            MergePolicy::KeyMatch,
        );

        svc.delete_merged("PJ001").unwrap();
        assert!(matches!(
            svc.merge_by_key("PJ001").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_merged("PJ001"),
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_merged_replaces_wholesale() {
        let server = MockServer::start().await;
        mock_wisata(&server, serde_json::json!([])).await;

        let (svc, store) = service_with(
            &server,
            vec![pajak("PJ001", 0.11, 1)],
            MergePolicy::KeyMatch,
        );

        svc.update_merged("PJ001", dto("PJ001")).unwrap();
        assert_eq!(
            store.find(&"PJ001".to_string()).unwrap().besar_pajak,
            20_000_000
        );

        assert!(matches!(
            svc.update_merged("PJ404", dto("PJ404")),
            Err(AppError::NotFound(_))
        ));
    }
}
