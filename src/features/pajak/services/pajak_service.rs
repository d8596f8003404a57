use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::pajak::dtos::PajakDto;
use crate::features::pajak::models::Pajak;
use crate::shared::store::{MemStore, ReplaceError};

/// Service for tax record operations.
///
/// The backing store is shared with the merge engine: records created through
/// `/pajakwisata` land in the same table.
pub struct PajakService {
    store: Arc<MemStore<Pajak>>,
}

impl PajakService {
    pub fn new(store: Arc<MemStore<Pajak>>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Pajak> {
        self.store.list_all()
    }

    pub fn get(&self, id_pajak: &str) -> Result<Pajak> {
        self.store
            .find(&id_pajak.to_string())
            .ok_or_else(|| AppError::NotFound(format!("Tax record '{}' not found", id_pajak)))
    }

    pub fn create(&self, dto: PajakDto) -> Result<Pajak> {
        let pajak: Pajak = dto.into();
        if !self.store.insert(pajak.clone()) {
            return Err(AppError::DuplicateKey(format!(
                "Tax record '{}' already exists",
                pajak.id_pajak
            )));
        }
        Ok(pajak)
    }

    pub fn update(&self, id_pajak: &str, dto: PajakDto) -> Result<Pajak> {
        let pajak: Pajak = dto.into();
        match self.store.replace(&id_pajak.to_string(), pajak.clone()) {
            Ok(()) => Ok(pajak),
            Err(ReplaceError::Missing) => Err(AppError::NotFound(format!(
                "Tax record '{}' not found",
                id_pajak
            ))),
            Err(ReplaceError::DuplicateKey) => Err(AppError::DuplicateKey(format!(
                "Tax record '{}' already exists",
                pajak.id_pajak
            ))),
        }
    }

    pub fn delete(&self, id_pajak: &str) -> Result<()> {
        if !self.store.delete(&id_pajak.to_string()) {
            return Err(AppError::NotFound(format!(
                "Tax record '{}' not found",
                id_pajak
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pajak::models::seed_pajak;

    fn service() -> PajakService {
        PajakService::new(Arc::new(MemStore::new(seed_pajak())))
    }

    fn dto(id: &str) -> PajakDto {
        PajakDto {
            id_pajak: id.to_string(),
            status_kepemilikan: "Swasta".to_string(),
            jenis_pajak: "Pajak Pertahanan Nilai (PPN)".to_string(),
            tarif_pajak: 0.11,
            besar_pajak: 10_000_000,
        }
    }

    #[test]
    fn list_returns_seed_rows_in_order() {
        let svc = service();
        let all = svc.list();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id_pajak, "PJ001");
        assert_eq!(all[4].id_pajak, "PJ005");
    }

    #[test]
    fn create_rejects_existing_id() {
        let svc = service();
        let err = svc.create(dto("PJ001")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
        // original values untouched
        assert_eq!(svc.get("PJ001").unwrap().besar_pajak, 50_000_000);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let svc = service();
        let err = svc.update("PJ999", dto("PJ999")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn update_changing_id_onto_existing_id_is_rejected() {
        let svc = service();
        let err = svc.update("PJ001", dto("PJ002")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
        // both records untouched, still one each
        assert_eq!(svc.get("PJ001").unwrap().besar_pajak, 50_000_000);
        assert_eq!(svc.get("PJ002").unwrap().besar_pajak, 100_000_000);

        // renaming onto a fresh id works
        svc.update("PJ001", dto("PJ900")).unwrap();
        assert!(matches!(svc.get("PJ001"), Err(AppError::NotFound(_))));
        assert_eq!(svc.get("PJ900").unwrap().besar_pajak, 10_000_000);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let svc = service();
        svc.delete("PJ002").unwrap();
        assert!(matches!(svc.get("PJ002"), Err(AppError::NotFound(_))));
    }
}
