use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::setoran::dtos::SetoranDto;
use crate::features::setoran::models::Setoran;
use crate::shared::store::MemStore;

/// Service for tax deposit records.
pub struct SetoranService {
    store: Arc<MemStore<Setoran>>,
}

impl SetoranService {
    pub fn new(store: Arc<MemStore<Setoran>>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Setoran> {
        self.store.list_all()
    }

    pub fn create(&self, dto: SetoranDto) -> Result<Setoran> {
        let setoran: Setoran = dto.into();
        if !self.store.insert(setoran.clone()) {
            return Err(AppError::DuplicateKey(format!(
                "Deposit record {} already exists",
                setoran.id_setoran
            )));
        }
        Ok(setoran)
    }

    /// First deposit whose status matches (e.g. "tepat waktu", "terlambat").
    pub fn get_by_status(&self, status_setoran: &str) -> Result<Setoran> {
        self.store
            .list_all()
            .into_iter()
            .find(|s| s.status_setoran == status_setoran)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No deposit record with status '{}'",
                    status_setoran
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::setoran::models::seed_setoran;

    fn service() -> SetoranService {
        SetoranService::new(Arc::new(MemStore::new(seed_setoran())))
    }

    #[test]
    fn get_by_status_returns_first_match() {
        let svc = service();
        let late = svc.get_by_status("terlambat").unwrap();
        assert_eq!(late.id_setoran, 2);
    }

    #[test]
    fn get_by_unknown_status_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.get_by_status("menunggak"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn duplicate_id_setoran_is_rejected() {
        let svc = service();
        let err = svc
            .create(SetoranDto {
                id_setoran: 1,
                id_pajak: "PJ001".to_string(),
                tanggal_jatuh_tempo: "31-12-2023".to_string(),
                tanggal_setoran: "31-12-2023".to_string(),
                status_setoran: "tepat waktu".to_string(),
                denda: 0.0,
                besar_pajak_setelah_denda: 0,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
        assert_eq!(svc.list().len(), 5);
    }
}
