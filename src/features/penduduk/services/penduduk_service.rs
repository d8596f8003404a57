use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::penduduk::dtos::PendudukDto;
use crate::features::penduduk::models::Penduduk;
use crate::shared::store::{MemStore, ReplaceError};

/// Service for the main civil register.
pub struct PendudukService {
    store: Arc<MemStore<Penduduk>>,
}

impl PendudukService {
    pub fn new(store: Arc<MemStore<Penduduk>>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Penduduk> {
        self.store.list_all()
    }

    pub fn get(&self, nik: i64) -> Result<Penduduk> {
        self.store
            .find(&nik)
            .ok_or_else(|| AppError::NotFound(format!("Resident with NIK {} not found", nik)))
    }

    pub fn create(&self, dto: PendudukDto) -> Result<Penduduk> {
        let penduduk: Penduduk = dto.into();
        if !self.store.insert(penduduk.clone()) {
            return Err(AppError::DuplicateKey(format!(
                "Resident with NIK {} already exists",
                penduduk.nik
            )));
        }
        Ok(penduduk)
    }

    pub fn update(&self, nik: i64, dto: PendudukDto) -> Result<Penduduk> {
        let penduduk: Penduduk = dto.into();
        match self.store.replace(&nik, penduduk.clone()) {
            Ok(()) => Ok(penduduk),
            Err(ReplaceError::Missing) => Err(AppError::NotFound(format!(
                "Resident with NIK {} not found",
                nik
            ))),
            Err(ReplaceError::DuplicateKey) => Err(AppError::DuplicateKey(format!(
                "Resident with NIK {} already exists",
                penduduk.nik
            ))),
        }
    }

    pub fn delete(&self, nik: i64) -> Result<()> {
        if !self.store.delete(&nik) {
            return Err(AppError::NotFound(format!(
                "Resident with NIK {} not found",
                nik
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::penduduk::models::seed_penduduk;

    #[test]
    fn seed_has_twenty_rows() {
        let svc = PendudukService::new(Arc::new(MemStore::new(seed_penduduk())));
        assert_eq!(svc.list().len(), 20);
        assert_eq!(svc.get(101).unwrap().nama, "Ale");
    }

    #[test]
    fn duplicate_nik_is_rejected() {
        let svc = PendudukService::new(Arc::new(MemStore::new(seed_penduduk())));
        let err = svc
            .create(PendudukDto {
                nik: 101,
                nama: "Dup".to_string(),
                provinsi: "Bali".to_string(),
                kota: "Gianyar".to_string(),
                kecamatan: "Gianyar".to_string(),
                desa: "Siangan".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
        assert_eq!(svc.list().len(), 20);
    }
}
