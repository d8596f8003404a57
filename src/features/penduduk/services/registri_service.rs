use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::penduduk::dtos::{
    PendudukAsuransiDto, PendudukBankDto, PendudukHotelDto, PendudukRentalDto,
};
use crate::features::penduduk::models::{
    PendudukAsuransi, PendudukBank, PendudukHotel, PendudukRental,
};
use crate::shared::store::{Keyed, MemStore, ReplaceError};

/// Service over the per-partner resident sub-registries.
///
/// Every register follows the same discipline: duplicate NIK rejected on
/// insert, NotFound on missing key. The insurance and bank registers are
/// append/read only, matching what those partner groups consume.
pub struct RegistriService {
    rental: Arc<MemStore<PendudukRental>>,
    hotel: Arc<MemStore<PendudukHotel>>,
    asuransi: Arc<MemStore<PendudukAsuransi>>,
    bank: Arc<MemStore<PendudukBank>>,
}

fn insert_into<T: Keyed<Key = i64> + Clone>(store: &MemStore<T>, record: T) -> Result<T> {
    if !store.insert(record.clone()) {
        return Err(AppError::DuplicateKey(format!(
            "Resident with NIK {} already exists",
            record.key()
        )));
    }
    Ok(record)
}

fn find_in<T: Keyed<Key = i64> + Clone>(store: &MemStore<T>, nik: i64) -> Result<T> {
    store
        .find(&nik)
        .ok_or_else(|| AppError::NotFound(format!("Resident with NIK {} not found", nik)))
}

fn replace_in<T: Keyed<Key = i64> + Clone>(store: &MemStore<T>, nik: i64, record: T) -> Result<T> {
    match store.replace(&nik, record.clone()) {
        Ok(()) => Ok(record),
        Err(ReplaceError::Missing) => Err(AppError::NotFound(format!(
            "Resident with NIK {} not found",
            nik
        ))),
        Err(ReplaceError::DuplicateKey) => Err(AppError::DuplicateKey(format!(
            "Resident with NIK {} already exists",
            record.key()
        ))),
    }
}

impl RegistriService {
    pub fn new(
        rental: Arc<MemStore<PendudukRental>>,
        hotel: Arc<MemStore<PendudukHotel>>,
        asuransi: Arc<MemStore<PendudukAsuransi>>,
        bank: Arc<MemStore<PendudukBank>>,
    ) -> Self {
        Self {
            rental,
            hotel,
            asuransi,
            bank,
        }
    }

    // Car-rental register (full CRUD)

    pub fn rental_list(&self) -> Vec<PendudukRental> {
        self.rental.list_all()
    }

    pub fn rental_get(&self, nik: i64) -> Result<PendudukRental> {
        find_in(&self.rental, nik)
    }

    pub fn rental_create(&self, dto: PendudukRentalDto) -> Result<PendudukRental> {
        insert_into(&self.rental, dto.into())
    }

    pub fn rental_update(&self, nik: i64, dto: PendudukRentalDto) -> Result<PendudukRental> {
        replace_in(&self.rental, nik, dto.into())
    }

    pub fn rental_delete(&self, nik: i64) -> Result<()> {
        if !self.rental.delete(&nik) {
            return Err(AppError::NotFound(format!(
                "Resident with NIK {} not found",
                nik
            )));
        }
        Ok(())
    }

    // Hotel register (full CRUD)

    pub fn hotel_list(&self) -> Vec<PendudukHotel> {
        self.hotel.list_all()
    }

    pub fn hotel_get(&self, nik: i64) -> Result<PendudukHotel> {
        find_in(&self.hotel, nik)
    }

    pub fn hotel_create(&self, dto: PendudukHotelDto) -> Result<PendudukHotel> {
        insert_into(&self.hotel, dto.into())
    }

    pub fn hotel_update(&self, nik: i64, dto: PendudukHotelDto) -> Result<PendudukHotel> {
        replace_in(&self.hotel, nik, dto.into())
    }

    pub fn hotel_delete(&self, nik: i64) -> Result<()> {
        if !self.hotel.delete(&nik) {
            return Err(AppError::NotFound(format!(
                "Resident with NIK {} not found",
                nik
            )));
        }
        Ok(())
    }

    // Insurance register (append/read only)

    pub fn asuransi_list(&self) -> Vec<PendudukAsuransi> {
        self.asuransi.list_all()
    }

    pub fn asuransi_get(&self, nik: i64) -> Result<PendudukAsuransi> {
        find_in(&self.asuransi, nik)
    }

    pub fn asuransi_create(&self, dto: PendudukAsuransiDto) -> Result<PendudukAsuransi> {
        insert_into(&self.asuransi, dto.into())
    }

    // Bank register (append/read only)

    pub fn bank_list(&self) -> Vec<PendudukBank> {
        self.bank.list_all()
    }

    pub fn bank_get(&self, nik: i64) -> Result<PendudukBank> {
        find_in(&self.bank, nik)
    }

    pub fn bank_create(&self, dto: PendudukBankDto) -> Result<PendudukBank> {
        insert_into(&self.bank, dto.into())
    }
}
