mod penduduk_dto;

pub use penduduk_dto::{
    PendudukAsuransiDto, PendudukBankDto, PendudukDto, PendudukHotelDto, PendudukRentalDto,
};
