mod pajak_dto;

pub use pajak_dto::PajakDto;
