mod setoran_dto;

pub use setoran_dto::SetoranDto;
