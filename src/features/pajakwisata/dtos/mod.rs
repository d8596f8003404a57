mod pajakwisata_dto;

pub use pajakwisata_dto::PajakwisataDto;
