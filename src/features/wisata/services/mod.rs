mod wisata_service;

pub use wisata_service::WisataService;
