mod setoran_service;

pub use setoran_service::SetoranService;
