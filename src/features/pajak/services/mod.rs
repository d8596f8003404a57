mod pajak_service;

pub use pajak_service::PajakService;
