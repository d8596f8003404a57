pub mod wisata_handler;

pub use wisata_handler::*;
