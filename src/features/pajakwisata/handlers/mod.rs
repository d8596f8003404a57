pub mod pajakwisata_handler;

pub use pajakwisata_handler::*;
