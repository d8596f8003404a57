pub mod setoran_handler;

pub use setoran_handler::*;
