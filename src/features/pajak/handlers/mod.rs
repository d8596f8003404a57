pub mod pajak_handler;

pub use pajak_handler::*;
