mod setoran;

pub use setoran::{seed_setoran, Setoran};
