mod pajak;

pub use pajak::{seed_pajak, Pajak};
