mod penduduk;
mod registri;
mod sibling;

pub use penduduk::{seed_penduduk, Penduduk};
pub use registri::{
    seed_asuransi, seed_bank, seed_hotel, seed_rental, PendudukAsuransi, PendudukBank,
    PendudukHotel, PendudukRental,
};
pub use sibling::{Asuransi, Bank, Guide, Hotel, Rental};
