pub mod pajak;
pub mod pajakwisata;
pub mod penduduk;
pub mod setoran;
pub mod wisata;
