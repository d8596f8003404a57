mod pajakwisata;

pub use pajakwisata::{MergePolicy, Pajakwisata};
