mod wisata_client;

pub use wisata_client::WisataClient;
