use crate::core::config::RemoteConfig;
use crate::core::error::Result;
use crate::features::penduduk::models::{Asuransi, Bank, Guide, Hotel, Rental};
use crate::shared::remote::RemoteClient;

/// Client for the partner groups' published registries.
///
/// One URL per group from config; each fetch is a single bounded GET through
/// the shared `RemoteClient`, failing wholesale with `RemoteUnavailable`.
pub struct SiblingClient {
    remote: RemoteClient,
    asuransi_url: String,
    bank_url: String,
    hotel_url: String,
    rental_url: String,
    tourguide_url: String,
}

impl SiblingClient {
    pub fn new(remote: RemoteClient, config: &RemoteConfig) -> Self {
        Self {
            remote,
            asuransi_url: config.asuransi_url.clone(),
            bank_url: config.bank_url.clone(),
            hotel_url: config.hotel_url.clone(),
            rental_url: config.rental_url.clone(),
            tourguide_url: config.tourguide_url.clone(),
        }
    }

    pub async fn fetch_asuransi(&self) -> Result<Vec<Asuransi>> {
        self.remote.get_list(&self.asuransi_url).await
    }

    pub async fn fetch_bank(&self) -> Result<Vec<Bank>> {
        self.remote.get_list(&self.bank_url).await
    }

    pub async fn fetch_hotel(&self) -> Result<Vec<Hotel>> {
        self.remote.get_list(&self.hotel_url).await
    }

    pub async fn fetch_rental(&self) -> Result<Vec<Rental>> {
        self.remote.get_list(&self.rental_url).await
    }

    pub async fn fetch_tourguide(&self) -> Result<Vec<Guide>> {
        self.remote.get_list(&self.tourguide_url).await
    }
}
