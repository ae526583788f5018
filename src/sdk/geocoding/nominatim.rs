use std::time::Duration;

use reqwest::blocking::Client;

use super::error::LookupError;
use super::provider::{Geocoder, Place};
use super::types::SearchResult;
use crate::sdk::config::GeoConfig;

pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeoConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.lookup_timeout)
                .user_agent(&config.user_agent)
                .build()
                .unwrap(),
            base_url: config.nominatim_url.clone(),
        }
    }

    /// Same as `new` but with an explicit timeout, for callers that need a
    /// tighter budget than the configured default.
    pub fn with_timeout(config: &GeoConfig, timeout: Duration) -> Self {
        let mut config = config.clone();
        config.lookup_timeout = timeout;
        Self::new(&config)
    }
}

impl Geocoder for NominatimGeocoder {
    fn lookup(&self, address: &str) -> Result<Option<Place>, LookupError> {
        let url = format!("{}/search", self.base_url);
        log::debug!("Calling nominatim for address: \"{}\"", address);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", address),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Nominatim returned non-success status {} for \"{}\"", status, address);
            return Err(LookupError::Status(status));
        }

        let text = response.text()?;
        let results: Vec<SearchResult> = serde_json::from_str(&text).map_err(|e| {
            log::error!("Failed to parse nominatim response: {}. Body: {}", e, text);
            e
        })?;

        let Some(first) = results.into_iter().next() else {
            return Ok(None);
        };

        Ok(Some(Place {
            lat: first.lat.parse()?,
            lon: first.lon.parse()?,
            city: first.address.city,
            village: first.address.village,
            region: first.address.state,
            country: first.address.country,
        }))
    }
}
