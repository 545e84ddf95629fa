use maps_core::{gateways::geocode::GeoCodingGateway, GeocodeRequest, GeocodeResult, Result};
use reqwest::blocking::Client;
use std::io;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// A geocoding gateway based on the Google Maps web services.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    api_key: String,
    api_base_url: String,
    client: Client,
}

impl GoogleMaps {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base_url(api_key, DEFAULT_API_BASE_URL)
    }

    pub fn with_api_base_url(api_key: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        Self::with_client(api_key, api_base_url, Client::new())
    }

    pub fn with_client(
        api_key: impl Into<String>,
        api_base_url: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: api_base_url.into(),
            client,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn fetch(&self, url: &str) -> io::Result<String> {
        let response = self.client.get(url).send().map_err(io::Error::other)?;
        log::debug!("Google Maps response status: {}", response.status());
        let body = response.bytes().map_err(io::Error::other)?;
        String::from_utf8(body.to_vec())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn geocode(&self, request: &GeocodeRequest) -> Result<GeocodeResult> {
        let url = request.url(&self.api_base_url, &self.api_key);
        log::debug!(
            "Requesting {}",
            request.url(&self.api_base_url, "<redacted>")
        );
        let body = self.fetch(&url).inspect_err(|err| {
            log::warn!(
                "Failed to resolve address '{}': {}",
                request.address_fragment(),
                err
            );
        })?;
        GeocodeResult::from_json_str(request.operation(), &body)
    }
}
