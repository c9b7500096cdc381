use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::features::geocoding::models::Coordinates;

/// Converts between postal addresses and coordinates.
///
/// Failures (network, provider status, unparsable body, no match) surface as
/// [`AppError::ExternalServiceError`] and are never retried.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Reverse lookup: coordinates to a human-readable address
    async fn address_from_coordinates(&self, coordinates: &Coordinates) -> Result<String>;

    /// Forward lookup: address to the best matching coordinates
    async fn coordinates_from_address(&self, address: &str) -> Result<Coordinates>;
}

/// Nominatim `/search` result
#[derive(Debug, Deserialize)]
pub struct NominatimSearchResult {
    pub lat: String,
    pub lon: String,
    #[allow(dead_code)]
    pub display_name: Option<String>,
}

impl NominatimSearchResult {
    fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.lat.trim().parse().ok()?;
        let lng = self.lon.trim().parse().ok()?;
        Some(Coordinates::new(lat, lng))
    }
}

/// Nominatim `/reverse` response; `error` is set when nothing matched
#[derive(Debug, Deserialize)]
pub struct NominatimReverseResponse {
    pub display_name: Option<String>,
    pub error: Option<String>,
}

/// Geocoding backed by a Nominatim-compatible HTTP API
pub struct GeocodingService {
    client: reqwest::Client,
    base_url: String,
    language: Option<String>,
}

impl GeocodingService {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    fn reverse_url(&self, coordinates: &Coordinates) -> String {
        let mut url = format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.base_url, coordinates.lat, coordinates.lng
        );
        self.append_language(&mut url);
        url
    }

    fn search_url(&self, address: &str) -> String {
        let mut url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(address)
        );
        self.append_language(&mut url);
        url
    }

    fn append_language(&self, url: &mut String) {
        if let Some(language) = &self.language {
            url.push_str("&accept-language=");
            url.push_str(&urlencoding::encode(language));
        }
    }

    /// Execute a GET against the provider and decode the JSON body
    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Geocoding request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Geocoding request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Geocoding provider returned status: {}", status);
            return Err(AppError::ExternalServiceError(format!(
                "Geocoding provider returned status {}",
                status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse geocoding response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse geocoding response: {}", e))
        })
    }
}

/// Pick the address out of a reverse lookup
fn address_from_reverse(
    coordinates: &Coordinates,
    response: NominatimReverseResponse,
) -> Result<String> {
    if let Some(error) = response.error {
        return Err(AppError::ExternalServiceError(format!(
            "No address found for coordinates {}: {}",
            coordinates, error
        )));
    }

    response
        .display_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| {
            AppError::ExternalServiceError(format!(
                "No address found for coordinates {}",
                coordinates
            ))
        })
}

/// Pick the coordinates of the best search match
fn coordinates_from_search(address: &str, results: Vec<NominatimSearchResult>) -> Result<Coordinates> {
    results
        .first()
        .and_then(NominatimSearchResult::coordinates)
        .ok_or_else(|| {
            AppError::ExternalServiceError(format!(
                "No coordinates found for address '{}'",
                address
            ))
        })
}

#[async_trait]
impl GeocodeProvider for GeocodingService {
    async fn address_from_coordinates(&self, coordinates: &Coordinates) -> Result<String> {
        let url = self.reverse_url(coordinates);
        tracing::debug!("Geocoding (reverse): {} -> {}", coordinates, url);

        let response: NominatimReverseResponse = self.fetch(&url).await?;
        address_from_reverse(coordinates, response)
    }

    async fn coordinates_from_address(&self, address: &str) -> Result<Coordinates> {
        let url = self.search_url(address);
        tracing::debug!("Geocoding (search): {} -> {}", address, url);

        let results: Vec<NominatimSearchResult> = self.fetch(&url).await?;
        coordinates_from_search(address, results)
    }
}
