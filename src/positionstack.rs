//! PositionStack forward-geocoding client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;

/// One geocoding candidate. The API returns more fields; only the
/// coordinates matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoCandidate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForwardResponse {
    #[serde(default)]
    data: Vec<GeoCandidate>,
}

pub struct GeocodeClient {
    client: Client,
    base_url: String,
    access_key: String,
}

impl GeocodeClient {
    pub fn new(base_url: String, access_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url,
            access_key,
        }
    }

    /// Resolve a place name to its first candidate; `None` means the
    /// geocoder had no match.
    pub async fn forward(&self, place: &str) -> Result<Option<GeoCandidate>, ApiError> {
        let url = format!(
            "{}/v1/forward?access_key={}&query={}",
            self.base_url,
            self.access_key,
            urlencoding::encode(place)
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let payload: ForwardResponse = response.json().await?;

        debug!("Geocoder returned {} candidates for '{}'", payload.data.len(), place);

        Ok(payload.data.into_iter().next())
    }
}
