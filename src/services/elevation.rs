use crate::domain::GeoLocation;
use crate::services::ServiceError;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

// API: https://github.com/Jorl17/open-elevation/blob/master/docs/api.md
#[derive(Debug, Deserialize)]
pub struct ElevationResponse {
    #[serde(default)]
    pub results: Vec<ElevationResult>,
}

#[derive(Debug, Deserialize)]
pub struct ElevationResult {
    pub elevation: Option<f64>,
}

impl ElevationResponse {
    /// The elevation of the first result, a missing result counts as sea level.
    pub fn altitude(&self) -> f64 {
        self.results.first().and_then(|result| result.elevation).unwrap_or(0.0)
    }
}

#[instrument(skip(client, url))]
pub async fn get_elevation(client: &Client, url: &str, location: &GeoLocation) -> Result<f64, ServiceError> {
    debug!("⛰️ Looking up elevation...");
    let locations = format!("{},{}", location.latitude, location.longitude);
    let response = client
        .get(url)
        .query(&[("locations", locations)])
        .send()
        .await?
        .error_for_status()?;

    let altitude = response.json::<ElevationResponse>().await?.altitude();
    debug!(altitude, "⛰️ Looking up elevation... OK");
    Ok(altitude)
}
