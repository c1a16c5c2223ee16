use crate::app_config::AppConfig;
use crate::domain::{GeoLocation, Readings, Weather};
use crate::services::InsightError;
use crate::services::elevation::get_elevation;
use crate::services::prediction::get_prediction;
use crate::services::weather::get_weather;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::sync::Arc;

/// The three collaborators an insight is resolved from.
#[async_trait]
pub trait LocationServices: Debug + Send + Sync {
    async fn elevation(&self, location: &GeoLocation) -> Result<f64, InsightError>;

    async fn weather(&self, location: &GeoLocation) -> Result<Weather, InsightError>;

    async fn prediction(&self, readings: &Readings) -> Result<f64, InsightError>;
}

#[derive(Debug)]
pub struct HttpLocationServices {
    client: Client,
    config: Arc<AppConfig>,
}

impl HttpLocationServices {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        HttpLocationServices { client, config }
    }
}

#[async_trait]
impl LocationServices for HttpLocationServices {
    async fn elevation(&self, location: &GeoLocation) -> Result<f64, InsightError> {
        get_elevation(&self.client, self.config.elevation().url(), location)
            .await
            .map_err(InsightError::ElevationLookupFailed)
    }

    async fn weather(&self, location: &GeoLocation) -> Result<Weather, InsightError> {
        get_weather(&self.client, self.config.weather().url(), location)
            .await
            .map_err(InsightError::WeatherLookupFailed)
    }

    async fn prediction(&self, readings: &Readings) -> Result<f64, InsightError> {
        get_prediction(&self.client, self.config.prediction().url(), readings)
            .await
            .map_err(InsightError::PredictionFailed)
    }
}
