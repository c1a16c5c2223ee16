use crate::domain::GeoLocation;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    #[serde(default)]
    http: Http,
    elevation: Endpoint,
    weather: Endpoint,
    prediction: Endpoint,
    map: Map,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(config::Environment::with_prefix("INSIGHT").prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn elevation(&self) -> &Endpoint {
        &self.elevation
    }

    pub fn weather(&self) -> &Endpoint {
        &self.weather
    }

    pub fn prediction(&self) -> &Endpoint {
        &self.prediction
    }

    pub fn map(&self) -> &Map {
        &self.map
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    store_buffer_size: usize,
}

impl Core {
    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Http {
    #[serde(default, with = "humantime_serde")]
    request_timeout: Option<Duration>,
}

impl Http {
    /// Outbound calls are unbounded unless a timeout is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    style_url: String,
    access_token: String,
    center: GeoLocation,
    zoom: f64,
    width: u32,
    height: u32,
}

impl Map {
    pub fn style_url(&self) -> &str {
        &self.style_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn center(&self) -> &GeoLocation {
        &self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { store_buffer_size: 8 },
                http: Http::default(),
                elevation: Endpoint {
                    url: "https://elevation.url/lookup".to_string(),
                },
                weather: Endpoint {
                    url: "https://weather.url/forecast".to_string(),
                },
                prediction: Endpoint {
                    url: "https://prediction.url/predict".to_string(),
                },
                map: Map {
                    style_url: "https://maps.url/styles/v1/owner/style".to_string(),
                    access_token: "token".to_string(),
                    center: GeoLocation::default(),
                    zoom: 2.0,
                    width: 800,
                    height: 560,
                },
            },
        }
    }

    pub fn service_url(mut self, url: String) -> Self {
        self.config.elevation.url = format!("{}/lookup", url);
        self.config.weather.url = format!("{}/forecast", url);
        self.config.prediction.url = format!("{}/predict", url);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.request_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
