use crate::domain::{GeoLocation, Weather};
use crate::services::ServiceError;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

// API: https://open-meteo.com/en/docs
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub hourly: Hourly,
}

#[derive(Debug, Deserialize)]
pub struct Hourly {
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
}

impl TryFrom<ForecastResponse> for Weather {
    type Error = ServiceError;

    /// Takes the first hourly sample of each series.
    fn try_from(response: ForecastResponse) -> Result<Self, Self::Error> {
        let first = |series: &[Option<f64>]| series.first().copied().flatten();

        let temperature = first(&response.hourly.temperature_2m).ok_or(ServiceError::MissingField("hourly.temperature_2m[0]"))?;
        let humidity = first(&response.hourly.relative_humidity_2m).ok_or(ServiceError::MissingField("hourly.relative_humidity_2m[0]"))?;

        Ok(Weather { temperature, humidity })
    }
}

#[instrument(skip(client, url))]
pub async fn get_weather(client: &Client, url: &str, location: &GeoLocation) -> Result<Weather, ServiceError> {
    debug!("🌦️ Looking up weather...");
    let latitude = location.latitude.to_string();
    let longitude = location.longitude.to_string();
    let response = client
        .get(url)
        .query(&[
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("hourly", "temperature_2m,relative_humidity_2m"),
            ("timezone", "auto"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let weather = Weather::try_from(response.json::<ForecastResponse>().await?)?;
    debug!(temperature = weather.temperature, humidity = weather.humidity, "🌦️ Looking up weather... OK");
    Ok(weather)
}
