use crate::domain::Readings;
use crate::services::ServiceError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
pub struct PredictionRequest {
    pub altitude: f64,
    pub average_temperature: f64,
    pub average_humidity: f64,
}

impl From<&Readings> for PredictionRequest {
    fn from(readings: &Readings) -> Self {
        PredictionRequest {
            altitude: readings.altitude,
            average_temperature: readings.temperature,
            average_humidity: readings.humidity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Option<f64>,
}

#[instrument(skip(client, url))]
pub async fn get_prediction(client: &Client, url: &str, readings: &Readings) -> Result<f64, ServiceError> {
    debug!("🔮 Requesting prediction...");
    let response = client
        .post(url)
        .json(&PredictionRequest::from(readings))
        .send()
        .await?
        .error_for_status()?;

    let prediction = response
        .json::<PredictionResponse>()
        .await?
        .prediction
        .ok_or(ServiceError::MissingField("prediction"))?;
    debug!(prediction, "🔮 Requesting prediction... OK");
    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use test_log::test;

    const READINGS: Readings = Readings {
        altitude: 10.0,
        temperature: 20.0,
        humidity: 50.0,
    };

    #[test(tokio::test)]
    async fn posts_the_readings_and_returns_the_prediction() -> Result<(), ServiceError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/predict")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "altitude": 10.0,
                "average_temperature": 20.0,
                "average_humidity": 50.0,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "prediction": 7.35 }"#)
            .create_async()
            .await;

        let prediction = get_prediction(&Client::new(), &format!("{}/predict", server.url()), &READINGS).await?;

        mock.assert_async().await;
        assert_eq!(prediction, 7.35);
        Ok(())
    }

    #[test(tokio::test)]
    async fn fails_without_a_prediction() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body(r#"{ "error": "model not loaded" }"#)
            .create_async()
            .await;

        let result = get_prediction(&Client::new(), &format!("{}/predict", server.url()), &READINGS).await;

        assert!(matches!(result, Err(ServiceError::MissingField("prediction"))));
    }

    #[test(tokio::test)]
    async fn fails_for_an_error_status() {
        let mut server = mockito::Server::new_async().await;

        server.mock("POST", "/predict").with_status(500).create_async().await;

        let result = get_prediction(&Client::new(), &format!("{}/predict", server.url()), &READINGS).await;

        assert!(matches!(result, Err(ServiceError::RequestError(_))));
    }
}
