use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("response is missing '{0}'")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("elevation lookup failed: {0}")]
    ElevationLookupFailed(#[source] ServiceError),
    #[error("weather lookup failed: {0}")]
    WeatherLookupFailed(#[source] ServiceError),
    #[error("prediction failed: {0}")]
    PredictionFailed(#[source] ServiceError),
}
