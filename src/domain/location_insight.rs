use crate::domain::GeoLocation;

/// Readings resolved for a single selection. They are only ever created together, which keeps a
/// prediction from being attached to a partially resolved point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readings {
    pub altitude: f64,    // In meters
    pub temperature: f64, // In degrees Celsius
    pub humidity: f64,    // Relative humidity percentage
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weather {
    pub temperature: f64,
    pub humidity: f64,
}

impl Readings {
    pub fn new(altitude: f64, weather: Weather) -> Self {
        Readings {
            altitude,
            temperature: weather.temperature,
            humidity: weather.humidity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationInsight {
    pub location: GeoLocation,
    pub readings: Readings,
    pub prediction: Option<f64>,
}

impl LocationInsight {
    pub fn new(location: GeoLocation, readings: Readings) -> Self {
        LocationInsight {
            location,
            readings,
            prediction: None,
        }
    }

    pub fn with_prediction(self, prediction: f64) -> Self {
        LocationInsight {
            prediction: Some(prediction),
            ..self
        }
    }
}
