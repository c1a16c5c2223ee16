mod client;
mod elevation;
mod error;
mod location_services;
mod prediction;
mod weather;

pub use client::new_client;
pub use error::{InsightError, ServiceError};
pub use location_services::{HttpLocationServices, LocationServices};
