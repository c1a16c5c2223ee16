pub mod events;
mod geo_location;
mod location_insight;
mod selection;

pub use geo_location::{GeoLocation, GeoLocationError};
pub use location_insight::{LocationInsight, Readings, Weather};
pub use selection::SelectionId;
