use crate::app_config::Map;
use crate::domain::GeoLocation;

/// URL of a static image of the configured map style, centered on `center`.
///
/// API: https://docs.mapbox.com/api/maps/static-images/
pub fn static_map_url(map: &Map, center: &GeoLocation) -> String {
    let (width, height) = map.size();
    format!(
        "{}/static/{},{},{}/{}x{}?access_token={}",
        map.style_url().trim_end_matches('/'),
        center.longitude,
        center.latitude,
        map.zoom(),
        width,
        height,
        map.access_token()
    )
}
