use crate::app_config::AppConfig;
use crate::map::static_map_url;
use crate::store::ViewState;
use chrono::{Datelike, Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn view_listener(mut rx: Receiver<ViewState>, config: Arc<AppConfig>) {
    println!("{}", render(&rx.borrow_and_update(), &config, Local::now().date_naive()));

    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        println!("{}", render(&state, &config, Local::now().date_naive()));
    }
}

/// Renders the insight panel for a view state.
pub fn render(state: &ViewState, config: &AppConfig, today: NaiveDate) -> String {
    let mut lines = match (&state.insight, state.loading) {
        (_, true) => vec!["⏳ Resolving location...".to_string()],
        (None, false) => vec!["🌍 Select a location on the map".to_string()],
        (Some(insight), false) => {
            let readings = &insight.readings;
            let mut lines = vec![
                format!("Altitude: {:.2} m", readings.altitude),
                format!("Temperature: {}°C", readings.temperature),
                format!("Humidity: {}%", readings.humidity),
                format!("Latitude: {}", insight.location.latitude),
                format!("Longitude: {}", insight.location.longitude),
                format!("Predicted TTM PUE {}", today.format("%-m/%-d/%Y")),
            ];
            lines.extend(insight.prediction.map(|prediction| format!("{:.2}", prediction)));
            lines.push(format!("Map: {}", static_map_url(config.map(), &insight.location)));
            lines
        }
    };

    lines.push(format!("© {} NEB Synergy. All Rights Reserved.", today.year()));
    lines.join("\n")
}
