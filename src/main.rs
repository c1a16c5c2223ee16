use crate::app_config::AppConfig;
use crate::domain::GeoLocation;
use crate::domain::events::Event;
use crate::map::static_map_url;
use crate::orchestrator::Orchestrator;
use crate::services::HttpLocationServices;
use crate::store::Store;
use crate::view::view_listener;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{error, info};

mod app_config;
mod domain;
mod geo_location_deserializer;
mod map;
mod orchestrator;
mod services;
mod store;
mod view;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");

    let client = services::new_client(&config)?;
    let location_services = Arc::new(HttpLocationServices::new(client, config.clone()));

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx);
    let notifier_rx = store.notifier();

    let view_config = config.clone();
    let view_task = task::spawn(async move {
        view_listener(notifier_rx, view_config).await;
    });
    info!("✅  Initialized view");

    let store_task = task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let (selection_tx, selection_rx) = mpsc::channel::<GeoLocation>(config.core().store_buffer_size());
    let orchestrator = Orchestrator::new(location_services, tx);
    let orchestrator_task = task::spawn(async move {
        orchestrator.run(selection_rx).await;
    });
    info!("✅  Initialized orchestrator");

    info!("🗺️ Map overview: {}", static_map_url(config.map(), config.map().center()));
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    if let Err(e) = map::surface::listen(BufReader::new(tokio::io::stdin()), selection_tx).await {
        error!("❌ Map surface stopped: {}", e);
    }
    // In-flight selections settle first, the store and view then drain once their senders are gone
    orchestrator_task.await?;
    store_task.await?;
    view_task.await?;

    Ok(())
}
