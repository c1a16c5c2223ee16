use crate::domain::events::Event;
use crate::domain::{GeoLocation, LocationInsight, Readings, SelectionId};
use crate::services::LocationServices;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::error::SendError;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

/// Turns point selections into insight events for the store.
#[derive(Debug)]
pub struct Orchestrator {
    services: Arc<dyn LocationServices>,
    tx: Sender<Event>,
    last_selection: AtomicU64,
}

impl Orchestrator {
    pub fn new(services: Arc<dyn LocationServices>, tx: Sender<Event>) -> Self {
        Orchestrator {
            services,
            tx,
            last_selection: AtomicU64::new(0),
        }
    }

    /// Handles selections until the map surface closes, then waits for the selections in flight.
    #[instrument(skip(self, rx))]
    pub async fn run(&self, mut rx: Receiver<GeoLocation>) {
        let mut in_flight = Vec::new();
        while let Some(location) = rx.recv().await {
            match self.select(location).await {
                Ok(handle) => {
                    in_flight.retain(|handle: &JoinHandle<()>| !handle.is_finished());
                    in_flight.push(handle);
                }
                Err(e) => {
                    warn!("⚠️ Store is gone, stopping: {}", e);
                    break;
                }
            }
        }

        for handle in in_flight {
            if let Err(e) = handle.await {
                warn!("⚠️ Selection task failed: {}", e);
            }
        }
    }

    /// Starts resolving the insight for `location` in a task of its own. Loading is raised before
    /// the task is spawned, so the start of a selection is always ordered before its results.
    pub async fn select(&self, location: GeoLocation) -> Result<JoinHandle<()>, SendError<Event>> {
        let selection = SelectionId::new(self.last_selection.fetch_add(1, Ordering::SeqCst) + 1);
        self.tx.send(Event::SelectionStarted { selection, location }).await?;

        let services = self.services.clone();
        let tx = self.tx.clone();
        Ok(tokio::spawn(async move {
            if let Err(e) = resolve_insight(selection, location, services.as_ref(), &tx).await {
                warn!(%selection, "⚠️ Unable to publish the insight: {}", e);
            }
        }))
    }
}

/// Resolves elevation and weather, publishes the readings, then resolves and publishes the
/// prediction. Every lookup failure is absorbed: elevation falls back to sea level, a weather
/// failure publishes nothing, a prediction failure leaves the prediction absent. The selection is
/// always settled at the end.
#[instrument(skip(selection, services, tx), fields(%selection))]
pub async fn resolve_insight(selection: SelectionId, location: GeoLocation, services: &dyn LocationServices, tx: &Sender<Event>) -> Result<(), SendError<Event>> {
    info!("🧭 Resolving insight for {}...", location);

    let (elevation, weather) = tokio::join!(services.elevation(&location), services.weather(&location));

    let altitude = elevation.unwrap_or_else(|e| {
        warn!("⚠️ {}, falling back to 0 m", e);
        0.0
    });

    match weather {
        Ok(weather) => {
            let readings = Readings::new(altitude, weather);
            tx.send(Event::ReadingsResolved {
                selection,
                insight: LocationInsight::new(location, readings),
            })
            .await?;

            match services.prediction(&readings).await {
                Ok(prediction) => {
                    tx.send(Event::PredictionResolved { selection, prediction }).await?;
                    info!(prediction, "🧭 Resolving insight for {}... OK", location);
                }
                Err(e) => warn!("⚠️ {}, showing readings only", e),
            }
        }
        Err(e) => warn!("⚠️ {}, keeping the current insight", e),
    }

    tx.send(Event::Settled { selection }).await
}
