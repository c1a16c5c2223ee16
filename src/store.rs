use crate::domain::events::Event;
use crate::domain::{LocationInsight, SelectionId};
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument};

/// What the view displays. Created empty, the insight is replaced per selection.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ViewState {
    pub selection: SelectionId,
    pub loading: bool,
    pub insight: Option<LocationInsight>,
}

#[derive(Debug)]
pub struct Store {
    state: ViewState,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<ViewState>,
    notifier_rx: WatchReceiver<ViewState>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let state = ViewState::default();
        let (notifier_tx, notifier_rx) = watch::channel::<ViewState>(state.clone());

        Store {
            state,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<ViewState> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            if self.apply(event) {
                self.notifier_tx.send(self.state.clone()).unwrap_or_default();
            }
        }
    }

    /// Applies the event to the view state and returns whether the state changed. Events of any
    /// selection other than the most recent one are discarded.
    fn apply(&mut self, event: Event) -> bool {
        let selection = event.selection();
        let is_current = selection == self.state.selection;

        match event {
            Event::SelectionStarted { selection, location } if selection > self.state.selection => {
                info!(%selection, "📍 Selected {}", location);
                self.state.selection = selection;
                self.state.loading = true;
                true
            }
            Event::ReadingsResolved { insight, .. } if is_current => {
                info!(
                    %selection,
                    altitude = insight.readings.altitude,
                    temperature = insight.readings.temperature,
                    humidity = insight.readings.humidity,
                    "🟢 Resolved readings for {}",
                    insight.location
                );
                self.state.insight = Some(insight);
                true
            }
            Event::PredictionResolved { prediction, .. } if is_current => match self.state.insight.take() {
                Some(insight) => {
                    info!(%selection, prediction, "🟢 Resolved prediction for {}", insight.location);
                    self.state.insight = Some(insight.with_prediction(prediction));
                    true
                }
                None => {
                    debug!(%selection, "🔵 Discarding prediction, no readings were published");
                    false
                }
            },
            Event::Settled { .. } if is_current => {
                self.state.loading = false;
                true
            }
            event => {
                debug!(%selection, current = %self.state.selection, "🔵 Discarding stale event: {:?}", event);
                false
            }
        }
    }
}
