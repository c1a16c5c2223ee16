use crate::domain::{GeoLocation, LocationInsight, SelectionId};

#[derive(Debug)]
pub enum Event {
    SelectionStarted { selection: SelectionId, location: GeoLocation },
    ReadingsResolved { selection: SelectionId, insight: LocationInsight },
    PredictionResolved { selection: SelectionId, prediction: f64 },
    Settled { selection: SelectionId },
}

impl Event {
    pub fn selection(&self) -> SelectionId {
        match self {
            Event::SelectionStarted { selection, .. }
            | Event::ReadingsResolved { selection, .. }
            | Event::PredictionResolved { selection, .. }
            | Event::Settled { selection } => *selection,
        }
    }
}
