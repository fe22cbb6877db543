//! Checks the diagnostics emitted while rebalancing.

use std::sync::{Arc, Mutex};

use stackdeque::persistent::PersistentDeque;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

#[derive(Default)]
struct DonorVisitor {
    donor: Option<String>,
}

impl Visit for DonorVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "donor" {
            self.donor = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

#[derive(Clone, Default)]
struct RecordingLayer {
    donors: Arc<Mutex<Vec<String>>>,
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut visitor = DonorVisitor::default();
        event.record(&mut visitor);
        if let Some(donor) = visitor.donor {
            self.donors.lock().unwrap().push(donor);
        }
    }
}

#[test]
fn test_rebalance_emits_event_per_split() {
    let layer = RecordingLayer::default();
    let donors = Arc::clone(&layer.donors);
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        let from_back: PersistentDeque<i32> = (1..=4).collect();
        let _ = from_back.rebalance();

        let from_front = PersistentDeque::new().push_front(1).push_front(2);
        let _ = from_front.rebalance();

        let balanced = PersistentDeque::new().push_front(1).push_back(2);
        let _ = balanced.rebalance();
    });

    assert_eq!(*donors.lock().unwrap(), vec!["back", "front"]);
}
