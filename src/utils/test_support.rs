//! Log capture for unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts emitted records per level
#[derive(Clone, Default)]
struct LevelCounter {
    counts: Arc<Mutex<HashMap<Level, usize>>>,
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        *self.counts.lock().unwrap().entry(*event.metadata().level()).or_default() += 1;
    }
}

/// Run `f` with a thread-local subscriber and return the records it emitted, per level
pub fn with_log_counts<T>(f: impl FnOnce() -> T) -> (T, HashMap<Level, usize>) {
    let counter = LevelCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    let counts = counter.counts.lock().unwrap().clone();
    (output, counts)
}
