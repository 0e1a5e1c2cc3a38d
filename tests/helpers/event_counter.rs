// ABOUTME: Tracing layer that counts every event emitted while it is installed
// ABOUTME: Used to assert that encoding, inserts, and error responses stay silent

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts events seen by the thread-local default subscriber
#[derive(Clone, Default)]
pub struct EventCounter {
    count: Arc<AtomicUsize>,
}

impl EventCounter {
    /// Install as the default subscriber for the current thread
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    /// Events recorded so far
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
