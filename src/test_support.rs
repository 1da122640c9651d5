//! Shared helpers for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts events at WARN or above
struct DiagnosticCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for DiagnosticCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Diagnostics recorded on the current thread while the guard is alive
pub(crate) struct Diagnostics {
    count: Arc<AtomicUsize>,
    _guard: tracing::subscriber::DefaultGuard,
}

impl Diagnostics {
    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Start counting WARN+ events emitted on this thread
pub(crate) fn capture_diagnostics() -> Diagnostics {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(DiagnosticCounter(count.clone()));
    Diagnostics {
        count,
        _guard: tracing::subscriber::set_default(subscriber),
    }
}
