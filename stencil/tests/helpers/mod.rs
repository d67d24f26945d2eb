use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` and report how many error events it logged.
pub(crate) fn count_errors<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter {
        count: count.clone(),
    });

    let result = tracing::subscriber::with_default(subscriber, f);

    (result, count.load(Ordering::SeqCst))
}
