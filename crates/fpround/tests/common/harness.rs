use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fpround::{HostFenv, RoundingControl};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer};

/// Installs a test-writer subscriber once per process; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Returns the host environment, or `None` on hosts without rounding control.
///
/// Host-backed tests return early on `None`; the simulated environment covers the same
/// behaviour everywhere.
pub fn host() -> Option<HostFenv> {
    init_tracing();
    let env = HostFenv::new();
    env.is_supported().then_some(env)
}

/// Counts `debug` events on the `fpround::scope` target.
#[derive(Clone, Default)]
pub struct TransitionCounter(Arc<AtomicUsize>);

impl TransitionCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for TransitionCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if meta.target() == "fpround::scope" && *meta.level() == Level::DEBUG {
            let _ = self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
