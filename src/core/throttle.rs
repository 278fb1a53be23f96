//! Single-slot debounce for rapid re-invocations

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::core::errors::Result;
use crate::core::store::SlotStore;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Lets only the most recent of several overlapping calls through.
///
/// Every call claims the slot, waits out the window and then checks the
/// slot still holds its own token. A newer call that claimed the slot in
/// the meantime wins; the older one is dropped.
#[derive(Clone)]
pub struct Throttle {
    store: Arc<dyn SlotStore>,
    window: Duration,
}

impl Throttle {
    pub fn new(store: Arc<dyn SlotStore>, window: Duration) -> Self {
        Self { store, window }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Claim the slot and report whether this call is still the latest
    pub async fn allow(&self) -> Result<bool> {
        let token = next_token();
        self.store.write(&token)?;

        if !self.window.is_zero() {
            sleep(self.window).await;
        }

        let current = self.store.read()?;
        let allowed = current.as_deref() == Some(token.as_str());
        if !allowed {
            debug!("Throttled: slot now holds {:?}", current);
        }
        Ok(allowed)
    }
}

/// Unique across processes (pid) and within one process (sequence)
fn next_token() -> String {
    let now = chrono::Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_millis().saturating_mul(1_000_000));
    format!(
        "{}-{}-{}",
        nanos,
        std::process::id(),
        SEQUENCE.fetch_add(1, Ordering::Relaxed)
    )
}
