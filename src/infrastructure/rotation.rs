//! Periodic riddle rotation.
//!
//! [`RotationTimer`] owns the background task that drives the banner. The task
//! only posts a message to the event loop; the loop applies it. Dropping the
//! timer aborts the task, so no message is produced after the owner is gone.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, trace, warn};

/// Period used when none is configured.
pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_secs(10);

/// Shortest accepted period; smaller values are raised to it.
pub const MIN_ROTATION_PERIOD: Duration = Duration::from_millis(100);

/// Longest accepted period; larger values are lowered to it.
pub const MAX_ROTATION_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

pub struct RotationTimer {
    period: Duration,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RotationTimer {
    /// Spawns the rotation task on the current tokio runtime.
    ///
    /// `message` is sent on `tx` once per `period`, the first time one full
    /// period after this call. The task ends on its own if the receiver is
    /// dropped.
    pub fn start<T>(period: Duration, tx: mpsc::UnboundedSender<T>, message: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let requested = period;
        let period = period.clamp(MIN_ROTATION_PERIOD, MAX_ROTATION_PERIOD);
        if period != requested {
            warn!(
                requested_ms = requested.as_millis(),
                period_ms = period.as_millis(),
                "Rotation period out of range, clamped"
            );
        }
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while flag.load(Ordering::SeqCst) {
                ticker.tick().await;

                if !flag.load(Ordering::SeqCst) {
                    break;
                }

                if tx.send(message.clone()).is_err() {
                    debug!("Rotation channel closed");
                    break;
                }
                trace!("Rotation tick sent");
            }

            debug!("Rotation loop stopped");
        });

        info!(period_ms = period.as_millis(), "Rotation timer started");

        Self {
            period,
            running,
            handle: Some(handle),
        }
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Returns whether the task is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancels the task. Calling it more than once is a no-op.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Rotation timer cancelled");
        }
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
