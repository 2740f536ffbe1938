use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::repository::SeriesRepository;

/// Handle to a background refresh loop.
///
/// Call [`stop`](Self::stop) for graceful shutdown. Dropping the handle sends
/// a best-effort stop signal and aborts the task if it hasn't finished.
pub struct PollHandle {
    inner: Option<JoinHandle<()>>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl PollHandle {
    /// Stop the refresh loop and wait for it to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.inner.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.inner.take()
            && !handle.is_finished()
        {
            handle.abort();
        }
    }
}

/// Spawn a loop that refreshes `repo` every `period`, starting immediately.
///
/// Ticks that land while a refresh is still in flight are dropped, never
/// queued: a slow backend yields stale data, not a backlog of requests.
/// Refresh failures keep the previous dataset and the loop running.
pub(crate) fn spawn_poller(repo: Arc<SeriesRepository>, period: Duration) -> PollHandle {
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let busy = Arc::new(AtomicBool::new(false));
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    if busy.swap(true, Ordering::AcqRel) {
                        // Previous refresh still running; skip this tick.
                        #[cfg(feature = "tracing")]
                        tracing::warn!("refresh still in flight, dropping tick");
                        continue;
                    }
                    let repo = Arc::clone(&repo);
                    let busy = Arc::clone(&busy);
                    // Run the fetch off the tick loop so the schedule keeps
                    // firing while a slow refresh is in flight.
                    tokio::spawn(async move {
                        if let Err(_e) = repo.refresh().await {
                            #[cfg(feature = "tracing")]
                            tracing::warn!(error = %_e, "scheduled refresh failed, keeping last dataset");
                        }
                        busy.store(false, Ordering::Release);
                    });
                }
            }
        }
    });

    PollHandle {
        inner: Some(handle),
        stop_tx: Some(stop_tx),
    }
}
