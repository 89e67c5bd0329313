//! Fixed-cadence playback of a recorded position track.
//!
//! # Cancellation model
//!
//! The worker waits out each interval on a channel rather than sleeping:
//! `recv_timeout` returns early the moment a cancel signal (or a dropped
//! handle) arrives, and [`ReplayHandle::cancel`] joins the worker before
//! returning.  That join is what makes the guarantee hard: once `cancel`
//! returns, no further callback can run.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use nav_core::GeoPoint;

/// Play back `positions` by invoking `on_position` once per element, in
/// order, each delivery after one `interval` elapses.  Stops on its own
/// after the last element.
///
/// The callback runs on a dedicated worker thread; hosts that require
/// single-threaded delivery (one position processed to completion at a
/// time) forward from the callback into their own event loop.
pub fn replay<F>(positions: Vec<GeoPoint>, interval: Duration, mut on_position: F) -> ReplayHandle
where
    F: FnMut(GeoPoint) + Send + 'static,
{
    let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

    let worker = thread::spawn(move || {
        for position in positions {
            match cancel_rx.recv_timeout(interval) {
                // Cancelled, or the handle was dropped: stop silently.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                Err(RecvTimeoutError::Timeout) => on_position(position),
            }
        }
    });

    ReplayHandle { cancel_tx, worker: Some(worker) }
}

/// Handle to an in-flight replay.
///
/// Dropping the handle cancels the replay the same way [`cancel`] does —
/// hold it (or call [`wait`]) to let playback run to the end.
///
/// [`cancel`]: ReplayHandle::cancel
/// [`wait`]: ReplayHandle::wait
pub struct ReplayHandle {
    cancel_tx: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl ReplayHandle {
    /// Stop playback early.  When this returns, the worker has exited and no
    /// further callback will run.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    /// Block until playback finishes naturally (all positions delivered).
    pub fn wait(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    /// `true` once the worker has exited, whether it ran out of positions or
    /// was cancelled.
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(|w| w.is_finished())
    }

    fn shutdown(&mut self) {
        // Send fails only if the worker already exited; either way the join
        // below settles it.
        let _ = self.cancel_tx.send(());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for ReplayHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
