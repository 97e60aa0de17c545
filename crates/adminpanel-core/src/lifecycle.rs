//! Teardown signalling and the scoped loading flag with its read handle.

use crate::error::PanelError;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Lets a host tear a controller down while a request is in flight.
#[derive(Debug, Clone)]
pub struct TeardownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl TeardownHandle {
    /// Discard any pending response and refuse further operations.
    pub fn teardown(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_torn_down(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Per-controller teardown state.
#[derive(Debug)]
pub(crate) struct Lifecycle {
    tx: Arc<watch::Sender<bool>>,
}

impl Lifecycle {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub(crate) fn handle(&self) -> TeardownHandle {
        TeardownHandle { tx: Arc::clone(&self.tx) }
    }

    pub(crate) fn ensure_live(&self) -> Result<(), PanelError> {
        if *self.tx.borrow() {
            return Err(PanelError::Detached);
        }
        Ok(())
    }

    /// Await `fut` unless teardown happens first.
    ///
    /// A result that completes on the same poll as teardown is still dropped.
    pub(crate) async fn run<F: Future>(&self, fut: F) -> Result<F::Output, PanelError> {
        self.ensure_live()?;
        let rx = self.tx.subscribe();

        tokio::select! {
            biased;
            () = torn_down(rx) => Err(PanelError::Detached),
            out = fut => {
                self.ensure_live()?;
                Ok(out)
            }
        }
    }
}

async fn torn_down(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow_and_update() {
        if rx.changed().await.is_err() {
            // Sender gone means the controller is gone; nothing left to signal.
            std::future::pending::<()>().await;
        }
    }
}

/// Read-only view of a controller's loading flag.
///
/// Operations borrow their controller mutably for the whole request, so a
/// host that wants to draw a spinner meanwhile keeps one of these instead.
#[derive(Debug, Clone)]
pub struct LoadingHandle {
    flag: Arc<AtomicBool>,
}

impl LoadingHandle {
    pub(crate) const fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    pub fn is_loading(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// RAII guard that holds a loading flag up for the duration of a request.
/// Clears the flag on drop, whichever way the request ends.
pub(crate) struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl LoadingGuard {
    pub(crate) fn new(flag: Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
