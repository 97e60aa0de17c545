//! Generic list panel and its two concrete screens.
//!
//! [`ResourcePanel`] owns the cached rows, the loading flag, the status line
//! and teardown state. Screens wrap it with an API handle and decide which
//! endpoint backs each action.

mod employee;
mod feedback;

pub use employee::EmployeeApprovalPanel;
pub use feedback::FeedbackPanel;

use crate::error::{PanelError, RELOAD_FAILURE};
use crate::lifecycle::{Lifecycle, LoadingGuard, LoadingHandle};
use crate::settings::RefreshStrategy;
use crate::status::{StatusMessage, StatusSlot};
use crate::TeardownHandle;
use adminpanel_client::ClientError;
use adminpanel_types::Record;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What the host should draw.
#[derive(Debug, PartialEq)]
pub enum PanelView<'a, T> {
    /// A fetch is in flight. Hosts that render while awaiting read the
    /// flag through [`ResourcePanel::loading_handle`].
    Loading,
    /// There are no records at all (also before the first load).
    Empty,
    /// Records exist but the search excludes every one of them.
    NoMatches,
    /// Rows to render, in server order.
    Rows(Vec<&'a T>),
}

/// In-place change applied to the cached list after a successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// Drop the row with this id.
    Remove(String),
    /// Swap in the server's copy of a row, matched by id.
    Replace(T),
}

/// Cached list of `T` with loading, status and teardown handling.
#[derive(Debug)]
pub struct ResourcePanel<T> {
    items: Vec<T>,
    loading: Arc<AtomicBool>,
    status: StatusSlot,
    strategy: RefreshStrategy,
    lifecycle: Lifecycle,
}

impl<T: Record> ResourcePanel<T> {
    pub fn new(strategy: RefreshStrategy, status: StatusSlot) -> Self {
        Self {
            items: Vec::new(),
            loading: Arc::new(AtomicBool::new(false)),
            status,
            strategy,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Shared view of the loading flag, readable while `load` or `mutate`
    /// holds the panel.
    pub fn loading_handle(&self) -> LoadingHandle {
        LoadingHandle::new(Arc::clone(&self.loading))
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    pub const fn strategy(&self) -> RefreshStrategy {
        self.strategy
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.lifecycle.handle()
    }

    /// Render state over an already-filtered selection of rows.
    pub fn view_of<'a>(&'a self, rows: Vec<&'a T>) -> PanelView<'a, T> {
        if self.is_loading() {
            PanelView::Loading
        } else if self.items.is_empty() {
            PanelView::Empty
        } else if rows.is_empty() {
            PanelView::NoMatches
        } else {
            PanelView::Rows(rows)
        }
    }

    /// Render state over every cached row.
    pub fn view(&self) -> PanelView<'_, T> {
        self.view_of(self.items.iter().collect())
    }

    /// Replace the cached rows with the result of `fetch`.
    ///
    /// On failure the previous rows stay and the status shows `failure`
    /// (or the server's own message).
    pub async fn load<F>(&mut self, fetch: F, failure: &str) -> Result<(), PanelError>
    where
        F: Future<Output = Result<Vec<T>, ClientError>>,
    {
        let _loading = LoadingGuard::new(Arc::clone(&self.loading));
        match self.lifecycle.run(fetch).await? {
            Ok(items) => {
                tracing::debug!("Loaded {} rows", items.len());
                self.items = items;
                if self.status.current().is_some_and(StatusMessage::is_error) {
                    self.status.clear();
                }
                Ok(())
            }
            Err(err) => Err(self.fail(err.into(), failure)),
        }
    }

    /// Run a mutation, then reload or patch according to the strategy.
    ///
    /// `on_success` turns the server's answer into the local patch and the
    /// success message. `reload` is only polled under
    /// [`RefreshStrategy::Reload`]. A failed mutation leaves the rows
    /// untouched. A failed reload after a saved mutation applies the patch
    /// and returns [`PanelError::RefreshFailed`].
    pub async fn mutate<C, O, R>(
        &mut self,
        call: C,
        on_success: impl FnOnce(O) -> (Patch<T>, String),
        reload: R,
        failure: &str,
    ) -> Result<(), PanelError>
    where
        C: Future<Output = Result<O, ClientError>>,
        R: Future<Output = Result<Vec<T>, ClientError>>,
    {
        let output = match self.lifecycle.run(call).await? {
            Ok(output) => output,
            Err(err) => return Err(self.fail(err.into(), failure)),
        };

        let (patch, message) = on_success(output);
        tracing::info!("{}", message);
        match self.strategy {
            RefreshStrategy::LocalPatch => self.apply(patch),
            RefreshStrategy::Reload => {
                let _loading = LoadingGuard::new(Arc::clone(&self.loading));
                match self.lifecycle.run(reload).await? {
                    Ok(items) => self.items = items,
                    Err(err) => {
                        let err = PanelError::from(err);
                        tracing::warn!("{}: {}", RELOAD_FAILURE, err);
                        self.apply(patch);
                        self.status.error(RELOAD_FAILURE);
                        return Err(PanelError::RefreshFailed(err.to_string()));
                    }
                }
            }
        }
        self.status.success(message);
        Ok(())
    }

    /// Apply a patch to the cached rows. Unknown ids are ignored.
    pub fn apply(&mut self, patch: Patch<T>) {
        match patch {
            Patch::Remove(id) => self.items.retain(|item| item.id() != id),
            Patch::Replace(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|item| item.id() == updated.id()) {
                    *slot = updated;
                }
            }
        }
    }

    /// Record a failure in the status line and hand the error back.
    fn fail(&mut self, err: PanelError, fallback: &str) -> PanelError {
        tracing::warn!("{}: {}", fallback, err);
        self.status.error(err.user_message(fallback));
        err
    }
}
