//! Draft-holding forms: create-only forms and the contact-info editor.

mod contact;
mod vendor;

pub use contact::{ContactInfoEditor, EditorMode};
pub use vendor::VendorForm;

use crate::error::PanelError;
use crate::lifecycle::{Lifecycle, LoadingGuard, LoadingHandle};
use crate::status::{StatusMessage, StatusSlot};
use crate::TeardownHandle;
use adminpanel_client::ClientError;
use adminpanel_types::{validate, Draft, MessageResponse, ValidationError};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A form that creates one record from a draft and starts over on success.
#[derive(Debug)]
pub struct CreateForm<D> {
    draft: D,
    submitting: Arc<AtomicBool>,
    status: StatusSlot,
    lifecycle: Lifecycle,
}

impl<D: Draft + Default> CreateForm<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            submitting: Arc::new(AtomicBool::new(false)),
            status: StatusSlot::persistent(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Set a field by wire name; `false` if the schema has no such field.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.draft.set_value(field, value.into())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.draft)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Shared view of the submitting flag, readable while `submit` runs.
    pub fn submitting_handle(&self) -> LoadingHandle {
        LoadingHandle::new(Arc::clone(&self.submitting))
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.lifecycle.handle()
    }

    /// Validate, then await `send`.
    ///
    /// `send` is never polled when validation fails. On success the draft is
    /// reset to its empty default; on failure it is kept for correction.
    pub async fn submit<F>(&mut self, send: F, success: &str, failure: &str) -> Result<(), PanelError>
    where
        F: Future<Output = Result<MessageResponse, ClientError>>,
    {
        self.lifecycle.ensure_live()?;
        if let Err(err) = self.validate() {
            self.status.error(err.to_string());
            return Err(err.into());
        }

        let _submitting = LoadingGuard::new(Arc::clone(&self.submitting));
        match self.lifecycle.run(send).await? {
            Ok(ack) => {
                let message =
                    ack.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| success.to_string());
                tracing::info!("{}", message);
                self.draft = D::default();
                self.status.success(message);
                Ok(())
            }
            Err(err) => {
                let err = PanelError::from(err);
                tracing::warn!("{}: {}", failure, err);
                self.status.error(err.user_message(failure));
                Err(err)
            }
        }
    }
}

impl<D: Draft + Default> Default for CreateForm<D> {
    fn default() -> Self {
        Self::new()
    }
}
