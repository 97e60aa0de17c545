//! Contact-info editor: a view/edit state machine over a singleton.
//!
//! ```text
//! Viewing --edit--> Editing
//! Editing --cancel--> Viewing        (draft discarded, canonical state re-fetched)
//! Editing --save ok--> Viewing       (shows the server's copy)
//! Editing --save err--> Editing      (draft kept, error shown)
//! ```

use crate::error::PanelError;
use crate::lifecycle::{Lifecycle, LoadingGuard, LoadingHandle};
use crate::status::{StatusMessage, StatusSlot};
use crate::TeardownHandle;
use adminpanel_client::AdminApi;
use adminpanel_types::{validate, ContactInfo, Draft};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    Viewing,
    Editing,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Viewing => write!(f, "viewing"),
            Self::Editing => write!(f, "editing"),
        }
    }
}

pub struct ContactInfoEditor {
    api: Arc<dyn AdminApi>,
    /// Last copy the server confirmed; `None` until one has been saved.
    current: Option<ContactInfo>,
    draft: ContactInfo,
    mode: EditorMode,
    loading: Arc<AtomicBool>,
    status: StatusSlot,
    lifecycle: Lifecycle,
}

impl ContactInfoEditor {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            current: None,
            draft: ContactInfo::default(),
            mode: EditorMode::Viewing,
            loading: Arc::new(AtomicBool::new(false)),
            status: StatusSlot::persistent(),
            lifecycle: Lifecycle::new(),
        }
    }

    /// Fetch the canonical record. An in-progress draft is left alone.
    pub async fn load(&mut self) -> Result<(), PanelError> {
        let _loading = LoadingGuard::new(Arc::clone(&self.loading));
        match self.lifecycle.run(self.api.get_contact_info()).await? {
            Ok(info) => {
                self.current = info;
                if self.mode == EditorMode::Viewing {
                    self.draft = self.current.clone().unwrap_or_default();
                }
                Ok(())
            }
            Err(err) => {
                let err = PanelError::from(err);
                tracing::warn!("Failed to load contact information: {}", err);
                self.status.error(err.user_message("Failed to load contact information"));
                Err(err)
            }
        }
    }

    /// Viewing -> Editing, seeding the draft from the current record.
    pub fn edit(&mut self) -> Result<(), PanelError> {
        self.lifecycle.ensure_live()?;
        self.expect_mode(EditorMode::Viewing, "edit")?;
        self.draft = self.current.clone().unwrap_or_default();
        self.mode = EditorMode::Editing;
        Ok(())
    }

    /// Editing -> Viewing, discarding the draft and re-fetching.
    pub async fn cancel(&mut self) -> Result<(), PanelError> {
        self.lifecycle.ensure_live()?;
        self.expect_mode(EditorMode::Editing, "cancel")?;
        self.mode = EditorMode::Viewing;
        self.draft = self.current.clone().unwrap_or_default();
        self.load().await
    }

    /// Validate and persist the draft: POST when nothing exists yet, PUT otherwise.
    ///
    /// Success returns to Viewing with the server's copy, which may differ
    /// from what was sent. Failure stays in Editing with the draft intact.
    pub async fn save(&mut self) -> Result<(), PanelError> {
        self.lifecycle.ensure_live()?;
        self.expect_mode(EditorMode::Editing, "save")?;

        if let Err(err) = validate(&self.draft) {
            self.status.error(err.to_string());
            return Err(err.into());
        }

        let _loading = LoadingGuard::new(Arc::clone(&self.loading));
        let draft = self.draft.clone();
        let request = if self.current.is_some() {
            self.api.update_contact_info(&draft)
        } else {
            self.api.create_contact_info(&draft)
        };

        match self.lifecycle.run(request).await? {
            Ok(saved) => {
                tracing::info!("Contact information saved");
                self.draft = saved.clone();
                self.current = Some(saved);
                self.mode = EditorMode::Viewing;
                self.status.success("Contact information saved");
                Ok(())
            }
            Err(err) => {
                let err = PanelError::from(err);
                tracing::warn!("Failed to save contact information: {}", err);
                self.status.error(err.user_message("Failed to save contact information"));
                Err(err)
            }
        }
    }

    /// Set a draft field by wire name. Only allowed while editing.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<bool, PanelError> {
        self.expect_mode(EditorMode::Editing, "change a field")?;
        Ok(self.draft.set_value(field, value.into()))
    }

    pub fn draft_mut(&mut self) -> Option<&mut ContactInfo> {
        (self.mode == EditorMode::Editing).then_some(&mut self.draft)
    }

    /// What the host should show: the saved record while viewing, the draft
    /// while editing.
    pub fn displayed(&self) -> Option<&ContactInfo> {
        match self.mode {
            EditorMode::Viewing => self.current.as_ref(),
            EditorMode::Editing => Some(&self.draft),
        }
    }

    pub const fn current(&self) -> Option<&ContactInfo> {
        self.current.as_ref()
    }

    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Covers both the fetch and the save.
    pub fn loading_handle(&self) -> LoadingHandle {
        LoadingHandle::new(Arc::clone(&self.loading))
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.lifecycle.handle()
    }

    fn expect_mode(&self, expected: EditorMode, event: &'static str) -> Result<(), PanelError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(PanelError::InvalidTransition { mode: self.mode, event })
        }
    }
}
