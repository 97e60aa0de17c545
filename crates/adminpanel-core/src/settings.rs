//! Behaviour knobs shared by the panels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// What a list panel does after a successful mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshStrategy {
    /// Re-fetch the list from the server
    #[default]
    Reload,
    /// Patch the cached list in place (remove or replace by id)
    LocalPatch,
}

impl fmt::Display for RefreshStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Reload => write!(f, "reload"),
            Self::LocalPatch => write!(f, "local_patch"),
        }
    }
}

/// Panel behaviour loaded from host configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelSettings {
    #[serde(default)]
    pub refresh_strategy: RefreshStrategy,
    /// Lifetime of the employee panel's status message.
    #[serde(default = "default_status_ttl_secs")]
    pub status_ttl_secs: u64,
}

const fn default_status_ttl_secs() -> u64 {
    5
}

impl PanelSettings {
    pub const fn status_ttl(&self) -> Duration {
        Duration::from_secs(self.status_ttl_secs)
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self { refresh_strategy: RefreshStrategy::default(), status_ttl_secs: default_status_ttl_secs() }
    }
}
