//! Employee approval screen.

use super::{PanelView, Patch, ResourcePanel};
use crate::error::PanelError;
use crate::settings::PanelSettings;
use crate::status::{StatusMessage, StatusSlot};
use crate::{LoadingHandle, TeardownHandle};
use adminpanel_client::AdminApi;
use adminpanel_types::{filter_records, Employee, EmployeeStatus, MessageResponse};
use std::sync::Arc;

/// Pending employee registrations with approve/reject actions and search.
///
/// Decided employees leave the list. Status messages expire after
/// [`PanelSettings::status_ttl`].
pub struct EmployeeApprovalPanel {
    api: Arc<dyn AdminApi>,
    panel: ResourcePanel<Employee>,
    filter: String,
}

impl EmployeeApprovalPanel {
    pub fn new(api: Arc<dyn AdminApi>, settings: PanelSettings) -> Self {
        let status = StatusSlot::expiring(settings.status_ttl());
        Self { api, panel: ResourcePanel::new(settings.refresh_strategy, status), filter: String::new() }
    }

    pub async fn load(&mut self) -> Result<(), PanelError> {
        self.panel.load(self.api.list_pending_employees(), "Failed to load employees").await
    }

    pub async fn approve(&mut self, id: &str) -> Result<(), PanelError> {
        self.decide(id, EmployeeStatus::Approved).await
    }

    pub async fn reject(&mut self, id: &str) -> Result<(), PanelError> {
        self.decide(id, EmployeeStatus::Rejected).await
    }

    async fn decide(&mut self, id: &str, status: EmployeeStatus) -> Result<(), PanelError> {
        let failure = format!("Failed to update employee status to {status}");
        self.panel
            .mutate(
                self.api.set_employee_status(id, status),
                |ack: MessageResponse| {
                    let message = ack
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| format!("Employee {} successfully", status.verb()));
                    (Patch::Remove(id.to_string()), message)
                },
                self.api.list_pending_employees(),
                &failure,
            )
            .await
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Rows matching the current search, recomputed on every call.
    pub fn visible(&self) -> Vec<&Employee> {
        filter_records(self.panel.items(), &self.filter)
    }

    pub fn view(&self) -> PanelView<'_, Employee> {
        self.panel.view_of(self.visible())
    }

    pub fn items(&self) -> &[Employee] {
        self.panel.items()
    }

    pub fn is_loading(&self) -> bool {
        self.panel.is_loading()
    }

    pub fn loading_handle(&self) -> LoadingHandle {
        self.panel.loading_handle()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.panel.status()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.panel.teardown_handle()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::settings::RefreshStrategy;
    use crate::status::Tone;
    use crate::testing::{employee, FakeApi};
    use adminpanel_client::ClientError;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn roster() -> Arc<FakeApi> {
        Arc::new(FakeApi::with_employees(vec![
            employee("1", "A", "E1", "a@x.com", "HR"),
            employee("2", "B", "E2", "b@x.com", "IT"),
        ]))
    }

    fn visible_names(panel: &EmployeeApprovalPanel) -> Vec<String> {
        panel.visible().iter().map(|e| e.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_filter_by_department_and_id() {
        let mut panel = EmployeeApprovalPanel::new(roster(), PanelSettings::default());
        panel.load().await.unwrap();

        panel.set_filter("hr");
        assert_eq!(visible_names(&panel), vec!["A"]);

        panel.set_filter("e");
        assert_eq!(visible_names(&panel), vec!["A", "B"]);

        panel.set_filter("finance");
        assert_eq!(panel.view(), PanelView::NoMatches);
        assert_eq!(panel.items().len(), 2);
    }

    #[tokio::test]
    async fn test_filter_tracks_list_changes() {
        let mut panel = EmployeeApprovalPanel::new(roster(), PanelSettings::default());
        panel.load().await.unwrap();
        panel.set_filter("x.com");
        assert_eq!(visible_names(&panel), vec!["A", "B"]);

        panel.approve("1").await.unwrap();
        assert_eq!(visible_names(&panel), vec!["B"]);
    }

    #[tokio::test]
    async fn test_decided_employee_leaves_list_under_both_strategies() {
        for strategy in [RefreshStrategy::Reload, RefreshStrategy::LocalPatch] {
            let api = roster();
            let settings = PanelSettings { refresh_strategy: strategy, ..Default::default() };
            let mut panel = EmployeeApprovalPanel::new(api.clone(), settings);
            panel.load().await.unwrap();

            panel.reject("2").await.unwrap();

            let ids: Vec<&str> = panel.items().iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["1"], "strategy {strategy}");
            assert_eq!(panel.status().map(|m| m.text.as_str()), Some("Employee rejected"));
            let stored = api.employees.lock().unwrap();
            assert_eq!(stored[1].status, EmployeeStatus::Rejected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_clears_after_five_seconds() {
        let mut panel = EmployeeApprovalPanel::new(roster(), PanelSettings::default());
        panel.load().await.unwrap();
        panel.approve("1").await.unwrap();
        assert!(panel.status().is_some());

        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(panel.status().is_none());
    }

    #[tokio::test]
    async fn test_failed_decision_keeps_employee() {
        let api = roster();
        let mut panel = EmployeeApprovalPanel::new(api.clone(), PanelSettings::default());
        panel.load().await.unwrap();

        api.fail_next(ClientError::Rejected { status: 500, message: None });
        assert!(panel.approve("1").await.is_err());

        assert_eq!(panel.items().len(), 2);
        let status = panel.status().unwrap();
        assert_eq!(status.tone, Tone::Error);
        assert_eq!(status.text, "Failed to update employee status to APPROVED");
    }
}
