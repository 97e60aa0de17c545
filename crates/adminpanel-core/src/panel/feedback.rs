//! Feedback moderation screen.

use super::{PanelView, Patch, ResourcePanel};
use crate::error::PanelError;
use crate::settings::PanelSettings;
use crate::status::{StatusMessage, StatusSlot};
use crate::{LoadingHandle, TeardownHandle};
use adminpanel_client::AdminApi;
use adminpanel_types::Feedback;
use std::sync::Arc;

/// Lists all feedback and lets a moderator approve or delete entries.
///
/// Status messages persist until the next action.
pub struct FeedbackPanel {
    api: Arc<dyn AdminApi>,
    panel: ResourcePanel<Feedback>,
}

impl FeedbackPanel {
    pub fn new(api: Arc<dyn AdminApi>, settings: PanelSettings) -> Self {
        Self { api, panel: ResourcePanel::new(settings.refresh_strategy, StatusSlot::persistent()) }
    }

    pub async fn load(&mut self) -> Result<(), PanelError> {
        self.panel.load(self.api.list_feedback(), "Failed to load feedback").await
    }

    pub async fn approve(&mut self, id: &str) -> Result<(), PanelError> {
        self.panel
            .mutate(
                self.api.approve_feedback(id),
                |mut updated: Feedback| {
                    if updated.id.is_empty() {
                        updated.id = id.to_string();
                    }
                    updated.approved = true;
                    (Patch::Replace(updated), "Feedback approved".to_string())
                },
                self.api.list_feedback(),
                "Failed to approve feedback",
            )
            .await
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), PanelError> {
        self.panel
            .mutate(
                self.api.delete_feedback(id),
                |_| (Patch::Remove(id.to_string()), "Feedback deleted".to_string()),
                self.api.list_feedback(),
                "Failed to delete feedback",
            )
            .await
    }

    pub fn items(&self) -> &[Feedback] {
        self.panel.items()
    }

    /// Entries still waiting for approval.
    pub fn pending(&self) -> impl Iterator<Item = &Feedback> {
        self.panel.items().iter().filter(|f| f.is_pending())
    }

    pub fn view(&self) -> PanelView<'_, Feedback> {
        self.panel.view()
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
    use crate::testing::{feedback, FakeApi};
    use adminpanel_client::ClientError;
    use pretty_assertions::assert_eq;
    use tokio::sync::Notify;

    fn settings(strategy: RefreshStrategy) -> PanelSettings {
        PanelSettings { refresh_strategy: strategy, ..Default::default() }
    }

    fn seeded() -> Arc<FakeApi> {
        Arc::new(FakeApi::with_feedback(vec![
            feedback("f1", false),
            feedback("f2", false),
            feedback("f3", true),
        ]))
    }

    fn pending_ids(panel: &FeedbackPanel) -> Vec<String> {
        panel.pending().map(|f| f.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_approve_removes_from_pending_under_both_strategies() {
        for strategy in [RefreshStrategy::Reload, RefreshStrategy::LocalPatch] {
            let api = seeded();
            let mut panel = FeedbackPanel::new(api.clone(), settings(strategy));
            panel.load().await.unwrap();
            assert_eq!(pending_ids(&panel), vec!["f1", "f2"]);

            panel.approve("f1").await.unwrap();

            assert_eq!(pending_ids(&panel), vec!["f2"], "strategy {strategy}");
            assert_eq!(panel.items().len(), 3);
            let status = panel.status().unwrap();
            assert_eq!((status.text.as_str(), status.tone), ("Feedback approved", Tone::Success));
        }
    }

    #[tokio::test]
    async fn test_delete_shrinks_list_by_one() {
        for strategy in [RefreshStrategy::Reload, RefreshStrategy::LocalPatch] {
            let api = seeded();
            let mut panel = FeedbackPanel::new(api.clone(), settings(strategy));
            panel.load().await.unwrap();

            panel.delete("f2").await.unwrap();

            let ids: Vec<&str> = panel.items().iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["f1", "f3"], "strategy {strategy}");
        }
    }

    #[tokio::test]
    async fn test_reload_strategy_refetches_after_mutation() {
        let api = seeded();
        let mut panel = FeedbackPanel::new(api.clone(), settings(RefreshStrategy::Reload));
        panel.load().await.unwrap();
        panel.delete("f1").await.unwrap();

        assert_eq!(api.calls(), vec!["GET feedback", "DELETE feedback/f1", "GET feedback"]);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_rows_and_reports() {
        let api = seeded();
        let mut panel = FeedbackPanel::new(api.clone(), PanelSettings::default());
        panel.load().await.unwrap();

        api.fail_next(ClientError::Rejected { status: 403, message: Some("Forbidden".to_string()) });
        let result = panel.delete("f1").await;

        assert!(matches!(result, Err(PanelError::Rejected { status: 403, .. })));
        assert_eq!(panel.items().len(), 3);
        let status = panel.status().unwrap();
        assert_eq!((status.text.as_str(), status.tone), ("Forbidden", Tone::Error));
    }

    #[tokio::test]
    async fn test_network_failure_uses_generic_message() {
        let api = seeded();
        let mut panel = FeedbackPanel::new(api.clone(), PanelSettings::default());

        api.fail_next(ClientError::Network("connection refused".to_string()));
        assert!(panel.load().await.is_err());

        assert_eq!(panel.view(), PanelView::Empty);
        assert!(!panel.is_loading());
        assert_eq!(panel.status().map(|m| m.text.as_str()), Some("Failed to load feedback"));
    }

    #[tokio::test]
    async fn test_empty_server_list_renders_empty_state() {
        let api = Arc::new(FakeApi::default());
        let mut panel = FeedbackPanel::new(api, PanelSettings::default());
        assert_eq!(panel.view(), PanelView::Empty);

        panel.load().await.unwrap();
        assert_eq!(panel.view(), PanelView::Empty);
    }

    #[tokio::test]
    async fn test_delete_survives_failed_refresh() {
        let api = seeded();
        let mut panel = FeedbackPanel::new(api.clone(), settings(RefreshStrategy::Reload));
        panel.load().await.unwrap();

        // Call 1 was the load; 2 is the delete, 3 the reload.
        api.fail_at(3, ClientError::Network("reset".to_string()));
        let result = panel.delete("f1").await;

        assert!(matches!(result, Err(PanelError::RefreshFailed(_))));
        assert_eq!(api.feedback.lock().unwrap().len(), 2);
        let ids: Vec<&str> = panel.items().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f2", "f3"]);
        let status = panel.status().unwrap();
        assert_eq!(
            (status.text.as_str(), status.tone),
            ("Change saved, but refreshing the list failed", Tone::Error)
        );
        assert!(!panel.is_loading());
    }

    #[tokio::test]
    async fn test_loading_handle_reads_true_while_fetch_pending() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(
            FakeApi::with_feedback(vec![feedback("f1", false)]).gated(Arc::clone(&gate)),
        );
        let mut panel = FeedbackPanel::new(api, PanelSettings::default());
        let loading = panel.loading_handle();
        assert!(!loading.is_loading());

        let (result, seen) = tokio::join!(panel.load(), async {
            let seen = loading.is_loading();
            gate.notify_one();
            seen
        });

        result.unwrap();
        assert!(seen);
        assert!(!loading.is_loading());
        assert_eq!(panel.items().len(), 1);
    }

    #[tokio::test]
    async fn test_response_after_teardown_is_discarded() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(
            FakeApi::with_feedback(vec![feedback("f1", false)]).gated(Arc::clone(&gate)),
        );
        let mut panel = FeedbackPanel::new(api, PanelSettings::default());
        let handle = panel.teardown_handle();

        let (result, ()) = tokio::join!(panel.load(), async {
            handle.teardown();
            gate.notify_one();
        });

        assert_eq!(result, Err(PanelError::Detached));
        assert!(panel.items().is_empty());
        assert!(panel.status().is_none());
        assert!(!panel.is_loading());
        assert_eq!(panel.approve("f1").await, Err(PanelError::Detached));
    }
}
