//! Vendor creation form.

use super::CreateForm;
use crate::error::PanelError;
use crate::status::StatusMessage;
use crate::{LoadingHandle, TeardownHandle};
use adminpanel_client::AdminApi;
use adminpanel_types::VendorDraft;
use std::sync::Arc;

pub struct VendorForm {
    api: Arc<dyn AdminApi>,
    form: CreateForm<VendorDraft>,
}

impl VendorForm {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api, form: CreateForm::new() }
    }

    pub fn draft(&self) -> &VendorDraft {
        self.form.draft()
    }

    pub fn draft_mut(&mut self) -> &mut VendorDraft {
        self.form.draft_mut()
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.form.set_field(field, value)
    }

    /// POST the draft to `createVendor`; clears the draft on success.
    pub async fn submit(&mut self) -> Result<(), PanelError> {
        let draft = self.form.draft().clone();
        self.form
            .submit(
                self.api.create_vendor(&draft),
                "Vendor created successfully",
                "Failed to create vendor",
            )
            .await
    }

    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    pub fn submitting_handle(&self) -> LoadingHandle {
        self.form.submitting_handle()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.form.status()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.form.teardown_handle()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::status::Tone;
    use crate::testing::FakeApi;
    use pretty_assertions::assert_eq;
    use tokio::sync::Notify;

    fn fill(form: &mut VendorForm, vendor_id: &str) {
        for (field, value) in [
            ("name", "Ravi Stores"),
            ("phone", "9876543210"),
            ("password", "s3cret"),
            ("aadhar", "123456789012"),
            ("email", "ravi@stores.in"),
            ("address", "12 Market Road"),
            ("areaName", "Ward 4"),
            ("gstNumber", "22AAAAA0000A1Z5"),
            ("vendorId", vendor_id),
        ] {
            assert!(form.set_field(field, value), "unknown field {field}");
        }
    }

    #[tokio::test]
    async fn test_successful_submit_clears_draft() {
        let api = Arc::new(FakeApi::default());
        let mut form = VendorForm::new(api.clone());
        fill(&mut form, "VND-001");

        form.submit().await.unwrap();

        assert_eq!(form.draft(), &VendorDraft::default());
        assert_eq!(form.status().map(|m| m.text.as_str()), Some("Vendor created successfully"));
        assert_eq!(api.vendors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_vendor_keeps_draft() {
        let api = Arc::new(FakeApi::default());
        let mut form = VendorForm::new(api.clone());
        fill(&mut form, "VND-001");
        form.submit().await.unwrap();

        fill(&mut form, "VND-001");
        let result = form.submit().await;

        assert!(matches!(result, Err(PanelError::Rejected { status: 400, .. })));
        assert_eq!(form.draft().vendor_id, "VND-001");
        assert_eq!(form.draft().name, "Ravi Stores");
        let status = form.status().unwrap();
        assert_eq!((status.text.as_str(), status.tone), ("Duplicate vendorId", Tone::Error));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_server() {
        let api = Arc::new(FakeApi::default());
        let mut form = VendorForm::new(api.clone());
        fill(&mut form, "VND-001");
        form.set_field("email", "a @b.co");

        let result = form.submit().await;

        assert!(matches!(result, Err(PanelError::Validation(_))));
        assert!(api.calls().is_empty());
        assert_eq!(
            form.status().map(|m| m.text.as_str()),
            Some("Email must be a valid email address")
        );
        assert_eq!(form.draft().email, "a @b.co");
    }

    #[tokio::test]
    async fn test_submitting_handle_covers_the_request() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(FakeApi::default().gated(Arc::clone(&gate)));
        let mut form = VendorForm::new(api);
        fill(&mut form, "VND-002");
        let submitting = form.submitting_handle();

        let (result, seen) = tokio::join!(form.submit(), async {
            let seen = submitting.is_loading();
            gate.notify_one();
            seen
        });

        result.unwrap();
        assert!(seen);
        assert!(!submitting.is_loading());
    }

    #[tokio::test]
    async fn test_blank_form_reports_first_field() {
        let api = Arc::new(FakeApi::default());
        let mut form = VendorForm::new(api);

        let result = form.submit().await;
        assert_eq!(result.unwrap_err().to_string(), "Name is required");
    }
}
