//! The API surface panels depend on.

use crate::client::AdminClient;
use crate::error::ClientError;
use adminpanel_types::{ContactInfo, Employee, EmployeeStatus, Feedback, MessageResponse, VendorDraft};
use async_trait::async_trait;

/// One method per verb and resource of the admin API.
///
/// Implemented by [`AdminClient`]; tests substitute an in-memory double.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /api/feedback/admin/all`
    async fn list_feedback(&self) -> Result<Vec<Feedback>, ClientError>;

    /// `PUT /api/feedback/{id}/approve`
    async fn approve_feedback(&self, id: &str) -> Result<Feedback, ClientError>;

    /// `DELETE /api/feedback/{id}`
    async fn delete_feedback(&self, id: &str) -> Result<MessageResponse, ClientError>;

    /// `POST /api/admin/createVendor`
    async fn create_vendor(&self, draft: &VendorDraft) -> Result<MessageResponse, ClientError>;

    /// `GET /api/admin/admin-aproove-employee`
    async fn list_pending_employees(&self) -> Result<Vec<Employee>, ClientError>;

    /// `PUT /api/admin/employee-status/{id}`
    async fn set_employee_status(
        &self,
        id: &str,
        status: EmployeeStatus,
    ) -> Result<MessageResponse, ClientError>;

    /// `GET /api/contact-content`, `None` when nothing has been saved yet
    async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ClientError>;

    /// `POST /api/contact-content`
    async fn create_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError>;

    /// `PUT /api/contact-content`
    async fn update_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError>;
}

#[async_trait]
impl AdminApi for AdminClient {
    async fn list_feedback(&self) -> Result<Vec<Feedback>, ClientError> {
        Self::list_feedback(self).await
    }

    async fn approve_feedback(&self, id: &str) -> Result<Feedback, ClientError> {
        Self::approve_feedback(self, id).await
    }

    async fn delete_feedback(&self, id: &str) -> Result<MessageResponse, ClientError> {
        Self::delete_feedback(self, id).await
    }

    async fn create_vendor(&self, draft: &VendorDraft) -> Result<MessageResponse, ClientError> {
        Self::create_vendor(self, draft).await
    }

    async fn list_pending_employees(&self) -> Result<Vec<Employee>, ClientError> {
        Self::list_pending_employees(self).await
    }

    async fn set_employee_status(
        &self,
        id: &str,
        status: EmployeeStatus,
    ) -> Result<MessageResponse, ClientError> {
        Self::set_employee_status(self, id, status).await
    }

    async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ClientError> {
        Self::get_contact_info(self).await
    }

    async fn create_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError> {
        Self::create_contact_info(self, info).await
    }

    async fn update_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError> {
        Self::update_contact_info(self, info).await
    }
}
