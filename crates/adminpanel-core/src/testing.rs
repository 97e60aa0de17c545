//! In-memory stand-in for the admin API.
#![allow(clippy::unwrap_used, reason = "test double; a poisoned lock is a test bug")]

use adminpanel_client::{AdminApi, ClientError};
use adminpanel_types::{
    ContactInfo, Employee, EmployeeStatus, Feedback, MessageResponse, VendorDraft,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Default)]
pub(crate) struct FakeApi {
    pub feedback: Mutex<Vec<Feedback>>,
    pub employees: Mutex<Vec<Employee>>,
    pub vendors: Mutex<Vec<VendorDraft>>,
    pub contact: Mutex<Option<ContactInfo>>,
    /// Returned by the next call instead of its normal result.
    pub fail_next: Mutex<Option<ClientError>>,
    /// When set, saved contact info comes back as this value.
    pub contact_rewrite: Mutex<Option<ContactInfo>>,
    /// Returned by the call at this 1-based position in the call log.
    pub fail_at: Mutex<Option<(usize, ClientError)>>,
    /// When set, every call waits for a notification before answering.
    pub gate: Option<Arc<Notify>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_feedback(rows: Vec<Feedback>) -> Self {
        Self { feedback: Mutex::new(rows), ..Default::default() }
    }

    pub fn with_employees(rows: Vec<Employee>) -> Self {
        Self { employees: Mutex::new(rows), ..Default::default() }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn fail_next(&self, err: ClientError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn fail_at(&self, position: usize, err: ClientError) {
        *self.fail_at.lock().unwrap() = Some((position, err));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: &str) -> Result<(), ClientError> {
        let position = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call.to_string());
            calls.len()
        };
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        {
            let mut fail_at = self.fail_at.lock().unwrap();
            match fail_at.take() {
                Some((at, err)) if at == position => return Err(err),
                pending => *fail_at = pending,
            }
        }
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn not_found() -> ClientError {
    ClientError::Rejected { status: 404, message: Some("Not found".to_string()) }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn list_feedback(&self) -> Result<Vec<Feedback>, ClientError> {
        self.enter("GET feedback").await?;
        Ok(self.feedback.lock().unwrap().clone())
    }

    async fn approve_feedback(&self, id: &str) -> Result<Feedback, ClientError> {
        self.enter(&format!("PUT feedback/{id}/approve")).await?;
        let mut rows = self.feedback.lock().unwrap();
        let row = rows.iter_mut().find(|f| f.id == id).ok_or_else(not_found)?;
        row.approved = true;
        Ok(row.clone())
    }

    async fn delete_feedback(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.enter(&format!("DELETE feedback/{id}")).await?;
        let mut rows = self.feedback.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        if rows.len() == before {
            return Err(not_found());
        }
        Ok(MessageResponse { message: Some("Feedback deleted".to_string()) })
    }

    async fn create_vendor(&self, draft: &VendorDraft) -> Result<MessageResponse, ClientError> {
        self.enter("POST createVendor").await?;
        let mut vendors = self.vendors.lock().unwrap();
        if vendors.iter().any(|v| v.vendor_id == draft.vendor_id) {
            return Err(ClientError::Rejected {
                status: 400,
                message: Some("Duplicate vendorId".to_string()),
            });
        }
        vendors.push(draft.clone());
        Ok(MessageResponse { message: Some("Vendor created successfully".to_string()) })
    }

    async fn list_pending_employees(&self) -> Result<Vec<Employee>, ClientError> {
        self.enter("GET employees").await?;
        let rows = self.employees.lock().unwrap();
        Ok(rows.iter().filter(|e| !e.status.is_decided()).cloned().collect())
    }

    async fn set_employee_status(
        &self,
        id: &str,
        status: EmployeeStatus,
    ) -> Result<MessageResponse, ClientError> {
        self.enter(&format!("PUT employee-status/{id} {status}")).await?;
        let mut rows = self.employees.lock().unwrap();
        let row = rows.iter_mut().find(|e| e.id == id).ok_or_else(not_found)?;
        row.status = status;
        Ok(MessageResponse { message: Some(format!("Employee {}", status.verb())) })
    }

    async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ClientError> {
        self.enter("GET contact").await?;
        Ok(self.contact.lock().unwrap().clone())
    }

    async fn create_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError> {
        self.enter("POST contact").await?;
        Ok(self.store_contact(info))
    }

    async fn update_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError> {
        self.enter("PUT contact").await?;
        Ok(self.store_contact(info))
    }
}

impl FakeApi {
    fn store_contact(&self, info: &ContactInfo) -> ContactInfo {
        let saved = self.contact_rewrite.lock().unwrap().clone().unwrap_or_else(|| info.clone());
        *self.contact.lock().unwrap() = Some(saved.clone());
        saved
    }
}

pub(crate) fn feedback(id: &str, approved: bool) -> Feedback {
    Feedback {
        id: id.to_string(),
        name: format!("User {id}"),
        message: "Nice service".to_string(),
        rating: 4.0,
        approved,
    }
}

pub(crate) fn employee(id: &str, name: &str, employee_id: &str, email: &str, dept: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        employee_id: employee_id.to_string(),
        email: email.to_string(),
        department: dept.to_string(),
        ..Default::default()
    }
}
