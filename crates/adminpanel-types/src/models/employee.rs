//! Employees registered by vendors and awaiting admin approval.

use super::Record;
use crate::filter::Searchable;
use crate::schema::{Draft, ResourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval state of an employee registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EmployeeStatus {
    /// Approved and rejected are terminal; an employee is decided once.
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Past-tense verb used in operator messages.
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Pending => "reset",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Request body for the employee status endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: EmployeeStatus,
}

/// Read-only copy of the vendor that registered an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VendorSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vendor_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// An employee record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<VendorSnapshot>,
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.employee_id.as_str(),
            self.email.as_str(),
            self.department.as_str(),
        ]
    }
}

impl Draft for Employee {
    const KIND: ResourceKind = ResourceKind::Employee;

    fn value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => &self.name,
            "employeeId" => &self.employee_id,
            "email" => &self.email,
            "phone" => &self.phone,
            "department" => &self.department,
            "position" => &self.position,
            "joinDate" => &self.join_date,
            "address" => &self.address,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn set_value(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "employeeId" => &mut self.employee_id,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "department" => &mut self.department,
            "position" => &mut self.position,
            "joinDate" => &mut self.join_date,
            "address" => &mut self.address,
            _ => return false,
        };
        *slot = value;
        true
    }
}
