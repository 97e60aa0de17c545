//! Field schema for each resource type.
//!
//! Forms and the validator are both driven from these tables instead of one
//! hand-written form per resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a field is entered and checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Email address, checked against `local@domain.tld`
    Email,
    /// Secret text, never echoed back
    Password,
    /// Multi-line free text
    Multiline,
    /// Calendar date as sent by the server
    Date,
}

/// Description of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name (camelCase, as the API expects it)
    pub name: &'static str,
    /// Label shown to the operator
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true }
    }
}

const FEEDBACK_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("message", "Message", FieldKind::Multiline),
];

const VENDOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("phone", "Phone", FieldKind::Text),
    FieldSpec::required("password", "Password", FieldKind::Password),
    FieldSpec::required("aadhar", "Aadhar", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("address", "Address", FieldKind::Multiline),
    FieldSpec::required("areaName", "Area Name", FieldKind::Text),
    FieldSpec::required("gstNumber", "GST Number", FieldKind::Text),
    FieldSpec::required("vendorId", "Vendor ID", FieldKind::Text),
];

const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("employeeId", "Employee ID", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("phone", "Phone", FieldKind::Text),
    FieldSpec::required("department", "Department", FieldKind::Text),
    FieldSpec::required("position", "Position", FieldKind::Text),
    FieldSpec::required("joinDate", "Join Date", FieldKind::Date),
    FieldSpec::required("address", "Address", FieldKind::Multiline),
];

const CONTACT_INFO_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("phone", "Phone", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("address", "Address", FieldKind::Multiline),
];

/// The four resource types managed by the panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Feedback,
    Vendor,
    Employee,
    ContactInfo,
}

impl ResourceKind {
    /// Editable fields of this resource, in form order.
    pub const fn schema(self) -> &'static [FieldSpec] {
        match self {
            Self::Feedback => FEEDBACK_FIELDS,
            Self::Vendor => VENDOR_FIELDS,
            Self::Employee => EMPLOYEE_FIELDS,
            Self::ContactInfo => CONTACT_INFO_FIELDS,
        }
    }

    /// Look up a field by wire name.
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.schema().iter().find(|spec| spec.name == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Feedback => write!(f, "feedback"),
            Self::Vendor => write!(f, "vendor"),
            Self::Employee => write!(f, "employee"),
            Self::ContactInfo => write!(f, "contact info"),
        }
    }
}

/// A record whose editable fields can be read and written by wire name.
pub trait Draft {
    /// Resource whose schema describes this draft.
    const KIND: ResourceKind;

    /// Current text of a field, `None` for names outside the schema.
    fn value(&self, field: &str) -> Option<&str>;

    /// Overwrite a field. Returns `false` when the name is not in the schema.
    fn set_value(&mut self, field: &str, value: String) -> bool;

    /// Editable fields in form order.
    fn schema() -> &'static [FieldSpec] {
        Self::KIND.schema()
    }
}
