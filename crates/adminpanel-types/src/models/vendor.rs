//! Vendor accounts created by an administrator.

use super::Record;
use crate::schema::{Draft, ResourceKind};
use serde::{Deserialize, Serialize};

/// Editable vendor fields, i.e. everything but the server-assigned id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VendorDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub aadhar: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub area_name: String,
    #[serde(default)]
    pub gst_number: String,
    /// Unique human-readable vendor code
    #[serde(default)]
    pub vendor_id: String,
}

impl Draft for VendorDraft {
    const KIND: ResourceKind = ResourceKind::Vendor;

    fn value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => &self.name,
            "phone" => &self.phone,
            "password" => &self.password,
            "aadhar" => &self.aadhar,
            "email" => &self.email,
            "address" => &self.address,
            "areaName" => &self.area_name,
            "gstNumber" => &self.gst_number,
            "vendorId" => &self.vendor_id,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn set_value(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "password" => &mut self.password,
            "aadhar" => &mut self.aadhar,
            "email" => &mut self.email,
            "address" => &mut self.address,
            "areaName" => &mut self.area_name,
            "gstNumber" => &mut self.gst_number,
            "vendorId" => &mut self.vendor_id,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// A vendor as stored by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vendor {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub details: VendorDraft,
}

impl Record for Vendor {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = VendorDraft {
            area_name: "Ward 4".to_string(),
            gst_number: "22AAAAA0000A1Z5".to_string(),
            vendor_id: "VND-001".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["areaName"], "Ward 4");
        assert_eq!(json["gstNumber"], "22AAAAA0000A1Z5");
        assert_eq!(json["vendorId"], "VND-001");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_set_value_by_wire_name() {
        let mut draft = VendorDraft::default();
        assert!(draft.set_value("areaName", "North".to_string()));
        assert!(!draft.set_value("area_name", "South".to_string()));
        assert_eq!(draft.value("areaName"), Some("North"));
    }

    #[test]
    fn test_vendor_flattens_details() {
        let json = r#"{"_id":"v1","name":"Ravi","vendorId":"VND-9"}"#;
        let vendor: Vendor = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.id(), "v1");
        assert_eq!(vendor.details.vendor_id, "VND-9");
    }
}
