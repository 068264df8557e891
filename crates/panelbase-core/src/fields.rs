//! Field requirement descriptors consumed by downstream validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BRAND_AFFINITY: &str = "brandAffinity";
pub const AUDIENCE_OPTIMISER: &str = "audienceOptimiser";

/// Declares which record field a capability needs, and what it defaults to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    /// Key path of the field within a record.
    pub address: String,
    pub required_for: Vec<String>,
    pub required: bool,
    pub default: Value,
    /// Allowed values; empty means unconstrained.
    pub values: Vec<Value>,
}

impl FieldDescriptor {
    pub fn is_required_for(&self, capability: &str) -> bool {
        self.required && self.required_for.iter().any(|c| c == capability)
    }

    /// Whether `record` carries a non-null value at this descriptor's address.
    ///
    /// Dotted addresses walk nested objects.
    pub fn is_present_in(&self, record: &Value) -> bool {
        let mut current = record;
        for key in self.address.split('.') {
            match current.get(key) {
                Some(next) => current = next,
                None => return false,
            }
        }
        !current.is_null()
    }
}

/// The fixed descriptor list shipped with the catalog.
pub fn standard_fields() -> Vec<FieldDescriptor> {
    let capabilities = vec![BRAND_AFFINITY.to_string(), AUDIENCE_OPTIMISER.to_string()];
    vec![
        FieldDescriptor {
            name: "travelPast".into(),
            address: "travelPast".into(),
            required_for: capabilities.clone(),
            required: true,
            default: Value::Bool(true),
            values: Vec::new(),
        },
        FieldDescriptor {
            name: "datasource".into(),
            address: "datasource".into(),
            required_for: capabilities,
            required: true,
            default: Value::from("travelPast"),
            values: vec![Value::from("travelPast")],
        },
    ]
}
