//! Default record template for new site documents.

use serde::{Deserialize, Serialize};

/// Schema revision written into every new record.
pub const TEMPLATE_VERSION: i32 = 3;

/// Starting point for a new site record.
///
/// Field names serialize to the document keys the downstream collections use
/// (`__v`, `_id`, camelCase elsewhere). `id` and `name` are left for the caller
/// to assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultRecordTemplate {
    #[serde(rename = "__v")]
    pub legacy_version: i32,
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub processed: bool,
    pub version: i32,
    /// "HH:MM" local time.
    pub minimum_retrigger_time: String,
    pub enable_check_out: bool,
    pub active_all_day: bool,
    pub tags: Vec<String>,
    pub category_tags: Vec<String>,
    pub brand_tags: Vec<String>,
    pub category: String,
    pub subcategory: String,
    pub lease: bool,
    pub country: String,
    pub organisation_type: String,
    pub managed: bool,
    pub travel_past: bool,
    pub datasource: String,
}

impl Default for DefaultRecordTemplate {
    fn default() -> Self {
        Self {
            legacy_version: 0,
            id: None,
            name: None,
            processed: false,
            version: TEMPLATE_VERSION,
            minimum_retrigger_time: "06:00".into(),
            enable_check_out: true,
            active_all_day: true,
            tags: Vec::new(),
            category_tags: Vec::new(),
            brand_tags: Vec::new(),
            category: "Custom".into(),
            subcategory: "Outdoor Media".into(),
            lease: false,
            country: "NZ".into(),
            organisation_type: "physical".into(),
            managed: false,
            travel_past: true,
            datasource: "travelPast".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_schema_revision() {
        let t = DefaultRecordTemplate::default();
        assert_eq!(t.version, 3);
        assert_eq!(t.legacy_version, 0);
        assert!(t.id.is_none());
        assert!(t.name.is_none());
        assert!(!t.processed);
        assert_eq!(t.minimum_retrigger_time, "06:00");
        assert_eq!(t.category, "Custom");
        assert_eq!(t.subcategory, "Outdoor Media");
        assert_eq!(t.country, "NZ");
        assert_eq!(t.datasource, "travelPast");
    }

    #[test]
    fn serializes_document_keys() {
        let json = serde_json::to_value(DefaultRecordTemplate::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["__v"], 0);
        assert!(obj["_id"].is_null());
        assert_eq!(obj["minimumRetriggerTime"], "06:00");
        assert_eq!(obj["organisationType"], "physical");
        assert_eq!(obj["travelPast"], true);
        assert_eq!(obj["categoryTags"], serde_json::json!([]));
        assert_eq!(obj.len(), 19);
    }

    #[test]
    fn deserializes_partial_override() {
        let mut json = serde_json::to_value(DefaultRecordTemplate::default()).unwrap();
        json["name"] = "Queen St North".into();
        json["tags"] = serde_json::json!(["cbd"]);
        let parsed: DefaultRecordTemplate = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Queen St North"));
        assert_eq!(parsed.tags, vec!["cbd".to_string()]);
    }
}
