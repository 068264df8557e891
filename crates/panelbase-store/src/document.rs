//! BSON conversion for catalog types.

use mongodb::bson::{self, Document, oid::ObjectId};
use panelbase_core::{DefaultRecordTemplate, SiteRecord};

use crate::StoreError;

pub fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|err| StoreError::InvalidObjectId {
        id: id.to_string(),
        message: err.to_string(),
    })
}

/// The template as an insertable document.
///
/// A caller-assigned `_id` must be an object id hex string and is stored as
/// an `ObjectId`; an unassigned one stays null.
pub fn template_document(template: &DefaultRecordTemplate) -> Result<Document, StoreError> {
    let mut doc = bson::to_document(template)?;
    if let Some(id) = &template.id {
        doc.insert("_id", parse_object_id(id)?);
    }
    Ok(doc)
}

pub fn organization_object_id(site: &SiteRecord) -> Result<ObjectId, StoreError> {
    parse_object_id(site.organization_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;
    use panelbase_core::Organizations;

    #[test]
    fn template_document_keeps_document_keys() {
        let doc = template_document(&DefaultRecordTemplate::default()).unwrap();
        assert_eq!(doc.get_i32("__v").unwrap(), 0);
        assert_eq!(doc.get_i32("version").unwrap(), 3);
        assert_eq!(doc.get("_id"), Some(&Bson::Null));
        assert_eq!(doc.get_str("minimumRetriggerTime").unwrap(), "06:00");
        assert!(doc.get_array("brandTags").unwrap().is_empty());
        assert!(doc.get_bool("travelPast").unwrap());
    }

    #[test]
    fn template_document_converts_assigned_id() {
        let mut template = Organizations::new().default_template();
        template.id = Some("66f10d3bc7e9bf6c5950c2bb".into());
        template.name = Some("Symonds St".into());

        let doc = template_document(&template).unwrap();
        let id = doc.get_object_id("_id").unwrap();
        assert_eq!(id.to_hex(), "66f10d3bc7e9bf6c5950c2bb");
        assert_eq!(doc.get_str("name").unwrap(), "Symonds St");
    }

    #[test]
    fn template_document_rejects_bad_id() {
        let mut template = DefaultRecordTemplate::default();
        template.id = Some("site-42".into());
        let err = template_document(&template).unwrap_err();
        assert!(matches!(err, StoreError::InvalidObjectId { ref id, .. } if id == "site-42"));
    }

    #[test]
    fn every_catalog_id_is_an_object_id() {
        let orgs = Organizations::new();
        for (_, site) in orgs.sites() {
            let oid = organization_object_id(site).unwrap();
            assert_eq!(oid.to_hex(), site.organization_id);
        }
    }
}
