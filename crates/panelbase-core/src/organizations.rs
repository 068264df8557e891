//! Read-only accessors over the template, field descriptors, and catalog.

use serde_json::Value;
use tracing::debug;

use crate::CatalogError;
use crate::fields::{FieldDescriptor, standard_fields};
use crate::sites::{CatalogGroup, SUPPORTED_ORGANIZATIONS, SiteRecord};
use crate::template::DefaultRecordTemplate;

/// Entry point to the static organization data.
///
/// Construct once and share. Nothing here mutates after construction:
/// [`default_template`](Self::default_template) hands out an owned copy,
/// everything else is borrowed.
#[derive(Debug, Clone)]
pub struct Organizations {
    default_template: DefaultRecordTemplate,
    fields: Vec<FieldDescriptor>,
}

impl Default for Organizations {
    fn default() -> Self {
        Self::new()
    }
}

impl Organizations {
    pub fn new() -> Self {
        Self {
            default_template: DefaultRecordTemplate::default(),
            fields: standard_fields(),
        }
    }

    /// A fresh copy of the default record template.
    ///
    /// Callers own the result; changes never reach the canonical template or
    /// other callers' copies.
    pub fn default_template(&self) -> DefaultRecordTemplate {
        self.default_template.clone()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn supported_organizations(&self) -> &'static [CatalogGroup] {
        SUPPORTED_ORGANIZATIONS
    }

    /// Site records of a single catalog group.
    pub fn group(&self, name: &str) -> Result<&'static [SiteRecord], CatalogError> {
        SUPPORTED_ORGANIZATIONS
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.sites)
            .ok_or_else(|| CatalogError::GroupNotFound(name.to_string()))
    }

    /// Look up a record by organization id, returning its group name too.
    pub fn find_organization(
        &self,
        organization_id: &str,
    ) -> Result<(&'static str, &'static SiteRecord), CatalogError> {
        self.sites()
            .find(|(_, site)| site.organization_id == organization_id)
            .ok_or_else(|| CatalogError::OrganizationNotFound(organization_id.to_string()))
    }

    /// Every record in catalog order, paired with its group name.
    pub fn sites(&self) -> impl Iterator<Item = (&'static str, &'static SiteRecord)> {
        SUPPORTED_ORGANIZATIONS
            .iter()
            .flat_map(|g| g.sites.iter().map(move |s| (g.name, s)))
    }

    /// Non-archived records in catalog order.
    pub fn active_sites(&self) -> impl Iterator<Item = (&'static str, &'static SiteRecord)> {
        self.sites().filter(|(_, site)| site.is_active())
    }

    pub fn fields_required_for<'a>(
        &'a self,
        capability: &'a str,
    ) -> impl Iterator<Item = &'a FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |f| f.is_required_for(capability))
    }

    /// Names of required fields for `capability` that `record` lacks.
    ///
    /// Presence only: a null value counts as missing, but values are not
    /// checked against the descriptor's allowed set.
    pub fn missing_required_fields(&self, record: &Value, capability: &str) -> Vec<String> {
        let missing: Vec<String> = self
            .fields_required_for(capability)
            .filter(|f| !f.is_present_in(record))
            .map(|f| f.name.clone())
            .collect();
        if !missing.is_empty() {
            debug!(capability, ?missing, "record missing required fields");
        }
        missing
    }
}
