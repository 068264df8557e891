use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog group not found: {0}")]
    GroupNotFound(String),

    #[error("organization not found: {0}")]
    OrganizationNotFound(String),
}
