//! Storage layer: MongoDB connection bootstrap and document conversion.

mod bootstrap;
mod document;
mod error;

pub use bootstrap::{ConnectionSpec, Driver, MongoDriver, initialize, initialize_with};
pub use document::{organization_object_id, parse_object_id, template_document};
pub use error::StoreError;

pub use mongodb::bson::{Document, oid::ObjectId};
pub use mongodb::sync::Client;
