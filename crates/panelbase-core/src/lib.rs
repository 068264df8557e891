//! Static organization catalog, default record template, and field descriptors.

mod error;
pub mod fields;
pub mod organizations;
pub mod response;
pub mod sites;
pub mod template;

pub use error::CatalogError;
pub use fields::FieldDescriptor;
pub use organizations::Organizations;
pub use response::{Response, example_function};
pub use sites::{CatalogGroup, PanelFormat, PanelProduct, SiteClass, SiteRecord};
pub use template::DefaultRecordTemplate;
