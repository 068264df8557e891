use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to connect to database {database}: {message}")]
    Connection { database: String, message: String },

    #[error("invalid connection spec {0:?}: expected NAME=URI")]
    InvalidSpec(String),

    #[error("invalid object id {id:?}: {message}")]
    InvalidObjectId { id: String, message: String },

    #[error("bson error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),
}

impl StoreError {
    /// Logical database name for connection failures.
    pub fn database(&self) -> Option<&str> {
        match self {
            Self::Connection { database, .. } => Some(database),
            _ => None,
        }
    }
}
