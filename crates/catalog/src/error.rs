use thiserror::Error;

/// Failure while building or loading a reference catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog content breaks a table invariant.
    #[error("invalid catalog: {0}")]
    Invalid(String),

    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog io: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
