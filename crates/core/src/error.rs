//! Advisory error model.

use thiserror::Error;

/// Result type used across the advisory calculators.
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;

/// Advisory-level error.
///
/// Both variants are local and deterministic: the caller has to correct the
/// input and call again. There is no partial result and nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvisoryError {
    /// A caller value violates a documented numeric or categorical constraint.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The commodity is not in the shelf-life table.
    ///
    /// `available` is sorted so the message is stable across catalogs.
    #[error("unknown produce type: {name}. Available: {}", .available.join(", "))]
    UnknownCommodity { name: String, available: Vec<String> },
}

impl AdvisoryError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unknown_commodity<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut available: Vec<String> = available.into_iter().map(Into::into).collect();
        available.sort();
        Self::UnknownCommodity {
            name: name.into(),
            available,
        }
    }

    /// Stable machine-readable code for hosts that map errors onto a protocol.
    pub fn code(&self) -> &'static str {
        match self {
            AdvisoryError::InvalidInput(_) => "invalid_input",
            AdvisoryError::UnknownCommodity { .. } => "unknown_commodity",
        }
    }
}
