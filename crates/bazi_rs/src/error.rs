//! Error type for request adapters.

use bazi_core::BaziError;

/// Errors from assembling and validating a Four Pillars request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BaziRsError {
    /// A field was missing, malformed or out of range.
    #[error(transparent)]
    Invalid(#[from] BaziError),

    /// The request body could not be read at all.
    #[error("invalid request body: {reason}")]
    InvalidBody {
        /// What was wrong with the body.
        reason: String,
    },
}

impl BaziRsError {
    pub(crate) fn body(reason: impl Into<String>) -> Self {
        Self::InvalidBody {
            reason: reason.into(),
        }
    }
}
