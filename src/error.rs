//! Error types for the interaction core.
//!
//! Host collaborators report failures through `anyhow::Result`; the core wraps
//! them into [`CaressError`] so callers can tell contract violations apart from
//! a misbehaving collaborator.

use thiserror::Error;

/// Unified error type for the interaction core.
#[derive(Debug, Error)]
pub enum CaressError {
    /// A body index outside the range the body provider exposes.
    #[error("Unknown target body {index} (provider exposes {count})")]
    UnknownBody { index: usize, count: usize },

    /// A host collaborator failed while the named step was running.
    #[error("Collaborator failed during {step}: {source}")]
    Collaborator {
        step: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CaressError {
    /// Wrap a collaborator failure raised during `step`.
    pub fn collaborator(step: &'static str, err: anyhow::Error) -> Self {
        Self::Collaborator {
            step,
            source: err.into(),
        }
    }
}

/// Convenience alias for `Result<T, CaressError>`.
pub type CaressResult<T> = Result<T, CaressError>;
