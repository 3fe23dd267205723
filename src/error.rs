use thiserror::Error;

/// Result alias for `commnet`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by generators, sessions and the oracle boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter was rejected during validation.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What was expected.
        message: String,
    },

    /// A generator could not realize a graph satisfying its invariants
    /// within its attempt budget.
    #[error("graph generation failed: {reason} (after {attempts} attempts)")]
    GenerationFailure {
        /// What could not be realized.
        reason: &'static str,
        /// Number of attempts made before giving up.
        attempts: usize,
    },

    /// The external numerical engine could not be started or misbehaved.
    #[error("engine error: {0}")]
    Engine(String),

    /// A detection or similarity oracle returned malformed output.
    #[error("oracle error: {0}")]
    Oracle(String),

    /// An I/O failure while exchanging graphs or partitions with an oracle.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
