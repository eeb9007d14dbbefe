use std::fmt;

/// Unified error type for permission capability backends.
#[derive(Debug, Clone)]
pub enum CapabilityError {
    /// The status backend could not be reached or is unsupported.
    ProbeUnavailable(String),
    /// The consent dialog could not be shown or errored.
    InvokeFailed(String),
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityError::ProbeUnavailable(msg) => write!(f, "probe unavailable: {msg}"),
            CapabilityError::InvokeFailed(msg) => write!(f, "invoke failed: {msg}"),
        }
    }
}

impl std::error::Error for CapabilityError {}

/// Result type alias using [`CapabilityError`].
pub type CapabilityResult<T> = Result<T, CapabilityError>;
