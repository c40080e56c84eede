use thiserror::Error;

/// Error types for `StrBuf` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StrBufError {
    /// Storage could not be grown; the buffer is left as it was
    #[error("Out of memory: could not reserve capacity for {requested} bytes")]
    NoMemory {
        /// Capacity that could not be reserved
        requested: usize,
    },
    /// Position or slice endpoint is outside the active region
    #[error("Bad index: index {index} is out of range for length {length}")]
    BadIndex {
        /// Index that was rejected
        index: usize,
        /// Current length of the string
        length: usize,
    },
    /// Caller-provided output storage is too small for the result
    #[error("Bad size: {required} slots required, but only {provided} provided")]
    BadSize {
        /// Number of slots the result needs
        required: usize,
        /// Number of slots the caller provided
        provided: usize,
    },
    /// Search pattern is empty
    #[error("Empty pattern: cannot search for an empty byte sequence")]
    EmptyPattern,
    /// Batch rewrite cannot converge
    #[error("No progress: rewrite did not converge after {passes} passes")]
    NoProgress {
        /// Number of passes completed before giving up
        passes: usize,
    },
    /// Invalid parameter in `StrBufConfig`
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, StrBufError>;
