use thiserror::Error;

/// Top-level error type shared by every crate in the workspace.
#[derive(Debug, Error)]
pub enum AvgBufError {
    #[error("cannot allocate storage for {capacity} samples")]
    Allocation { capacity: usize },

    #[error("invalid capacity {0}: a buffer needs at least one slot")]
    InvalidCapacity(usize),

    #[error("window of {capacity} slots is too small for a quarter average")]
    WindowTooSmall { capacity: usize },

    #[error("no samples have been added yet")]
    NoSamplesYet,

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T, E = AvgBufError> = std::result::Result<T, E>;
