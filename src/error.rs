use thiserror::Error;

/// Top-level error type for the wirenet connectivity kernel.
#[derive(Debug, Error)]
pub enum WirenetError {
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to topological bookkeeping.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Convenience type alias for results using [`WirenetError`].
pub type Result<T> = std::result::Result<T, WirenetError>;
