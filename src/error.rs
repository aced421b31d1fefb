use thiserror::Error;

/// Result alias for `enclave`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by community detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph has no nodes, so there is nothing to partition.
    #[error("graph has no nodes")]
    EmptyGraph,
}
