//! Error types for centralization analysis

use thiserror::Error;

/// Errors raised while validating options or computing centralization
#[derive(Debug, Error)]
pub enum CentralizationError {
    /// A directed-only mode was requested on an undirected graph
    #[error("mode \"{mode}\" requires a directed graph; set mode to \"undirected\"")]
    ModeMismatch { mode: String },

    /// The requested option combination has no defined centralization
    #[error("incompatible options: {0}")]
    IncompatibleOptions(String),

    /// The graph has no nodes, so no theoretical maximum exists
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Two input nodes map to the same label
    #[error("duplicate node label \"{label}\"")]
    DuplicateNode { label: String },

    /// A string did not name any value of a closed option set
    #[error("unknown {kind} \"{value}\"")]
    UnknownOption { kind: &'static str, value: String },

    /// The worker pool for per-component computation could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CentralizationError>;
