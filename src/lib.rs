//! Graph centralization: how unevenly degree, betweenness or closeness
//! centrality is spread over a graph, relative to the most centralized graph
//! of the same size.

pub mod centralization;
pub mod config;
pub mod error;
pub mod graph;

pub use centralization::{
    compute_centralization, CentralityMap, Centralization, CentralizationOutput,
    CentralizationReport, CentralizationResult, ComponentCentralization, Diagnostic,
};
pub use config::{CentralizationConfig, Connection, DistUnreachable, Measure, Mode};
pub use error::{CentralizationError, Result};
pub use graph::{CompressedGraph, GraphBuilder, GraphView};
