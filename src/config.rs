//! Configuration management for centralization analysis

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CentralizationError;

/// Centrality measure whose distribution is summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Degree,
    Betweenness,
    Closeness,
}

/// Directionality treatment applied before measuring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Directions are disregarded (directed graphs are collapsed)
    Undirected,
    /// Incoming and outgoing edges both count
    All,
    /// Only incoming edges count
    In,
    /// Only outgoing edges count (computed as `In` on the reversed graph)
    Out,
}

impl Mode {
    /// Whether this mode is only meaningful on a directed graph
    pub fn requires_direction(self) -> bool {
        !matches!(self, Mode::Undirected)
    }
}

/// Component semantics used when partitioning a directed graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connection {
    Strong,
    Weak,
}

/// Distance assigned to unreachable node pairs in directed closeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistUnreachable {
    /// Unreachable nodes sit at distance `n`
    #[serde(rename = "N")]
    NodeCount,
    /// Unreachable nodes are left out of the distance sum
    #[serde(rename = "zero")]
    Zero,
}

macro_rules! string_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = CentralizationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(CentralizationError::UnknownOption {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name = match self {
                    $($ty::$variant => $name,)+
                };
                f.write_str(name)
            }
        }
    };
}

string_enum!(Measure, "measure", {
    Degree => "degree",
    Betweenness => "betweenness",
    Closeness => "closeness",
});

string_enum!(Mode, "mode", {
    Undirected => "undirected",
    All => "all",
    In => "in",
    Out => "out",
});

string_enum!(Connection, "connection", {
    Strong => "strong",
    Weak => "weak",
});

string_enum!(DistUnreachable, "dist_unreachable", {
    NodeCount => "N",
    Zero => "zero",
});

/// Options for a centralization computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentralizationConfig {
    /// Centrality measure to aggregate
    pub measure: Measure,

    /// Directionality treatment
    pub mode: Mode,

    /// Compute one result per component instead of one for the whole graph
    pub by_component: bool,

    /// Component semantics for directed modes (ignored when undirected)
    pub connection: Connection,

    /// Unreachable-distance policy for directed closeness
    pub dist_unreachable: DistUnreachable,

    /// Worker threads for per-component work (0 = use all available cores)
    pub threads: usize,

    /// Minimum component count before per-component work is parallelized
    pub parallel_threshold: usize,
}

impl Default for CentralizationConfig {
    fn default() -> Self {
        Self {
            measure: Measure::Degree,
            mode: Mode::Undirected,
            by_component: false,
            connection: Connection::Strong,
            dist_unreachable: DistUnreachable::NodeCount,
            threads: 0,
            parallel_threshold: 64,
        }
    }
}

impl CentralizationConfig {
    /// Create a new configuration with custom option values
    pub fn new(
        measure: Measure,
        mode: Mode,
        by_component: bool,
        connection: Connection,
        dist_unreachable: DistUnreachable,
    ) -> Self {
        Self {
            measure,
            mode,
            by_component,
            connection,
            dist_unreachable,
            ..Self::default()
        }
    }

    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_by_component(mut self, by_component: bool) -> Self {
        self.by_component = by_component;
        self
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connection = connection;
        self
    }

    pub fn with_dist_unreachable(mut self, policy: DistUnreachable) -> Self {
        self.dist_unreachable = policy;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Number of worker threads to use, resolving 0 to the available cores
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}
