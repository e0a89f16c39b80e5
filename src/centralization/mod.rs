//! Graph centralization
//!
//! The pipeline is: validate options, normalize the graph for the requested
//! mode, optionally split it into components, then compute per-node
//! centralities and reduce them to a centralization score for each graph.

pub mod aggregate;
pub mod measure;
pub mod mode;
pub mod partition;

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::{CentralizationConfig, DistUnreachable, Measure, Mode};
use crate::error::{CentralizationError, Result};
use crate::graph::components::{is_connected, is_strongly_connected};
use crate::graph::GraphView;

pub use aggregate::{centralization, Centralization};
pub use measure::{strategy_for, MeasureOutput, MeasureStrategy};
pub use partition::{Component, ComponentKind};

/// Node label to centrality value
pub type CentralityMap = BTreeMap<String, f64>;

/// Advisory condition noticed during a computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A directed graph was collapsed for `undirected` mode
    DirectionsDisregarded,
    /// Closeness under `all` mode was computed on the undirected view
    ClosenessDirectionsDisregarded,
    /// The undirected graph has more than one component
    NotConnected,
    /// The directed graph has more than one strongly connected component
    NotStronglyConnected,
    /// Number of components the graph was split into
    ComponentCount { component: ComponentKind, count: usize },
}

/// Centralities and centralization of one graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralizationResult {
    pub centralities: CentralityMap,
    pub centralities_scaled: CentralityMap,
    pub theoretical_max: f64,
    pub centralization: Centralization,
}

/// Result for one component
#[derive(Debug, Clone, Serialize)]
pub struct ComponentCentralization<G> {
    #[serde(skip)]
    pub subgraph: G,
    pub nodes: BTreeSet<String>,
    pub n: usize,
    #[serde(flatten)]
    pub result: CentralizationResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", bound = "")]
pub enum CentralizationOutput<G> {
    Graph(CentralizationResult),
    /// One entry per component, largest first
    ByComponent(Vec<ComponentCentralization<G>>),
}

/// Output of [`compute_centralization`] plus advisory diagnostics
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct CentralizationReport<G> {
    pub measure: Measure,
    pub mode: Mode,
    pub node_count: usize,
    pub output: CentralizationOutput<G>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<G> CentralizationReport<G> {
    /// Whole-graph result, if components were not requested
    pub fn graph(&self) -> Option<&CentralizationResult> {
        match &self.output {
            CentralizationOutput::Graph(result) => Some(result),
            CentralizationOutput::ByComponent(_) => None,
        }
    }

    /// Per-component results, if requested
    pub fn components(&self) -> Option<&[ComponentCentralization<G>]> {
        match &self.output {
            CentralizationOutput::Graph(_) => None,
            CentralizationOutput::ByComponent(components) => Some(components),
        }
    }

    /// Compact JSON overview of the computation
    pub fn summary(&self) -> Value {
        let results = match &self.output {
            CentralizationOutput::Graph(result) => vec![json!({
                "n": self.node_count,
                "theoretical_max": result.theoretical_max,
                "centralization": result.centralization,
            })],
            CentralizationOutput::ByComponent(components) => components
                .iter()
                .map(|c| {
                    json!({
                        "n": c.n,
                        "theoretical_max": c.result.theoretical_max,
                        "centralization": c.result.centralization,
                    })
                })
                .collect(),
        };

        json!({
            "measure": self.measure,
            "mode": self.mode,
            "node_count": self.node_count,
            "by_component": self.components().is_some(),
            "results": results,
            "diagnostics": self.diagnostics,
        })
    }
}

/// Reject option combinations that have no defined result
///
/// Runs before any centrality is computed.
pub fn validate<G: GraphView>(graph: &G, config: &CentralizationConfig) -> Result<()> {
    preflight(graph, config).map(|_| ())
}

/// Validate `config` and, for whole-graph runs, report whether the graph is
/// connected in the sense `config.mode` uses
fn preflight<G: GraphView>(graph: &G, config: &CentralizationConfig) -> Result<Option<bool>> {
    if graph.node_count() == 0 {
        return Err(CentralizationError::EmptyGraph);
    }

    mode::check_mode(graph, config.mode)?;

    if config.by_component {
        partition::component_kind(config.mode, config.connection, config.measure)?;
        return Ok(None);
    }

    // answered on the source graph: union-find ignores direction, and
    // reversal for `out` keeps strong connectivity
    let connected = if config.mode == Mode::Undirected {
        is_connected(graph)
    } else {
        is_strongly_connected(graph)
    };

    if config.measure == Measure::Closeness
        && matches!(config.mode, Mode::In | Mode::Out)
        && config.dist_unreachable == DistUnreachable::Zero
        && !connected
    {
        return Err(CentralizationError::IncompatibleOptions(
            "dist_unreachable \"zero\" requires a strongly connected graph; \
             use dist_unreachable \"N\" or compute by component"
                .to_string(),
        ));
    }

    Ok(Some(connected))
}

/// Compute the centralization of `graph` under `config`
pub fn compute_centralization<G: GraphView>(
    graph: &G,
    config: &CentralizationConfig,
) -> Result<CentralizationReport<G>> {
    let connected = preflight(graph, config)?;

    log::info!(
        "Calculating {} centralization (by_component set to {})",
        config.measure,
        config.by_component
    );
    log::info!("Number of nodes: {}", graph.node_count());

    let mut diagnostics = Vec::new();
    let view = mode::normalize(graph, config.mode, &mut diagnostics)?;

    if config.measure == Measure::Closeness && config.mode == Mode::All {
        log::debug!("Closeness under mode \"all\" disregards directions");
        diagnostics.push(Diagnostic::ClosenessDirectionsDisregarded);
    }

    let strategy = strategy_for::<G>(config.measure, config.mode, config.dist_unreachable);

    let output = if config.by_component {
        let kind = partition::component_kind(config.mode, config.connection, config.measure)?;
        let components = partition::partition(&*view, kind);
        diagnostics.push(Diagnostic::ComponentCount {
            component: kind,
            count: components.len(),
        });

        let evaluate_component = |component: Component<G>| {
            let result = evaluate(&component.subgraph, &*strategy);
            ComponentCentralization {
                subgraph: component.subgraph,
                nodes: component.nodes,
                n: component.n,
                result,
            }
        };

        let results: Vec<ComponentCentralization<G>> = if components.len() >= config.parallel_threshold {
            let threads = config.worker_threads();
            log::debug!(
                "Evaluating {} components on {} worker threads",
                components.len(),
                threads
            );
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| components.into_par_iter().map(evaluate_component).collect())
        } else {
            components.into_iter().map(evaluate_component).collect()
        };

        CentralizationOutput::ByComponent(results)
    } else {
        if connected == Some(false) {
            let diagnostic = if config.mode == Mode::Undirected {
                Diagnostic::NotConnected
            } else {
                Diagnostic::NotStronglyConnected
            };
            log::debug!("{:?}", diagnostic);
            diagnostics.push(diagnostic);
        }

        CentralizationOutput::Graph(evaluate(&*view, &*strategy))
    };

    Ok(CentralizationReport {
        measure: config.measure,
        mode: config.mode,
        node_count: graph.node_count(),
        output,
        diagnostics,
    })
}

/// Run one strategy on one graph and aggregate the result
fn evaluate<G: GraphView>(graph: &G, strategy: &dyn MeasureStrategy<G>) -> CentralizationResult {
    let output = strategy.compute(graph);
    let theoretical_max = output.theoretical_max;
    let (centralities, centralities_scaled) = output.into_maps(graph);
    let centralization = centralization(&centralities, theoretical_max);

    CentralizationResult {
        centralities,
        centralities_scaled,
        theoretical_max,
        centralization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Connection;
    use crate::graph::{CompressedGraph, GraphBuilder};

    fn config(measure: Measure, mode: Mode) -> CentralizationConfig {
        CentralizationConfig::default()
            .with_measure(measure)
            .with_mode(mode)
    }

    #[test]
    fn empty_graph_is_rejected() {
        let graph = GraphBuilder::new(false).build();
        let err = compute_centralization(&graph, &CentralizationConfig::default()).unwrap_err();
        assert!(matches!(err, CentralizationError::EmptyGraph));
    }

    #[test]
    fn zero_policy_requires_strong_connectivity() {
        let graph = GraphBuilder::from_edges(true, &[("a", "b"), ("b", "c")]);
        let cfg = config(Measure::Closeness, Mode::In).with_dist_unreachable(DistUnreachable::Zero);
        let err = compute_centralization(&graph, &cfg).unwrap_err();
        assert!(matches!(err, CentralizationError::IncompatibleOptions(_)));

        // per strongly connected component it is well-defined
        let report = compute_centralization(&graph, &cfg.with_by_component(true)).unwrap();
        assert_eq!(report.components().unwrap().len(), 3);
    }

    #[test]
    fn whole_graph_reports_disconnection() {
        let graph = GraphBuilder::from_edges(true, &[("a", "b"), ("c", "d")]);
        let report = compute_centralization(&graph, &config(Measure::Degree, Mode::Undirected)).unwrap();
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::DirectionsDisregarded, Diagnostic::NotConnected]
        );

        let report = compute_centralization(&graph, &config(Measure::Degree, Mode::In)).unwrap();
        assert_eq!(report.diagnostics, vec![Diagnostic::NotStronglyConnected]);
    }

    #[test]
    fn connectivity_follows_the_mode() {
        // weakly but not strongly connected
        let graph = GraphBuilder::from_edges(true, &[("a", "b"), ("b", "c")]);

        let report = compute_centralization(&graph, &config(Measure::Degree, Mode::Undirected)).unwrap();
        assert_eq!(report.diagnostics, vec![Diagnostic::DirectionsDisregarded]);

        for mode in [Mode::All, Mode::In, Mode::Out] {
            let report = compute_centralization(&graph, &config(Measure::Degree, mode)).unwrap();
            assert_eq!(report.diagnostics, vec![Diagnostic::NotStronglyConnected]);
        }

        let cfg = config(Measure::Closeness, Mode::Out).with_dist_unreachable(DistUnreachable::Zero);
        assert!(validate(&graph, &cfg).is_err());
        let cycle = GraphBuilder::from_edges(true, &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(validate(&cycle, &cfg).is_ok());
        let report = compute_centralization(&cycle, &cfg).unwrap();
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn closeness_all_mode_is_flagged() {
        let graph = GraphBuilder::from_edges(true, &[("a", "b"), ("b", "a")]);
        let report = compute_centralization(&graph, &config(Measure::Closeness, Mode::All)).unwrap();
        assert!(report
            .diagnostics
            .contains(&Diagnostic::ClosenessDirectionsDisregarded));
    }

    #[test]
    fn parallel_and_sequential_component_paths_agree() {
        let mut builder = GraphBuilder::new(false);
        for i in 0..40 {
            let hub = format!("hub{i}");
            for leaf in 0..(i % 5 + 1) {
                builder.add_edge(&hub, &format!("leaf{i}-{leaf}"));
            }
        }
        let graph: CompressedGraph = builder.build();
        let base = config(Measure::Betweenness, Mode::Undirected).with_by_component(true);

        let sequential = compute_centralization(&graph, &base.clone().with_parallel_threshold(usize::MAX)).unwrap();
        let parallel = compute_centralization(&graph, &base.with_parallel_threshold(1).with_threads(4)).unwrap();

        let seq = sequential.components().unwrap();
        let par = parallel.components().unwrap();
        assert_eq!(seq.len(), 40);
        for (a, b) in seq.iter().zip(par) {
            assert_eq!(a.nodes, b.nodes);
            assert_eq!(a.result, b.result);
        }
    }

    #[test]
    fn summary_lists_each_component() {
        let graph = GraphBuilder::from_edges(true, &[("a", "b"), ("b", "a"), ("c", "d")]);
        let cfg = config(Measure::Degree, Mode::All)
            .with_by_component(true)
            .with_connection(Connection::Weak);
        let summary = compute_centralization(&graph, &cfg).unwrap().summary();
        assert_eq!(summary["by_component"], json!(true));
        assert_eq!(summary["results"].as_array().unwrap().len(), 2);
        assert_eq!(summary["mode"], json!("all"));
        assert_eq!(summary["results"][0]["centralization"], Value::Null);
    }
}
