//! Per-node centrality and theoretical maxima
//!
//! Each (measure, mode) pair maps to one strategy. A strategy returns the raw
//! centralities, the same values scaled to [0, 1], and the aggregate score of
//! the most centralized graph with the same node count:
//!
//! | measure     | mode        | scaled by     | theoretical max     |
//! |-------------|-------------|---------------|---------------------|
//! | degree      | undirected  | n-1           | (n-1)(n-2)          |
//! | degree      | all         | 2(n-1)        | 2(n-1)(n-2)         |
//! | degree      | in/out      | n-1           | (n-1)^2             |
//! | betweenness | undirected  | normalized    | (n-1)^2(n-2)/2      |
//! | betweenness | all/in/out  | normalized    | (n-1)^2(n-2)        |
//! | closeness   | undirected  | closeness     | (n-2)/(2n-3)        |
//! | closeness   | in/out (N)  | times n-1     | (n-1)/n             |
//! | closeness   | in/out (0)  | times reach   | 1                   |
//!
//! `out` arrives here already reversed, so it shares the `in` strategies.

use crate::centralization::mode::undirected_view;
use crate::centralization::CentralityMap;
use crate::config::{DistUnreachable, Measure, Mode};
use crate::graph::algorithms::{betweenness_centrality, closeness_centrality, inward_distance_sums};
use crate::graph::GraphView;

/// Centralities of one graph, indexed by node
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureOutput {
    pub raw: Vec<f64>,
    pub scaled: Vec<f64>,
    pub theoretical_max: f64,
}

impl MeasureOutput {
    /// Key both centrality vectors by node label
    pub fn into_maps<G: GraphView>(self, graph: &G) -> (CentralityMap, CentralityMap) {
        let label = |(node, value): (usize, f64)| (graph.node_label(node).to_string(), value);
        let raw = self.raw.into_iter().enumerate().map(label).collect();
        let scaled = self.scaled.into_iter().enumerate().map(label).collect();
        (raw, scaled)
    }
}

/// Computes one measure under one mode
pub trait MeasureStrategy<G: GraphView>: Send + Sync {
    fn compute(&self, graph: &G) -> MeasureOutput;
}

/// Strategy for a (measure, mode) pair
pub fn strategy_for<G: GraphView>(
    measure: Measure,
    mode: Mode,
    dist_unreachable: DistUnreachable,
) -> Box<dyn MeasureStrategy<G>> {
    match (measure, mode) {
        (Measure::Degree, Mode::Undirected) => Box::new(DegreeStrategy {
            incoming_only: false,
            divisor_factor: 1.0,
            theoretical_max: |n| (n - 1.0) * (n - 2.0),
        }),
        (Measure::Degree, Mode::All) => Box::new(DegreeStrategy {
            incoming_only: false,
            divisor_factor: 2.0,
            theoretical_max: |n| 2.0 * (n - 1.0) * (n - 2.0),
        }),
        (Measure::Degree, Mode::In | Mode::Out) => Box::new(DegreeStrategy {
            incoming_only: true,
            divisor_factor: 1.0,
            theoretical_max: |n| (n - 1.0).powi(2),
        }),
        (Measure::Betweenness, Mode::Undirected) => Box::new(BetweennessStrategy {
            theoretical_max: |n| (n - 1.0).powi(2) * (n - 2.0) / 2.0,
        }),
        (Measure::Betweenness, Mode::All | Mode::In | Mode::Out) => {
            Box::new(BetweennessStrategy {
                theoretical_max: |n| (n - 1.0).powi(2) * (n - 2.0),
            })
        }
        (Measure::Closeness, Mode::Undirected | Mode::All) => Box::new(UndirectedClosenessStrategy),
        (Measure::Closeness, Mode::In | Mode::Out) => Box::new(InwardClosenessStrategy {
            dist_unreachable,
        }),
    }
}

/// Closed-form maximum at `n`, with the `-0.0` of `n = 1` mapped to `0.0`
fn closed_form_max(formula: fn(f64) -> f64, n: f64) -> f64 {
    let max = formula(n);
    if max > 0.0 {
        max
    } else {
        0.0
    }
}

/// Divide each value by `divisor`, mapping a zero divisor to 0
fn scale_down(values: &[f64], divisor: f64) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if divisor == 0.0 { 0.0 } else { v / divisor })
        .collect()
}

struct DegreeStrategy {
    incoming_only: bool,
    divisor_factor: f64,
    theoretical_max: fn(f64) -> f64,
}

impl<G: GraphView> MeasureStrategy<G> for DegreeStrategy {
    fn compute(&self, graph: &G) -> MeasureOutput {
        let n = graph.node_count() as f64;
        let raw: Vec<f64> = if self.incoming_only {
            graph.in_degrees().into_iter().map(|d| d as f64).collect()
        } else {
            graph.degrees().into_iter().map(|d| d as f64).collect()
        };

        let scaled = scale_down(&raw, self.divisor_factor * (n - 1.0));
        MeasureOutput {
            raw,
            scaled,
            theoretical_max: closed_form_max(self.theoretical_max, n),
        }
    }
}

struct BetweennessStrategy {
    theoretical_max: fn(f64) -> f64,
}

impl<G: GraphView> MeasureStrategy<G> for BetweennessStrategy {
    fn compute(&self, graph: &G) -> MeasureOutput {
        MeasureOutput {
            raw: betweenness_centrality(graph, false),
            scaled: betweenness_centrality(graph, true),
            theoretical_max: closed_form_max(self.theoretical_max, graph.node_count() as f64),
        }
    }
}

/// Closeness with directions disregarded
struct UndirectedClosenessStrategy;

impl<G: GraphView> MeasureStrategy<G> for UndirectedClosenessStrategy {
    fn compute(&self, graph: &G) -> MeasureOutput {
        let view = undirected_view(graph);
        let n = view.node_count() as f64;
        let scaled = closeness_centrality(&*view, false);
        let raw = scale_down(&scaled, n - 1.0);

        MeasureOutput {
            raw,
            scaled,
            theoretical_max: (n - 2.0) / (2.0 * n - 3.0),
        }
    }
}

/// Closeness over incoming paths with an unreachable-distance policy
struct InwardClosenessStrategy {
    dist_unreachable: DistUnreachable,
}

impl<G: GraphView> MeasureStrategy<G> for InwardClosenessStrategy {
    fn compute(&self, graph: &G) -> MeasureOutput {
        let n = graph.node_count() as f64;
        let sums = inward_distance_sums(graph);

        match self.dist_unreachable {
            DistUnreachable::NodeCount => {
                // each unreachable node counts as distance n
                let raw: Vec<f64> = sums
                    .iter()
                    .map(|&(reachable, total)| {
                        let distance = total as f64 + n * (n - reachable as f64 - 1.0);
                        if distance == 0.0 {
                            0.0
                        } else {
                            1.0 / distance
                        }
                    })
                    .collect();
                let scaled = raw.iter().map(|&v| v * (n - 1.0)).collect();

                MeasureOutput {
                    raw,
                    scaled,
                    theoretical_max: (n - 1.0) / n,
                }
            }
            DistUnreachable::Zero => {
                let raw: Vec<f64> = sums
                    .iter()
                    .map(|&(_, total)| if total == 0 { 0.0 } else { 1.0 / total as f64 })
                    .collect();
                let scaled = raw
                    .iter()
                    .zip(&sums)
                    .map(|(&v, &(reachable, _))| v * reachable as f64)
                    .collect();

                MeasureOutput {
                    raw,
                    scaled,
                    theoretical_max: 1.0,
                }
            }
        }
    }
}
