//! Component partitioning for per-component centralization

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::{Connection, Measure, Mode};
use crate::error::{CentralizationError, Result};
use crate::graph::components::{
    connected_components, strongly_connected_components, weakly_connected_components,
};
use crate::graph::GraphView;

/// Kind of decomposition used to split the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Connected,
    StronglyConnected,
    WeaklyConnected,
}

/// One component as an induced subgraph
#[derive(Debug, Clone)]
pub struct Component<G> {
    pub subgraph: G,
    pub nodes: BTreeSet<String>,
    pub n: usize,
}

/// Decomposition kind for a mode/connection pair
///
/// Weak components cannot be combined with closeness, which is only defined
/// on strongly connected substrates.
pub fn component_kind(mode: Mode, connection: Connection, measure: Measure) -> Result<ComponentKind> {
    match (mode, connection) {
        (Mode::Undirected, _) => Ok(ComponentKind::Connected),
        (_, Connection::Strong) => Ok(ComponentKind::StronglyConnected),
        (_, Connection::Weak) if measure == Measure::Closeness => {
            Err(CentralizationError::IncompatibleOptions(
                "closeness centralization can only be computed per strongly connected component"
                    .to_string(),
            ))
        }
        (_, Connection::Weak) => Ok(ComponentKind::WeaklyConnected),
    }
}

/// Split a mode-normalized graph into components, largest first
pub fn partition<G: GraphView>(graph: &G, kind: ComponentKind) -> Vec<Component<G>> {
    let groups = match kind {
        ComponentKind::Connected => connected_components(graph),
        ComponentKind::StronglyConnected => strongly_connected_components(graph),
        ComponentKind::WeaklyConnected => weakly_connected_components(graph),
    };

    log::info!("Number of {:?} components: {}", kind, groups.len());

    groups
        .into_iter()
        .map(|members| {
            let subgraph = graph.induced_subgraph(&members);
            let nodes = members
                .iter()
                .map(|&node| graph.node_label(node as usize).to_string())
                .collect();
            Component {
                subgraph,
                nodes,
                n: members.len(),
            }
        })
        .collect()
}
