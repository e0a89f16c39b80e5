//! Graph construction module

use std::collections::HashMap;

use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use crate::error::{CentralizationError, Result};
use crate::graph::CompressedGraph;

/// Builder for incrementally constructing a CompressedGraph
pub struct GraphBuilder {
    /// Whether edges are ordered pairs
    directed: bool,

    /// Mapping from string IDs to node indices
    id_to_index: HashMap<String, u32>,

    /// Node string IDs
    node_ids: Vec<String>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,
}

impl GraphBuilder {
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Create a new graph builder with the given capacity
    pub fn with_capacity(directed: bool, capacity: usize) -> Self {
        Self {
            directed,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
        }
    }

    /// Build a graph straight from a list of labelled edges
    pub fn from_edges(directed: bool, edges: &[(&str, &str)]) -> CompressedGraph {
        let mut builder = Self::with_capacity(directed, edges.len());
        for (src, dst) in edges {
            builder.add_edge(src, dst);
        }
        builder.build()
    }

    /// Convert a petgraph graph, labelling nodes by their weights
    ///
    /// Weights must render to distinct labels; a collision would merge two
    /// nodes, so it is rejected instead.
    pub fn from_petgraph<N, E, Ty>(graph: &petgraph::Graph<N, E, Ty>) -> Result<CompressedGraph>
    where
        N: ToString,
        Ty: EdgeType,
    {
        let mut builder = Self::with_capacity(graph.is_directed(), graph.node_count());
        for idx in graph.node_indices() {
            let label = graph[idx].to_string();
            if builder.id_to_index.contains_key(&label) {
                return Err(CentralizationError::DuplicateNode { label });
            }
            builder.get_or_create_node(&label);
        }

        // petgraph index i is builder index i
        for edge in graph.edge_references() {
            builder.link(edge.source().index() as u32, edge.target().index() as u32);
        }

        Ok(builder.build())
    }

    /// Get or create a node ID for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_ids.len() as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.adjacency_lists.push(Vec::new());

        idx
    }

    /// Add an isolated node (no-op if it already exists)
    pub fn add_node(&mut self, id: &str) -> &mut Self {
        self.get_or_create_node(id);
        self
    }

    /// Add an edge from one node to another
    pub fn add_edge(&mut self, src_id: &str, dst_id: &str) -> &mut Self {
        let src_idx = self.get_or_create_node(src_id);
        let dst_idx = self.get_or_create_node(dst_id);
        self.link(src_idx, dst_idx);
        self
    }

    fn link(&mut self, src: u32, dst: u32) {
        self.adjacency_lists[src as usize].push(dst);
        if !self.directed && src != dst {
            self.adjacency_lists[dst as usize].push(src);
        }
    }

    /// Build the compressed graph
    pub fn build(self) -> CompressedGraph {
        CompressedGraph::from_adjacency(self.directed, self.node_ids, self.adjacency_lists)
    }
}
