//! Graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod components;
pub mod compressed;

pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;

/// Capabilities the centralization core needs from a graph
///
/// Nodes are addressed by dense indices `0..node_count()`. Transformations
/// return new graphs and never modify `self`.
pub trait GraphView: Clone + Send + Sync {
    fn node_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Stable, unique label of a node
    fn node_label(&self, node: usize) -> &str;

    /// Nodes reachable over one edge, sorted and without duplicates
    fn successors(&self, node: usize) -> &[u32];

    /// Total degree of every node (in + out for directed graphs)
    fn degrees(&self) -> Vec<usize>;

    fn in_degrees(&self) -> Vec<usize>;

    fn reverse(&self) -> Self;

    fn to_undirected(&self) -> Self;

    /// Induced subgraph; `members[i]` becomes node `i`
    fn induced_subgraph(&self, members: &[u32]) -> Self;
}

impl GraphView for CompressedGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_label(&self, node: usize) -> &str {
        self.label(node)
    }

    fn successors(&self, node: usize) -> &[u32] {
        self.outgoing_edges(node)
    }

    fn degrees(&self) -> Vec<usize> {
        CompressedGraph::degrees(self)
    }

    fn in_degrees(&self) -> Vec<usize> {
        CompressedGraph::in_degrees(self)
    }

    fn reverse(&self) -> Self {
        CompressedGraph::reverse(self)
    }

    fn to_undirected(&self) -> Self {
        CompressedGraph::to_undirected(self)
    }

    fn induced_subgraph(&self, members: &[u32]) -> Self {
        CompressedGraph::induced_subgraph(self, members)
    }
}
