//! Immutable compressed sparse row graph

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Compressed sparse representation of a directed or undirected graph
///
/// Undirected edges are stored in both endpoint lists; a self-loop is stored
/// once. Every transformation returns a new graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Whether edges are ordered pairs
    pub directed: bool,

    /// Offset array: index where each node's edges begin
    /// offsets[i] to offsets[i+1] defines the edge range for node i
    pub offsets: Vec<u32>,

    /// Edge array: concatenated, sorted lists of target nodes
    pub edges: Vec<u32>,

    /// Node labels, indexed by internal node id
    pub node_ids: Vec<String>,
}

impl CompressedGraph {
    /// Build a graph from per-node adjacency lists
    ///
    /// Lists are sorted and duplicate targets collapsed.
    pub fn from_adjacency(
        directed: bool,
        node_ids: Vec<String>,
        mut adjacency_lists: Vec<Vec<u32>>,
    ) -> Self {
        let node_count = node_ids.len();
        adjacency_lists.resize_with(node_count, Vec::new);

        let mut offsets = Vec::with_capacity(node_count + 1);
        offsets.push(0);

        let mut edges = Vec::new();
        for list in &mut adjacency_lists {
            list.sort_unstable();
            list.dedup();
            edges.extend_from_slice(list);
            offsets.push(edges.len() as u32);
        }

        Self {
            node_count,
            directed,
            offsets,
            edges,
            node_ids,
        }
    }

    /// Get outgoing edges for a node
    pub fn outgoing_edges(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Check if there's an edge from src to dst
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        self.outgoing_edges(src).binary_search(&dst).is_ok()
    }

    /// Get out-degree of a node
    pub fn out_degree(&self, node: usize) -> usize {
        self.outgoing_edges(node).len()
    }

    /// In-degree of every node
    pub fn in_degrees(&self) -> Vec<usize> {
        if !self.directed {
            return (0..self.node_count).map(|node| self.out_degree(node)).collect();
        }

        let mut counts = vec![0usize; self.node_count];
        for &dst in &self.edges {
            counts[dst as usize] += 1;
        }
        counts
    }

    /// Total degree of every node
    ///
    /// Directed: in-degree plus out-degree. Undirected: incident edges, with
    /// a self-loop counted twice.
    pub fn degrees(&self) -> Vec<usize> {
        if self.directed {
            let mut counts = self.in_degrees();
            for (node, count) in counts.iter_mut().enumerate() {
                *count += self.out_degree(node);
            }
            return counts;
        }

        (0..self.node_count)
            .map(|node| self.out_degree(node) + usize::from(self.has_edge(node, node as u32)))
            .collect()
    }

    /// Number of edges (unordered pairs when undirected)
    pub fn edge_count(&self) -> usize {
        if self.directed {
            return self.edges.len();
        }
        let loops = (0..self.node_count)
            .filter(|&node| self.has_edge(node, node as u32))
            .count();
        (self.edges.len() + loops) / 2
    }

    /// Label of a node
    pub fn label(&self, node: usize) -> &str {
        &self.node_ids[node]
    }

    /// Internal id of the node with the given label
    pub fn index_of(&self, label: &str) -> Option<u32> {
        self.node_ids
            .iter()
            .position(|id| id == label)
            .map(|idx| idx as u32)
    }

    /// Graph with every edge (u, v) replaced by (v, u)
    pub fn reverse(&self) -> Self {
        if !self.directed {
            return self.clone();
        }

        let mut adjacency_lists = vec![Vec::new(); self.node_count];
        for src in 0..self.node_count {
            for &dst in self.outgoing_edges(src) {
                adjacency_lists[dst as usize].push(src as u32);
            }
        }

        Self::from_adjacency(true, self.node_ids.clone(), adjacency_lists)
    }

    /// Graph with edge direction discarded and reciprocal edges merged
    pub fn to_undirected(&self) -> Self {
        if !self.directed {
            return self.clone();
        }

        let mut adjacency_lists = vec![Vec::new(); self.node_count];
        for src in 0..self.node_count {
            for &dst in self.outgoing_edges(src) {
                adjacency_lists[src].push(dst);
                if dst as usize != src {
                    adjacency_lists[dst as usize].push(src as u32);
                }
            }
        }

        Self::from_adjacency(false, self.node_ids.clone(), adjacency_lists)
    }

    /// Induced subgraph over `members`
    ///
    /// Node `members[i]` becomes node `i`; only edges with both endpoints
    /// inside the member set are kept.
    pub fn induced_subgraph(&self, members: &[u32]) -> Self {
        let orig_to_sub: HashMap<u32, u32> = members
            .iter()
            .enumerate()
            .map(|(sub, &orig)| (orig, sub as u32))
            .collect();

        let adjacency_lists = members
            .iter()
            .map(|&orig| {
                self.outgoing_edges(orig as usize)
                    .iter()
                    .filter_map(|target| orig_to_sub.get(target).copied())
                    .collect()
            })
            .collect();

        let node_ids = members
            .iter()
            .map(|&orig| self.node_ids[orig as usize].clone())
            .collect();

        Self::from_adjacency(self.directed, node_ids, adjacency_lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn path_abc() -> CompressedGraph {
        GraphBuilder::from_edges(true, &[("A", "B"), ("B", "C")])
    }

    #[test]
    fn reverse_flips_every_edge() {
        let g = path_abc();
        let r = g.reverse();
        let a = r.index_of("A").unwrap() as usize;
        let b = r.index_of("B").unwrap();
        let c = r.index_of("C").unwrap();
        assert!(r.has_edge(b as usize, a as u32));
        assert!(r.has_edge(c as usize, b));
        assert!(!r.has_edge(a, b));
        assert_eq!(r.edge_count(), 2);
        assert_eq!(g, r.reverse());
    }

    #[test]
    fn to_undirected_merges_reciprocal_edges() {
        let g = GraphBuilder::from_edges(true, &[("A", "B"), ("B", "A"), ("B", "C")]);
        let u = g.to_undirected();
        assert!(!u.directed);
        assert_eq!(u.edge_count(), 2);
        assert_eq!(u.degrees()[u.index_of("B").unwrap() as usize], 2);
        // source graph untouched
        assert!(g.directed);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn degrees_count_self_loops_like_multigraph_endpoints() {
        let d = GraphBuilder::from_edges(true, &[("A", "A"), ("A", "B")]);
        let a = d.index_of("A").unwrap() as usize;
        assert_eq!(d.degrees()[a], 3);
        assert_eq!(d.in_degrees()[a], 1);

        let u = GraphBuilder::from_edges(false, &[("A", "A"), ("A", "B")]);
        let a = u.index_of("A").unwrap() as usize;
        assert_eq!(u.degrees()[a], 3);
        assert_eq!(u.edge_count(), 2);
    }

    #[test]
    fn directed_degrees_sum_in_and_out() {
        let mut builder = GraphBuilder::new(true);
        for leaf in 0..500 {
            builder.add_edge("hub", &format!("leaf{leaf}"));
        }
        builder.add_edge("leaf0", "hub");
        let g = builder.build();

        let degrees = g.degrees();
        assert_eq!(degrees.len(), g.node_count);
        assert_eq!(degrees[g.index_of("hub").unwrap() as usize], 501);
        assert_eq!(degrees[g.index_of("leaf0").unwrap() as usize], 2);
        assert_eq!(degrees[g.index_of("leaf499").unwrap() as usize], 1);
        assert_eq!(degrees.iter().sum::<usize>(), 2 * g.edge_count());
    }

    #[test]
    fn induced_subgraph_keeps_internal_edges_only() {
        let g = GraphBuilder::from_edges(true, &[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
        let members: Vec<u32> = ["A", "B", "C"]
            .iter()
            .map(|label| g.index_of(label).unwrap())
            .collect();
        let sub = g.induced_subgraph(&members);
        assert_eq!(sub.node_count, 3);
        assert_eq!(sub.edge_count(), 3);
        assert!(sub.index_of("D").is_none());
    }
}
