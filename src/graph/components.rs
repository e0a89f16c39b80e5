//! Component decomposition and connectivity predicates
//!
//! Every decomposition returns node groups sorted by descending size. Ties
//! keep discovery order (the group whose lowest node index comes first), and
//! members within a group are sorted ascending.

use std::collections::HashMap;

use itertools::Itertools;
use petgraph::graph::DiGraph;

use crate::graph::GraphView;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Size of each set (for union by size)
    size: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            size: vec![1; size],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // attach smaller tree under root of larger tree
        let (big, small) = if self.size[root_x as usize] >= self.size[root_y as usize] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small as usize] = big;
        self.size[big as usize] += self.size[small as usize];
    }

    /// Get the size of the set containing x
    pub fn set_size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }
}

/// Components of an undirected graph
pub fn connected_components<G: GraphView>(graph: &G) -> Vec<Vec<u32>> {
    weakly_connected_components(graph)
}

/// Components reachable when edge direction is ignored
pub fn weakly_connected_components<G: GraphView>(graph: &G) -> Vec<Vec<u32>> {
    let node_count = graph.node_count();
    let mut sets = DisjointSets::new(node_count);

    for src in 0..node_count {
        for &dst in graph.successors(src) {
            sets.union(src as u32, dst);
        }
    }

    let mut groups: HashMap<u32, Vec<u32>> = HashMap::new();
    for node in 0..node_count as u32 {
        let root = sets.find(node);
        groups.entry(root).or_default().push(node);
    }

    order_components(groups.into_values().collect())
}

/// Strongly connected components (Tarjan)
pub fn strongly_connected_components<G: GraphView>(graph: &G) -> Vec<Vec<u32>> {
    let node_count = graph.node_count();
    let mut digraph = DiGraph::<(), ()>::with_capacity(node_count, 0);
    for _ in 0..node_count {
        digraph.add_node(());
    }
    digraph.extend_with_edges(
        (0..node_count).flat_map(|src| graph.successors(src).iter().map(move |&dst| (src as u32, dst))),
    );

    let groups: Vec<Vec<u32>> = petgraph::algo::tarjan_scc(&digraph)
        .into_iter()
        .map(|scc| scc.into_iter().map(|idx| idx.index() as u32).collect())
        .collect();

    order_components(groups)
}

/// Connectivity with edge direction ignored
pub fn is_connected<G: GraphView>(graph: &G) -> bool {
    connected_components(graph).len() == 1
}

pub fn is_strongly_connected<G: GraphView>(graph: &G) -> bool {
    strongly_connected_components(graph).len() == 1
}

fn order_components(groups: Vec<Vec<u32>>) -> Vec<Vec<u32>> {
    groups
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(|mut group| {
            group.sort_unstable();
            group
        })
        .sorted_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])))
        .collect()
}
