//! Centrality primitives over any [`GraphView`]
//!
//! Betweenness follows Brandes (2001) for unweighted graphs. Rescaling and
//! closeness conventions match the common networkx definitions:
//!
//! - unnormalized undirected betweenness is halved, since every pair is
//!   counted from both ends
//! - normalized betweenness divides by `(n-1)(n-2)` (left unscaled for n <= 2)
//! - directed closeness uses inward distances (paths *to* the node)

use std::collections::VecDeque;

use crate::graph::GraphView;

/// Unweighted shortest path lengths from `source` (`None` = unreachable)
pub fn bfs_distances<G: GraphView>(graph: &G, source: usize) -> Vec<Option<u32>> {
    let mut dist = vec![None; graph.node_count()];
    dist[source] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = dist[v].map_or(0, |d| d + 1);
        for &w in graph.successors(v) {
            let w = w as usize;
            if dist[w].is_none() {
                dist[w] = Some(next);
                queue.push_back(w);
            }
        }
    }

    dist
}

/// Shortest-path betweenness centrality of every node
pub fn betweenness_centrality<G: GraphView>(graph: &G, normalized: bool) -> Vec<f64> {
    let n = graph.node_count();
    let mut cb = vec![0.0f64; n];

    for s in 0..n {
        // Nodes in order of discovery (farthest popped first)
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        let mut sigma = vec![0.0f64; n];
        sigma[s] = 1.0;

        let mut dist: Vec<i64> = vec![-1; n];
        dist[s] = 0;

        let mut queue = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in graph.successors(v) {
                let w = w as usize;
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    let scale = if normalized {
        (n > 2).then(|| 1.0 / ((n - 1) * (n - 2)) as f64)
    } else if graph.is_directed() {
        None
    } else {
        Some(0.5)
    };

    if let Some(scale) = scale {
        for value in &mut cb {
            *value *= scale;
        }
    }

    cb
}

/// Reach along incoming paths to every node
///
/// Returns `(reachable, total)`: how many other nodes have a path to the node
/// and the sum of their shortest distances. Directed graphs are traversed in
/// reverse.
pub fn inward_distance_sums<G: GraphView>(graph: &G) -> Vec<(usize, u64)> {
    let inward;
    let traversal = if graph.is_directed() {
        inward = graph.reverse();
        &inward
    } else {
        graph
    };

    (0..graph.node_count())
        .map(|node| {
            let (reached, total) = bfs_distances(traversal, node)
                .into_iter()
                .flatten()
                .fold((0usize, 0u64), |(count, sum), d| (count + 1, sum + u64::from(d)));
            (reached - 1, total)
        })
        .collect()
}

/// Closeness centrality of every node
///
/// For a node reached by `r` others with total distance `d`, closeness is
/// `r / d` (0 when nothing reaches it). With `wf_improved` the value is
/// further scaled by `r / (n - 1)`.
pub fn closeness_centrality<G: GraphView>(graph: &G, wf_improved: bool) -> Vec<f64> {
    let n = graph.node_count();

    inward_distance_sums(graph)
        .into_iter()
        .map(|(reachable, total)| {
            if total == 0 || n <= 1 {
                return 0.0;
            }

            let mut closeness = reachable as f64 / total as f64;
            if wf_improved {
                closeness *= reachable as f64 / (n - 1) as f64;
            }
            closeness
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CompressedGraph, GraphBuilder};

    fn scores_by_label(graph: &CompressedGraph, scores: &[f64]) -> Vec<(String, f64)> {
        let mut pairs: Vec<(String, f64)> = scores
            .iter()
            .enumerate()
            .map(|(idx, &s)| (graph.label(idx).to_string(), s))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn inward_sums_follow_direction() {
        let g = GraphBuilder::from_edges(true, &[("A", "B"), ("B", "C")]);
        let sums = inward_distance_sums(&g);
        let a = g.index_of("A").unwrap() as usize;
        let c = g.index_of("C").unwrap() as usize;
        assert_eq!(sums[a], (0, 0));
        // C is reached by B at 1 and A at 2
        assert_eq!(sums[c], (2, 3));
    }

    #[test]
    fn undirected_path_betweenness() {
        let g = GraphBuilder::from_edges(false, &[("A", "B"), ("B", "C")]);
        let raw = scores_by_label(&g, &betweenness_centrality(&g, false));
        assert_close(raw[0].1, 0.0);
        assert_close(raw[1].1, 1.0);
        assert_close(raw[2].1, 0.0);

        let normalized = scores_by_label(&g, &betweenness_centrality(&g, true));
        assert_close(normalized[1].1, 1.0);
    }

    #[test]
    fn directed_path_betweenness() {
        let g = GraphBuilder::from_edges(true, &[("A", "B"), ("B", "C")]);
        let raw = scores_by_label(&g, &betweenness_centrality(&g, false));
        assert_close(raw[1].1, 1.0);

        let normalized = scores_by_label(&g, &betweenness_centrality(&g, true));
        assert_close(normalized[1].1, 0.5);
    }

    #[test]
    fn split_shortest_paths_share_credit() {
        // A-B-D and A-C-D are both shortest paths
        let g = GraphBuilder::from_edges(false, &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        let raw = scores_by_label(&g, &betweenness_centrality(&g, false));
        for (_, score) in raw {
            assert_close(score, 0.5);
        }
    }

    #[test]
    fn closeness_uses_inward_distances_for_directed_graphs() {
        let g = GraphBuilder::from_edges(true, &[("A", "B"), ("B", "C")]);
        let scores = scores_by_label(&g, &closeness_centrality(&g, false));
        // A is reached by nobody; B by A at 1; C by B at 1 and A at 2
        assert_close(scores[0].1, 0.0);
        assert_close(scores[1].1, 1.0);
        assert_close(scores[2].1, 2.0 / 3.0);

        let improved = scores_by_label(&g, &closeness_centrality(&g, true));
        assert_close(improved[1].1, 0.5);
    }

    #[test]
    fn closeness_of_undirected_star() {
        let g = GraphBuilder::from_edges(false, &[("hub", "a"), ("hub", "b"), ("hub", "c")]);
        let hub = g.index_of("hub").unwrap() as usize;
        let a = g.index_of("a").unwrap() as usize;
        let scores = closeness_centrality(&g, false);
        assert_close(scores[hub], 1.0);
        assert_close(scores[a], 3.0 / 5.0);
    }

    #[test]
    fn single_node_scores_zero() {
        let mut builder = GraphBuilder::new(false);
        builder.add_node("solo");
        let g = builder.build();
        assert_eq!(closeness_centrality(&g, false), vec![0.0]);
        assert_eq!(betweenness_centrality(&g, true), vec![0.0]);
    }
}
