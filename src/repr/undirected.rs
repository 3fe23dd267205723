use crate::{ops::*, *};

/// An undirected graph stored as one neighbor list per node.
///
/// Every edge `{u, v}` with `u != v` is mirrored in both neighbor lists but
/// counted once. Self-loops are representable (a single entry in `nbs[u]`)
/// so that raw generator output can be inspected before cleanup, but the
/// generators in this crate never leave them in their final output.
#[derive(Clone, Default)]
pub struct AdjArrayUndir {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNew for AdjArrayUndir {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for AdjArrayUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl GraphEdgeOrder for AdjArrayUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArrayUndir {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArrayUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // average degree is tiny in this crate, a linear scan beats any set
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphEdgeEditing for AdjArrayUndir {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.nbs.len());
        if self.has_edge(u, v) {
            return false;
        }

        self.nbs[u as usize].push(v);
        if u != v {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;
        true
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let Some(pos) = self.nbs[u as usize].iter().position(|&w| w == v) else {
            return false;
        };

        self.nbs[u as usize].swap_remove(pos);
        if u != v {
            let pos = self.nbs[v as usize].iter().position(|&w| w == u).unwrap();
            self.nbs[v as usize].swap_remove(pos);
        }
        self.num_edges -= 1;
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn graph_new() {
        for n in 1..50 {
            let graph = AdjArrayUndir::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn edge_editing_mirrors_neighborhoods() {
        let mut graph = AdjArrayUndir::new(5);
        assert!(graph.try_add_edge(0, 3));
        assert!(graph.try_add_edge(3, 4));
        assert!(!graph.try_add_edge(3, 0));

        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(3, 0) && graph.has_edge(0, 3));
        assert_eq!(graph.degree_of(3), 2);

        assert!(graph.try_remove_edge(4, 3));
        assert!(!graph.try_remove_edge(4, 3));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(4), 0);
    }

    #[test]
    fn self_loop_counts_once() {
        let mut graph = AdjArrayUndir::new(3);
        assert!(graph.try_add_edge(1, 1));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(1), 1);
        assert!(graph.has_self_loop(1));
    }

    #[test]
    fn matches_reference_adjacency_matrix() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            let mut matrix = vec![vec![false; n as usize]; n as usize];
            let mut graph = AdjArrayUndir::new(n);

            for _ in 0..(5 * n) {
                let Edge(u, v) = Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized();
                let newly_added = graph.try_add_edge(u, v);
                assert_eq!(newly_added, !matrix[u as usize][v as usize]);
                matrix[u as usize][v as usize] = true;
                matrix[v as usize][u as usize] = true;
            }

            for u in 0..n {
                for v in 0..n {
                    assert_eq!(graph.has_edge(u, v), matrix[u as usize][v as usize]);
                }
            }

            let m = graph.number_of_edges() as usize;
            assert_eq!(graph.edges(true).count(), m);
            assert_eq!(graph.ordered_edges(true).dedup().count(), m);
        }
    }
}
