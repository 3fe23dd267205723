use super::*;

/// Clustering-coefficient statistics for undirected simple graphs.
///
/// Both measures quantify how strongly the neighborhoods of a graph close
/// into triangles; the generators in this crate target them explicitly, so
/// they double as evaluation statistics in the summary report.
pub trait ClusteringCoefficient: AdjacencyList + AdjacencyTest {
    /// Global clustering coefficient (transitivity): the fraction of
    /// connected node-triples that form closed triangles,
    /// `3 * triangles / triads`. Returns `0.0` for graphs without triads.
    fn transitivity(&self) -> f64 {
        let mut closed = 0u64;
        let mut triads = 0u64;

        for u in self.vertices_range() {
            let d = self.degree_of(u) as u64;
            triads += d * (d - d.min(1)) / 2;
            closed += self.links_among_neighbors(u);
        }

        if triads == 0 {
            0.0
        } else {
            // `closed` counts each triangle once per corner, i.e. 3T in total
            closed as f64 / triads as f64
        }
    }

    /// Local clustering coefficient of `u`: the fraction of neighbor pairs
    /// of `u` that are themselves adjacent. Nodes of degree < 2 have
    /// coefficient `0.0`.
    /// ** Panics if `u >= n` **
    fn local_clustering_of(&self, u: Node) -> f64 {
        let d = self.degree_of(u) as u64;
        if d < 2 {
            return 0.0;
        }

        self.links_among_neighbors(u) as f64 / (d * (d - 1) / 2) as f64
    }

    /// Average of the local clustering coefficients over **all** nodes
    /// (degree < 2 nodes contribute `0`). Returns `0.0` for the empty graph.
    fn average_local_clustering(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let total: f64 = self
            .vertices_range()
            .map(|u| self.local_clustering_of(u))
            .sum();
        total / self.len() as f64
    }

    /// Number of adjacent pairs among the neighbors of `u` (each pair
    /// counted once). Self-loops are ignored.
    #[doc(hidden)]
    fn links_among_neighbors(&self, u: Node) -> u64 {
        let nbs: Vec<Node> = self.neighbors_of(u).filter(|&v| v != u).collect();
        let mut links = 0;
        for (i, &v) in nbs.iter().enumerate() {
            for &w in &nbs[i + 1..] {
                if self.has_edge(v, w) {
                    links += 1;
                }
            }
        }
        links
    }
}

impl<G> ClusteringCoefficient for G where G: AdjacencyList + AdjacencyTest {}
