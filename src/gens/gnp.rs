use super::*;

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with
/// probability `p` independent from each other.
///
/// The triadic-closure model only needs this for its tiny seed graphs, so we
/// test each of the `n(n-1)/2` node pairs directly instead of skipping ahead
/// geometrically as one would for large `n`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = prob;
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NetworkGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Result<AdjArrayUndir>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");

        let mut graph = AdjArrayUndir::new(self.n);
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if rng.random_bool(self.p) {
                    graph.add_edge(u, v);
                }
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let empty = Gnp::new().nodes(10).prob(0.0).generate(rng).unwrap();
        assert_eq!(empty.number_of_edges(), 0);

        let complete = Gnp::new().nodes(10).prob(1.0).generate(rng).unwrap();
        assert_eq!(complete.number_of_edges(), 45);
        assert!(complete.vertices().all(|u| !complete.has_self_loop(u)));
    }

    #[test]
    fn edge_count_is_plausible() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        // E[m] = p * n(n-1)/2 = 247.5 for n = 100, p = 0.05
        let mut total = 0u64;
        for _ in 0..20 {
            let graph = Gnp::new().nodes(100).prob(0.05).generate(rng).unwrap();
            total += graph.number_of_edges() as u64;
        }
        let avg = total as f64 / 20.0;
        assert!((150.0..350.0).contains(&avg), "average edge count {avg}");
    }
}
