use fxhash::FxHashSet;
use tracing::debug;

use super::*;
use crate::algo::Connectivity;

/// Number of links each node added in the growth phase receives.
/// Fixed at `2` so that generated networks have average degree `4`.
const NEW_LINKS: NumNodes = 2;

/// Edge probability of the seed-graph `G(n0, p0)` samples.
const SEED_EDGE_PROB: f64 = 0.3;

const DEFAULT_MAX_SEED_ATTEMPTS: usize = 10_000;

/// Generator for triadic-closure model networks.
///
/// Starting from a small connected seed graph, nodes are added one at a time
/// with [`NEW_LINKS`] links each: the first link attaches to a uniformly
/// random existing node, the remaining links prefer (with probability `p`) a
/// *friend of a friend* — a node at distance two from the new node — and fall
/// back to a uniformly random non-adjacent node otherwise.
///
/// Model reference: adapted from G. Bianconi, R.K. Darst, J. Iacovacci,
/// S. Fortunato, *Triadic closure as a basic generating mechanism of
/// communities in complex networks*, Physical Review E, 90, 1 (2014).
#[derive(Debug, Copy, Clone)]
pub struct TriadicClosure {
    n: NumNodes,
    p: f64,
    max_seed_attempts: usize,
}

impl Default for TriadicClosure {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }
}

impl TriadicClosure {
    /// Creates a new generator with closure probability `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the probability of preferring a friend-of-a-friend link.
    ///
    /// # Panics
    /// Panics if `p` is not in `[0, 1]`.
    pub fn closure_prob(mut self, p: f64) -> Self {
        assert!(p.is_valid_probability());
        self.p = p;
        self
    }

    /// Caps the rejection sampling of the connected seed graph.
    pub fn max_seed_attempts(mut self, attempts: usize) -> Self {
        self.max_seed_attempts = attempts;
        self
    }

    /// Smallest seed size `n0 >= m` on which a connected graph with at least
    /// `m` edges can exist, i.e. satisfying `2m <= n0 * (n0 - 1)`.
    fn seed_size() -> NumNodes {
        let m = NEW_LINKS;
        let mut n0 = 1;
        while !(2 * m <= n0 * (n0 - 1) && n0 >= m) {
            n0 += 1;
        }
        n0
    }

    /// Samples connected seed graphs with at least [`NEW_LINKS`] edges by
    /// rejection, bounded by `max_seed_attempts`.
    fn sample_seed<R>(&self, n0: NumNodes, rng: &mut R) -> Result<AdjArrayUndir>
    where
        R: Rng,
    {
        let gnp = Gnp::new().nodes(n0).prob(SEED_EDGE_PROB);
        for attempt in 0..self.max_seed_attempts {
            let seed = gnp.generate(rng)?;
            if seed.number_of_edges() >= NEW_LINKS && seed.is_connected() {
                debug!(attempt, "found connected seed graph");
                return Ok(seed);
            }
        }

        Err(Error::GenerationFailure {
            reason: "no connected seed graph with enough edges",
            attempts: self.max_seed_attempts,
        })
    }

    /// Picks the target of a non-first link for `new_node`.
    ///
    /// With probability `p` a friend of a friend is chosen uniformly among
    /// all candidates; if none exists, or with probability `1-p`, a uniformly
    /// random existing node not yet adjacent to `new_node` is chosen instead.
    fn pick_link_target<R>(&self, graph: &AdjArrayUndir, new_node: Node, rng: &mut R) -> Node
    where
        R: Rng,
    {
        if rng.random_bool(self.p) {
            let nbs: Vec<Node> = graph.neighbors_of(new_node).collect();

            let mut candidates = FxHashSet::default();
            for &v in &nbs {
                candidates.extend(graph.neighbors_of(v));
            }
            candidates.remove(&new_node);
            for v in &nbs {
                candidates.remove(v);
            }

            if !candidates.is_empty() {
                // sort for a deterministic draw under a fixed seed
                let mut candidates: Vec<Node> = candidates.into_iter().collect();
                candidates.sort_unstable();
                return candidates[rng.random_range(0..candidates.len())];
            }
        }

        let pool: Vec<Node> = (0..new_node)
            .filter(|&v| !graph.has_edge(new_node, v))
            .collect();
        pool[rng.random_range(0..pool.len())]
    }
}

impl NumNodesGen for TriadicClosure {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NetworkGenerator for TriadicClosure {
    fn generate<R>(&self, rng: &mut R) -> Result<AdjArrayUndir>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");

        let n0 = Self::seed_size();
        if self.n < n0 {
            // a connected seed with NEW_LINKS edges does not fit on n nodes
            return Err(Error::GenerationFailure {
                reason: "requested size is smaller than the seed graph",
                attempts: 0,
            });
        }

        let seed = self.sample_seed(n0, rng)?;
        let mut graph = AdjArrayUndir::new(self.n);
        graph.add_edges(seed.edges(true));

        for new_node in n0..self.n {
            let first = rng.random_range(0..new_node);
            graph.add_edge(new_node, first);

            for _ in 1..NEW_LINKS {
                let target = self.pick_link_target(&graph, new_node, rng);
                graph.add_edge(new_node, target);
            }
        }

        Ok(graph)
    }
}
