/*!
# Network Sessions

A [`NetworkSession`] wraps one generated network together with the
parameters that produced it. Parameters are validated once, the graph is
generated once, and the session is immutable afterwards — there is no
in-place regeneration.

Community structure is examined through injected oracles (see
[`crate::oracle`]): [`NetworkSession::get_communities`] runs a single
detection method, [`NetworkSession::summarize`] runs all four and reports
community counts plus pairwise partition similarity.
*/

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    algo::ClusteringCoefficient,
    error::*,
    gens::*,
    node::NumNodes,
    ops::{GraphEdgeOrder, GraphNodeOrder},
    oracle::{DetectionOracle, Method, SimilarityOracle},
    partition::Partition,
    repr::AdjArrayUndir,
};

/// The two network generation models offered by the harness.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NetworkModel {
    /// Sequential attachment with triadic-closure bias; `t` acts as the
    /// closure probability `p` in `[0, 1]`.
    TriadicClosure,
    /// Clustered configuration model; `t` acts as the clustering target `c`
    /// in `[0, 0.2]`.
    Configuration,
}

impl NetworkModel {
    fn validate_clustering_param(&self, t: f64) -> Result<()> {
        match self {
            NetworkModel::TriadicClosure if !(0.0..=1.0).contains(&t) => Err(
                Error::invalid_parameter("t", format!("expected 0 <= t <= 1, got {t}")),
            ),
            NetworkModel::Configuration if !(0.0..=MAX_CLUSTERING).contains(&t) => Err(
                Error::invalid_parameter("t", format!("expected 0 <= t <= 0.2, got {t}")),
            ),
            _ => Ok(()),
        }
    }
}

impl Display for NetworkModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NetworkModel::TriadicClosure => "triadic_closure",
            NetworkModel::Configuration => "configuration",
        })
    }
}

impl FromStr for NetworkModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "triadic_closure" => Ok(NetworkModel::TriadicClosure),
            "configuration" => Ok(NetworkModel::Configuration),
            _ => Err(Error::invalid_parameter(
                "model",
                format!("expected one of: triadic_closure, configuration; got '{s}'"),
            )),
        }
    }
}

/// One generated network plus the parameters that created it.
pub struct NetworkSession {
    model: NetworkModel,
    n: NumNodes,
    t: f64,
    graph: AdjArrayUndir,
}

impl NetworkSession {
    /// Validates `(model, n, t)` and generates the network.
    ///
    /// `n` must be positive and `t` must lie in the model's valid range
    /// (`[0, 1]` for triadic closure, `[0, 0.2]` for configuration);
    /// violations fail with [`Error::InvalidParameter`] before any random
    /// number is drawn.
    pub fn new<R>(model: NetworkModel, n: NumNodes, t: f64, rng: &mut R) -> Result<Self>
    where
        R: Rng,
    {
        if n == 0 {
            return Err(Error::invalid_parameter(
                "N",
                "expected an integer greater than zero",
            ));
        }
        model.validate_clustering_param(t)?;

        let graph = match model {
            NetworkModel::TriadicClosure => TriadicClosure::new()
                .nodes(n)
                .closure_prob(t)
                .generate(rng)?,
            NetworkModel::Configuration => ClusteredConfiguration::new()
                .nodes(n)
                .clustering(t)
                .generate(rng)?,
        };

        info!(
            %model, n, t,
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "generated network"
        );

        Ok(Self { model, n, t, graph })
    }

    /// Parses the model token (`triadic_closure` / `configuration`) before
    /// delegating to [`NetworkSession::new`].
    pub fn with_model_name<R>(model: &str, n: NumNodes, t: f64, rng: &mut R) -> Result<Self>
    where
        R: Rng,
    {
        Self::new(model.parse()?, n, t, rng)
    }

    /// The model that generated this network.
    pub fn model(&self) -> NetworkModel {
        self.model
    }

    /// The requested network size. The generated graph may be smaller for
    /// the configuration model; read [`NetworkSession::graph`] for the
    /// actual node count.
    pub fn requested_size(&self) -> NumNodes {
        self.n
    }

    /// The clustering parameter the network was generated with.
    pub fn clustering_param(&self) -> f64 {
        self.t
    }

    /// The generated network.
    pub fn graph(&self) -> &AdjArrayUndir {
        &self.graph
    }

    /// Runs one community detection method, selected by its lowercase token
    /// (`modularity|infomap|spectral|sbm`).
    ///
    /// Fails with [`Error::InvalidParameter`] for unrecognized tokens.
    /// Each call hits the oracle afresh; results are never memoized since
    /// several methods are stochastic.
    pub fn get_communities<D>(&self, oracle: &D, method: &str) -> Result<Partition>
    where
        D: DetectionOracle,
    {
        let method: Method = method.parse()?;
        debug!(%method, "running community detection");
        oracle.detect(&self.graph, method)
    }

    /// Runs all four detection methods and scores every method pair,
    /// returning a printable report.
    ///
    /// Any single oracle failure aborts the whole summary; a partial report
    /// would be indistinguishable from a complete one.
    pub fn summarize<D, S>(&self, detection: &D, similarity: &S) -> Result<CommunitySummary>
    where
        D: DetectionOracle,
        S: SimilarityOracle,
    {
        let partitions: Vec<(Method, Partition)> = Method::ALL
            .into_iter()
            .map(|method| {
                debug!(%method, "running community detection");
                Ok((method, detection.detect(&self.graph, method)?))
            })
            .collect::<Result<_>>()?;

        let number_of_communities = partitions
            .iter()
            .map(|(method, part)| (*method, part.number_of_communities()))
            .collect();

        let similarities = partitions
            .iter()
            .tuple_combinations()
            .map(|((ma, pa), (mb, pb))| {
                debug!(a = %ma, b = %mb, "scoring partition similarity");
                Ok((*ma, *mb, similarity.similarity(pa, pb)?))
            })
            .collect::<Result<_>>()?;

        Ok(CommunitySummary {
            model: self.model,
            size: self.n,
            clustering_param: self.t,
            clustering_coefficient: self.graph.transitivity(),
            number_of_communities,
            similarities,
        })
    }
}

/// Report over all four detection methods on one network.
///
/// The `Display` rendering is meant for humans; none of its layout is a
/// machine contract.
#[derive(Debug, Clone)]
pub struct CommunitySummary {
    /// Generation model of the summarized network.
    pub model: NetworkModel,
    /// Requested network size.
    pub size: NumNodes,
    /// Clustering parameter the network was generated with.
    pub clustering_param: f64,
    /// Measured global clustering coefficient (transitivity).
    pub clustering_coefficient: f64,
    /// Detected community count per method, in report order.
    pub number_of_communities: Vec<(Method, NumNodes)>,
    /// Pairwise partition similarity (AMI) for all unordered method pairs.
    pub similarities: Vec<(Method, Method, f64)>,
}

impl Display for CommunitySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "########################";

        writeln!(f, "{rule}\n")?;
        writeln!(f, "Network model: {}", self.model)?;
        writeln!(f, "Network size: {}", self.size)?;
        writeln!(f, "Clustering parameter: {}", self.clustering_param)?;
        writeln!(
            f,
            "Clustering coefficient: {:.3}",
            self.clustering_coefficient
        )?;
        writeln!(f, "\n{rule}\n")?;

        writeln!(f, "NUMBER OF COMMUNITIES\n")?;
        for (method, count) in &self.number_of_communities {
            writeln!(f, "{method}: {count}")?;
        }
        writeln!(f, "\n{rule}\n")?;

        writeln!(f, "COMMUNITY SIMILARITY (AMI)\n")?;
        for (a, b, score) in &self.similarities {
            writeln!(f, "{a}-{b}: {score:.3}")?;
        }
        writeln!(f, "\n{rule}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ops::{AdjacencyList, AdjacencyTest};
    use crate::partition::CommunityId;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::cell::Cell;

    /// Fixed-output detection stub: distinct label layout per method, plus
    /// a call counter to observe memoization (there must be none).
    struct StubDetection {
        calls: Cell<usize>,
    }

    impl StubDetection {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl DetectionOracle for StubDetection {
        fn detect(&self, graph: &AdjArrayUndir, method: Method) -> Result<Partition> {
            self.calls.set(self.calls.get() + 1);

            // one community per method index, assigned round-robin
            let communities = match method {
                Method::Modularity => 1,
                Method::Infomap => 2,
                Method::Spectral => 3,
                Method::Sbm => 4,
            };
            let labels = (0..graph.number_of_nodes())
                .map(|u| (u % communities) as CommunityId + 1)
                .collect();
            Partition::from_labels(labels)
        }
    }

    /// Similarity stub: maximal score iff the two partitions agree up to
    /// relabeling (every node pair is co-member in one iff it is in the
    /// other), zero otherwise.
    struct StubSimilarity;

    impl SimilarityOracle for StubSimilarity {
        fn similarity(&self, a: &Partition, b: &Partition) -> Result<f64> {
            let n = a.number_of_nodes();
            let agree = n == b.number_of_nodes()
                && (0..n).all(|i| {
                    (i + 1..n).all(|j| {
                        (a.community_of(i) == a.community_of(j))
                            == (b.community_of(i) == b.community_of(j))
                    })
                });
            Ok(if agree { 1.0 } else { 0.0 })
        }
    }

    struct FailingDetection;

    impl DetectionOracle for FailingDetection {
        fn detect(&self, _: &AdjArrayUndir, _: Method) -> Result<Partition> {
            Err(Error::Oracle("stub failure".into()))
        }
    }

    fn session(rng_seed: u64) -> NetworkSession {
        let rng = &mut Pcg64Mcg::seed_from_u64(rng_seed);
        NetworkSession::new(NetworkModel::TriadicClosure, 50, 0.0, rng).unwrap()
    }

    #[test]
    fn construction_rejects_bad_parameters() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);

        for (model, n, t) in [
            (NetworkModel::TriadicClosure, 0, 0.5),
            (NetworkModel::TriadicClosure, 100, 1.5),
            (NetworkModel::TriadicClosure, 100, -0.1),
            (NetworkModel::Configuration, 100, 0.3),
        ] {
            let res = NetworkSession::new(model, n, t, rng);
            assert!(
                matches!(res, Err(Error::InvalidParameter { .. })),
                "({model}, {n}, {t}) was not rejected"
            );
        }

        assert!(matches!(
            NetworkSession::with_model_name("small_world", 100, 0.5, rng),
            Err(Error::InvalidParameter { name: "model", .. })
        ));
    }

    #[test]
    fn generated_network_matches_request() {
        let s = session(43);

        assert_eq!(s.graph().number_of_nodes(), 50);
        assert_eq!(s.requested_size(), 50);
        assert!(s.graph().vertices().all(|u| !s.graph().has_self_loop(u)));
        // every node grown after the three seed nodes received two links
        assert!((3..50).all(|u| s.graph().degree_of(u) >= 2));
    }

    #[test]
    fn get_communities_validates_method_token() {
        let s = session(47);
        let oracle = StubDetection::new();

        assert!(matches!(
            s.get_communities(&oracle, "bogus"),
            Err(Error::InvalidParameter { name: "method", .. })
        ));
        assert_eq!(oracle.calls.get(), 0);
    }

    #[test]
    fn get_communities_never_memoizes() {
        let s = session(53);
        let oracle = StubDetection::new();

        let first = s.get_communities(&oracle, "modularity").unwrap();
        let second = s.get_communities(&oracle, "modularity").unwrap();

        assert_eq!(first, second);
        assert_eq!(oracle.calls.get(), 2);
    }

    #[test]
    fn summary_covers_all_methods_and_pairs() {
        let s = session(59);
        let oracle = StubDetection::new();

        let summary = s.summarize(&oracle, &StubSimilarity).unwrap();

        assert_eq!(oracle.calls.get(), 4);
        assert_eq!(summary.number_of_communities.len(), 4);
        assert_eq!(summary.similarities.len(), 6);

        for (method, expected) in Method::ALL.into_iter().zip([1, 2, 3, 4]) {
            let &(m, count) = summary
                .number_of_communities
                .iter()
                .find(|(m, _)| *m == method)
                .unwrap();
            assert_eq!((m, count), (method, expected));
        }

        // the stub partitions differ pairwise, so all similarities are zero
        assert!(summary.similarities.iter().all(|&(_, _, s)| s == 0.0));
    }

    #[test]
    fn identical_partitions_score_maximal_similarity() {
        let a = Partition::from_labels(vec![1, 1, 2, 2]).unwrap();
        let b = Partition::from_labels(vec![1, 1, 2, 2]).unwrap();
        assert_eq!(StubSimilarity.similarity(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn similarity_is_label_invariant() {
        let a = Partition::from_labels(vec![1, 1, 2, 2]).unwrap();
        let relabeled = Partition::from_labels(vec![2, 2, 1, 1]).unwrap();
        assert_eq!(StubSimilarity.similarity(&a, &relabeled).unwrap(), 1.0);

        let regrouped = Partition::from_labels(vec![1, 2, 2, 1]).unwrap();
        assert_eq!(StubSimilarity.similarity(&a, &regrouped).unwrap(), 0.0);
    }

    #[test]
    fn summary_aborts_on_first_oracle_failure() {
        let s = session(61);
        let res = s.summarize(&FailingDetection, &StubSimilarity);
        assert!(matches!(res, Err(Error::Oracle(_))));
    }

    #[test]
    fn summary_report_lists_every_method() {
        let s = session(67);
        let summary = s.summarize(&StubDetection::new(), &StubSimilarity).unwrap();
        let text = summary.to_string();

        assert!(text.contains("Network model: triadic_closure"));
        assert!(text.contains("Network size: 50"));
        for method in Method::ALL {
            assert!(text.contains(&format!("{method}: ")));
        }
        assert!(text.contains("modularity-infomap: 0.000"));
    }
}
