/*!
# Detection & Similarity Oracles

The community-detection algorithms themselves (modularity/greedy, Infomap,
spectral/Bethe-Hessian, stochastic block model) and the adjusted-mutual-
information metric are *not* implemented in this crate. They are external
collaborators reached through the capability traits below, which makes the
orchestration layer testable with fixed-output stubs.

[`ExternalEngine`] is the production implementation: a handle to an
out-of-process numerical engine that receives graphs as GML files (spectral
method) or edge lists on stdin (igraph-family methods) and returns
partitions as whitespace-separated label lists.
*/

use std::{fmt::Display, str::FromStr};

use crate::{error::*, partition::Partition, repr::AdjArrayUndir};

mod engine;

pub use engine::*;

/// The four community detection methods compared by the harness.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// Greedy modularity optimization (Clauset-Newman-Moore)
    Modularity,
    /// The map equation (Rosvall et al.)
    Infomap,
    /// Spectral clustering with the Bethe Hessian (Saade et al.)
    Spectral,
    /// Stochastic block model inference (Peixoto)
    Sbm,
}

impl Method {
    /// All methods, in report order.
    pub const ALL: [Method; 4] = [
        Method::Modularity,
        Method::Infomap,
        Method::Spectral,
        Method::Sbm,
    ];

    /// The lowercase token used to select the method.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Modularity => "modularity",
            Method::Infomap => "infomap",
            Method::Spectral => "spectral",
            Method::Sbm => "sbm",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "modularity" => Ok(Method::Modularity),
            "infomap" => Ok(Method::Infomap),
            "spectral" => Ok(Method::Spectral),
            "sbm" => Ok(Method::Sbm),
            _ => Err(Error::invalid_parameter(
                "method",
                format!("expected one of: modularity, infomap, spectral, sbm; got '{s}'"),
            )),
        }
    }
}

/// Capability to run a community detection method on a graph.
///
/// Implementations must return one positive community label per node in
/// node-id order. Detection may be stochastic; repeated calls with the same
/// inputs need not agree.
pub trait DetectionOracle {
    /// Computes the community partition of `graph` under `method`.
    fn detect(&self, graph: &AdjArrayUndir, method: Method) -> Result<Partition>;
}

/// Capability to score the agreement of two partitions (adjusted mutual
/// information; `1.0` for identical partitions up to relabeling, can go
/// negative for worse-than-chance agreement).
pub trait SimilarityOracle {
    /// Computes the similarity of two partitions.
    fn similarity(&self, a: &Partition, b: &Partition) -> Result<f64>;
}
