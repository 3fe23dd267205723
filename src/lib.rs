/*!
`commnet` is a harness for studying how community detection algorithms behave
on synthetic networks whose clustering (triangle density) is tunable.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph; all graphs here are unlabelled, unweighted and undirected.
**Edges** are the simple tuple-struct `Edge(Node, Node)` with `Edge(u, v)`
treated as equivalent to `Edge(v, u)`. Graphs are stored as the adjacency
array [`repr::AdjArrayUndir`], which fits the sparse, small-degree networks
the generators produce.

# Network models

Two generative models, both exposed as configurable builder structs in
[`gens`]:

- [`gens::TriadicClosure`] grows a network node by node; each newcomer links
  twice, and with probability `p` the second link closes a triangle through a
  friend of a friend. Higher `p` means more clustering.
- [`gens::ClusteredConfiguration`] samples a joint degree sequence of single
  edges and triangle corners from independent Poissons calibrated to a target
  clustering `c`, then matches stubs at random.

# Community detection

The detection algorithms themselves (modularity, Infomap, spectral, SBM) and
the adjusted-mutual-information metric run in an external numerical engine;
this crate talks to it through the oracle traits of [`oracle`]. The
[`session`] module ties everything together: generate a network once, then
query detection methods against it and print a comparison report.

# Usage

In most use-cases, `use commnet::{prelude::*, algo::*};` plus the
[`session::NetworkSession`] entry point suffices:

```no_run
use commnet::{oracle::ExternalEngine, session::*};
use rand::rng;

fn main() -> commnet::error::Result<()> {
    let session = NetworkSession::new(NetworkModel::TriadicClosure, 1000, 0.7, &mut rng())?;

    let engine = ExternalEngine::start("community-engine")?;
    println!("{}", session.summarize(&engine, &engine)?);
    engine.shutdown();
    Ok(())
}
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod oracle;
pub mod partition;
pub mod repr;
pub mod session;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `commnet::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
