/*!
# Network Generators

This module provides the stochastic graph generators the harness studies.

Each generator allows parameterized control over structural properties of the
graph (number of nodes, clustering parameter), configured through a
builder-style pattern. The typical usage workflow is:

1. Create a generator instance (e.g., `TriadicClosure::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).closure_prob(p)`).
3. Generate a graph via `generate(&mut rng)`.

Supported models:
- [`TriadicClosure`]: sequential attachment with triadic-closure bias
- [`ClusteredConfiguration`]: Newman's clustered configuration model with a
  jointly sampled (single-link, triangle) degree sequence
- [`Gnp`]: Erdős–Rényi model with independent edge probability, used for the
  seed graphs of the triadic-closure model

Both network models fix the target average degree at `4`.

All generators draw from an explicitly passed random source; seeding that
source is the caller's responsibility (tests use a seeded `Pcg64Mcg`).
Rejection-sampling loops inside the generators are attempt-capped and fail
with [`Error::GenerationFailure`](crate::error::Error::GenerationFailure)
instead of looping indefinitely.
*/

use rand::Rng;

use crate::{error::*, ops::*, prelude::*, utils::*};

mod clustered;
mod gnp;
mod triadic;

pub use clustered::*;
pub use gnp::*;
pub use triadic::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random network generator.
pub trait NetworkGenerator {
    /// Generates a graph using the provided random source.
    ///
    /// # Panics
    /// Panics if mandatory parameters (e.g. the number of nodes) were not set.
    fn generate<R>(&self, rng: &mut R) -> Result<AdjArrayUndir>
    where
        R: Rng;
}
