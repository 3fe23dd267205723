/*!
# Utilities

Provides the `NodeMapper`-framework for relabeling graphs (see
[`NodeMapper`] / [`CompactNodes`]) as well as small helper traits shared by
the generators.
*/

pub mod node_mapper;

pub use node_mapper::{CompactNodes, NodeMapper};

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probability(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}
