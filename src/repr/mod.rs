/*!
# Graph Representations

The harness only ever works on undirected, unweighted, simple graphs with a
dense node range `0..n`, so a single adjacency-array representation suffices.
*/

mod undirected;

pub use undirected::*;
