/*!
# IO

Utilities for writing graphs to the text formats the external detection
methods consume:

- **GML**: a self-describing node/edge markup. The spectral method runs in a
  separate numerical engine that only accepts file input in this format.
- **EdgeList**: one edge per line, used for the igraph-family methods.

Both writers implement [`GraphWriter`] and come with a shorthand trait
(`GmlWrite` / `EdgeListWrite`) implemented on graphs directly.
*/

mod edge_list;
mod gml;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::{ops::*, prelude::*};

pub use edge_list::*;
pub use gml::*;

/// Trait for writing a graph to a writer in a specific format.
pub trait GraphWriter<G> {
    /// Tries to write the graph to a writer
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, writer)
    }
}
