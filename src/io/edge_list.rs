//! # EdgeList
//!
//! Represents the graph as a list of edges separated by line breaks, one
//! `u v` pair per line. This is the exchange format for the igraph-family
//! detection methods, which rebuild the graph from `(node count, edge list)`.

use super::*;

/// A writer for the edge-list format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Prepend a `n m` header line
    with_header: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, writes a first line containing the number of nodes and edges.
    /// Required by consumers that pre-allocate their vertex set, since
    /// isolated nodes are invisible in the edge list itself.
    pub fn with_header(mut self, with_header: bool) -> Self {
        self.with_header = with_header;
        self
    }
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        if self.with_header {
            writeln!(
                writer,
                "{} {}",
                graph.number_of_nodes(),
                graph.number_of_edges()
            )?;
        }

        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "{u} {v}")?;
        }
        Ok(())
    }
}

/// Trait for writing a graph in the edge-list format.
/// Shorthand for default settings (header included).
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> EdgeListWrite for G
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_edge_list<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        EdgeListWriter::default()
            .with_header(true)
            .try_write_graph(self, writer)
    }
}
