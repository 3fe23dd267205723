//! # GML
//!
//! The [Graph Modelling Language](https://en.wikipedia.org/wiki/Graph_Modelling_Language)
//! is a self-describing text markup listing nodes and edges as nested
//! key-value records. The external spectral engine accepts its graph input
//! exclusively as a GML file, so this writer is its conversion boundary.

use super::*;

/// A writer for the GML format
#[derive(Debug, Clone)]
pub struct GmlWriter {
    /// Additional indentation per nesting level
    indent: &'static str,
}

impl Default for GmlWriter {
    fn default() -> Self {
        Self { indent: "  " }
    }
}

impl GmlWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G> GraphWriter<G> for GmlWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let ind = self.indent;

        writeln!(writer, "graph [")?;
        for u in graph.vertices() {
            writeln!(writer, "{ind}node [")?;
            writeln!(writer, "{ind}{ind}id {u}")?;
            writeln!(writer, "{ind}]")?;
        }
        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "{ind}edge [")?;
            writeln!(writer, "{ind}{ind}source {u}")?;
            writeln!(writer, "{ind}{ind}target {v}")?;
            writeln!(writer, "{ind}]")?;
        }
        writeln!(writer, "]")
    }
}

/// Trait for writing a graph in the GML format.
/// Shorthand for default settings.
pub trait GmlWrite {
    /// Tries to write the graph to a writer
    fn try_write_gml<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_gml_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_gml(writer)
    }
}

impl<G> GmlWrite for G
where
    G: AdjacencyList,
{
    fn try_write_gml<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        GmlWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::AdjArrayUndir;

    #[test]
    fn writes_nodes_and_edges() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);

        let mut buf = Vec::new();
        graph.try_write_gml(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "graph [\n\
             \x20 node [\n\x20   id 0\n\x20 ]\n\
             \x20 node [\n\x20   id 1\n\x20 ]\n\
             \x20 node [\n\x20   id 2\n\x20 ]\n\
             \x20 edge [\n\x20   source 0\n\x20   target 1\n\x20 ]\n\
             \x20 edge [\n\x20   source 1\n\x20   target 2\n\x20 ]\n\
             ]\n"
        );
    }

    #[test]
    fn every_edge_appears_once() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);

        let mut buf = Vec::new();
        graph.try_write_gml(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.matches("edge [").count(), 4);
        assert_eq!(text.matches("node [").count(), 4);
    }
}
