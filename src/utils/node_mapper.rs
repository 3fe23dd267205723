/*!
# Node Mapper

Provides functionality to map nodes between graphs.
Downstream conversions (to the oracle input formats) key nodes by position
in a dense array and silently corrupt data if given sparse ids, so every
graph leaving a generator must have its node ids form a contiguous
`0..M` range. The mapper records such a relabeling and answers lookups in
both directions.
*/

use fxhash::FxHashMap;

use crate::{edge::*, node::*, ops::*};

/// A bidirectional mapping between `old` node ids (possibly sparse) and
/// `new` node ids (dense `0..M` when built via [`NodeMapper::compacting`]).
#[derive(Debug, Clone, Default)]
pub struct NodeMapper {
    new_ids: FxHashMap<Node, Node>,
    old_ids: FxHashMap<Node, Node>,
}

impl NodeMapper {
    /// Builds a compacting mapper: old ids are assigned new ids `0, 1, 2, ...`
    /// in first-seen order. Duplicates in the input are ignored.
    ///
    /// # Example
    /// ```
    /// use commnet::utils::NodeMapper;
    ///
    /// let mapper = NodeMapper::compacting([7, 2, 7, 9]);
    /// assert_eq!(mapper.new_id_of(7), Some(0));
    /// assert_eq!(mapper.new_id_of(2), Some(1));
    /// assert_eq!(mapper.new_id_of(9), Some(2));
    /// assert_eq!(mapper.old_id_of(1), Some(2));
    /// ```
    pub fn compacting(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut res = Self::default();
        for old in nodes {
            if !res.new_ids.contains_key(&old) {
                let new = res.number_of_mapped();
                res.map_node_to(old, new);
            }
        }
        res
    }

    /// Stores a mapping `old <-> new`.
    pub fn map_node_to(&mut self, old: Node, new: Node) {
        self.new_ids.insert(old, new);
        self.old_ids.insert(new, old);
    }

    /// Returns the new id of `old` if mapped.
    pub fn new_id_of(&self, old: Node) -> Option<Node> {
        self.new_ids.get(&old).copied()
    }

    /// Returns the old id of `new` if mapped.
    pub fn old_id_of(&self, new: Node) -> Option<Node> {
        self.old_ids.get(&new).copied()
    }

    /// Returns the number of stored mappings.
    pub fn number_of_mapped(&self) -> NumNodes {
        self.new_ids.len() as NumNodes
    }

    /// Maps both endpoints of an edge, returning `None` if either is unmapped.
    pub fn map_edge(&self, edge: Edge) -> Option<Edge> {
        Some(Edge(self.new_id_of(edge.0)?, self.new_id_of(edge.1)?))
    }
}

/// Relabels a graph onto the contiguous node range `0..M` where `M` is its
/// number of nodes, using the graph's own vertex iteration order as the
/// relabeling basis. Adjacency structure is preserved exactly.
pub trait CompactNodes: Sized {
    /// Returns the relabeled graph together with the mapper that produced it.
    fn compacted(&self) -> (Self, NodeMapper);
}

impl<G> CompactNodes for G
where
    G: AdjacencyList + GraphEdgeOrder + GraphFromScratch,
{
    fn compacted(&self) -> (Self, NodeMapper) {
        let mapper = NodeMapper::compacting(self.vertices());
        let graph = Self::from_edges(
            mapper.number_of_mapped(),
            // all endpoints are vertices of self, so the mapping is total
            self.edges(true).map(|e| mapper.map_edge(e).unwrap()),
        );
        (graph, mapper)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::AdjArrayUndir;
    use itertools::Itertools;

    #[test]
    fn compacting_assigns_first_seen_order() {
        let mapper = NodeMapper::compacting([10, 4, 10, 0, 4, 2]);
        assert_eq!(mapper.number_of_mapped(), 4);
        assert_eq!(mapper.new_id_of(10), Some(0));
        assert_eq!(mapper.new_id_of(4), Some(1));
        assert_eq!(mapper.new_id_of(0), Some(2));
        assert_eq!(mapper.new_id_of(2), Some(3));
        assert_eq!(mapper.new_id_of(7), None);
        assert_eq!(mapper.old_id_of(3), Some(2));
    }

    #[test]
    fn map_edge_requires_both_endpoints() {
        let mapper = NodeMapper::compacting([5, 6]);
        assert_eq!(mapper.map_edge(Edge(5, 6)), Some(Edge(0, 1)));
        assert_eq!(mapper.map_edge(Edge(5, 7)), None);
    }

    #[test]
    fn compacted_preserves_structure() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 0), (4, 5)]);
        let (compacted, mapper) = graph.compacted();

        assert_eq!(compacted.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(compacted.number_of_edges(), graph.number_of_edges());

        let degrees = |g: &AdjArrayUndir| g.degrees().sorted_unstable().collect_vec();
        assert_eq!(degrees(&compacted), degrees(&graph));

        // the input range is already dense, so the mapping is the identity
        for u in graph.vertices() {
            assert_eq!(mapper.new_id_of(u), Some(u));
        }
    }
}
