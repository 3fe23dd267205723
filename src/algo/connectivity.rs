use super::*;

/// Connectivity checks on undirected graphs.
pub trait Connectivity: AdjacencyList {
    /// Returns *true* if every node is reachable from every other node.
    /// The empty graph is not considered connected.
    fn is_connected(&self) -> bool;

    /// Returns the number of connected components.
    fn number_of_connected_components(&self) -> NumNodes;
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return false;
        }

        bfs_component(self, 0, &mut vec![false; self.len()]) == self.number_of_nodes()
    }

    fn number_of_connected_components(&self) -> NumNodes {
        let mut visited = vec![false; self.len()];
        let mut components = 0;
        for u in self.vertices_range() {
            if !visited[u as usize] {
                components += 1;
                bfs_component(self, u, &mut visited);
            }
        }
        components
    }
}

/// Marks all nodes reachable from `start` and returns how many were visited.
fn bfs_component<G: AdjacencyList>(graph: &G, start: Node, visited: &mut [bool]) -> NumNodes {
    let mut queue = std::collections::VecDeque::from([start]);
    visited[start as usize] = true;
    let mut seen = 1;

    while let Some(u) = queue.pop_front() {
        for v in graph.neighbors_of(u) {
            if !visited[v as usize] {
                visited[v as usize] = true;
                seen += 1;
                queue.push_back(v);
            }
        }
    }

    seen
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::AdjArrayUndir;

    #[test]
    fn path_is_connected() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert!(graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 1);
    }

    #[test]
    fn isolated_node_disconnects() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
        assert!(!graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 2);
    }

    #[test]
    fn empty_graph_is_not_connected() {
        let graph = AdjArrayUndir::new(0);
        assert!(!graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 0);
    }

    #[test]
    fn singleton_is_connected() {
        let graph = AdjArrayUndir::new(1);
        assert!(graph.is_connected());
    }
}
