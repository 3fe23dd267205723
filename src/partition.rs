/*!
# Community Partitions

A community partition assigns each node of a graph to one of `K` labeled
groups. Detection methods return one label per node in node-id order;
labels are arbitrary positive integers, so partitions from two different
methods are only comparable through a similarity metric, never label by
label.
*/

use crate::{error::*, node::*};

/// Community label; always `>= 1`.
pub type CommunityId = u32;

/// A community assignment, one label per node in node-id order.
///
/// # Example
/// ```
/// use commnet::partition::Partition;
///
/// let part = Partition::from_labels(vec![1, 1, 2, 3, 1]).unwrap();
/// assert_eq!(part.number_of_nodes(), 5);
/// assert_eq!(part.number_of_communities(), 3);
/// assert_eq!(part.community_of(2), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    labels: Vec<CommunityId>,
}

impl Partition {
    /// Creates a partition from per-node labels.
    ///
    /// Fails with `InvalidParameter` if any label is `0` — community ids
    /// start at `1`, and a zero almost always indicates an off-by-one in an
    /// oracle's output conversion.
    pub fn from_labels(labels: Vec<CommunityId>) -> Result<Self> {
        if labels.iter().any(|&l| l == 0) {
            return Err(Error::invalid_parameter(
                "labels",
                "community ids must be positive",
            ));
        }
        Ok(Self { labels })
    }

    /// Number of nodes covered by the partition.
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Number of communities, i.e. the largest label in use.
    pub fn number_of_communities(&self) -> NumNodes {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Community label of a node.
    /// ** Panics if `u >= n` **
    pub fn community_of(&self, u: Node) -> CommunityId {
        self.labels[u as usize]
    }

    /// Labels in node-id order.
    pub fn labels(&self) -> &[CommunityId] {
        &self.labels
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_zero_labels() {
        assert!(Partition::from_labels(vec![1, 0, 2]).is_err());
    }

    #[test]
    fn community_count_is_max_label() {
        let part = Partition::from_labels(vec![2, 2, 5]).unwrap();
        assert_eq!(part.number_of_communities(), 5);

        let empty = Partition::from_labels(vec![]).unwrap();
        assert_eq!(empty.number_of_communities(), 0);
    }
}
