/*!
# Node Representation

We choose `Node = u32` as the networks studied here stay far below `2^32` nodes.
This saves space compared to `usize/u64` and allows manipulating node values
directly without abstracting over them.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
