//! Per-stripe boundary trees, arena-indexed.
//!
//! Each stripe owns (by id) a small binary tree whose leaves are the
//! x-coordinates where coverage toggles inside that stripe. Trees are built
//! bottom-up during the merge phase and only ever read back as their in-order
//! leaf sequence by the contour pass. Nodes live in one arena per run;
//! re-gridding can map a child tree into several parent cells, so cells share
//! subtrees by id instead of cloning them.

/// Index of a node in a [`TreeArena`]. The empty tree is `Option<NodeId>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(u32);

/// Whether a leaf marks the left or right end of a covered x-sub-interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundKind {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
enum Node {
    Leaf { x: f64, kind: BoundKind },
    Merge { left: NodeId, right: NodeId },
}

/// Arena owning all boundary-tree nodes of one sweep.
///
/// Subtrees abandoned by blackening stay in the arena until the whole run is
/// dropped; the arena is scratch state, not a long-lived store.
#[derive(Debug, Default)]
pub struct TreeArena {
    nodes: Vec<Node>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// New leaf marking a coverage toggle at `x`.
    #[inline]
    pub fn leaf(&mut self, x: f64, kind: BoundKind) -> NodeId {
        self.push(Node::Leaf { x, kind })
    }

    /// Join two non-empty sibling trees under a merge node.
    #[inline]
    pub fn merge(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.push(Node::Merge { left, right })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append the in-order leaf x-coordinates of `root` to `out`
    /// (left subtree fully before right).
    pub fn collect_leaves(&self, root: Option<NodeId>, out: &mut Vec<f64>) {
        let Some(root) = root else { return };
        // Explicit stack; tree depth equals the merge recursion depth but an
        // adversarial split sequence can still make it deep.
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            match self.nodes[id.0 as usize] {
                Node::Leaf { x, .. } => out.push(x),
                Node::Merge { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
    }

    /// Leaf count of `root`, for diagnostics and tests.
    pub fn leaf_count(&self, root: Option<NodeId>) -> usize {
        let mut buf = Vec::new();
        self.collect_leaves(root, &mut buf);
        buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_in_dfs_order() {
        let mut arena = TreeArena::new();
        let a = arena.leaf(1.0, BoundKind::Left);
        let b = arena.leaf(2.0, BoundKind::Right);
        let c = arena.leaf(3.0, BoundKind::Left);
        let ab = arena.merge(a, b);
        let root = arena.merge(ab, c);
        let mut out = Vec::new();
        arena.collect_leaves(Some(root), &mut out);
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
        assert_eq!(arena.leaf_count(Some(root)), 3);
    }

    #[test]
    fn empty_tree_has_no_leaves() {
        let arena = TreeArena::new();
        let mut out = Vec::new();
        arena.collect_leaves(None, &mut out);
        assert!(out.is_empty());
    }
}
