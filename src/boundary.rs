//! Boundary traversal: the tree's outline, anticlockwise from the root.
//!
//! The boundary is the root, then the left edge going down, then every leaf from left to right,
//! then the right edge coming back up. Leaves are only ever emitted by the leaf pass, so a leaf at
//! the end of an edge is not counted twice, and a root with no children is emitted once.
//!
//! # Examples
//!
//! ```
//! use bintree::{boundary::boundary, tree};
//!
//! //        20
//! //       /  \
//! //      8    22
//! //     / \     \
//! //    4   12    25
//! //       /  \
//! //      10   14
//! let tree = tree![20, 8, 22, 4, 12, null, 25, null, null, 10, 14];
//!
//! assert_eq!(boundary(&tree), vec![20, 8, 4, 10, 14, 25, 22]);
//! ```

use tracing::{debug, instrument};

use crate::tree::{Node, Tree};

/// Returns the values on the boundary of the tree. The empty tree has an empty boundary.
#[instrument(level = "trace", skip_all)]
pub fn boundary<T>(tree: &Tree<T>) -> Vec<T>
where
    T: Clone,
{
    let root = match tree.root() {
        Some(root) => root,
        None => return Vec::new(),
    };

    let mut outline = Vec::new();
    if !root.is_leaf() {
        outline.push(root.value().clone());
    }
    outline.extend(edge(root.left(), Side::Left));
    outline.extend(leaves(root));
    outline.extend(edge(root.right(), Side::Right).into_iter().rev());

    debug!(len = outline.len(), "computed boundary");
    outline
}

/// Which edge of the tree to follow.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Walks down an edge starting at `start`, preferring the child on `side` and falling back to the
/// other one. Leaves are skipped. Values come out top to bottom.
fn edge<T>(start: Option<&Node<T>>, side: Side) -> Vec<T>
where
    T: Clone,
{
    let mut values = Vec::new();
    let mut current = start;
    while let Some(node) = current {
        if !node.is_leaf() {
            values.push(node.value().clone());
        }
        current = match side {
            Side::Left => node.left().or_else(|| node.right()),
            Side::Right => node.right().or_else(|| node.left()),
        };
    }
    values
}

/// All leaves under `root`, left to right.
fn leaves<T>(root: &Node<T>) -> Vec<T>
where
    T: Clone,
{
    let mut values = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            values.push(node.value().clone());
        }
        // Right goes on the stack first so the left subtree comes off first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_complete_tree() {
        //       1
        //      / \
        //     2   3
        //    / \
        //   4   5
        let tree = tree![1, 2, 3, 4, 5];

        assert_eq!(boundary(&tree), vec![1, 2, 4, 5, 3]);
    }

    #[test]
    fn test_root_leaf_appears_once() {
        assert_eq!(boundary(&tree![7]), vec![7]);
    }

    #[test]
    fn test_edge_turns_when_child_missing() {
        //     1
        //    /
        //   2
        //    \
        //     3
        //    /
        //   4
        let tree = tree![1, 2, null, null, 3, 4];

        // The left edge runs 2 -> 3 -> 4, and 4 is the only leaf.
        assert_eq!(boundary(&tree), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_right_edge_comes_back_up() {
        //   1
        //    \
        //     2
        //      \
        //       3
        //      /
        //     4
        let tree = tree![1, null, 2, null, 3, 4];

        assert_eq!(boundary(&tree), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<i32> = tree![];

        assert!(boundary(&tree).is_empty());
    }

    #[test]
    fn test_leaves_left_to_right() {
        let tree = tree![1, 2, 3, 4, 5, 6, 7];

        assert_eq!(leaves(tree.root().unwrap()), vec![4, 5, 6, 7]);
    }

    /// Distinct values make double counting visible.
    #[quickcheck]
    fn no_node_twice(tree: Tree<u8>) -> bool {
        let mut next = 0u32;
        let numbered = Tree::from_level_order(tree.to_level_order().into_iter().map(|slot| {
            slot.map(|_| {
                next += 1;
                next
            })
        }));

        let mut outline = boundary(&numbered);
        let len = outline.len();
        outline.sort_unstable();
        outline.dedup();

        outline.len() == len && len <= numbered.len()
    }
}
