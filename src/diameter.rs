//! Diameter: the number of edges on the longest path between any two nodes.

use tracing::{debug, instrument};

use crate::tree::{Node, Tree};

/// Returns the diameter of the tree. The longest path does not have to pass through the root.
/// Trees with fewer than two nodes have a diameter of 0.
///
/// # Examples
///
/// ```
/// use bintree::{diameter::diameter, tree};
///
/// //       1
/// //      / \
/// //     2   3
/// //    / \
/// //   4   5
/// // 4 -> 2 -> 1 -> 3 (or 5 -> 2 -> 1 -> 3)
/// assert_eq!(diameter(&tree![1, 2, 3, 4, 5]), 3);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn diameter<T>(tree: &Tree<T>) -> usize {
    let Measure { longest, .. } = tree.root().map(measure).unwrap_or_default();
    debug!(diameter = longest, "computed diameter");
    longest
}

/// What a subtree reports to its parent.
#[derive(Clone, Copy, Default)]
struct Measure {
    /// Levels in the subtree, matching [`Node::height`].
    height: usize,
    /// Edges on the longest path inside the subtree.
    longest: usize,
}

fn measure<T>(node: &Node<T>) -> Measure {
    let left = node.left().map(measure).unwrap_or_default();
    let right = node.right().map(measure).unwrap_or_default();

    // Edges on the path that turns here: down the left side and down the right side.
    let turning = left.height + right.height;

    Measure {
        height: 1 + left.height.max(right.height),
        longest: turning.max(left.longest).max(right.longest),
    }
}
