//! What is visible when looking at the tree from one side: the outermost node of every level,
//! top to bottom.
//!
//! # Examples
//!
//! ```
//! use bintree::{side_view::{left_side_view, right_side_view}, tree};
//!
//! //     1
//! //    / \
//! //   2   3
//! //    \   \
//! //     5   4
//! let tree = tree![1, 2, 3, null, 5, null, 4];
//!
//! assert_eq!(right_side_view(&tree), vec![1, 3, 4]);
//! assert_eq!(left_side_view(&tree), vec![1, 2, 5]);
//! ```

use tracing::{debug, instrument};

use crate::tree::{Node, Tree};
use crate::util::Levels;

/// Returns the rightmost value of every level, top to bottom.
///
/// The tree is walked depth first, right subtree before left, so the first node reached at each
/// depth is that level's rightmost.
#[instrument(level = "trace", skip_all)]
pub fn right_side_view<T>(tree: &Tree<T>) -> Vec<T>
where
    T: Clone,
{
    let mut view = Vec::new();
    look(tree.root(), 0, Side::Right, &mut view);
    debug!(levels = view.len(), "computed right side view");
    view
}

/// Returns the leftmost value of every level, top to bottom.
#[instrument(level = "trace", skip_all)]
pub fn left_side_view<T>(tree: &Tree<T>) -> Vec<T>
where
    T: Clone,
{
    let mut view = Vec::new();
    look(tree.root(), 0, Side::Left, &mut view);
    debug!(levels = view.len(), "computed left side view");
    view
}

/// Same result as [`right_side_view`], computed breadth first by keeping the last node of every
/// level. Uses memory proportional to the tree's width instead of its height.
#[instrument(level = "trace", skip_all)]
pub fn right_side_view_by_level<T>(tree: &Tree<T>) -> Vec<T>
where
    T: Clone,
{
    let view: Vec<T> = Levels::new(tree)
        .filter_map(|level| level.last().map(|node| node.value().clone()))
        .collect();
    debug!(levels = view.len(), "computed right side view by level");
    view
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn look<T>(node: Option<&Node<T>>, depth: usize, side: Side, view: &mut Vec<T>)
where
    T: Clone,
{
    let node = match node {
        Some(node) => node,
        None => return,
    };

    // One value per level already seen, so this is the first node at `depth`.
    if depth == view.len() {
        view.push(node.value().clone());
    }

    let (near, far) = match side {
        Side::Right => (node.right(), node.left()),
        Side::Left => (node.left(), node.right()),
    };
    look(near, depth + 1, side, view);
    look(far, depth + 1, side, view);
}
