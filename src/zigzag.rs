//! Level order traversals: values grouped by depth.

use tracing::{debug, instrument};

use crate::tree::Tree;
use crate::util::Levels;

/// Returns the values of each level, top to bottom, alternating direction: the root level left
/// to right, the next right to left, and so on. The empty tree has no levels.
///
/// # Examples
///
/// ```
/// use bintree::{tree, zigzag::zigzag_level_order};
///
/// //     3
/// //    / \
/// //   9   20
/// //      /  \
/// //     15   7
/// let tree = tree![3, 9, 20, null, null, 15, 7];
///
/// assert_eq!(
///     zigzag_level_order(&tree),
///     vec![vec![3], vec![20, 9], vec![15, 7]]
/// );
/// ```
#[instrument(level = "trace", skip_all)]
pub fn zigzag_level_order<T>(tree: &Tree<T>) -> Vec<Vec<T>>
where
    T: Clone,
{
    let mut left_to_right = true;
    let mut levels = Vec::new();
    for nodes in Levels::new(tree) {
        let width = nodes.len();
        let mut level: Vec<Option<T>> = vec![None; width];
        for (i, node) in nodes.into_iter().enumerate() {
            let slot = if left_to_right { i } else { width - 1 - i };
            level[slot] = Some(node.value().clone());
        }
        levels.push(level.into_iter().flatten().collect());
        left_to_right = !left_to_right;
    }

    debug!(levels = levels.len(), "computed zigzag level order");
    levels
}

/// Returns the values of each level, top to bottom, every level left to right.
///
/// # Examples
///
/// ```
/// use bintree::{tree, zigzag::level_order};
///
/// let tree = tree![3, 9, 20, null, null, 15, 7];
///
/// assert_eq!(level_order(&tree), vec![vec![3], vec![9, 20], vec![15, 7]]);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn level_order<T>(tree: &Tree<T>) -> Vec<Vec<T>>
where
    T: Clone,
{
    let levels: Vec<Vec<T>> = Levels::new(tree)
        .map(|nodes| nodes.into_iter().map(|node| node.value().clone()).collect())
        .collect();
    debug!(levels = levels.len(), "computed level order");
    levels
}
