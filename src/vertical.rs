//! Vertical order traversal.
//!
//! Every node gets a coordinate: the root sits at column 0, row 0, a left child one column to
//! the left and one row down, a right child one column to the right and one row down. Values are
//! then read column by column, left to right, each column top to bottom. Nodes sharing both
//! column and row are ordered by value.
//!
//! # Examples
//!
//! ```
//! use bintree::{tree, vertical::vertical_order};
//!
//! //       1
//! //     /   \
//! //    2     3
//! //   / \   / \
//! //  4   5 6   7
//! let tree = tree![1, 2, 3, 4, 5, 6, 7];
//!
//! // 5 and 6 both land on column 0, row 2.
//! assert_eq!(
//!     vertical_order(&tree),
//!     vec![vec![4], vec![2], vec![1, 5, 6], vec![3], vec![7]]
//! );
//! ```

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, instrument};

use crate::tree::{Node, Tree};

/// Where a node sits in the vertical layout of its tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// Horizontal position. Negative is left of the root.
    pub column: isize,
    /// Depth below the root.
    pub row: usize,
}

impl Coordinate {
    const ROOT: Self = Self { column: 0, row: 0 };

    fn left(self) -> Self {
        Self {
            column: self.column - 1,
            row: self.row + 1,
        }
    }

    fn right(self) -> Self {
        Self {
            column: self.column + 1,
            row: self.row + 1,
        }
    }
}

/// Assigns every node its [`Coordinate`], returned in breadth-first order.
///
/// # Examples
///
/// ```
/// use bintree::{tree, vertical::{coordinates, Coordinate}};
///
/// let tree = tree![1, 2];
/// assert_eq!(
///     coordinates(&tree),
///     vec![
///         (Coordinate { column: 0, row: 0 }, &1),
///         (Coordinate { column: -1, row: 1 }, &2),
///     ]
/// );
/// ```
pub fn coordinates<T>(tree: &Tree<T>) -> Vec<(Coordinate, &T)> {
    let mut placed = Vec::new();
    let mut queue: VecDeque<(&Node<T>, Coordinate)> = tree
        .root()
        .map(|root| (root, Coordinate::ROOT))
        .into_iter()
        .collect();

    while let Some((node, at)) = queue.pop_front() {
        placed.push((at, node.value()));
        if let Some(left) = node.left() {
            queue.push_back((left, at.left()));
        }
        if let Some(right) = node.right() {
            queue.push_back((right, at.right()));
        }
    }

    placed
}

/// Returns the tree's values column by column. See the [module docs](self) for the ordering.
/// The empty tree has no columns.
#[instrument(level = "trace", skip_all)]
pub fn vertical_order<T>(tree: &Tree<T>) -> Vec<Vec<T>>
where
    T: Ord + Clone,
{
    let mut columns: BTreeMap<isize, BTreeMap<usize, Vec<&T>>> = BTreeMap::new();
    for (at, value) in coordinates(tree) {
        columns
            .entry(at.column)
            .or_default()
            .entry(at.row)
            .or_default()
            .push(value);
    }

    let order: Vec<Vec<T>> = columns
        .into_values()
        .map(|rows| {
            rows.into_values()
                .flat_map(|mut cell| {
                    cell.sort();
                    cell
                })
                .cloned()
                .collect()
        })
        .collect();

    debug!(columns = order.len(), "computed vertical order");
    order
}
