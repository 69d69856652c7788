//! This crate exposes a handful of classic binary tree algorithms, mostly for educational
//! purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is defined recursively using the notion of a [`Node`]. A `Node` stores a value
//! and has at most two child `Node`s, a left one and a right one. Every `Node` is owned by
//! exactly one parent, except the root which is owned by the [`Tree`] itself.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Unlike a Binary Search Tree nothing is assumed about how values are placed, so the
//! algorithms here look at the whole tree. Each is a single walk over the tree, either depth
//! first (using the call stack, so `O(height)` extra space) or breadth first (using a queue, so
//! `O(width)` extra space):
//!
//! - [`path_sum`]: the largest sum of values along any path.
//! - [`vertical`]: values grouped into columns.
//! - [`boundary`](mod@boundary): the outline of the tree, anticlockwise from the root.
//! - [`diameter`](mod@diameter): the number of edges on the longest path.
//! - [`side_view`]: the outermost value of every level.
//! - [`zigzag`]: values grouped by level, alternating direction.
//!
//! Trees are written as level-order literals with the [`tree!`] macro or parsed from strings:
//!
//! ```
//! use bintree::{tree, Tree};
//!
//! let tree = tree![1, 2, 3, null, 5, null, 4];
//! assert_eq!(bintree::right_side_view(&tree), vec![1, 3, 4]);
//!
//! let parsed: Tree<i64> = "[-3]".parse().unwrap();
//! assert_eq!(bintree::max_path_sum(&parsed), Ok(-3));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod boundary;
pub mod diameter;
mod error;
pub mod path_sum;
pub mod side_view;
mod tree;
mod util;
pub mod vertical;
pub mod zigzag;


pub use boundary::boundary;
pub use diameter::diameter;
pub use error::{Error, Result};
pub use path_sum::{max_path_sum, PathValue};
pub use side_view::{left_side_view, right_side_view};
pub use tree::{Node, Tree};
pub use vertical::vertical_order;
pub use zigzag::{level_order, zigzag_level_order};
