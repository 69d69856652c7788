//! The binary tree every algorithm in this crate reads from.
//!
//! Trees are immutable once built. They are usually written down as level-order literals, the
//! same notation puzzle sites use: the root first, then for every present node (breadth first)
//! a slot for its left child and one for its right child, `null` marking a missing child.
//!
//! # Examples
//!
//! ```
//! use bintree::{tree, Tree};
//!
//! //     1
//! //    / \
//! //   2   3
//! //    \
//! //     5
//! let tree = tree![1, 2, 3, null, 5];
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.height(), 3);
//!
//! // Literals can also be parsed, and `Display` writes them back out.
//! let parsed: Tree<i32> = "[1, 2, 3, null, 5]".parse().unwrap();
//! assert_eq!(parsed, tree);
//! assert_eq!(tree.to_string(), "[1, 2, 3, null, 5]");
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::util::Levels;

/// An owned, possibly missing, child.
type Link<T> = Option<Box<Node<T>>>;

/// A binary tree of values. The empty tree has no root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

/// A single node. Every node is owned by exactly one parent (or by the [`Tree`] for the root).
// TODO stack based Clone
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels in the subtree rooted here. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = vec![self];
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Nodes are unlinked one at a time so degenerate trees don't recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree from a level-order sequence of slots.
    ///
    /// The first slot is the root. After that, every present node takes the next two slots as
    /// its left and right child, in breadth-first order. Missing nodes take no slots. Slots left
    /// over once no node is waiting for children are ignored, and running out of slots early
    /// just leaves the remaining children missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_level_order(vec![Some(3), Some(9), Some(20), None, None, Some(15)]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.left().map(|n| *n.value()), Some(9));
    /// assert_eq!(root.right().and_then(|n| n.left()).map(|n| *n.value()), Some(15));
    ///
    /// // A missing root means an empty tree.
    /// assert!(Tree::<i32>::from_level_order(vec![None, Some(1)]).is_empty());
    /// ```
    pub fn from_level_order<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut slots = slots.into_iter();
        let mut root = match slots.next().flatten() {
            Some(value) => Node::boxed(value),
            None => return Self::new(),
        };

        {
            let mut waiting: VecDeque<&mut Node<T>> = VecDeque::new();
            waiting.push_back(&mut *root);
            while let Some(parent) = waiting.pop_front() {
                let Node { left, right, .. } = parent;

                match slots.next() {
                    Some(slot) => *left = slot.map(Node::boxed),
                    None => break,
                }
                *right = slots.next().flatten().map(Node::boxed);

                if let Some(child) = left.as_deref_mut() {
                    waiting.push_back(child);
                }
                if let Some(child) = right.as_deref_mut() {
                    waiting.push_back(child);
                }
            }
        }

        Self { root: Some(root) }
    }

    /// The root node, or `None` for the empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Number of levels in the tree. The empty tree has a height of 0.
    pub fn height(&self) -> usize {
        Levels::new(self).count()
    }

    /// The inverse of [`Tree::from_level_order`]: every node breadth first, with `None` for each
    /// missing child of a present node. Trailing `None`s are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree;
    ///
    /// let tree = tree![1, null, 2, 3];
    /// assert_eq!(tree.to_level_order(), vec![Some(1), None, Some(2), Some(3)]);
    /// ```
    pub fn to_level_order(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let mut slots = Vec::new();
        let mut queue: VecDeque<Option<&Node<T>>> = self.root().map(Some).into_iter().collect();
        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    slots.push(Some(node.value.clone()));
                    queue.push_back(node.left());
                    queue.push_back(node.right());
                }
                None => slots.push(None),
            }
        }

        while let Some(None) = slots.last() {
            slots.pop();
        }
        slots
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.to_level_order().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => write!(f, "{}", value)?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("]")
    }
}

impl<T> FromStr for Tree<T>
where
    T: FromStr,
{
    type Err = Error;

    /// Parses a level-order literal such as `[1, 2, null, 3]`. The brackets are optional, `null`
    /// is case-insensitive, one trailing comma is allowed and an empty list is the empty tree.
    fn from_str(s: &str) -> Result<Self> {
        let literal = s.trim();
        let literal = literal.strip_prefix('[').unwrap_or(literal);
        let literal = literal.strip_suffix(']').unwrap_or(literal).trim_end();
        let literal = literal.strip_suffix(',').unwrap_or(literal);
        if literal.trim().is_empty() {
            return Ok(Self::new());
        }

        let slots = literal
            .split(',')
            .enumerate()
            .map(|(position, token)| {
                let token = token.trim();
                if token.eq_ignore_ascii_case("null") {
                    return Ok(None);
                }
                token.parse::<T>().map(Some).map_err(|_| Error::Parse {
                    token: token.to_owned(),
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_level_order(slots))
    }
}

/// Builds a [`Tree`] from a level-order literal, `null` marking a missing child.
///
/// # Examples
///
/// ```
/// use bintree::tree;
///
/// //   -10
/// //   /  \
/// //  9    20
/// //      /  \
/// //     15   7
/// let tree = tree![-10, 9, 20, null, null, 15, 7];
/// assert_eq!(tree.len(), 5);
/// ```
#[macro_export]
macro_rules! tree {
    () => {
        $crate::Tree::new()
    };
    (@slots [$($slot:expr),*]) => {
        $crate::Tree::from_level_order(::std::vec![$($slot),*])
    };
    (@slots [$($slot:expr),*] null $(, $($rest:tt)*)?) => {
        $crate::tree!(@slots [$($slot,)* ::std::option::Option::None] $($($rest)*)?)
    };
    (@slots [$($slot:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::tree!(@slots [$($slot,)* ::std::option::Option::Some($value)] $($($rest)*)?)
    };
    ($($literal:tt)+) => {
        $crate::tree!(@slots [] $($literal)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_empty() {
        let tree: Tree<i32> = tree![];

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.to_string(), "[]");
    }

    #[test]
    fn test_single_node_is_leaf() {
        let tree = tree![7];
        let root = tree.root().unwrap();

        assert!(root.is_leaf());
        assert_eq!(root.value(), &7);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_missing_nodes_take_no_slots() {
        //     1
        //    / \
        //   2   3
        //    \   \
        //     5   4
        let tree = tree![1, 2, 3, null, 5, null, 4];
        let root = tree.root().unwrap();
        let two = root.left().unwrap();
        let three = root.right().unwrap();

        assert_eq!(two.left(), None);
        assert_eq!(two.right().map(Node::value), Some(&5));
        assert_eq!(three.left(), None);
        assert_eq!(three.right().map(Node::value), Some(&4));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_extra_slots_are_ignored() {
        let tree = Tree::from_level_order(vec![Some(1), None, None, Some(2), Some(3)]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree, tree![1]);
    }

    #[test]
    fn test_short_literal_leaves_children_missing() {
        let tree = tree![1, 2];

        assert_eq!(tree.root().and_then(Node::right), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(tree![1, 2, null, 3,], tree![1, 2, null, 3]);
    }

    #[test]
    fn test_display_trims_trailing_nulls() {
        let tree = tree![1, 2, 3, null, null, null, null];

        assert_eq!(tree.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_parse() {
        let tree: Tree<i64> = " [ -10, 9,20 , NULL,null,15,7 ] ".parse().unwrap();

        assert_eq!(tree, tree![-10, 9, 20, null, null, 15, 7]);
        assert_eq!("1,2".parse::<Tree<i64>>(), Ok(tree![1, 2]));
        assert_eq!("[]".parse::<Tree<i64>>(), Ok(Tree::new()));
    }

    #[test]
    fn test_parse_trailing_comma() {
        assert_eq!("[1, 2,]".parse::<Tree<i64>>(), Ok(tree![1, 2,]));
        assert_eq!("[1, null , ]".parse::<Tree<i64>>(), Ok(tree![1]));
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        let err = "[1,,2]".parse::<Tree<i64>>().unwrap_err();

        assert_eq!(
            err,
            Error::Parse {
                token: String::new(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_parse_error_reports_token() {
        let err = "[1, 2, nope]".parse::<Tree<i64>>().unwrap_err();

        assert_eq!(
            err,
            Error::Parse {
                token: "nope".to_owned(),
                position: 2,
            }
        );
    }

    #[test]
    fn test_deep_tree_measures_and_drops() {
        // A right-leaning chain deep enough to overflow a recursive drop.
        let depth = 200_000;
        let slots = (0..depth).flat_map(|i| vec![Some(i), None]);
        let tree = Tree::from_level_order(slots);

        assert_eq!(tree.len(), depth);
        assert_eq!(tree.height(), depth);
        assert_eq!(tree.root().map(Node::height), Some(depth));
        drop(tree);
    }

    #[quickcheck]
    fn display_then_parse(tree: Tree<i8>) -> bool {
        tree.to_string().parse::<Tree<i8>>() == Ok(tree)
    }

    #[quickcheck]
    fn level_order_rebuilds(tree: Tree<i8>) -> bool {
        Tree::from_level_order(tree.to_level_order()) == tree
    }
}
