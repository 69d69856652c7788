//! Maximum path sum.
//!
//! A path is any chain of nodes joined by parent/child links. It goes up from one node, turns at
//! most once at some node, and comes back down. It doesn't have to pass through the root. A path
//! has at least one node, so for a tree of only negative values the answer is its largest value.
//!
//! # Examples
//!
//! ```
//! use bintree::{path_sum::max_path_sum, tree};
//!
//! //   -10
//! //   /  \
//! //  9    20
//! //      /  \
//! //     15   7
//! let tree = tree![-10, 9, 20, null, null, 15, 7];
//!
//! // 15 -> 20 -> 7
//! assert_eq!(max_path_sum(&tree), Ok(42));
//! ```

use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::tree::{Node, Tree};

const OPERATION: &str = "max_path_sum";

/// Values that can be summed along a path. `Default` is the zero.
pub trait PathValue: Copy + Ord + Default {
    /// `self + other`, or `None` if the sum doesn't fit.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_path_value {
    ($($t:ty),*) => {
        $(
            impl PathValue for $t {
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_path_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Returns the largest sum of values along any path in the tree.
///
/// # Errors
///
/// - [`Error::EmptyTree`] if the tree has no nodes, since an empty tree has no paths.
/// - [`Error::Overflow`] if a sum the walk needs doesn't fit in `T`.
#[instrument(level = "trace", skip_all)]
pub fn max_path_sum<T>(tree: &Tree<T>) -> Result<T>
where
    T: PathValue,
{
    let root = tree.root().ok_or(Error::EmptyTree {
        operation: OPERATION,
    })?;

    let Gains { best, .. } = gains(root)?;
    debug!("found maximum path sum");
    Ok(best)
}

/// What a subtree reports to its parent.
#[derive(Clone, Copy)]
struct Gains<T> {
    /// Largest sum of a path that starts at the subtree root and only goes down, so the parent
    /// can extend it upwards.
    upward: T,
    /// Largest sum of any path wholly inside the subtree.
    best: T,
}

fn add<T: PathValue>(a: T, b: T) -> Result<T> {
    a.checked_add(b).ok_or(Error::Overflow {
        operation: OPERATION,
    })
}

/// Post-order walk. Children are combined before their parent, negative contributions are
/// dropped, and the best path turning at each node is checked along the way.
fn gains<T>(node: &Node<T>) -> Result<Gains<T>>
where
    T: PathValue,
{
    let zero = T::default();
    let value = *node.value();

    let left = node.left().map(gains).transpose()?;
    let right = node.right().map(gains).transpose()?;

    let left_upward = left.map_or(zero, |g| g.upward.max(zero));
    let right_upward = right.map_or(zero, |g| g.upward.max(zero));

    // The path that turns here.
    let turning = add(add(value, left_upward)?, right_upward)?;
    let best = left
        .iter()
        .chain(right.iter())
        .fold(turning, |best, g| best.max(g.best));

    Ok(Gains {
        upward: add(value, left_upward.max(right_upward))?,
        best,
    })
}
