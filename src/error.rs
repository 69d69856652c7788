use thiserror::Error;

/// Errors produced while building trees from literals or when an algorithm is asked about a
/// tree it has no answer for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation has no meaningful result for a tree without nodes.
    #[error("`{operation}` requires a non-empty tree")]
    EmptyTree {
        /// Name of the operation that refused the tree.
        operation: &'static str,
    },

    /// A sum the operation needs doesn't fit in the value type.
    #[error("`{operation}` overflowed the value type")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },

    /// A token of a level-order literal is neither `null` nor a valid value.
    #[error("invalid token {token:?} at position {position} of tree literal")]
    Parse {
        /// The offending token, trimmed.
        token: String,
        /// Zero-based index of the token in the literal.
        position: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
