//! Errors reported by [`Tree`](crate::Tree) operations.

use thiserror::Error;

use crate::node::Key;

/// Conditions a caller may want to react to. None of them leave the tree in a
/// different state than it was before the failing call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key is already stored in the tree so it wasn't inserted again.
    #[error("duplicate key \"{0}\" not inserted")]
    DuplicateKey(Key),
}
