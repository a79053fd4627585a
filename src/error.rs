use std::fmt;

/// Closed set of failure outcomes for [`crate::Llrb`] operations.
///
/// Unlike the byte-record engine this container descends from, there is no
/// allocation-failure, missing-vtable, or null-reference variant: the type
/// system rules those out at compile time, and `Box::new` aborts the process
/// rather than returning an error on heap exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `put` found an existing node for the key.
    AlreadyContains,
    /// The requested key (or value, for `get_key_for_value`) is absent, or
    /// the tree is empty for a min/max/pop query.
    DoesNotContain,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyContains => write!(f, "llrb_map: key already exists"),
            Error::DoesNotContain => write!(f, "llrb_map: key does not exist"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes surfaced by [`crate::Llrb::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two reds appeared back to back on a root-to-leaf path.
    ConsecutiveReds,
    /// Black-link count differs between a node's left and right subtree.
    UnbalancedBlacks(usize, usize),
    /// In-order sort order was violated between a node and a child.
    SortError(String),
    /// `n_count` does not match the number of reachable nodes.
    CountMismatch { tracked: usize, reachable: usize },
    /// The root's incoming link is red while the tree is non-empty.
    RedRoot,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ConsecutiveReds => {
                write!(f, "llrb_map: consecutive red links")
            }
            ValidationError::UnbalancedBlacks(l, r) => {
                write!(f, "llrb_map: unbalanced blacks, left: {} right: {}", l, r)
            }
            ValidationError::SortError(msg) => write!(f, "llrb_map: sort error, {}", msg),
            ValidationError::CountMismatch { tracked, reachable } => write!(
                f,
                "llrb_map: n_count {} does not match reachable nodes {}",
                tracked, reachable
            ),
            ValidationError::RedRoot => write!(f, "llrb_map: root is red"),
        }
    }
}

impl std::error::Error for ValidationError {}
