//! Errors surfaced by the tree's fallible operations.

use crate::traverse::TraversalOrder;

/// Errors triggered by traversal selection and the pull-based traversal API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A traversal order was requested by a name that doesn't match any of the
    /// four supported orders.
    #[error("unknown traversal order `{0}`")]
    UnknownOrder(String),
    /// [`advance`][crate::Traversal::advance] was called after the traversal
    /// had already yielded every value.
    #[error("{order} traversal is exhausted")]
    Exhausted {
        /// The order of the traversal that ran dry.
        order: TraversalOrder,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TreeError::UnknownOrder("zigzag".to_string()).to_string(),
            "unknown traversal order `zigzag`"
        );
        assert_eq!(
            TreeError::Exhausted {
                order: TraversalOrder::LevelOrder
            }
            .to_string(),
            "level-order traversal is exhausted"
        );
    }
}
