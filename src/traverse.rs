//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Each order has its own iterator. They never recurse: the pre- and in-order walks keep
//! an explicit stack, the level-order walk keeps a FIFO queue, and the post-order walk
//! computes its whole visit order up front.
//!
//! Besides [`Iterator`], every traversal offers a pull API: `has_next` reports whether a
//! value remains and `advance` returns it, or [`TreeError::Exhausted`] once none is left.
//!
//! ```
//! use bst_traversal::{Tree, TraversalOrder, TreeError};
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//! let mut post_order = tree.traverse(TraversalOrder::PostOrder);
//!
//! while post_order.has_next() {
//!     println!("{}", post_order.advance()?);
//! }
//! assert_eq!(
//!     post_order.advance(),
//!     Err(TreeError::Exhausted { order: TraversalOrder::PostOrder })
//! );
//! # Ok::<(), TreeError>(())
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::TreeError;
use crate::tree::Node;

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Root, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then root, then right subtree. Yields values in sorted order.
    InOrder,
    /// Left subtree, then right subtree, then root.
    PostOrder,
    /// Breadth first, top to bottom and left to right within a level.
    LevelOrder,
}

impl TraversalOrder {
    /// Every supported order.
    pub const ALL: [Self; 4] = [
        Self::PreOrder,
        Self::InOrder,
        Self::PostOrder,
        Self::LevelOrder,
    ];

    /// The canonical name of this order, e.g. `"pre-order"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
            Self::LevelOrder => "level-order",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses an order name. Case, `-`, `_` and spaces are ignored so `"PRE_ORDER"`,
/// `"pre-order"` and `"preorder"` are all accepted.
///
/// ```
/// use bst_traversal::{TraversalOrder, TreeError};
///
/// assert_eq!("LEVEL_ORDER".parse::<TraversalOrder>(), Ok(TraversalOrder::LevelOrder));
/// assert_eq!(
///     "zigzag".parse::<TraversalOrder>(),
///     Err(TreeError::UnknownOrder("zigzag".to_string()))
/// );
/// ```
impl FromStr for TraversalOrder {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "preorder" | "pre" => Ok(Self::PreOrder),
            "inorder" | "in" => Ok(Self::InOrder),
            "postorder" | "post" => Ok(Self::PostOrder),
            "levelorder" | "level" | "breadthfirst" => Ok(Self::LevelOrder),
            _ => Err(TreeError::UnknownOrder(s.to_string())),
        }
    }
}

/// Adds the `advance` half of the pull API and marks the iterator as fused.
macro_rules! pull_api {
    ($iter:ident, $order:expr) => {
        impl<'a, T> $iter<'a, T> {
            /// Returns the next value, or [`TreeError::Exhausted`] if every value has
            /// already been yielded.
            pub fn advance(&mut self) -> Result<&'a T, TreeError> {
                self.next().ok_or(TreeError::Exhausted { order: $order })
            }
        }

        impl<'a, T> FusedIterator for $iter<'a, T> {}
    };
}

/// Visits the root, then the left subtree, then the right subtree.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }

    /// Returns `true` if another value remains.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

pull_api!(PreOrder, TraversalOrder::PreOrder);

/// Visits the left subtree, then the root, then the right subtree, which yields the
/// values in sorted order.
pub struct InOrder<'a, T> {
    /// The left spine still waiting to be visited. The top is always the smallest
    /// unvisited node.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.descend(root);
        iter
    }

    /// Returns `true` if another value remains.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    fn descend(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(node.right.as_deref());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

pull_api!(InOrder, TraversalOrder::InOrder);

/// Visits the left subtree, then the right subtree, then the root.
///
/// Unlike the other traversals this one isn't lazy: the full visit order is built when
/// the traversal is created.
pub struct PostOrder<'a, T> {
    /// Nodes in reverse post-order, so popping yields post-order.
    visits: Vec<&'a Node<T>>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut pending: Vec<&'a Node<T>> = root.into_iter().collect();
        let mut visits = Vec::new();
        while let Some(node) = pending.pop() {
            visits.push(node);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        Self { visits }
    }

    /// Returns `true` if another value remains.
    pub fn has_next(&self) -> bool {
        !self.visits.is_empty()
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.visits.pop().map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.visits.len(), Some(self.visits.len()))
    }
}

impl<'a, T> ExactSizeIterator for PostOrder<'a, T> {}

pull_api!(PostOrder, TraversalOrder::PostOrder);

/// Visits nodes breadth first.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }

    /// Returns `true` if another value remains.
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

pull_api!(LevelOrder, TraversalOrder::LevelOrder);

/// A traversal in any of the four orders, as returned by
/// [`Tree::traverse`][crate::Tree::traverse].
pub enum Traversal<'a, T> {
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, T>),
    /// See [`InOrder`].
    InOrder(InOrder<'a, T>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, T>),
    /// See [`LevelOrder`].
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::PreOrder => Self::PreOrder(PreOrder::new(root)),
            TraversalOrder::InOrder => Self::InOrder(InOrder::new(root)),
            TraversalOrder::PostOrder => Self::PostOrder(PostOrder::new(root)),
            TraversalOrder::LevelOrder => Self::LevelOrder(LevelOrder::new(root)),
        }
    }

    /// The order this traversal visits nodes in.
    pub fn order(&self) -> TraversalOrder {
        match self {
            Self::PreOrder(_) => TraversalOrder::PreOrder,
            Self::InOrder(_) => TraversalOrder::InOrder,
            Self::PostOrder(_) => TraversalOrder::PostOrder,
            Self::LevelOrder(_) => TraversalOrder::LevelOrder,
        }
    }

    /// Returns `true` if another value remains.
    pub fn has_next(&self) -> bool {
        match self {
            Self::PreOrder(iter) => iter.has_next(),
            Self::InOrder(iter) => iter.has_next(),
            Self::PostOrder(iter) => iter.has_next(),
            Self::LevelOrder(iter) => iter.has_next(),
        }
    }

    /// Returns the next value, or [`TreeError::Exhausted`] if every value has already
    /// been yielded.
    pub fn advance(&mut self) -> Result<&'a T, TreeError> {
        match self {
            Self::PreOrder(iter) => iter.advance(),
            Self::InOrder(iter) => iter.advance(),
            Self::PostOrder(iter) => iter.advance(),
            Self::LevelOrder(iter) => iter.advance(),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::PreOrder(iter) => iter.next(),
            Self::InOrder(iter) => iter.next(),
            Self::PostOrder(iter) => iter.next(),
            Self::LevelOrder(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::PreOrder(iter) => iter.size_hint(),
            Self::InOrder(iter) => iter.size_hint(),
            Self::PostOrder(iter) => iter.size_hint(),
            Self::LevelOrder(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T> FusedIterator for Traversal<'a, T> {}
