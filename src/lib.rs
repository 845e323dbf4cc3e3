//! This crate exposes a plain, unbalanced Binary Search Tree (BST) along with lazy
//! iterators for the four classic traversal orders.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The invariants kept
//! by this tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value. Duplicates are allowed and
//!    always land on the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values takes `O(height)` (where `height` is the number of
//! `Node`s on the longest path from the root `Node` to a leaf `Node`). This
//! tree never rebalances, so sorted input produces a chain whose height is
//! the number of values.
//!
//! ## Traversals
//!
//! [`Tree::traverse`] walks the tree in pre-order (root, left, right),
//! in-order (left, root, right), post-order (left, right, root) or
//! level-order (breadth first). None of the traversals recurse, so even a
//! degenerate chain can be walked without exhausting the call stack.
//!
//! ```
//! use bst_traversal::{Tree, TraversalOrder};
//!
//! let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! let level_order: Vec<_> = tree.traverse(TraversalOrder::LevelOrder).copied().collect();
//! assert_eq!(level_order, [5, 3, 8, 1, 4, 7, 9]);
//!
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traverse;
pub mod tree;

pub use error::TreeError;
pub use traverse::{InOrder, LevelOrder, PostOrder, PreOrder, Traversal, TraversalOrder};
pub use tree::Tree;
