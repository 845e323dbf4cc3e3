//! A mutable, unbalanced BST. Every `Node` exclusively owns its children and there are no
//! parent pointers, so structural changes are made by rewriting the owning link of the
//! affected subtree.
//!
//! # Examples
//!
//! ```
//! use bst_traversal::{Tree, TraversalOrder};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.find(&1));
//!
//! tree.add(2);
//! tree.add(1);
//! tree.add(3);
//! assert!(tree.find(&1));
//!
//! // Duplicates are real nodes.
//! tree.add(3);
//! assert_eq!(tree.len(), 4);
//!
//! // Removing a value reports whether a node was detached.
//! assert!(tree.remove(&3));
//! assert!(!tree.remove(&42));
//!
//! let sorted: Vec<_> = tree.traverse(TraversalOrder::InOrder).copied().collect();
//! assert_eq!(sorted, [1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::traverse::{InOrder, Traversal, TraversalOrder};

/// An owning link to a subtree. `None` marks the empty slot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one inserted value. Everything in its left subtree is strictly less
/// than `value` and everything in its right subtree is greater or equal.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Removes this node from its parent's link and returns what should take its place.
    fn unlink(mut self: Box<Self>) -> Link<T> {
        match (self.left.take(), self.right.take()) {
            (Some(left), Some(right)) => {
                trace!("replacing removed value with its in-order successor");
                let (successor, rest) = Self::take_min(right);
                self.value = successor;
                self.left = Some(left);
                self.right = rest;
                Some(self)
            }
            (left, right) => {
                trace!("splicing out node with at most one child");
                left.or(right)
            }
        }
    }

    /// Detaches the leftmost node of the subtree rooted at `root`. Returns its value and
    /// the remaining subtree, in which the detached node's right child took its place.
    fn take_min(mut root: Box<Self>) -> (T, Link<T>) {
        let mut spine = Vec::new();
        while let Some(left) = root.left.take() {
            spine.push(root);
            root = left;
        }

        let Node { value, right, .. } = *root;
        let mut rest = right;
        while let Some(mut parent) = spine.pop() {
            parent.left = rest;
            rest = Some(parent);
        }
        (value, rest)
    }
}

/// A Binary Search Tree that allows duplicate values. No balancing is ever performed, so
/// the shape (and therefore the cost of each operation) depends on insertion order.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the tree. Duplicate values are counted once per
    /// insertion.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`][Tree::len].
    pub fn size(&self) -> usize {
        self.len
    }

    /// Inserts `value` as a new leaf. This never fails: a value equal to an existing one
    /// is placed in that node's right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(7);
    /// tree.add(7);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            depth += 1;
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        trace!("attaching new leaf at depth {depth}");
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Returns `true` if some node holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.find(&3));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes one node holding a value equal to `value`. Returns `true` if a node was
    /// removed; the count only changes in that case.
    ///
    /// A node with two children takes the value of the smallest node in its right subtree,
    /// which is then spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::{Tree, TraversalOrder};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert!(tree.remove(&5));
    ///
    /// let level_order: Vec<_> = tree.traverse(TraversalOrder::LevelOrder).copied().collect();
    /// assert_eq!(level_order, [7, 3, 8, 1, 4, 9]);
    /// assert_eq!(tree.len(), 6);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => {
                    debug!("remove found no matching node among {} nodes", self.len);
                    return false;
                }
            };
            // The matching slot must not be reborrowed before breaking out, or the borrow
            // would outlive the loop.
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = slot else {
                return false;
            };
            slot = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *slot = slot.take().and_then(Node::unlink);
        self.len -= 1;
        true
    }

    /// Returns the number of nodes on the longest path from the root down to a leaf. An
    /// empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree. With duplicates this is the most recently
    /// inserted of the largest values.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        drop_subtree(self.root.take());
        self.len = 0;
    }

    /// Returns a lazy traversal of the tree in the given order.
    ///
    /// The traversal borrows the tree, so it can't be modified until the traversal is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::{Tree, TraversalOrder};
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let pre_order: Vec<_> = tree.traverse(TraversalOrder::PreOrder).copied().collect();
    /// assert_eq!(pre_order, [5, 3, 1, 4, 8, 7, 9]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self.root.as_deref(), order)
    }

    /// Iterates over the values in sorted order.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }
}

/// Drops a subtree one node at a time so that deep, chain-shaped trees don't recurse
/// through `Box`'s destructor.
fn drop_subtree<T>(root: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// Copies the tree node by node, pairing every source node with the link its copy goes
/// into, so the shape is reproduced without comparing any values.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut pending: Vec<(&Node<T>, &mut Link<T>)> = self
                .root
                .as_deref()
                .map(|source| (source, &mut root))
                .into_iter()
                .collect();
            while let Some((source, slot)) = pending.pop() {
                let node = slot.insert(Node::new_boxed(source.value.clone()));
                if let Some(left) = source.left.as_deref() {
                    pending.push((left, &mut node.left));
                }
                if let Some(right) = source.right.as_deref() {
                    pending.push((right, &mut node.right));
                }
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
