//! An ordered set stored in a mutable, unbalanced BST. Mutating operations
//! (`insert`, `delete`) work in place and never rotate, so the shape of the
//! tree depends on the order of operations. [`Tree::build`] and
//! [`Tree::rebalance`] produce a tree of minimal height.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 8, 3, 1]);
//!
//! // Duplicates are dropped and the middle value becomes the root.
//! assert_eq!(tree.root().map(|n| *n.value()), Some(5));
//! assert_eq!(tree.values(), vec![&1, &3, &5, &8]);
//!
//! // Inserting an existing value does nothing.
//! tree.insert(3);
//! assert_eq!(tree.len(), 4);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! tree.delete(&5);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(8));
//! assert_eq!(tree.values(), vec![&1, &3, &8]);
//! assert!(tree.find(&5).is_none());
//! ```

use std::cmp;
use std::collections::VecDeque;
use std::iter::FromIterator;
use std::ptr;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::util;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding distinct values in their natural order.
/// This can be used for inserting, finding, and deleting values and for
/// walking them in level, in, pre, or post order.
///
/// Dropping a tree is iterative, but `clone`, `==`, and `Debug` recurse once
/// per level, as do the mutating operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree of minimal height from `elements`. Duplicates are
    /// dropped and the remaining values are sorted. The root of every subtree
    /// is the middle value of its range (the lower middle, `len / 2`, for
    /// even lengths) so `n` distinct values give a height of `floor(lg n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(vec![4, 1, 2, 3, 2]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build<I>(elements: I) -> Self
    where
        T: cmp::Ord,
        I: IntoIterator<Item = T>,
    {
        let values = util::sorted_distinct(elements);
        let len = values.len();
        let root = Node::from_sorted(&mut values.into_iter(), len);
        let tree = Self { root };
        debug!(len, height = tree.height(), "built tree");

        tree
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// Inserts `value` as a new leaf. Inserting a value that is already
    /// present leaves the tree untouched. No rebalancing happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// assert!(tree.find(&2).is_some());
    /// // Ascending inserts make a linked list.
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        self.root = Some(Node::insert(self.root.take(), value));
    }

    /// Removes `value` from the tree if present. A node with two children
    /// takes the smallest value of its right subtree. No rebalancing happens
    /// here.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::build(1..=3);
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert_eq!(tree.values(), vec![&1, &3]);
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: cmp::Ord,
    {
        self.root = Node::delete(self.root.take(), value);
    }

    /// Potentially finds the node holding `value`. If no node holds it,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: cmp::Ord,
    {
        self.root().and_then(|n| n.find(value))
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.find(value).is_some()
    }

    /// Visits every node breadth first: the root, then each level from left
    /// to right.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visitor` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, Tree};
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1]);
    /// let mut seen = Vec::new();
    /// tree.level_order(Some(|n: &Node<i32>| seen.push(*n.value()))).unwrap();
    ///
    /// assert_eq!(seen, vec![5, 3, 8, 1]);
    /// ```
    pub fn level_order<'a, F>(&'a self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visitor = visitor.ok_or(Error::InvalidArgument("level_order needs a visitor"))?;

        let mut queue: VecDeque<&'a Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visitor(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }

        Ok(())
    }

    /// Visits the left subtree, then the node, then the right subtree. The
    /// values are seen in ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visitor` is `None`.
    pub fn in_order<'a, F>(&'a self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visitor = visitor.ok_or(Error::InvalidArgument("in_order needs a visitor"))?;
        if let Some(root) = self.root() {
            root.walk_in_order(&mut visitor);
        }

        Ok(())
    }

    /// Visits the node, then the left subtree, then the right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visitor` is `None`.
    pub fn pre_order<'a, F>(&'a self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visitor = visitor.ok_or(Error::InvalidArgument("pre_order needs a visitor"))?;
        if let Some(root) = self.root() {
            root.walk_pre_order(&mut visitor);
        }

        Ok(())
    }

    /// Visits the left subtree, then the right subtree, then the node.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `visitor` is `None`.
    pub fn post_order<'a, F>(&'a self, visitor: Option<F>) -> Result<()>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visitor = visitor.ok_or(Error::InvalidArgument("post_order needs a visitor"))?;
        if let Some(root) = self.root() {
            root.walk_post_order(&mut visitor);
        }

        Ok(())
    }

    /// The values of the tree in ascending order.
    pub fn values<'a>(&'a self) -> Vec<&'a T> {
        let mut values = Vec::new();
        if let Some(root) = self.root() {
            root.walk_in_order(&mut |node: &'a Node<T>| values.push(node.value()));
        }

        values
    }

    /// The height of the subtree rooted at `node`. An absent subtree has a
    /// height of `-1` and a leaf has a height of `0`.
    pub fn height_of(node: Option<&Node<T>>) -> isize {
        node.map_or(-1, Node::height)
    }

    /// The height of the whole tree, `-1` when it is empty.
    pub fn height(&self) -> isize {
        Self::height_of(self.root())
    }

    /// The number of edges between the root and `node`. The path is found by
    /// comparing `node`'s value from the root down, so `None` is returned if
    /// `node` isn't part of this tree (for example a node of a clone).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1]);
    /// let one = tree.find(&1).unwrap();
    /// assert_eq!(tree.depth(one), Some(2));
    ///
    /// let copy = tree.clone();
    /// assert_eq!(tree.depth(copy.find(&1).unwrap()), None);
    /// ```
    pub fn depth(&self, node: &Node<T>) -> Option<usize>
    where
        T: cmp::Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(candidate) = current {
            if ptr::eq(candidate, node) {
                return Some(depth);
            }
            current = match node.value.cmp(&candidate.value) {
                cmp::Ordering::Less => candidate.left(),
                // Same value but another node, so `node` lives elsewhere.
                cmp::Ordering::Equal => return None,
                cmp::Ordering::Greater => candidate.right(),
            };
            depth += 1;
        }

        None
    }

    /// Whether the heights of the two subtrees of every node differ by at
    /// most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::build(1..=3);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        util::balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree with minimal height from its current values. All of
    /// the old nodes are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn rebalance(&mut self) {
        let old_height = self.height();
        let mut values = Vec::new();
        if let Some(root) = self.root.take() {
            root.drain_in_order(&mut values);
        }

        let len = values.len();
        self.root = Node::from_sorted(&mut values.into_iter(), len);
        debug!(len, old_height, height = self.height(), "rebalanced tree");
    }
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: cmp::Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A `Node` holds one value and up to two children. Everything in the left
/// subtree is smaller than the value and everything in the right subtree is
/// larger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
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

    /// The height of the subtree rooted at this node. A leaf has a height
    /// of `0`.
    pub fn height(&self) -> isize {
        Tree::height_of(self.left()).max(Tree::height_of(self.right())) + 1
    }

    fn len(&self) -> usize {
        1 + self.left().map_or(0, Self::len) + self.right().map_or(0, Self::len)
    }

    /// Builds a subtree from the next `len` values of `values`, which must be
    /// ascending. The left subtree is built first so the values are consumed
    /// in order.
    fn from_sorted<I>(values: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::from_sorted(values, mid);
        let value = values.next()?;
        let right = Self::from_sorted(values, len - mid - 1);

        Some(Box::new(Self { value, left, right }))
    }

    /// Returns the root of `link` after inserting `value` somewhere below it.
    fn insert(link: Link<T>, value: T) -> Box<Self>
    where
        T: cmp::Ord,
    {
        let mut node = match link {
            Some(node) => node,
            None => return Self::new_boxed(value),
        };

        match value.cmp(&node.value) {
            cmp::Ordering::Less => node.left = Some(Self::insert(node.left.take(), value)),
            cmp::Ordering::Equal => trace!("value already present; insert is a no-op"),
            cmp::Ordering::Greater => node.right = Some(Self::insert(node.right.take(), value)),
        }

        node
    }

    /// Returns the root of `link` after removing `value` from below it.
    fn delete(link: Link<T>, value: &T) -> Link<T>
    where
        T: cmp::Ord,
    {
        let Some(mut node) = link else {
            trace!("value not found; delete is a no-op");
            return None;
        };

        match value.cmp(&node.value) {
            cmp::Ordering::Less => node.left = Self::delete(node.left.take(), value),
            cmp::Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => return right,
                (left, None) => return left,
                (Some(left), Some(right)) => {
                    let (successor, right) = right.take_min();
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                }
            },
            cmp::Ordering::Greater => node.right = Self::delete(node.right.take(), value),
        }

        Some(node)
    }

    /// Detaches the smallest value of this subtree, returning it along with
    /// what remains of the subtree.
    fn take_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            None => {
                let Self { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (min, left) = left.take_min();
                self.left = left;
                (min, Some(self))
            }
        }
    }

    fn find(&self, value: &T) -> Option<&Self>
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.value) {
            cmp::Ordering::Less => self.left().and_then(|n| n.find(value)),
            cmp::Ordering::Equal => Some(self),
            cmp::Ordering::Greater => self.right().and_then(|n| n.find(value)),
        }
    }

    fn walk_in_order<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.walk_in_order(visitor);
        }
        visitor(self);
        if let Some(right) = self.right() {
            right.walk_in_order(visitor);
        }
    }

    fn walk_pre_order<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a Self),
    {
        visitor(self);
        if let Some(left) = self.left() {
            left.walk_pre_order(visitor);
        }
        if let Some(right) = self.right() {
            right.walk_pre_order(visitor);
        }
    }

    fn walk_post_order<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.walk_post_order(visitor);
        }
        if let Some(right) = self.right() {
            right.walk_post_order(visitor);
        }
        visitor(self);
    }

    /// Moves every value of this subtree into `out` in ascending order.
    fn drain_in_order(self: Box<Self>, out: &mut Vec<T>) {
        let Self { value, left, right } = *self;
        if let Some(left) = left {
            left.drain_in_order(out);
        }
        out.push(value);
        if let Some(right) = right {
            right.drain_in_order(out);
        }
    }
}
