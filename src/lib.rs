//! An ordered set of distinct values kept in a Binary Search Tree that never
//! rotates on its own.
//!
//! ## Shape is the caller's business
//!
//! Every left subtree holds only smaller values and every right subtree only
//! larger ones, so [`find`][ordered::Tree::find], `insert` and `delete` cost
//! `O(height)`. Nothing here keeps the height down while you mutate: inserting
//! ascending values hangs each new leaf off the right of the last one until
//! the tree is a linked list.
//!
//! Height is minimal only right after [`Tree::build`][ordered::Tree::build] or
//! [`Tree::rebalance`][ordered::Tree::rebalance]. Both lay out the sorted
//! distinct values with the middle one (`len / 2`) as the root of each range,
//! which
//! gives `n` values a height of `floor(lg n)`. Use
//! [`Tree::is_balanced`][ordered::Tree::is_balanced] to decide when a rebuild
//! is worth it.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 8, 3, 1]);
//! assert_eq!(tree.values(), vec![&1, &3, &5, &8]);
//! assert_eq!(tree.height(), 2);
//!
//! for x in 10..15 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod ordered;
mod pretty;
mod util;


pub use error::{Error, Result};
pub use ordered::{Node, Tree};
