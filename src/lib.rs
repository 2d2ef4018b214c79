//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over integer keys,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). This tree does nothing
//! to keep its height down: inserting keys in ascending order produces a tree that
//! is really a linked list. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree, which is what
//! [`visit::in_order`] does.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{KeyCollector, Tree};
//!
//! let mut tree: Tree = [5, 3, 2, 1, 6, 8, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.num_nodes(), 9);
//! assert_eq!(tree.num_leaves(), 4);
//! assert_eq!(tree.height(), 3);
//!
//! let mut keys = KeyCollector::new();
//! tree.pre_order(&mut keys);
//! assert_eq!(keys.keys(), &[5, 3, 2, 1, 4, 6, 8, 7, 9]);
//!
//! assert!(tree.delete(3));
//! assert!(tree.is_bst());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod tree;
pub mod visit;

pub use error::TreeError;
pub use node::{Key, Node};
pub use tree::Tree;
pub use visit::{KeyCollector, LevelPrinter, Visitor};
