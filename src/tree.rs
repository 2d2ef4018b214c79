//! The tree handle. Owns the root and is where insertion and deletion happen.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(1).is_none());
//! assert_eq!(tree.height(), -1);
//!
//! tree.insert(1).unwrap();
//! assert_eq!(tree.find(1).map(|n| n.key()), Some(1));
//!
//! // Keys are unique. A second insert is turned away and changes nothing.
//! assert_eq!(tree.insert(1), Err(TreeError::DuplicateKey(1)));
//! assert_eq!(tree.num_nodes(), 1);
//!
//! // Deleting reports whether there was anything to delete.
//! assert!(tree.delete(1));
//! assert!(!tree.delete(1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use log::{debug, trace, warn};

use crate::error::TreeError;
use crate::node::{self, Key, Link, Node};
use crate::visit::{self, Visitor};

/// An unbalanced Binary Search Tree of unique integer keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Which shape of node `Tree::delete` removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeleteCase {
    Leaf,
    OnlyLeft,
    OnlyRight,
    /// Two children, and the left child had no right child of its own so it was the
    /// predecessor.
    PredecessorIsLeftChild,
    /// Two children, and the predecessor sat deeper down the left subtree.
    DeepPredecessor,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree = [2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.find(1).map(|n| n.key()), Some(1));
    /// assert!(tree.find(42).is_none());
    /// ```
    pub fn find(&self, key: Key) -> Option<&Node> {
        self.root().and_then(|n| n.find(key))
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// The node holding the largest key.
    pub fn find_max(&self) -> Option<&Node> {
        node::find_max(self.root())
    }

    /// The node that has `node` as a child. See [`node::find_parent`].
    pub fn find_parent(&self, node: &Node) -> Option<&Node> {
        node::find_parent(self.root(), node)
    }

    /// Inserts `key` as a new leaf. Nothing is rebalanced.
    ///
    /// A key that's already present is reported with [`TreeError::DuplicateKey`] and
    /// the tree is left as it was.
    pub fn insert(&mut self, key: Key) -> Result<(), TreeError> {
        let slot = node::find_slot(&mut self.root, key);
        if slot.is_some() {
            warn!("Duplicate key \"{}\" not inserted.", key);
            return Err(TreeError::DuplicateKey(key));
        }

        *slot = Some(Node::new_boxed(key));
        trace!("inserted {}", key);
        Ok(())
    }

    /// Deletes the node holding `key`. Returns `false`, leaving the tree unchanged, if
    /// there's no such node.
    ///
    /// A node with two children is replaced by its in-order predecessor (the largest
    /// key in its left subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{KeyCollector, Tree};
    ///
    /// let mut tree: Tree = [7, 9, 5, 1].into_iter().collect();
    /// assert!(tree.delete(7));
    ///
    /// let mut keys = KeyCollector::new();
    /// tree.pre_order(&mut keys);
    /// assert_eq!(keys.keys(), &[5, 1, 9]);
    /// ```
    pub fn delete(&mut self, key: Key) -> bool {
        let slot = node::find_slot(&mut self.root, key);
        let Some(mut target) = slot.take() else {
            return false;
        };

        let case = match (target.left.take(), target.right.take()) {
            (None, None) => DeleteCase::Leaf,
            (Some(left), None) => {
                *slot = Some(left);
                DeleteCase::OnlyLeft
            }
            (None, Some(right)) => {
                *slot = Some(right);
                DeleteCase::OnlyRight
            }
            (Some(mut left), Some(right)) => match detach_max(&mut left) {
                None => {
                    left.right = Some(right);
                    *slot = Some(left);
                    DeleteCase::PredecessorIsLeftChild
                }
                Some(mut predecessor) => {
                    predecessor.left = Some(left);
                    predecessor.right = Some(right);
                    *slot = Some(predecessor);
                    DeleteCase::DeepPredecessor
                }
            },
        };

        debug!(
            "deleted {} ({:?}), slot now holds {:?}",
            target.key,
            case,
            slot.as_ref().map(|n| n.key)
        );
        true
    }

    /// Number of nodes in the tree.
    pub fn num_nodes(&self) -> usize {
        node::num_nodes(self.root())
    }

    /// Number of nodes in the tree without children.
    pub fn num_leaves(&self) -> usize {
        node::num_leaves(self.root())
    }

    /// Height of the tree in edges: `0` for a single node and `-1` when empty.
    pub fn height(&self) -> i32 {
        node::height(self.root())
    }

    /// Edge distance from the root to `node`. See [`node::depth`] for what happens with
    /// nodes from another tree.
    pub fn depth(&self, node: &Node) -> usize {
        node::depth(node, self.root())
    }

    /// Whether the BST ordering holds for every node.
    pub fn is_bst(&self) -> bool {
        node::is_bst(self.root())
    }

    /// Walks the tree in-order. See [`visit::in_order`].
    pub fn in_order<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visit::in_order(self.root(), visitor);
    }

    /// Walks the tree pre-order. See [`visit::pre_order`].
    pub fn pre_order<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visit::pre_order(self.root(), visitor);
    }

    /// Walks the tree post-order. See [`visit::post_order`].
    pub fn post_order<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visit::post_order(self.root(), visitor);
    }

    /// Releases every node, children before parents, and leaves the tree empty.
    pub fn clear(&mut self) {
        let released = release(self.root.take());
        if released > 0 {
            debug!("released {} nodes", released);
        }
    }
}

/// Detaches the largest node below `subtree`, promoting its left child into the spot it
/// leaves behind. Returns `None` if `subtree` has no right child, i.e. `subtree` is
/// itself the largest.
fn detach_max(subtree: &mut Node) -> Option<Box<Node>> {
    match &mut subtree.right {
        Some(right) if right.right.is_some() => detach_max(right),
        right => {
            let mut max = right.take()?;
            *right = max.left.take();
            Some(max)
        }
    }
}

/// Post-order teardown of `link`. Returns how many nodes were released.
fn release(link: Link) -> usize {
    match link {
        None => 0,
        Some(mut node) => {
            let children = release(node.left.take()) + release(node.right.take());
            drop(node);
            children + 1
        }
    }
}

/// Prints the tree sideways: the right subtree above, the left subtree below, and
/// three spaces of indent per level.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn sideways(node: Option<&Node>, level: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let Some(node) = node else {
                return Ok(());
            };

            sideways(node.right(), level + 1, f)?;
            writeln!(f, "{:width$}{}", "", node.key(), width = 3 * level)?;
            sideways(node.left(), level + 1, f)
        }

        sideways(self.root(), 0, f)
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for Tree {
    /// Inserts every key in order. Duplicates are skipped.
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            // `insert` has already logged the duplicate.
            let _ = self.insert(key);
        }
    }
}
