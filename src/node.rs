//! Node storage and the searches and structural queries that run over a subtree.
//!
//! Nodes own their children outright and never point back at their parent. Whenever
//! a parent is needed it's found again by descending from the root (see
//! [`find_parent`]).
//!
//! The free functions here take an `Option<&Node>` so that an absent subtree is a
//! valid argument. That's where the sentinels live: an absent subtree has no nodes,
//! no leaves and a height of `-1`.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{node, Tree};
//!
//! let tree: Tree = [2, 1, 3].into_iter().collect();
//! let one = tree.find(1).unwrap();
//!
//! assert_eq!(node::find_parent(tree.root(), one).map(|n| n.key()), Some(2));
//! assert_eq!(node::height(Some(one)), 0);
//! assert_eq!(node::height(None), -1);
//! ```

use std::cmp::Ordering;
use std::ptr;

/// The type of the keys stored in the tree.
pub type Key = i32;

/// An owning, possibly empty, link to a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// One element of the tree. A `Node` has a key and up to two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Construct a new childless `Node` with the given `key`.
    pub(crate) fn new_boxed(key: Key) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The left child, holding the smaller keys.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child, holding the larger keys.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Finds the node holding `key` in the subtree rooted at this node.
    pub fn find(&self, key: Key) -> Option<&Node> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// The rightmost (largest) node of the subtree rooted at this node.
    pub fn max(&self) -> &Node {
        match self.right() {
            Some(right) => right.max(),
            None => self,
        }
    }

    /// Number of nodes in the subtree rooted at this node, including itself.
    pub fn num_nodes(&self) -> usize {
        num_nodes(self.left()) + 1 + num_nodes(self.right())
    }

    /// Number of childless nodes in the subtree rooted at this node.
    pub fn num_leaves(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            num_leaves(self.left()) + num_leaves(self.right())
        }
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of `0`.
    pub fn height(&self) -> i32 {
        height(self.left()).max(height(self.right())) + 1
    }

    /// Checks every key in this subtree lies strictly between `low` and `high`, where
    /// `None` is an open end.
    fn is_bst_within(&self, low: Option<Key>, high: Option<Key>) -> bool {
        let above_low = low.is_none_or(|low| low < self.key);
        let below_high = high.is_none_or(|high| self.key < high);

        above_low
            && below_high
            && self
                .left()
                .is_none_or(|n| n.is_bst_within(low, Some(self.key)))
            && self
                .right()
                .is_none_or(|n| n.is_bst_within(Some(self.key), high))
    }
}

/// Returns the rightmost node of the subtree rooted at `node`, or `None` if there's no
/// subtree. During deletion this is how the in-order predecessor is found.
pub fn find_max(node: Option<&Node>) -> Option<&Node> {
    node.map(Node::max)
}

/// Finds the node whose left or right child *is* `node` by descending from `root`.
///
/// This compares identity, not keys: a node that merely holds the same key as one of
/// `root`'s descendants has no parent here. Returns `None` when `node` is the root
/// itself or isn't in the tree.
pub fn find_parent<'a>(root: Option<&'a Node>, node: &Node) -> Option<&'a Node> {
    let current = root?;
    if ptr::eq(current, node) {
        return None;
    }

    let is_node = |child: Option<&Node>| child.is_some_and(|child| ptr::eq(child, node));
    if is_node(current.left()) || is_node(current.right()) {
        return Some(current);
    }

    if node.key < current.key {
        find_parent(current.left(), node)
    } else {
        find_parent(current.right(), node)
    }
}

/// Number of nodes in the subtree. `0` for an absent subtree.
pub fn num_nodes(node: Option<&Node>) -> usize {
    node.map_or(0, Node::num_nodes)
}

/// Number of leaves in the subtree. `0` for an absent subtree.
pub fn num_leaves(node: Option<&Node>) -> usize {
    node.map_or(0, Node::num_leaves)
}

/// Height of the subtree in edges. `-1` for an absent subtree.
pub fn height(node: Option<&Node>) -> i32 {
    node.map_or(-1, Node::height)
}

/// Edge distance from `root` down to the node holding `node`'s key.
///
/// The root has a depth of `0`. So does a node that isn't in the tree at all: the
/// descent falls off the bottom and reports the same default.
pub fn depth(node: &Node, root: Option<&Node>) -> usize {
    fn descend(key: Key, current: Option<&Node>, level: usize) -> usize {
        match current {
            None => 0,
            Some(current) => match key.cmp(&current.key) {
                Ordering::Less => descend(key, current.left(), level + 1),
                Ordering::Equal => level,
                Ordering::Greater => descend(key, current.right(), level + 1),
            },
        }
    }

    descend(node.key, root, 0)
}

/// Whether every key in the tree sits strictly between the bounds inherited from its
/// ancestors. The bounds start out as the whole `Key` range.
pub fn is_bst(root: Option<&Node>) -> bool {
    root.is_none_or(|n| n.is_bst_within(None, None))
}

/// Walks down from `link` to the link that holds, or would hold, `key`.
pub(crate) fn find_slot(link: &mut Link, key: Key) -> &mut Link {
    let ord = match link {
        Some(node) => key.cmp(&node.key),
        None => return link,
    };

    match (ord, link) {
        (Ordering::Less, Some(node)) => find_slot(&mut node.left, key),
        (Ordering::Greater, Some(node)) => find_slot(&mut node.right, key),
        (_, link) => link,
    }
}
