//! Depth-first walks over a tree, driven by a [`Visitor`].
//!
//! Each walk runs to completion in a single call and hands the visitor every node
//! along with its level: `0` for the node the walk started at and one more for every
//! step down.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{visit, Tree};
//!
//! let tree: Tree = [2, 1, 3].into_iter().collect();
//!
//! let mut seen = Vec::new();
//! visit::post_order(tree.root(), &mut |node: &plain_bst::Node, level: usize| {
//!     seen.push((node.key(), level))
//! });
//!
//! assert_eq!(seen, vec![(1, 1), (3, 1), (2, 0)]);
//! ```

use std::io;

use crate::node::{Key, Node};

/// Something that gets called once for each node a traversal reaches.
pub trait Visitor {
    /// Visits `node`, which is `level` steps below the root of the traversal.
    fn visit(&mut self, node: &Node, level: usize);
}

impl<F> Visitor for F
where
    F: FnMut(&Node, usize),
{
    fn visit(&mut self, node: &Node, level: usize) {
        self(node, level)
    }
}

/// Left subtree, then the node, then the right subtree. For a BST this visits keys in
/// ascending order.
pub fn in_order<V: Visitor + ?Sized>(root: Option<&Node>, visitor: &mut V) {
    walk_in_order(root, 0, visitor);
}

/// The node, then its left subtree, then its right subtree.
pub fn pre_order<V: Visitor + ?Sized>(root: Option<&Node>, visitor: &mut V) {
    walk_pre_order(root, 0, visitor);
}

/// Left subtree, then right subtree, then the node.
pub fn post_order<V: Visitor + ?Sized>(root: Option<&Node>, visitor: &mut V) {
    walk_post_order(root, 0, visitor);
}

fn walk_in_order<V: Visitor + ?Sized>(node: Option<&Node>, level: usize, visitor: &mut V) {
    if let Some(node) = node {
        walk_in_order(node.left(), level + 1, visitor);
        visitor.visit(node, level);
        walk_in_order(node.right(), level + 1, visitor);
    }
}

fn walk_pre_order<V: Visitor + ?Sized>(node: Option<&Node>, level: usize, visitor: &mut V) {
    let Some(node) = node else {
        return;
    };

    visitor.visit(node, level);
    walk_pre_order(node.left(), level + 1, visitor);
    walk_pre_order(node.right(), level + 1, visitor);
}

fn walk_post_order<V: Visitor + ?Sized>(node: Option<&Node>, level: usize, visitor: &mut V) {
    if let Some(node) = node {
        walk_post_order(node.left(), level + 1, visitor);
        walk_post_order(node.right(), level + 1, visitor);
        visitor.visit(node, level);
    }
}

/// Records the key of every node it visits, in visit order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyCollector {
    keys: Vec<Key>,
}

impl KeyCollector {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The keys visited so far.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Forgets every visited key so the collector can be reused for another walk.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Gives up the visited keys.
    pub fn into_keys(self) -> Vec<Key> {
        self.keys
    }
}

impl Visitor for KeyCollector {
    fn visit(&mut self, node: &Node, _level: usize) {
        self.keys.push(node.key());
    }
}

/// Writes one `Level <level>: ( <key> )` line per visited node.
///
/// `Visitor::visit` can't fail so the first write error is kept and every later visit
/// is skipped. Check [`LevelPrinter::finish`] once the walk is done.
///
/// # Examples
///
/// ```
/// use plain_bst::{LevelPrinter, Tree};
///
/// let tree: Tree = [2, 1].into_iter().collect();
/// let mut printer = LevelPrinter::new(Vec::new());
/// tree.in_order(&mut printer);
///
/// let out = printer.finish().unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Level 1: ( 1 )\nLevel 0: ( 2 )\n");
/// ```
#[derive(Debug)]
pub struct LevelPrinter<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: io::Write> LevelPrinter<W> {
    /// A printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the writer, or the first error hit while writing to it.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }
}

impl<W: io::Write> Visitor for LevelPrinter<W> {
    fn visit(&mut self, node: &Node, level: usize) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "Level {}: ( {} )", level, node.key()) {
            self.error = Some(e);
        }
    }
}
