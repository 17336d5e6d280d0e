use std::{cmp::Ordering, fmt};

use crate::{
    iter::Keys,
    node::{self, Key, Node},
    render::Render,
};

/// A self-balancing (AVL) binary search tree holding a set of unique [`Key`]
/// values.
///
/// The tree owns its root [`Node`]; rotations that replace the root during an
/// [`AvlTree::insert()`] or [`AvlTree::remove()`] are absorbed by the tree.
///
/// The [`fmt::Display`] implementation writes the lines of
/// [`AvlTree::render()`], one per line.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AvlTree(Option<Box<Node>>);

impl AvlTree {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` into the tree, rebalancing as necessary.
    ///
    /// Returns false (leaving the tree untouched) if `key` already exists.
    pub fn insert(&mut self, key: Key) -> bool {
        node::insert(&mut self.0, key)
    }

    /// Remove `key` from the tree, rebalancing as necessary.
    ///
    /// Returns false (leaving the tree untouched) if `key` does not exist.
    pub fn remove(&mut self, key: Key) -> bool {
        node::remove(&mut self.0, key)
    }

    /// Returns true if `key` exists in the tree.
    pub fn contains(&self, key: Key) -> bool {
        let mut ptr = self.root();

        while let Some(n) = ptr {
            ptr = match key.cmp(&n.key()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }

        false
    }

    /// The root node of the tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.0.as_deref()
    }

    /// The height of the tree, counted in nodes along the longest path from
    /// the root to a leaf (0 for an empty tree).
    pub fn height(&self) -> u8 {
        node::height(self.root())
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Lazily render the shape of the tree as lines of text.
    ///
    /// Each call returns a fresh iterator starting at the root. An empty tree
    /// renders no lines.
    pub fn render(&self) -> Render<'_> {
        Render::new(self.root(), "", true)
    }
}

impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(Keys::new(self.root())).finish()
    }
}
