use std::cmp::Ordering;

use log::{debug, trace};

/// The scalar key type stored in the tree.
pub type Key = i64;

/// A single node of an [`AvlTree`](crate::AvlTree).
///
/// Each node exclusively owns its child subtrees. Nodes are only ever
/// mutated by the tree algorithms in this module; the public surface is
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: Key,

    /// Child nodes pointers.
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an absent subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,
}

impl Node {
    pub(crate) fn new(key: Key) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The key held by this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The cached height of the subtree rooted at this node.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The left child, holding keys strictly less than [`Node::key()`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding keys strictly greater than [`Node::key()`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }
}

/// The height of the (possibly absent) subtree `n`.
pub(crate) fn height(n: Option<&Node>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height(n: &mut Node) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance(n: &Node) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
pub(crate) fn rotate_left(x: &mut Box<Node>) {
    let Some(mut p) = x.right.take() else {
        panic!("cannot rotate node {} left: no right child", x.key);
    };
    trace!("rotating left around pivot {} (subtree root {})", p.key, x.key);

    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
pub(crate) fn rotate_right(y: &mut Box<Node>) {
    let Some(mut p) = y.left.take() else {
        panic!("cannot rotate node {} right: no left child", y.key);
    };
    trace!("rotating right around pivot {} (subtree root {})", p.key, y.key);

    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Descend the left edge of `n`, returning the node holding the minimum key
/// of the subtree.
pub(crate) fn min_value_node(n: &Node) -> &Node {
    let mut current = n;
    while let Some(v) = current.left() {
        current = v;
    }
    current
}

/// Insert `key` into the subtree rooted at `node`, rebalancing every ancestor
/// on the insertion path on the way back up.
///
/// Returns false if `key` already exists, in which case the subtree is left
/// untouched.
pub(crate) fn insert(node: &mut Option<Box<Node>>, key: Key) -> bool {
    let n = match node {
        Some(n) => n,
        None => {
            *node = Some(Box::new(Node::new(key)));
            return true;
        }
    };

    let inserted = match key.cmp(&n.key) {
        Ordering::Less => insert(&mut n.left, key),
        Ordering::Equal => return false,
        Ordering::Greater => insert(&mut n.right, key),
    };

    if !inserted {
        // The tree structure has not been modified, so it does not require
        // rebalancing.
        return false;
    }

    update_height(n);
    rebalance_after_insert(n, key);

    true
}

/// Restore the AVL property of `n` after `key` was inserted into one of its
/// subtrees.
///
/// The rotation case is chosen by the position of `key` relative to the
/// heavy child: an outer insertion needs a single rotation, an inner
/// insertion a double rotation.
fn rebalance_after_insert(n: &mut Box<Node>, key: Key) {
    match (balance(n), n.left(), n.right()) {
        // Left-left
        (2.., Some(l), _) if key < l.key => {
            rotate_right(n);
        }
        // Left-right
        (2.., Some(_), _) => {
            if let Some(l) = n.left_mut() {
                rotate_left(l);
            }
            rotate_right(n);
        }
        // Right-right
        (..=-2, _, Some(r)) if key > r.key => {
            rotate_left(n);
        }
        // Right-left
        (..=-2, _, Some(_)) => {
            if let Some(r) = n.right_mut() {
                rotate_right(r);
            }
            rotate_left(n);
        }
        (-1..=1, _, _) => { /* The tree is well balanced */ }
        _ => unreachable!(),
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Remove `key` from the subtree rooted at `node`, rebalancing every ancestor
/// on the search path on the way back up.
///
/// Returns false if `key` is not present, in which case the subtree is left
/// untouched.
pub(crate) fn remove(node: &mut Option<Box<Node>>, key: Key) -> bool {
    let Some(n) = node.as_mut() else {
        return false;
    };

    let removed = match key.cmp(&n.key) {
        Ordering::Less => remove(&mut n.left, key),
        Ordering::Greater => remove(&mut n.right, key),
        Ordering::Equal => {
            // This node may have 0, 1 or 2 child node(s).
            //
            // With both children present, the in-order successor (the minimum
            // of the right subtree) takes the place of this node's key, and
            // the successor is then removed from the right subtree instead.
            let successor = match (n.left(), n.right()) {
                (Some(_), Some(r)) => Some(min_value_node(r).key),
                _ => None,
            };

            match successor {
                Some(successor) => {
                    debug!("replacing removed key {key} with in-order successor {successor}");
                    n.key = successor;

                    let removed = remove(&mut n.right, successor);
                    debug_assert!(removed);
                    removed
                }
                None => {
                    // At most one child: link it (or nothing) into the
                    // parent's slot in place of this node. The surviving
                    // child is already balanced with a correct height.
                    let child = n.left.take().or_else(|| n.right.take());
                    trace!(
                        "splicing out node {key}, linking child {:?}",
                        child.as_ref().map(|v| v.key)
                    );

                    *node = child;
                    return true;
                }
            }
        }
    };

    if removed {
        rebalance_after_remove(n);
    }

    removed
}

/// Recompute the height of `v` and rebalance it after a removal from one of
/// its subtrees.
///
/// The removed side is unknown here, so the rotation case is chosen by the
/// balance of the taller child.
fn rebalance_after_remove(v: &mut Box<Node>) {
    update_height(v);

    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            if let Some(l) = v.left_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            if let Some(r) = v.right_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
