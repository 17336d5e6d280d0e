//! A height-balanced binary search tree (an [AVL tree]) of integer keys.
//!
//! An [`AvlTree`] stores a set of unique [`Key`] values ordered such that,
//! for every [`Node`]:
//!
//! 1. All keys in the left subtree are strictly less than the node key.
//! 2. All keys in the right subtree are strictly greater than the node key.
//! 3. The height of the left and right subtrees differ by at most 1.
//!
//! Each insertion or removal restores these properties by rotating the
//! subtrees along the mutated path, bounding the tree height to `O(lg N)`.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = AvlTree::default();
//! for key in [1, 2, 3] {
//!     t.insert(key);
//! }
//!
//! // Ascending inserts are rotated into a balanced shape.
//! assert_eq!(t.root().map(|v| v.key()), Some(2));
//!
//! assert!(t.remove(2));
//! assert!(!t.contains(2));
//!
//! println!("{t}");
//! ```
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(missing_docs, missing_debug_implementations)]

mod iter;
mod node;
mod render;
mod tree;


pub use node::{Key, Node};
pub use render::Render;
pub use tree::AvlTree;
