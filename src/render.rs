//! Text rendering of the tree shape.

use crate::node::Node;

/// Marker preceding the key of a right child (or the root).
const LAST_MARKER: &str = "R----";
/// Marker preceding the key of a left child.
const BRANCH_MARKER: &str = "L----";

/// Prefix extension for the children of a right child (or the root).
const LAST_INDENT: &str = "   ";
/// Prefix extension for the children of a left child, continuing the vertical
/// line down to its right sibling.
const BRANCH_INDENT: &str = "|  ";

#[derive(Debug, Clone)]
struct Frame<'a> {
    node: &'a Node,
    prefix: String,
    is_last: bool,
}

/// A lazy iterator of lines depicting the shape of a tree, produced by
/// [`AvlTree::render()`](crate::AvlTree::render).
///
/// Nodes are visited in pre-order, left child before right child, one line per
/// node:
///
/// ```text
/// R----33
///    L----13
///    |  L----9
///    |  R----21
///    R----53
/// ```
///
/// Cloning a [`Render`] yields an independent iterator resuming from the same
/// position.
#[derive(Debug, Clone)]
pub struct Render<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Render<'a> {
    pub(crate) fn new(root: Option<&'a Node>, prefix: impl Into<String>, is_last: bool) -> Self {
        Self {
            stack: root
                .map(|node| Frame {
                    node,
                    prefix: prefix.into(),
                    is_last,
                })
                .into_iter()
                .collect(),
        }
    }
}

impl Iterator for Render<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let Frame {
            node,
            mut prefix,
            is_last,
        } = self.stack.pop()?;

        let (marker, indent) = if is_last {
            (LAST_MARKER, LAST_INDENT)
        } else {
            (BRANCH_MARKER, BRANCH_INDENT)
        };

        let line = format!("{prefix}{marker}{}", node.key());
        prefix.push_str(indent);

        // Pushed in reverse so the left child is rendered first.
        if let Some(right) = node.right() {
            self.stack.push(Frame {
                node: right,
                prefix: prefix.clone(),
                is_last: true,
            });
        }
        if let Some(left) = node.left() {
            self.stack.push(Frame {
                node: left,
                prefix,
                is_last: false,
            });
        }

        Some(line)
    }
}
