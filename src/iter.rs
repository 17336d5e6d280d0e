use crate::node::{Key, Node};

/// An in-order walk over the keys of a subtree, yielding them in ascending
/// order.
#[derive(Debug, Clone)]
pub(crate) struct Keys<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v.key())
    }
}
