//! Parsed document.

use wren_dom::{DomTree, NodeId, NodeRef};

use crate::issue::ParseIssue;

/// The result of a parse: the tree and the issues recovered while building it.
///
/// Queries search the descendants of the root, so the root itself is never
/// returned.
#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    issues: Vec<ParseIssue>,
}

impl Document {
    pub(crate) const fn new(tree: DomTree, issues: Vec<ParseIssue>) -> Self {
        Self { tree, issues }
    }

    /// The synthetic root node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        self.tree.root_ref()
    }

    /// The underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Give up the issues and keep the tree.
    #[must_use]
    pub fn into_tree(self) -> DomTree {
        self.tree
    }

    /// Every malformed construct the parser recovered from, in input order
    /// of detection.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Text found outside of every element.
    #[must_use]
    pub fn text(&self) -> &str {
        self.root().text()
    }

    /// Handle for the node at `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.tree.node_ref(id)
    }

    /// Every element in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.root().descendants()
    }

    /// First element whose `id` attribute equals `id`.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeRef<'_>> {
        self.root().get_element_by_id(id)
    }

    /// Elements carrying every space-separated class name in `names`.
    #[must_use]
    pub fn get_elements_by_class_name(&self, names: &str) -> Vec<NodeRef<'_>> {
        self.root().get_elements_by_class_name(names)
    }

    /// Elements whose tag name is exactly `tag_name`.
    #[must_use]
    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeRef<'_>> {
        self.root().get_elements_by_tag_name(tag_name)
    }
}
