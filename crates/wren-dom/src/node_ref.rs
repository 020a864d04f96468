//! Borrowed, navigable handle to a node of a [`DomTree`].

use std::fmt;
use std::ptr;

use crate::{AttributesMap, DomTree, ElementData, NodeId};

/// A node of a [`DomTree`] together with the tree it lives in.
///
/// `NodeRef` is `Copy`; navigation returns new handles into the same tree and
/// never mutates anything. Handles are only created for ids that exist in the
/// tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a DomTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) const fn new(tree: &'a DomTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The arena index of this node.
    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    #[must_use]
    pub const fn tree(self) -> &'a DomTree {
        self.tree
    }

    /// Tag name, attributes and text of this node.
    #[must_use]
    pub fn data(self) -> &'a ElementData {
        &self.tree.nodes[self.id.0].data
    }

    /// Tag name as written in the source; empty for the root.
    #[must_use]
    pub fn tag_name(self) -> &'a str {
        &self.data().tag_name
    }

    /// Inline text of this node.
    #[must_use]
    pub fn text(self) -> &'a str {
        &self.data().text
    }

    /// All attributes of this node.
    #[must_use]
    pub fn attributes(self) -> &'a AttributesMap {
        &self.data().attrs
    }

    /// The value of attribute `name`, if present.
    #[must_use]
    pub fn attribute(self, name: &str) -> Option<&'a str> {
        self.data().attrs.get(name).map(String::as_str)
    }

    /// Whether this is the synthetic root node.
    #[must_use]
    pub fn is_root(self) -> bool {
        self.id == NodeId::ROOT
    }

    fn wrap(self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.tree, id))
    }

    /// The enclosing node, or `None` at the root.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.wrap(self.tree.parent(self.id))
    }

    /// The following sibling, or `None` for the last child.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.wrap(self.tree.next_sibling(self.id))
    }

    /// The preceding sibling, or `None` for the first child.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.wrap(self.tree.prev_sibling(self.id))
    }

    /// The child at `index`; negative indices count back from the end.
    #[must_use]
    pub fn child(self, index: isize) -> Option<Self> {
        self.wrap(self.tree.child_at(self.id, index))
    }

    /// The first child.
    #[must_use]
    pub fn first_child(self) -> Option<Self> {
        self.wrap(self.tree.first_child(self.id))
    }

    /// The last child.
    #[must_use]
    pub fn last_child(self) -> Option<Self> {
        self.wrap(self.tree.last_child(self.id))
    }

    /// Number of children.
    #[must_use]
    pub fn child_count(self) -> usize {
        self.tree.children(self.id).len()
    }

    /// Children in document order.
    pub fn children(self) -> impl Iterator<Item = Self> {
        let tree = self.tree;
        tree.children(self.id)
            .iter()
            .map(move |&id| Self::new(tree, id))
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = Self> {
        let tree = self.tree;
        tree.ancestors(self.id).map(move |id| Self::new(tree, id))
    }

    /// Every descendant in document order, excluding this node.
    pub fn descendants(self) -> impl Iterator<Item = Self> {
        let tree = self.tree;
        tree.descendants(self.id).map(move |id| Self::new(tree, id))
    }

    /// First descendant whose `id` attribute equals `id`.
    #[must_use]
    pub fn get_element_by_id(self, id: &str) -> Option<Self> {
        self.wrap(self.tree.get_element_by_id(self.id, id))
    }

    /// Descendants carrying every class name in `names`.
    #[must_use]
    pub fn get_elements_by_class_name(self, names: &str) -> Vec<Self> {
        self.wrap_all(self.tree.get_elements_by_class_name(self.id, names))
    }

    /// Descendants whose tag name is exactly `tag_name`.
    #[must_use]
    pub fn get_elements_by_tag_name(self, tag_name: &str) -> Vec<Self> {
        self.wrap_all(self.tree.get_elements_by_tag_name(self.id, tag_name))
    }

    fn wrap_all(self, ids: Vec<NodeId>) -> Vec<Self> {
        ids.into_iter().map(|id| Self::new(self.tree, id)).collect()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && ptr::eq(self.tree, other.tree)
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("tag_name", &self.tag_name())
            .finish()
    }
}
