//! Document tree implementation for the wren HTML parser.
//!
//! This crate provides an arena-based tree of elements together with the
//! lookups the parser's callers need: by id, by class, by tag name, and
//! structural navigation between parents, children and siblings.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Parents
//! own their children through the index lists; the parent link is a plain
//! index and never keeps anything alive.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

mod node_ref;
mod query;

pub use node_ref::NodeRef;
pub use query::class_tokens;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the document tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// Element-specific data.
///
/// The root node carries an empty `tag_name`; its `text` holds any character
/// data found outside of every element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// Tag name exactly as written in the source.
    pub tag_name: String,
    /// Attribute list, last write wins on duplicate names.
    pub attrs: AttributesMap,
    /// Inline text of this element only, excluding descendants' text.
    pub text: String,
}

impl ElementData {
    /// Create element data for `tag_name` with no attributes or text.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns the set of class names from the class attribute.
    ///
    /// The attribute is split on single spaces; runs of spaces do not yield
    /// empty class names.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attrs
            .get("class")
            .map(|classlist| class_tokens(classlist))
            .unwrap_or_default()
    }
}

/// A vertex of the document tree.
///
/// This node stores indices for parent/child/sibling relationships,
/// enabling O(1) traversal in any direction.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Tag name, attributes and text.
    pub data: ElementData,

    /// The enclosing node. `None` for the root and for nodes not yet appended.
    pub parent: Option<NodeId>,

    /// Children in document order.
    pub children: Vec<NodeId>,

    /// The node immediately following this one in its parent's children.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one in its parent's children.
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    fn detached(data: ElementData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// Arena-based document tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. This provides:
/// - O(1) access to any node by `NodeId`
/// - O(1) parent/sibling traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone, Serialize)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The root node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(ElementData::default())],
        }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Borrow the node at `id` as a navigable handle.
    #[must_use]
    pub fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.get(id).map(|_| NodeRef::new(self, id))
    }

    /// Borrow the root node as a navigable handle.
    #[must_use]
    pub fn root_ref(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Get the number of nodes in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, data: ElementData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(data));
        id
    }

    /// Appends `child` as the last child of `parent`, updating all relationships.
    ///
    /// A node must be appended at most once.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the element data of a node.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).map(|n| &n.data)
    }

    /// Get the tag name of a node. The root's tag name is empty.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|data| data.tag_name.as_str())
    }

    /// Get the inline text of a node.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|data| data.text.as_str())
    }

    /// Get the value of attribute `name` on a node.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|data| data.attrs.get(name))
            .map(String::as_str)
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the child at `index`. Negative indices count back from the last
    /// child, so `-1` is the last child.
    #[must_use]
    pub fn child_at(&self, id: NodeId, index: isize) -> Option<NodeId> {
        let children = self.children(id);
        let position = if index < 0 {
            children.len().checked_sub(index.unsigned_abs())?
        } else {
            usize::try_from(index).ok()?
        };
        children.get(position).copied()
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Check if `descendant` is a descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over every descendant of a node in document order (pre-order),
    /// excluding the node itself.
    ///
    /// The walk keeps its own stack, so arbitrarily deep trees are safe.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        let mut stack = Vec::new();
        stack.extend(self.children(id).iter().rev());
        DescendantIterator { tree: self, stack }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev());
        Some(id)
    }
}
