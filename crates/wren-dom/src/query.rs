//! Tree search by id, class and tag name.
//!
//! Every search walks the descendants of the starting node in document
//! order; the starting node itself is never a candidate. Searches use the
//! explicit-stack [`DescendantIterator`](crate::DescendantIterator), so deeply
//! nested input cannot exhaust the call stack.

use std::collections::HashSet;

use crate::{DomTree, NodeId};

/// Split a class list into its class names.
///
/// Only the plain space character separates names; empty names produced by
/// repeated spaces are discarded.
#[must_use]
pub fn class_tokens(value: &str) -> HashSet<&str> {
    value.split(' ').filter(|token| !token.is_empty()).collect()
}

impl DomTree {
    /// Find the first descendant of `from` whose `id` attribute equals `id`.
    ///
    /// Ids are not required to be unique; the earliest match in document
    /// order wins.
    #[must_use]
    pub fn get_element_by_id(&self, from: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(from)
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    /// Collect every descendant of `from` carrying all of the space-separated
    /// class names in `names`.
    ///
    /// An element matches when the query's names are a subset of its own, so
    /// `"a b"` matches `class="b c a"`. A query without any names matches
    /// every descendant. Matched elements are still searched, so an element
    /// and its descendants can both appear in the result.
    #[must_use]
    pub fn get_elements_by_class_name(&self, from: NodeId, names: &str) -> Vec<NodeId> {
        let wanted = class_tokens(names);
        self.descendants(from)
            .filter(|&node| {
                self.element(node)
                    .is_some_and(|data| wanted.is_subset(&data.classes()))
            })
            .collect()
    }

    /// Collect every descendant of `from` whose tag name is exactly `tag_name`.
    ///
    /// The comparison is case-sensitive.
    #[must_use]
    pub fn get_elements_by_tag_name(&self, from: NodeId, tag_name: &str) -> Vec<NodeId> {
        self.descendants(from)
            .filter(|&node| self.tag_name(node) == Some(tag_name))
            .collect()
    }
}
