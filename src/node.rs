// SPDX-FileCopyrightText: The param-pathtrie authors
// SPDX-License-Identifier: MPL-2.0

use indexmap::IndexMap;

use crate::ParamClassifier;

/// Child nodes keyed by their literal segment name, in registration order.
pub(crate) type ChildNodes<V> = IndexMap<String, Node<V>>;

/// A single path segment at a fixed position in the trie.
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub(crate) name: String,
    pub(crate) full_path: String,
    pub(crate) param_count: usize,
    pub(crate) value: Option<V>,
    pub(crate) children: ChildNodes<V>,
}

impl<V> Node<V> {
    pub(crate) fn new(name: String, full_path: String, param_count: usize) -> Self {
        Self {
            name,
            full_path,
            param_count,
            value: None,
            children: ChildNodes::new(),
        }
    }

    /// The literal segment text, possibly a parameter placeholder.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All segment names from the root down to this node, joined
    /// with the separator of the trie.
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Number of parameter segments from the root down to and
    /// including this node.
    ///
    /// Lower counts denote more specific routes.
    #[must_use]
    pub const fn param_count(&self) -> usize {
        self.param_count
    }

    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether an inserted path ends at this node.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = &Self> + '_ {
        self.children.values()
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    pub(crate) fn matches_segment(&self, classifier: &impl ParamClassifier, segment: &str) -> bool {
        classifier.is_param(&self.name) || self.name == segment
    }
}
