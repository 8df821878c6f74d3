// SPDX-FileCopyrightText: The param-pathtrie authors
// SPDX-License-Identifier: MPL-2.0

use crate::{node::ChildNodes, CurlyBraceParam, Node, ParamClassifier, PathSeparator};

/// Trie of separator-delimited paths with parameter-aware lookup.
///
/// Paths are stored segment by segment. Parameter placeholders are
/// stored under their literal text like any other segment, i.e.
/// `{id}` and `{userId}` become sibling nodes. Only during lookup a
/// parameter segment matches an arbitrary segment. If more than one
/// inserted path matches, the one that equals the requested path wins,
/// otherwise the one with the fewest parameter segments.
///
/// Nodes are never removed. Siblings are kept in registration order,
/// which makes enumeration and tie-breaking deterministic.
///
/// Inserting requires exclusive access. Callers that share a trie
/// between threads have to wrap it into a lock.
#[derive(Debug, Clone)]
pub struct PathTrie<V, C = CurlyBraceParam> {
    roots: ChildNodes<V>,
    separator: PathSeparator,
    classifier: C,
    len: usize,
}

impl<V> PathTrie<V> {
    /// Empty trie with `/` as separator and `{name}` placeholders.
    #[must_use]
    pub fn new() -> Self {
        Self::with_separator(PathSeparator::default())
    }

    #[must_use]
    pub fn with_separator(separator: PathSeparator) -> Self {
        Self::with_separator_and_classifier(separator, CurlyBraceParam)
    }
}

impl<V, C> Default for PathTrie<V, C>
where
    C: ParamClassifier + Default,
{
    fn default() -> Self {
        Self::with_classifier(C::default())
    }
}

impl<V, C> PathTrie<V, C>
where
    C: ParamClassifier,
{
    #[must_use]
    pub fn with_classifier(classifier: C) -> Self {
        Self::with_separator_and_classifier(PathSeparator::default(), classifier)
    }

    #[must_use]
    pub fn with_separator_and_classifier(separator: PathSeparator, classifier: C) -> Self {
        Self {
            roots: ChildNodes::new(),
            separator,
            classifier,
            len: 0,
        }
    }

    #[must_use]
    pub const fn separator(&self) -> &PathSeparator {
        &self.separator
    }

    #[must_use]
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Number of distinct paths that have been inserted.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nodes of the first segment level.
    pub fn roots(&self) -> impl ExactSizeIterator<Item = &Node<V>> + '_ {
        self.roots.values()
    }

    /// Inserts `value` at `path`, merging it with an existing value.
    ///
    /// Missing nodes along the path are created. If the terminal node
    /// already holds a value then `merge` is invoked with the existing
    /// value and the new one and is responsible for updating the former.
    /// Otherwise the new value is stored as is and `merge` is not invoked.
    ///
    /// Returns `true` if the terminal node had no value before, i.e. if
    /// a new path has been added.
    pub fn insert_merge(&mut self, path: &str, value: V, merge: impl FnOnce(&mut V, V)) -> bool {
        let segments = self.separator.split(path);
        let Self {
            roots,
            separator,
            classifier,
            len,
        } = self;
        let mut siblings = roots;
        let mut param_count = 0;
        let mut terminal = None;
        for (index, name) in segments.iter().copied().enumerate() {
            let node = siblings.entry(name.to_owned()).or_insert_with(|| {
                let full_path = separator.join(&segments[..=index]);
                let param_count = param_count + usize::from(classifier.is_param(name));
                log::trace!("Adding node {full_path:?} with {param_count} parameter(s)");
                Node::new(name.to_owned(), full_path, param_count)
            });
            param_count = node.param_count;
            if index + 1 == segments.len() {
                terminal = Some(node);
                break;
            }
            siblings = &mut node.children;
        }
        // Splitting always yields at least one segment.
        let Some(terminal) = terminal else {
            return false;
        };
        let is_new_path = if let Some(existing) = &mut terminal.value {
            log::trace!("Merging value of existing path {:?}", terminal.full_path);
            merge(existing, value);
            false
        } else {
            terminal.value = Some(value);
            *len += 1;
            true
        };
        #[cfg(feature = "expensive-debug-assertions")]
        self.debug_assert_invariants();
        is_new_path
    }

    /// Inserts `value` at `path`, replacing an existing value.
    ///
    /// Returns `true` if a new path has been added and `false` if the
    /// value of an existing path has been replaced.
    pub fn insert(&mut self, path: &str, value: V) -> bool {
        self.insert_merge(path, value, |existing, value| *existing = value)
    }

    /// Finds the inserted path that matches `path` best.
    ///
    /// The returned node always holds a value.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Node<V>> {
        let segments = self.separator.split(path);
        let mut candidates = Vec::new();
        collect_matching_nodes(&self.roots, &segments, &self.classifier, &mut candidates);
        match candidates.as_slice() {
            [] => None,
            [node] => Some(*node),
            _ => {
                let node = most_specific_node(&candidates, path)?;
                log::debug!(
                    "Resolved {path:?} to {:?} among {} candidates",
                    node.full_path,
                    candidates.len()
                );
                Some(node)
            }
        }
    }

    #[must_use]
    pub fn get_value(&self, path: &str) -> Option<&V> {
        self.resolve(path).and_then(Node::value)
    }

    /// Returns the full path of the matched node together with its value.
    ///
    /// The full path differs from `path` if parameter segments have been
    /// matched, e.g. `/users/{id}` for `/users/42`.
    #[must_use]
    pub fn get_path_and_value(&self, path: &str) -> Option<(&str, &V)> {
        let node = self.resolve(path)?;
        node.value().map(|value| (node.full_path(), value))
    }

    /// Full paths of all nodes, depth-first.
    ///
    /// Includes intermediate nodes that do not hold a value, but neither
    /// nodes with an empty full path nor the subtrees below empty segment
    /// names.
    #[must_use]
    pub fn children(&self) -> Children<'_, V> {
        Children {
            nodes: Nodes::new(&self.roots, true),
        }
    }

    /// Full paths and values of all inserted paths, depth-first.
    #[must_use]
    pub fn entries(&self) -> Entries<'_, V> {
        Entries {
            nodes: Nodes::new(&self.roots, false),
        }
    }

    #[cfg(feature = "expensive-debug-assertions")]
    fn debug_assert_invariants(&self) {
        let mut terminal_count = 0;
        for (name, root) in &self.roots {
            debug_assert_eq!(name, &root.name);
            self.debug_assert_node_invariants(root, &mut Vec::new(), 0, &mut terminal_count);
        }
        debug_assert_eq!(self.len, terminal_count);
    }

    #[cfg(feature = "expensive-debug-assertions")]
    fn debug_assert_node_invariants<'a>(
        &self,
        node: &'a Node<V>,
        segments: &mut Vec<&'a str>,
        parent_param_count: usize,
        terminal_count: &mut usize,
    ) {
        segments.push(&node.name);
        debug_assert_eq!(self.separator.join(segments.as_slice()), node.full_path);
        debug_assert_eq!(
            parent_param_count + usize::from(self.classifier.is_param(&node.name)),
            node.param_count
        );
        if node.is_terminal() {
            *terminal_count += 1;
        }
        for (name, child) in &node.children {
            debug_assert_eq!(name, &child.name);
            self.debug_assert_node_invariants(child, segments, node.param_count, terminal_count);
        }
        segments.pop();
    }
}

fn collect_matching_nodes<'a, V>(
    siblings: &'a ChildNodes<V>,
    segments: &[&str],
    classifier: &impl ParamClassifier,
    matches: &mut Vec<&'a Node<V>>,
) {
    let Some((segment, descendant_segments)) = segments.split_first() else {
        return;
    };
    for node in siblings
        .values()
        .filter(|node| node.matches_segment(classifier, segment))
    {
        if descendant_segments.is_empty() {
            if node.is_terminal() {
                matches.push(node);
            }
        } else {
            collect_matching_nodes(&node.children, descendant_segments, classifier, matches);
        }
    }
}

/// Exact match or else the first candidate with the fewest parameters.
fn most_specific_node<'a, V>(candidates: &[&'a Node<V>], path: &str) -> Option<&'a Node<V>> {
    candidates
        .iter()
        .find(|node| node.full_path == path)
        .or_else(|| candidates.iter().min_by_key(|node| node.param_count))
        .copied()
}

/// Depth-first pre-order traversal, siblings in registration order.
#[derive(Debug)]
struct Nodes<'a, V> {
    stack: Vec<indexmap::map::Iter<'a, String, Node<V>>>,
    skip_empty_names: bool,
}

impl<'a, V> Nodes<'a, V> {
    fn new(roots: &'a ChildNodes<V>, skip_empty_names: bool) -> Self {
        Self {
            stack: vec![roots.iter()],
            skip_empty_names,
        }
    }
}

impl<'a, V> Iterator for Nodes<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len();
            let siblings = self.stack.last_mut()?;
            let Some((name, node)) = siblings.next() else {
                self.stack.pop();
                continue;
            };
            // Empty names are only skipped below the root level.
            if self.skip_empty_names && depth > 1 && name.is_empty() {
                continue;
            }
            self.stack.push(node.children.iter());
            return Some(node);
        }
    }
}

/// Iterator returned by [`PathTrie::children()`].
#[derive(Debug)]
pub struct Children<'a, V> {
    nodes: Nodes<'a, V>,
}

impl<'a, V> Iterator for Children<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .by_ref()
            .map(Node::full_path)
            .find(|full_path| !full_path.is_empty())
    }
}

/// Iterator returned by [`PathTrie::entries()`].
#[derive(Debug)]
pub struct Entries<'a, V> {
    nodes: Nodes<'a, V>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .by_ref()
            .find_map(|node| node.value().map(|value| (node.full_path(), value)))
    }
}
