// SPDX-FileCopyrightText: The param-pathtrie authors
// SPDX-License-Identifier: MPL-2.0

/// Decides which path segments are parameter placeholders.
///
/// A parameter segment matches any segment at the same depth during
/// lookup. Implementations must be pure: the trie evaluates them when
/// nodes are created and again while matching, and relies on getting
/// the same answer for the same segment every time.
pub trait ParamClassifier {
    fn is_param(&self, segment: &str) -> bool;
}

impl<F> ParamClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_param(&self, segment: &str) -> bool {
        self(segment)
    }
}

/// Placeholders enclosed in curly braces, e.g. `{id}`.
///
/// This is the notation of OpenAPI path templates. The name between
/// the braces must not be empty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CurlyBraceParam;

impl ParamClassifier for CurlyBraceParam {
    fn is_param(&self, segment: &str) -> bool {
        segment
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .is_some_and(|name| !name.is_empty())
    }
}
