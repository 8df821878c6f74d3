// SPDX-FileCopyrightText: The param-pathtrie authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Borrow;

use derive_more::{Display, Error};
use itertools::Itertools as _;

/// The separator of the default [`PathSeparator`].
pub const DEFAULT_SEPARATOR: &str = "/";

/// Rejected attempt to use an empty string as path separator.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path separator must not be empty")]
pub struct EmptySeparatorError;

/// Non-empty string that delimits the segments of a path.
///
/// Splitting is exact: leading, trailing, and repeated separators
/// produce empty segments that are kept as distinct segment names.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[display("{_0}")]
pub struct PathSeparator(String);

impl PathSeparator {
    pub fn new(separator: impl Into<String>) -> Result<Self, EmptySeparatorError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(EmptySeparatorError);
        }
        Ok(Self(separator))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits `path` into its segments.
    ///
    /// Always yields at least one segment, the empty path yields a
    /// single empty segment.
    #[must_use]
    pub fn split<'p>(&self, path: &'p str) -> Vec<&'p str> {
        path.split(self.as_str()).collect()
    }

    /// Joins segments back into a path.
    #[must_use]
    pub fn join<S: Borrow<str>>(&self, segments: &[S]) -> String {
        segments
            .iter()
            .map(<S as Borrow<str>>::borrow)
            .join(self.as_str())
    }
}

impl Default for PathSeparator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR.to_owned())
    }
}

impl TryFrom<&str> for PathSeparator {
    type Error = EmptySeparatorError;

    fn try_from(from: &str) -> Result<Self, Self::Error> {
        Self::new(from)
    }
}

impl TryFrom<String> for PathSeparator {
    type Error = EmptySeparatorError;

    fn try_from(from: String) -> Result<Self, Self::Error> {
        Self::new(from)
    }
}

impl AsRef<str> for PathSeparator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::{EmptySeparatorError, PathSeparator};

    #[test]
    fn default_separator_is_slash() {
        assert_eq!("/", PathSeparator::default().as_str());
    }

    #[test]
    fn reject_empty_separator() {
        assert_eq!(Err(EmptySeparatorError), PathSeparator::new(""));
        assert_eq!(Err(EmptySeparatorError), PathSeparator::try_from(String::new()));
        assert_eq!(
            "path separator must not be empty",
            EmptySeparatorError.to_string()
        );
    }

    #[test]
    fn split_keeps_empty_segments() {
        let separator = PathSeparator::default();
        assert_eq!(vec![""], separator.split(""));
        assert_eq!(vec!["", "v1", "users"], separator.split("/v1/users"));
        assert_eq!(vec!["v1", "users", ""], separator.split("v1/users/"));
        assert_eq!(vec!["a", "", "b"], separator.split("a//b"));
    }

    #[test]
    fn split_with_multi_char_separator() {
        let separator = PathSeparator::new("::").unwrap();
        assert_eq!(vec!["std", "io", "Read"], separator.split("std::io::Read"));
        assert_eq!(vec!["a/b"], separator.split("a/b"));
    }

    #[test]
    fn join_inverts_split() {
        let separator = PathSeparator::new(".").unwrap();
        let segments = separator.split(".a.b.");
        assert_eq!(".a.b.", separator.join(&segments));
        assert_eq!("a.b", separator.join(&["a".to_owned(), "b".to_owned()]));
    }
}
