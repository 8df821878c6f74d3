// SPDX-FileCopyrightText: The param-pathtrie authors
// SPDX-License-Identifier: MPL-2.0

//! Path trie with parameter-aware route matching.
//!
//! Maps separator-delimited paths like `/v1/users/{id}/orders` to values.
//! Which segments are parameter placeholders is decided by an injected
//! [`ParamClassifier`]. A lookup of the concrete path `/v1/users/42/orders`
//! resolves to the template above unless a more specific path has been
//! inserted.

// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Repeating the type name in `Default::default()` expressions is not needed
// as long as the context is obvious.
#![allow(clippy::default_trait_access)]

mod node;
pub use self::node::Node;

mod param;
pub use self::param::{CurlyBraceParam, ParamClassifier};

mod path;
pub use self::path::{EmptySeparatorError, PathSeparator, DEFAULT_SEPARATOR};

mod tree;
pub use self::tree::{Children, Entries, PathTrie};
