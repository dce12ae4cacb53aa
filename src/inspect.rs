//! Free-function forms of the chain operations.
//!
//! Each function delegates to the matching [`ErrorNode`] method; they exist for
//! call sites that read better as `is(&err, &TARGET)` than as a method chain.
//!
//! # Examples
//!
//! ```
//! use error_chainlink::{as_kind, is, unwrap, wrap, ErrorKind, ErrorNode};
//!
//! let target = ErrorNode::sentinel("closed");
//! let err = wrap(target.clone());
//!
//! assert!(is(&err, &target));
//! assert_eq!(unwrap(&err), Some(&target));
//! assert!(as_kind(&err, ErrorKind::Sentinel).is_some());
//! ```

use crate::types::{ErrorKind, ErrorNode};
use alloc::borrow::Cow;

/// Wraps `cause` in a new node that displays exactly like it.
#[inline]
pub fn wrap(cause: ErrorNode) -> ErrorNode {
    cause.wrap()
}

/// Wraps `cause` in a new node that displays as `"{label}: {cause}"`.
#[inline]
pub fn wrap_with(cause: ErrorNode, label: impl Into<Cow<'static, str>>) -> ErrorNode {
    cause.wrap_with(label)
}

/// Returns the immediate cause of `node`, or `None` for a root.
#[inline]
pub fn unwrap(node: &ErrorNode) -> Option<&ErrorNode> {
    node.unwrap()
}

/// Returns whether `target` appears anywhere in `node`'s chain.
#[inline]
#[must_use]
pub fn is(node: &ErrorNode, target: &ErrorNode) -> bool {
    node.is(target)
}

/// Returns the first link in `node`'s chain tagged with `kind`.
#[inline]
pub fn as_kind(node: &ErrorNode, kind: ErrorKind) -> Option<&ErrorNode> {
    node.find_kind(kind)
}
