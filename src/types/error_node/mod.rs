//! The error chain node.
//!
//! [`ErrorNode`] is an immutable failure value that optionally owns exactly one
//! cause. It provides:
//! - Fixed-message typed kinds, sentinels and free-form messages
//! - Non-destructive wrapping with an optional label
//! - Cause traversal, identity matching and kind inspection

use crate::types::chain::Chain;
use crate::types::error_formatter::ChainFormatBuilder;
use crate::types::{ErrorId, ErrorKind, ErrorVec, TypedKind};
use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
#[cfg(feature = "serde")]
use serde::Serialize;

mod capture;
mod traits;

/// Custom match hook consulted by [`ErrorNode::is`] in addition to identity.
///
/// Called as `matcher(link, target)` where `link` is the node carrying the hook.
pub type Matcher = fn(&ErrorNode, &ErrorNode) -> bool;

/// Matcher that treats any node of the same kind as a match.
///
/// # Examples
///
/// ```
/// use error_chainlink::{same_kind, ErrorNode};
///
/// let eof = ErrorNode::end_of_stream().with_matcher(same_kind);
/// let err = eof.wrap();
///
/// assert!(err.is(&ErrorNode::end_of_stream()));
/// assert!(!err.is(&ErrorNode::invalid_character()));
/// ```
pub fn same_kind(link: &ErrorNode, target: &ErrorNode) -> bool {
    link.kind == target.kind
}

/// An immutable error value, optionally linked to one underlying cause.
///
/// Equality and hashing use the identity token only: two nodes are equal when
/// they are the same error (or clones of it), never because their text matches.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ErrorNode {
    pub(crate) id: ErrorId,
    pub(crate) kind: ErrorKind,
    #[cfg_attr(feature = "serde", serde(rename = "message"))]
    pub(crate) text: Option<Cow<'static, str>>,
    pub(crate) cause: Option<Box<ErrorNode>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) matcher: Option<Matcher>,
}

impl ErrorNode {
    #[inline]
    fn root(kind: ErrorKind, text: Cow<'static, str>) -> Self {
        Self { id: ErrorId::fresh(), kind, text: Some(text), cause: None, matcher: None }
    }

    /// Creates a fresh node of a typed kind with the kind's fixed message.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_chainlink::{ErrorKind, ErrorNode, TypedKind};
    ///
    /// let err = ErrorNode::typed(TypedKind::EndOfStream);
    /// assert_eq!(err.kind(), ErrorKind::EndOfStream);
    /// assert_eq!(err.to_string(), "EOF");
    /// ```
    #[inline]
    pub fn typed(kind: TypedKind) -> Self {
        Self::root(kind.into(), Cow::Borrowed(kind.message()))
    }

    /// Shorthand for `typed(TypedKind::InvalidCharacter)`.
    #[inline]
    pub fn invalid_character() -> Self {
        Self::typed(TypedKind::InvalidCharacter)
    }

    /// Shorthand for `typed(TypedKind::EndOfStream)`.
    #[inline]
    pub fn end_of_stream() -> Self {
        Self::typed(TypedKind::EndOfStream)
    }

    /// Creates a sentinel: a named root error meant to be compared by identity.
    ///
    /// Each call mints a new identity, so sentinels should be built once and
    /// shared (see [`sentinel!`](crate::sentinel)).
    #[inline]
    pub fn sentinel(name: impl Into<Cow<'static, str>>) -> Self {
        Self::root(ErrorKind::Sentinel, name.into())
    }

    /// Creates a free-form root error.
    #[inline]
    pub fn message(text: impl Into<Cow<'static, str>>) -> Self {
        Self::root(ErrorKind::Message, text.into())
    }

    /// Wraps `self` in a new node that displays exactly like `self`.
    ///
    /// The returned wrapper owns `self` as its cause; [`unwrap`](Self::unwrap)
    /// hands the same node back.
    #[inline]
    pub fn wrap(self) -> Self {
        Self {
            id: ErrorId::fresh(),
            kind: ErrorKind::Wrapped,
            text: None,
            cause: Some(Box::new(self)),
            matcher: None,
        }
    }

    /// Wraps `self` in a new node that displays as `"{label}: {self}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_chainlink::ErrorNode;
    ///
    /// let err = ErrorNode::invalid_character().wrap_with("parsing header");
    /// assert_eq!(err.to_string(), "parsing header: INVALID CHARACTER");
    /// ```
    #[inline]
    pub fn wrap_with(self, label: impl Into<Cow<'static, str>>) -> Self {
        let mut node = self.wrap();
        node.text = Some(label.into());
        node
    }

    /// Attaches a custom match hook consulted by [`is`](Self::is).
    #[inline]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Returns the identity token.
    #[inline]
    pub fn id(&self) -> ErrorId {
        self.id
    }

    /// Returns the kind tag.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the text this node contributes on its own.
    ///
    /// For roots this is the whole message; for wrappers it is the label, or
    /// `None` when the wrapper was created by [`wrap`](Self::wrap).
    #[inline]
    pub fn own_message(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the immediate cause, or `None` for a root.
    #[inline]
    pub fn unwrap(&self) -> Option<&ErrorNode> {
        self.cause.as_deref()
    }

    /// Consumes the node and returns its cause by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_chainlink::ErrorNode;
    ///
    /// let inner = ErrorNode::sentinel("gone");
    /// let id = inner.id();
    ///
    /// let back = inner.wrap().into_cause().expect("wrapped once");
    /// assert_eq!(back.id(), id);
    /// ```
    #[inline]
    pub fn into_cause(mut self) -> Option<ErrorNode> {
        self.cause.take().map(|cause| *cause)
    }

    /// Returns whether `other` is the same error (identity, not text).
    #[inline]
    pub fn same_as(&self, other: &ErrorNode) -> bool {
        self.id == other.id
    }

    /// Walks this node and its causes, returning `true` on the first link that
    /// is `target` by identity or whose matcher accepts `target`.
    #[must_use]
    pub fn is(&self, target: &ErrorNode) -> bool {
        self.chain().any(|link| {
            link.same_as(target) || link.matcher.is_some_and(|matcher| matcher(link, target))
        })
    }

    /// Returns the first link, starting at `self`, whose tag equals `kind`.
    #[must_use]
    pub fn find_kind(&self, kind: ErrorKind) -> Option<&ErrorNode> {
        self.chain().find(|link| link.kind == kind)
    }

    /// Iterates from `self` down to the root cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Collects the chain, outermost first.
    #[must_use]
    pub fn links(&self) -> ErrorVec<&ErrorNode> {
        self.chain().collect()
    }

    /// Number of wrap layers above the root; zero for a root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Returns the innermost node.
    #[must_use]
    pub fn root_cause(&self) -> &ErrorNode {
        let mut node = self;
        while let Some(cause) = node.unwrap() {
            node = cause;
        }
        node
    }

    /// Returns a builder for customizing chain rendering.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ChainFormatBuilder<'_> {
        ChainFormatBuilder::new(self)
    }

    /// Renders the chain with the default configuration, e.g.
    /// `loading config -> parsing header -> INVALID CHARACTER`.
    #[must_use]
    pub fn error_chain(&self) -> String {
        use alloc::string::ToString;
        self.fmt().to_string()
    }
}
