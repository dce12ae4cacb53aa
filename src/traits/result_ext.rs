//! Extension trait for wrapping the error side of a `Result`.
//!
//! This module provides [`ResultExt`], which wraps errors without verbose
//! `.map_err(ErrorNode::wrap)` chains.
//!
//! # Examples
//!
//! ```
//! use error_chainlink::{ErrorNode, NodeResult, ResultExt};
//!
//! fn parse() -> NodeResult<u8> {
//!     Err(ErrorNode::invalid_character())
//! }
//!
//! fn load() -> NodeResult<u8> {
//!     parse().wrap_err_with("loading settings")
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.to_string(), "loading settings: INVALID CHARACTER");
//! assert_eq!(err.depth(), 1);
//! ```

use crate::traits::IntoErrorNode;
use crate::types::ErrorNode;
use alloc::borrow::Cow;
use alloc::string::String;

/// Extension trait for wrapping errors in `Result` types.
///
/// The error is first converted with [`IntoErrorNode`], then wrapped once.
/// `Ok` values pass through untouched.
pub trait ResultExt<T> {
    /// Wraps the error in an unlabeled wrapper that displays like the cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_chainlink::{ErrorKind, ResultExt, TypedKind};
    ///
    /// let result: Result<(), TypedKind> = Err(TypedKind::EndOfStream);
    /// let err = result.wrap_err().unwrap_err();
    ///
    /// assert_eq!(err.kind(), ErrorKind::Wrapped);
    /// assert_eq!(err.to_string(), "EOF");
    /// ```
    fn wrap_err(self) -> Result<T, ErrorNode>;

    /// Wraps the error in a wrapper labelled with `label`.
    fn wrap_err_with<L>(self, label: L) -> Result<T, ErrorNode>
    where
        L: Into<Cow<'static, str>>;

    /// Wraps the error with a lazily-built label.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_chainlink::{ErrorNode, ResultExt};
    ///
    /// let offset = 17;
    /// let result: Result<(), ErrorNode> = Err(ErrorNode::invalid_character());
    /// let err = result.wrap_err_lazy(|| format!("byte {}", offset)).unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "byte 17: INVALID CHARACTER");
    /// ```
    fn wrap_err_lazy<F>(self, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: IntoErrorNode,
{
    #[inline]
    fn wrap_err(self) -> Result<T, ErrorNode> {
        self.map_err(|e| e.into_error_node().wrap())
    }

    #[inline]
    fn wrap_err_with<L>(self, label: L) -> Result<T, ErrorNode>
    where
        L: Into<Cow<'static, str>>,
    {
        self.map_err(|e| e.into_error_node().wrap_with(label))
    }

    #[inline]
    fn wrap_err_lazy<F>(self, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into_error_node().wrap_with(f()))
    }
}
