//! Trait for converting values into error nodes.
//!
//! # Implementations
//!
//! - `ErrorNode` - Identity conversion, the node keeps its identity
//! - `TypedKind` - Fresh node with the kind's fixed message
//! - `&'static str` / `String` - Fresh `Message` root
//!
//! # Examples
//!
//! ```
//! use error_chainlink::{ErrorKind, IntoErrorNode, TypedKind};
//!
//! assert_eq!(TypedKind::EndOfStream.into_error_node().kind(), ErrorKind::EndOfStream);
//! assert_eq!("disk full".into_error_node().kind(), ErrorKind::Message);
//! ```
use crate::types::{ErrorNode, TypedKind};
use alloc::string::String;

/// Converts a value into an [`ErrorNode`] so it can join a chain.
pub trait IntoErrorNode {
    fn into_error_node(self) -> ErrorNode;
}

impl IntoErrorNode for ErrorNode {
    #[inline]
    fn into_error_node(self) -> ErrorNode {
        self
    }
}

impl IntoErrorNode for TypedKind {
    #[inline]
    fn into_error_node(self) -> ErrorNode {
        ErrorNode::typed(self)
    }
}

impl IntoErrorNode for &'static str {
    #[inline]
    fn into_error_node(self) -> ErrorNode {
        ErrorNode::message(self)
    }
}

impl IntoErrorNode for String {
    #[inline]
    fn into_error_node(self) -> ErrorNode {
        ErrorNode::message(self)
    }
}
