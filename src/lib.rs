//! Identity-preserving error chains.
//!
//! Every [`ErrorNode`] carries an explicit [`ErrorKind`] tag and an opaque
//! [`ErrorId`] minted at construction. Wrapping moves a node under a new
//! `Wrapped` node, unwrapping hands the very same node back, and identity
//! matching walks the chain comparing tokens rather than messages.
//!
//! # Examples
//!
//! ## Wrap and Unwrap
//!
//! ```
//! use error_chainlink::{ErrorKind, ErrorNode};
//!
//! let inner = ErrorNode::invalid_character();
//! let inner_id = inner.id();
//! let outer = inner.wrap();
//!
//! assert_eq!(outer.kind(), ErrorKind::Wrapped);
//! assert_eq!(outer.to_string(), "INVALID CHARACTER");
//!
//! let cause = outer.unwrap().expect("one layer deep");
//! assert_eq!(cause.id(), inner_id);
//! assert!(cause.unwrap().is_none());
//! ```
//!
//! ## Identity Matching
//!
//! ```
//! use error_chainlink::ErrorNode;
//!
//! let sentinel = ErrorNode::sentinel("myErr");
//! let lookalike = ErrorNode::sentinel("myErr");
//! let wrapped = sentinel.clone().wrap_with("loading");
//!
//! assert!(wrapped.is(&sentinel));
//! assert!(!wrapped.is(&lookalike));
//! assert_eq!(wrapped.to_string(), "loading: myErr");
//! ```
//!
//! ## Kind Inspection
//!
//! ```
//! use error_chainlink::{ErrorKind, ErrorNode};
//!
//! let err = ErrorNode::end_of_stream().wrap().wrap();
//! let eof = err.find_kind(ErrorKind::EndOfStream).expect("eof in chain");
//!
//! assert_eq!(eof.to_string(), "EOF");
//! assert!(err.find_kind(ErrorKind::Sentinel).is_none());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free-function forms of the chain operations
pub mod inspect;
/// Declarative macros for sentinels and wrapping
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits over `Result`
pub mod traits;
/// Error nodes, kinds, identity tokens and formatting
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use inspect::*;
pub use traits::*;
pub use types::{
    error_formatter::ErrorFormatConfig, same_kind, Chain, ChainFormatBuilder, ErrorFormatter,
    ErrorId, ErrorKind, ErrorNode, ErrorVec, Matcher, NodeResult, TypedKind,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::sync::LazyLock;
}
