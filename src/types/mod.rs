//! Error chain types.
//!
//! This module provides the node type, its identity token and kind tag, the
//! chain iterator and the chain formatter.
//!
//! # Examples
//!
//! ```
//! use error_chainlink::ErrorNode;
//!
//! let err = ErrorNode::invalid_character()
//!     .wrap_with("parsing header")
//!     .wrap_with("loading config");
//!
//! assert_eq!(err.error_chain(), "loading config -> parsing header -> INVALID CHARACTER");
//! assert_eq!(err.to_string(), "loading config: parsing header: INVALID CHARACTER");
//! ```
use smallvec::SmallVec;

pub mod chain;
pub mod error_formatter;
pub mod error_id;
pub mod error_kind;
pub mod error_node;

pub use chain::*;
pub use error_formatter::{ChainFormatBuilder, ErrorFormatter};
pub use error_id::*;
pub use error_kind::*;
pub use error_node::*;

/// SmallVec-backed collection used when gathering chain links.
///
/// Uses inline storage for up to 4 elements; chains rarely run deeper.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Result alias whose failure is an [`ErrorNode`].
pub type NodeResult<T> = Result<T, ErrorNode>;
