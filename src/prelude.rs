//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_chainlink::prelude::*;
//!
//! fn parse() -> NodeResult<u32> {
//!     Err(ErrorNode::invalid_character()).wrap_err_with("parsing")
//! }
//!
//! assert!(parse().unwrap_err().find_kind(ErrorKind::InvalidCharacter).is_some());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`wrap!`], and `sentinel!` with the `std` feature
//! - **Types**: [`ErrorNode`], [`ErrorKind`], [`TypedKind`], [`ErrorId`], [`NodeResult`]
//! - **Traits**: [`ResultExt`], [`IntoErrorNode`]

pub use crate::wrap;
#[cfg(feature = "std")]
pub use crate::sentinel;

pub use crate::types::{ErrorId, ErrorKind, ErrorNode, NodeResult, TypedKind};

pub use crate::traits::{IntoErrorNode, ResultExt};
