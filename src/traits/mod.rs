//! Traits for moving errors into chains.
//!
//! - [`IntoErrorNode`]: Conversion of kinds, messages and nodes into [`ErrorNode`](crate::ErrorNode)
//! - [`ResultExt`]: Wrapping the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use error_chainlink::traits::ResultExt;
//!
//! let result: Result<i32, &str> = Err("socket closed");
//! let err = result.wrap_err_with("sending request").unwrap_err();
//! assert_eq!(err.to_string(), "sending request: socket closed");
//! ```

pub mod into_error_node;
pub mod result_ext;

pub use into_error_node::IntoErrorNode;
pub use result_ext::ResultExt;
