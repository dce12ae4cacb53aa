//! Declarative macros for building chains.
//!
//! - [`macro@crate::sentinel`] - Declares a process-wide sentinel error, built once on
//!   first use and compared by identity afterwards.
//! - [`macro@crate::wrap`] - Wraps any [`IntoErrorNode`](crate::IntoErrorNode) value, with
//!   an optional `format!`-style label.
//!
//! # Examples
//!
//! ```
//! use error_chainlink::{sentinel, wrap};
//!
//! sentinel!(static NOT_FOUND = "not found");
//!
//! let err = wrap!(NOT_FOUND.clone(), "looking up user {}", 42);
//! assert!(err.is(&NOT_FOUND));
//! assert_eq!(err.to_string(), "looking up user 42: not found");
//! ```

/// Declares a sentinel error as a lazily-initialized static.
///
/// The sentinel is constructed on first access and never mutated afterwards, so
/// it can be read from any thread. Wrap a clone of it; clones keep its identity.
///
/// # Examples
///
/// ```
/// use error_chainlink::{sentinel, ErrorKind};
///
/// sentinel!(
///     /// Raised when the peer hangs up.
///     pub static CLOSED = "connection closed"
/// );
///
/// assert_eq!(CLOSED.kind(), ErrorKind::Sentinel);
/// assert_eq!(CLOSED.id(), CLOSED.clone().id());
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! sentinel {
    ($(#[$attr:meta])* $vis:vis static $name:ident = $text:expr $(;)?) => {
        $(#[$attr])*
        $vis static $name: $crate::__private::LazyLock<$crate::ErrorNode> =
            $crate::__private::LazyLock::new(|| $crate::ErrorNode::sentinel($text));
    };
}

/// Wraps an error once, optionally labelling the wrapper.
///
/// - `wrap!(err)` - unlabeled wrapper, displays like `err`
/// - `wrap!(err, "fmt", args..)` - wrapper displays as `"{label}: {err}"`
///
/// # Examples
///
/// ```
/// use error_chainlink::{wrap, ErrorKind, TypedKind};
///
/// let err = wrap!(TypedKind::InvalidCharacter);
/// assert_eq!(err.kind(), ErrorKind::Wrapped);
/// assert_eq!(err.to_string(), "INVALID CHARACTER");
///
/// let err = wrap!(err, "column {}", 7);
/// assert_eq!(err.to_string(), "column 7: INVALID CHARACTER");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr $(,)?) => {
        $crate::traits::IntoErrorNode::into_error_node($err).wrap()
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::traits::IntoErrorNode::into_error_node($err)
            .wrap_with($crate::__private::format!($($arg)+))
    };
}
