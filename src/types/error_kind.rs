use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of error kinds. Every [`ErrorNode`](crate::ErrorNode) carries exactly one.
///
/// Kind inspection ([`ErrorNode::find_kind`](crate::ErrorNode::find_kind)) switches on
/// this tag; no runtime type reflection is involved.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input contained a character the consumer cannot accept.
    InvalidCharacter,
    /// Input ended before the consumer was done with it.
    EndOfStream,
    /// Named singleton compared by identity.
    Sentinel,
    /// Free-form root error with caller-supplied text.
    Message,
    /// Generic wrapper around exactly one cause.
    Wrapped,
}

impl ErrorKind {
    /// Stable variant name, used when printing a node's kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "InvalidCharacter",
            Self::EndOfStream => "EndOfStream",
            Self::Sentinel => "Sentinel",
            Self::Message => "Message",
            Self::Wrapped => "Wrapped",
        }
    }

    /// Whether nodes of this kind own a cause.
    #[inline]
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::Wrapped)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kinds whose message is fixed by the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedKind {
    /// Renders as `INVALID CHARACTER`.
    InvalidCharacter,
    /// Renders as `EOF`.
    EndOfStream,
}

impl TypedKind {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "INVALID CHARACTER",
            Self::EndOfStream => "EOF",
        }
    }
}

impl From<TypedKind> for ErrorKind {
    #[inline]
    fn from(kind: TypedKind) -> Self {
        match kind {
            TypedKind::InvalidCharacter => Self::InvalidCharacter,
            TypedKind::EndOfStream => Self::EndOfStream,
        }
    }
}
