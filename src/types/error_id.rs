use core::fmt;
#[cfg(not(target_has_atomic = "64"))]
use core::sync::atomic::AtomicUsize as AtomicCounter;
#[cfg(target_has_atomic = "64")]
use core::sync::atomic::AtomicU64 as AtomicCounter;
use core::sync::atomic::Ordering;
#[cfg(feature = "serde")]
use serde::Serialize;

// Targets without 64-bit atomics fall back to a `usize` counter, which wraps
// after `usize::MAX` nodes.
static NEXT_ID: AtomicCounter = AtomicCounter::new(1);

/// Opaque identity token stamped on every [`ErrorNode`](crate::ErrorNode) at construction.
///
/// Tokens come from a process-wide 64-bit counter and are never reissued.
/// Tokens are unique for the lifetime of the process. Cloning a node copies its
/// token, so clones stay the same error; nodes built separately never share one,
/// even when their messages are equal.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorId(u64);

impl ErrorId {
    /// Mints a token no other node has been given.
    #[inline]
    #[allow(clippy::unnecessary_cast)]
    pub(crate) fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed) as u64)
    }

    /// Raw numeric value, for logs and diagnostics only.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
