//! Tracing integration for error chains.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-chainlink = { version = "0.1", features = ["tracing"] }
//! ```

use alloc::format;
use tracing::Span;

use crate::traits::IntoErrorNode;
use crate::types::ErrorNode;

/// Emits one `debug` event per link, outermost first.
///
/// Each event carries the link's depth from the top, its kind, identity token and
/// the text it contributes on its own.
///
/// # Example
///
/// ```rust
/// use error_chainlink::tracing_ext::trace_chain;
/// use error_chainlink::ErrorNode;
///
/// let err = ErrorNode::end_of_stream().wrap_with("reading frame");
/// trace_chain(&err);
/// ```
pub fn trace_chain(node: &ErrorNode) {
    for (depth, link) in node.chain().enumerate() {
        tracing::debug!(
            depth,
            kind = link.kind().name(),
            id = link.id().get(),
            text = link.own_message().unwrap_or(""),
            "error chain link"
        );
    }
}

/// Wraps an error with a label naming the current span.
///
/// # Example
///
/// ```rust
/// use error_chainlink::tracing_ext::wrap_in_span;
/// use error_chainlink::ErrorNode;
///
/// let err = wrap_in_span(ErrorNode::invalid_character());
/// assert!(err.to_string().contains("span"));
/// ```
pub fn wrap_in_span(error: impl IntoErrorNode) -> ErrorNode {
    label_for(&Span::current(), error.into_error_node())
}

/// Extension trait for `Result` types to wrap errors with span context.
pub trait ResultSpanExt<T> {
    /// Wraps the error with a label naming the current span.
    fn wrap_in_current_span(self) -> Result<T, ErrorNode>;

    /// Wraps the error with a label naming `span`.
    fn wrap_in_span(self, span: &Span) -> Result<T, ErrorNode>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: IntoErrorNode,
{
    fn wrap_in_current_span(self) -> Result<T, ErrorNode> {
        self.wrap_in_span(&Span::current())
    }

    fn wrap_in_span(self, span: &Span) -> Result<T, ErrorNode> {
        self.map_err(|e| label_for(span, e.into_error_node()))
    }
}

/// Wraps `node` with the span's name; disabled spans are labelled `unknown`.
fn label_for(span: &Span, node: ErrorNode) -> ErrorNode {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    node.wrap_with(format!("in span '{}'", name))
}
