use super::ErrorNode;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

impl ErrorNode {
    /// Rebuilds any `core::error::Error` source chain as error nodes.
    ///
    /// The innermost source becomes a `Message` root; every outer error becomes a
    /// `Wrapped` node labelled with its own display text. Each captured node gets a
    /// fresh identity.
    ///
    /// Errors whose `Display` already repeats their source will show that text
    /// twice in the captured node's display.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_chainlink::{ErrorKind, ErrorNode};
    ///
    /// let io = std::io::Error::other("disk unplugged");
    /// let captured = ErrorNode::capture(&io);
    ///
    /// assert_eq!(captured.kind(), ErrorKind::Message);
    /// assert_eq!(captured.to_string(), "disk unplugged");
    /// ```
    pub fn capture(error: &dyn core::error::Error) -> Self {
        let mut texts: Vec<String> = Vec::new();
        texts.push(error.to_string());
        let mut source = error.source();
        while let Some(next) = source {
            texts.push(next.to_string());
            source = next.source();
        }

        let root = texts.pop().unwrap_or_default();
        texts.into_iter().rev().fold(Self::message(root), |node, label| node.wrap_with(label))
    }
}
