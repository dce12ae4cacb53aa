use crate::types::ErrorNode;
use core::iter::FusedIterator;

/// Iterator over an error chain, outermost node first, ending at the root cause.
///
/// Created by [`ErrorNode::chain`].
///
/// # Examples
///
/// ```
/// use error_chainlink::{ErrorKind, ErrorNode};
///
/// let err = ErrorNode::invalid_character().wrap_with("reading").wrap();
/// let kinds: Vec<ErrorKind> = err.chain().map(|link| link.kind()).collect();
///
/// assert_eq!(
///     kinds,
///     [ErrorKind::Wrapped, ErrorKind::Wrapped, ErrorKind::InvalidCharacter]
/// );
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a ErrorNode>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(head: &'a ErrorNode) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorNode;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.unwrap();
        Some(link)
    }
}

impl FusedIterator for Chain<'_> {}
