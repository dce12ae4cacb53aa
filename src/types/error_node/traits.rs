use super::ErrorNode;
use crate::types::TypedKind;
use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};

impl Display for ErrorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.fmt().cascaded(), f);
        }
        for link in self.chain() {
            match (&link.text, link.cause.is_some()) {
                (Some(label), true) => write!(f, "{}: ", label)?,
                (Some(text), false) => f.write_str(text)?,
                (None, _) => {}
            }
        }
        Ok(())
    }
}

impl Clone for ErrorNode {
    fn clone(&self) -> Self {
        let links = self.links();
        let mut node = detached(self.root_cause(), None);
        for link in links.iter().rev().skip(1) {
            node = detached(link, Some(Box::new(node)));
        }
        node
    }
}

/// Copies one link's own fields on top of an already rebuilt cause.
#[inline]
fn detached(link: &ErrorNode, cause: Option<Box<ErrorNode>>) -> ErrorNode {
    ErrorNode { id: link.id, kind: link.kind, text: link.text.clone(), cause, matcher: link.matcher }
}

// Causes are released one at a time so deep chains never recurse on drop.
impl Drop for ErrorNode {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(mut node) = next {
            next = node.cause.take();
        }
    }
}

impl Debug for ErrorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorNode")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("text", &self.text)
            .field("causes", &Causes(self))
            .field("matcher", &self.matcher.is_some())
            .finish()
    }
}

/// Flat listing of every link below the node.
struct Causes<'a>(&'a ErrorNode);

impl Debug for Causes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.chain().skip(1).map(|link| (link.id, link.kind, &link.text)))
            .finish()
    }
}

impl PartialEq for ErrorNode {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for ErrorNode {}

impl Hash for ErrorNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::error::Error for ErrorNode {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl From<TypedKind> for ErrorNode {
    #[inline]
    fn from(kind: TypedKind) -> Self {
        Self::typed(kind)
    }
}
