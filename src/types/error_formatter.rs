//! Error chain formatting utilities.

use crate::types::ErrorNode;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

/// Trait for customizing error chain formatting.
pub trait ErrorFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        chain
            .map(|item| self.format_item(item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based chain formatter.
///
/// # Examples
///
/// ```
/// use error_chainlink::{ErrorFormatConfig, ErrorNode};
///
/// let err = ErrorNode::end_of_stream().wrap_with("reading body");
/// let rendered = err.fmt().with_config(ErrorFormatConfig::with_kinds()).to_string();
///
/// assert_eq!(rendered, "Wrapped(reading body) -> EndOfStream(EOF)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub link_prefix: Option<String>,
    pub link_suffix: Option<String>,
    pub root_prefix: Option<String>,
    pub root_suffix: Option<String>,
    pub multiline: bool,
    pub indent: String,
    /// Render each link as `Kind(text)`; unlabeled wrappers then appear as `Wrapped`.
    pub show_kind: bool,
    pub cascade: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            link_prefix: None,
            link_suffix: None,
            root_prefix: None,
            root_suffix: None,
            multiline: false,
            indent: "  ".into(),
            show_kind: false,
            cascade: false,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            link_prefix: Some("├─ ".into()),
            root_prefix: Some("└─ ".into()),
            multiline: true,
            cascade: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), multiline: true, cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn with_kinds() -> Self {
        Self { show_kind: true, ..Default::default() }
    }
}

impl ErrorFormatConfig {
    /// Renders the final item of a chain: root affixes, falling back to the
    /// link affixes when unset.
    pub fn format_root(&self, item: &dyn Display) -> String {
        affixed(self.root_prefix(), item, self.root_suffix())
    }

    fn root_prefix(&self) -> Option<&str> {
        self.root_prefix.as_deref().or(self.link_prefix.as_deref())
    }

    fn root_suffix(&self) -> Option<&str> {
        self.root_suffix.as_deref().or(self.link_suffix.as_deref())
    }

    fn layout(&self) -> Layout {
        match (self.multiline && self.link_prefix.is_some(), self.cascade) {
            (true, _) => Layout::Tree,
            (false, true) => Layout::Cascade,
            (false, false) => Layout::Flat,
        }
    }
}

/// Placement of successive items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Items joined by the separator.
    Flat,
    /// Item `i` indented `i` times after the separator.
    Cascade,
    /// `┌ ` head line, then one prefixed branch per item.
    Tree,
}

const TREE_HEAD: &str = "┌ ";

fn affixed(prefix: Option<&str>, item: &dyn Display, suffix: Option<&str>) -> String {
    let mut out = String::from(prefix.unwrap_or(""));
    // Writing into a String cannot fail.
    let _ = write!(out, "{}", item);
    out.push_str(suffix.unwrap_or(""));
    out
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, item: &dyn Display) -> String {
        affixed(self.link_prefix.as_deref(), item, self.link_suffix.as_deref())
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        let items: Vec<_> = chain.collect();
        let last = items.len().saturating_sub(1);
        let layout = self.layout();
        let mut out = String::with_capacity(items.len() * 32);

        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
                if layout == Layout::Cascade {
                    for _ in 0..i {
                        out.push_str(&self.indent);
                    }
                }
            }
            let rendered = if layout == Layout::Tree && i == 0 {
                let suffix = if last == 0 { self.root_suffix() } else { self.link_suffix.as_deref() };
                affixed(Some(TREE_HEAD), item, suffix)
            } else if i == last {
                self.format_root(item)
            } else {
                self.format_item(item)
            };
            out.push_str(&rendered);
        }
        out
    }
}

/// The text one link contributes to a rendered chain.
struct Segment<'a> {
    link: &'a ErrorNode,
    show_kind: bool,
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.show_kind, self.link.own_message()) {
            (true, Some(text)) => write!(f, "{}({})", self.link.kind(), text),
            (true, None) => Display::fmt(&self.link.kind(), f),
            (false, Some(text)) => f.write_str(text),
            (false, None) => Ok(()),
        }
    }
}

/// Builder for customizing error chain output.
///
/// Links are rendered outermost first unless [`root_first`](Self::root_first)
/// is set. Wrappers without a label contribute nothing unless kinds are shown.
pub struct ChainFormatBuilder<'a> {
    pub(crate) node: &'a ErrorNode,
    pub(crate) config: ErrorFormatConfig,
    pub(crate) root_first: bool,
}

impl<'a> ChainFormatBuilder<'a> {
    pub fn new(node: &'a ErrorNode) -> Self {
        Self { node, config: ErrorFormatConfig::default(), root_first: false }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn root_first(mut self, root_first: bool) -> Self {
        self.root_first = root_first;
        self
    }

    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = ErrorFormatConfig::cascaded();
        self
    }
}

impl Display for ChainFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show_kind = self.config.show_kind;
        let mut segments: Vec<Segment<'_>> = self
            .node
            .chain()
            .filter(|link| show_kind || link.own_message().is_some())
            .map(|link| Segment { link, show_kind })
            .collect();
        if self.root_first {
            segments.reverse();
        }

        let items = segments.iter().map(|segment| segment as &dyn Display);
        f.write_str(&self.config.format_chain(items))
    }
}
