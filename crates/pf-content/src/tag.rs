//! Element tag kinds.

use std::fmt;

/// Semantic kind of an element node.
///
/// Recognized tag names map to dedicated variants. Anything else, including a
/// missing tag, is kept as [`ElementTag::Other`] with the original name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementTag {
    /// `h1`..`h6`. The level is always in `1..=6`.
    Heading(u8),
    Paragraph,
    Link,
    Strong,
    Emphasis,
    Code,
    Pre,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    LineBreak,
    HorizontalRule,
    Image,
    /// Highlight span emitted by syntax highlighters.
    Span,
    Other(String),
}

impl ElementTag {
    /// Parse a tag name.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "a" => Self::Link,
            "strong" => Self::Strong,
            "em" => Self::Emphasis,
            "code" => Self::Code,
            "pre" => Self::Pre,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "li" => Self::ListItem,
            "blockquote" => Self::Blockquote,
            "br" => Self::LineBreak,
            "hr" => Self::HorizontalRule,
            "img" => Self::Image,
            "span" => Self::Span,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Tag name as it appears in the source tree.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::Paragraph => "p",
            Self::Link => "a",
            Self::Strong => "strong",
            Self::Emphasis => "em",
            Self::Code => "code",
            Self::Pre => "pre",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::ListItem => "li",
            Self::Blockquote => "blockquote",
            Self::LineBreak => "br",
            Self::HorizontalRule => "hr",
            Self::Image => "img",
            Self::Span => "span",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
