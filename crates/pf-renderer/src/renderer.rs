//! Content tree to HTML renderer.

use pf_content::{Body, ContentNode, ElementTag, Post, Props};
use serde_json::Value;

use crate::code_block::render_code_block;
use crate::escape::escape_html;
use crate::options::RenderOptions;

/// Renders [`ContentNode`] trees to HTML.
///
/// Rendering is total: every input produces a string. Unknown elements are
/// unwrapped to their children, so only a fixed set of tags ever reaches the
/// output. The renderer holds no mutable state and can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a post body. An absent body renders as an empty string.
    #[must_use]
    pub fn render_body(&self, body: Option<&Body>) -> String {
        match body {
            Some(body) => self.render_nodes(&body.children),
            None => String::new(),
        }
    }

    /// Render an untyped body straight from the content-query layer.
    #[must_use]
    pub fn render_value(&self, value: &Value) -> String {
        self.render_nodes(&Body::from_value(value).children)
    }

    /// Render a node sequence, concatenated in order.
    #[must_use]
    pub fn render_nodes(&self, nodes: &[ContentNode]) -> String {
        let mut out = String::with_capacity(4096);
        self.write_nodes(nodes, 0, &mut out);
        out
    }

    /// Render a single node.
    #[must_use]
    pub fn render_node(&self, node: &ContentNode) -> String {
        let mut out = String::new();
        self.write_node(node, 0, &mut out);
        out
    }

    /// Content for a feed item's `content:encoded` field.
    ///
    /// Posts with a body get the rendered body. Posts without one fall back
    /// to their description.
    #[must_use]
    pub fn feed_item_content(&self, post: &Post) -> String {
        match &post.body {
            Some(body) => self.render_body(Some(body)),
            None => post.description.clone().unwrap_or_default(),
        }
    }

    pub(crate) fn write_nodes(&self, nodes: &[ContentNode], depth: usize, out: &mut String) {
        for node in nodes {
            self.write_node(node, depth, out);
        }
    }

    fn write_node(&self, node: &ContentNode, depth: usize, out: &mut String) {
        if depth > self.options.max_depth {
            tracing::debug!(
                max_depth = self.options.max_depth,
                "Content nested too deep, dropping subtree"
            );
            return;
        }

        let (tag, props, children, value) = match node {
            ContentNode::Text { value } => {
                out.push_str(&escape_html(value));
                return;
            }
            ContentNode::Element {
                tag,
                props,
                children,
                value,
            } => (tag, props, children.as_slice(), value.as_deref()),
        };

        match tag {
            ElementTag::Heading(_) => self.wrap(tag.name(), children, depth, out),
            ElementTag::Paragraph => self.wrap("p", children, depth, out),
            ElementTag::Link => {
                out.push_str("<a");
                let href = props.get_str("href").filter(|h| !h.is_empty());
                push_attr("href", href.unwrap_or("#"), out);
                out.push('>');
                self.write_nodes(children, depth + 1, out);
                out.push_str("</a>");
            }
            ElementTag::Strong => self.wrap("strong", children, depth, out),
            ElementTag::Emphasis => self.wrap("em", children, depth, out),
            ElementTag::Code => {
                if children.is_empty() {
                    out.push_str("<code>");
                    out.push_str(&escape_html(value.unwrap_or_default()));
                    out.push_str("</code>");
                } else {
                    self.wrap("code", children, depth, out);
                }
            }
            ElementTag::Pre => render_code_block(self, children, depth, out),
            ElementTag::UnorderedList => self.wrap("ul", children, depth, out),
            ElementTag::OrderedList => self.wrap("ol", children, depth, out),
            ElementTag::ListItem => self.wrap("li", children, depth, out),
            ElementTag::Blockquote => self.wrap("blockquote", children, depth, out),
            ElementTag::LineBreak => out.push_str("<br/>"),
            ElementTag::HorizontalRule => out.push_str("<hr/>"),
            ElementTag::Image => image(props, out),
            // Unrecognized wrappers are dropped, their content is kept
            ElementTag::Span | ElementTag::Other(_) => self.write_nodes(children, depth + 1, out),
        }
    }

    fn wrap(&self, tag: &str, children: &[ContentNode], depth: usize, out: &mut String) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        self.write_nodes(children, depth + 1, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn image(props: &Props, out: &mut String) {
    out.push_str("<img");
    push_attr("src", props.get_str("src").unwrap_or_default(), out);
    push_attr("alt", props.get_str("alt").unwrap_or_default(), out);
    out.push_str("/>");
}

fn push_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str(r#"=""#);
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Render a post body with default options.
#[must_use]
pub fn render_body(body: Option<&Body>) -> String {
    TreeRenderer::new().render_body(body)
}

/// Render an untyped body with default options.
#[must_use]
pub fn render_value(value: &Value) -> String {
    TreeRenderer::new().render_value(value)
}

/// Render a node sequence with default options.
#[must_use]
pub fn render_nodes(nodes: &[ContentNode]) -> String {
    TreeRenderer::new().render_nodes(nodes)
}

/// Render a single node with default options.
#[must_use]
pub fn render_node(node: &ContentNode) -> String {
    TreeRenderer::new().render_node(node)
}

/// Feed item content with default options.
#[must_use]
pub fn feed_item_content(post: &Post) -> String {
    TreeRenderer::new().feed_item_content(post)
}
