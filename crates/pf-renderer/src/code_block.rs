//! Fenced and highlighted code blocks.
//!
//! A `pre` element is a highlighted code block when one of its children is a
//! `code` element (the carrier). The carrier's class names the language, and
//! its children hold text interleaved with highlight spans.
//!
//! Rendering has two paths. The primary path can fail on a class of
//! unexpected shape or on nesting past the depth limit; the fallback path
//! emits the block's plain text and cannot fail.

use pf_content::{ContentNode, ElementTag, PropError};

use crate::escape::escape_html;
use crate::renderer::TreeRenderer;
use crate::text::plain_text;

/// Class prefix marking the language of a code block.
const LANGUAGE_PREFIX: &str = "language-";

/// Reasons the primary code block path gives up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum CodeBlockError {
    #[error("{0}")]
    InvalidClass(#[from] PropError),
    #[error("code block nested deeper than {max_depth} levels")]
    TooDeep { max_depth: usize },
}

/// Render a `pre` element's children, falling back to plain text on failure.
pub(crate) fn render_code_block(
    renderer: &TreeRenderer,
    children: &[ContentNode],
    depth: usize,
    out: &mut String,
) {
    match try_render_code_block(renderer, children, depth) {
        Ok(html) => out.push_str(&html),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to render code block, using plain text");
            render_fallback(children, out);
        }
    }
}

/// Primary path. Output is buffered so a failure never leaves partial markup.
fn try_render_code_block(
    renderer: &TreeRenderer,
    children: &[ContentNode],
    depth: usize,
) -> Result<String, CodeBlockError> {
    if children.is_empty() {
        return Ok("<pre><code></code></pre>".to_owned());
    }

    let carrier = children
        .iter()
        .find(|child| child.tag() == Some(&ElementTag::Code));

    let Some(ContentNode::Element {
        props,
        children: code_children,
        ..
    }) = carrier
    else {
        let mut out = String::from("<pre>");
        renderer.write_nodes(children, depth + 1, &mut out);
        out.push_str("</pre>");
        return Ok(out);
    };

    let class = props.class()?;
    let language = class.as_deref().and_then(language_of);

    let mut out = String::with_capacity(256);
    match language {
        Some(lang) => {
            out.push_str(r#"<pre><code class="language-"#);
            out.push_str(&escape_html(lang));
            out.push_str(r#"">"#);
        }
        None => out.push_str("<pre><code>"),
    }
    render_code_content(code_children, depth + 2, renderer.options().max_depth, &mut out)?;
    out.push_str("</code></pre>");
    Ok(out)
}

fn render_fallback(children: &[ContentNode], out: &mut String) {
    out.push_str("<pre><code>");
    out.push_str(&escape_html(&plain_text(children)));
    out.push_str("</code></pre>");
}

/// Language named by the first `language-*` class token.
fn language_of(class: &str) -> Option<&str> {
    class.split_whitespace().find_map(|token| {
        token
            .strip_prefix(LANGUAGE_PREFIX)
            .filter(|lang| !lang.is_empty())
    })
}

/// Render code text and highlight spans.
///
/// Only spans keep their markup; any other element is replaced by its
/// content, so the text of the block is preserved literally. A span with no
/// children still keeps its markup (blank highlighted lines); only a childless
/// span carrying a raw value is treated as a leaf.
fn render_code_content(
    nodes: &[ContentNode],
    depth: usize,
    max_depth: usize,
    out: &mut String,
) -> Result<(), CodeBlockError> {
    if depth > max_depth {
        return Err(CodeBlockError::TooDeep { max_depth });
    }

    for node in nodes {
        match node {
            ContentNode::Text { value } => out.push_str(&escape_html(value)),
            ContentNode::Element {
                tag: ElementTag::Span,
                props,
                children,
                value,
            } if !children.is_empty() || value.is_none() => {
                match props.class()?.filter(|c| !c.is_empty()) {
                    Some(class) => {
                        out.push_str(r#"<span class=""#);
                        out.push_str(&escape_html(&class));
                        out.push_str(r#"">"#);
                        render_code_content(children, depth + 1, max_depth, out)?;
                        out.push_str("</span>");
                    }
                    None => render_code_content(children, depth + 1, max_depth, out)?,
                }
            }
            ContentNode::Element { children, .. } if !children.is_empty() => {
                render_code_content(children, depth + 1, max_depth, out)?;
            }
            ContentNode::Element { value, .. } => {
                out.push_str(&escape_html(value.as_deref().unwrap_or_default()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use pf_content::Props;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::options::RenderOptions;

    fn code(class: Option<&str>, children: Vec<ContentNode>) -> ContentNode {
        let props = match class {
            Some(class) => Props::new().with("class", class),
            None => Props::new(),
        };
        ContentNode::element_with_props(ElementTag::Code, props, children)
    }

    fn span(class: &str, children: Vec<ContentNode>) -> ContentNode {
        ContentNode::element_with_props(
            ElementTag::Span,
            Props::new().with("class", class),
            children,
        )
    }

    fn render(children: &[ContentNode]) -> String {
        let mut out = String::new();
        render_code_block(&TreeRenderer::new(), children, 0, &mut out);
        out
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(render(&[]), "<pre><code></code></pre>");
    }

    #[test]
    fn test_language_class() {
        let children = [code(Some("language-js"), vec![ContentNode::text("let x=1")])];
        assert_eq!(
            render(&children),
            r#"<pre><code class="language-js">let x=1</code></pre>"#
        );
    }

    #[test]
    fn test_class_without_prefix_omitted() {
        let children = [code(Some("hljs"), vec![ContentNode::text("x")])];
        assert_eq!(render(&children), "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_no_class() {
        let children = [code(None, vec![ContentNode::text("x")])];
        assert_eq!(render(&children), "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_language_escaped() {
        let children = [code(Some(r#"language-a"b"#), vec![])];
        assert_eq!(
            render(&children),
            r#"<pre><code class="language-a&quot;b"></code></pre>"#
        );
    }

    #[test]
    fn test_language_of() {
        assert_eq!(language_of("language-rust"), Some("rust"));
        assert_eq!(language_of("hljs language-py line-numbers"), Some("py"));
        assert_eq!(language_of("language-"), None);
        assert_eq!(language_of("lang-rust"), None);
        assert_eq!(language_of(""), None);
    }

    #[test]
    fn test_highlight_span() {
        let children = [code(
            Some("language-js"),
            vec![
                span("token keyword", vec![ContentNode::text("let")]),
                ContentNode::text(" x"),
            ],
        )];
        assert_eq!(
            render(&children),
            r#"<pre><code class="language-js"><span class="token keyword">let</span> x</code></pre>"#
        );
    }

    #[test]
    fn test_nested_spans() {
        let children = [code(
            None,
            vec![span(
                "line",
                vec![span("token string", vec![ContentNode::text("'a'")])],
            )],
        )];
        assert_eq!(
            render(&children),
            r#"<pre><code><span class="line"><span class="token string">&#39;a&#39;</span></span></code></pre>"#
        );
    }

    #[test]
    fn test_span_without_class_unwrapped() {
        let children = [code(
            None,
            vec![ContentNode::element(
                ElementTag::Span,
                vec![ContentNode::text("a<b")],
            )],
        )];
        assert_eq!(render(&children), "<pre><code>a&lt;b</code></pre>");
    }

    #[test]
    fn test_empty_classed_span_kept() {
        let children = [code(
            Some("language-js"),
            vec![span("line", vec![]), ContentNode::text("\n")],
        )];
        assert_eq!(
            render(&children),
            "<pre><code class=\"language-js\"><span class=\"line\"></span>\n</code></pre>"
        );
    }

    #[test]
    fn test_empty_unclassed_span_renders_nothing() {
        let children = [code(
            None,
            vec![ContentNode::element(ElementTag::Span, vec![])],
        )];
        assert_eq!(render(&children), "<pre><code></code></pre>");
    }

    #[test]
    fn test_childless_span_value_is_leaf() {
        let leaf = ContentNode::Element {
            tag: ElementTag::Span,
            props: Props::new().with("class", "k"),
            children: Vec::new(),
            value: Some("v&".to_owned()),
        };
        let children = [code(None, vec![leaf])];
        assert_eq!(render(&children), "<pre><code>v&amp;</code></pre>");
    }

    #[test]
    fn test_span_class_list() {
        let span = ContentNode::element_with_props(
            ElementTag::Span,
            Props::new().with("class", json!(["token", "number"])),
            vec![ContentNode::text("1")],
        );
        let children = [code(None, vec![span])];
        assert_eq!(
            render(&children),
            r#"<pre><code><span class="token number">1</span></code></pre>"#
        );
    }

    #[test]
    fn test_other_elements_pass_through() {
        let children = [code(
            None,
            vec![ContentNode::element(
                ElementTag::Strong,
                vec![ContentNode::text("bold")],
            )],
        )];
        assert_eq!(render(&children), "<pre><code>bold</code></pre>");
    }

    #[test]
    fn test_childless_element_value() {
        let leaf = ContentNode::Element {
            tag: ElementTag::Other("x".to_owned()),
            props: Props::new(),
            children: Vec::new(),
            value: Some("<v>".to_owned()),
        };
        let children = [code(None, vec![leaf])];
        assert_eq!(render(&children), "<pre><code>&lt;v&gt;</code></pre>");
    }

    #[test]
    fn test_first_carrier_wins() {
        let children = [
            ContentNode::text("\n"),
            code(Some("language-a"), vec![ContentNode::text("one")]),
            code(Some("language-b"), vec![ContentNode::text("two")]),
        ];
        assert_eq!(
            render(&children),
            r#"<pre><code class="language-a">one</code></pre>"#
        );
    }

    #[test]
    fn test_without_carrier() {
        let children = [
            ContentNode::text("plain "),
            ContentNode::element(ElementTag::Emphasis, vec![ContentNode::text("pre")]),
        ];
        assert_eq!(render(&children), "<pre>plain <em>pre</em></pre>");
    }

    #[test]
    fn test_invalid_class_falls_back() {
        let carrier = ContentNode::element_with_props(
            ElementTag::Code,
            Props::new().with("class", 5),
            vec![span("k", vec![ContentNode::text("a < b")])],
        );
        assert_eq!(render(&[carrier]), "<pre><code>a &lt; b</code></pre>");
    }

    #[test]
    fn test_invalid_span_class_falls_back() {
        let bad_span = ContentNode::element_with_props(
            ElementTag::Span,
            Props::new().with("class", json!({"k": 1})),
            vec![ContentNode::text("x")],
        );
        let children = [code(
            Some("language-rs"),
            vec![ContentNode::text("let "), bad_span],
        )];
        assert_eq!(render(&children), "<pre><code>let x</code></pre>");
    }

    #[test]
    fn test_too_deep_falls_back() {
        let mut inner = ContentNode::text("deep & text");
        for _ in 0..8 {
            inner = span("s", vec![inner]);
        }
        let children = [code(Some("language-txt"), vec![inner])];

        let renderer = TreeRenderer::with_options(RenderOptions { max_depth: 4 });
        let mut out = String::new();
        render_code_block(&renderer, &children, 0, &mut out);
        assert_eq!(out, "<pre><code>deep &amp; text</code></pre>");
    }

    #[test]
    fn test_within_depth_limit() {
        let children = [code(None, vec![span("s", vec![ContentNode::text("x")])])];
        let renderer = TreeRenderer::with_options(RenderOptions { max_depth: 3 });
        let mut out = String::new();
        render_code_block(&renderer, &children, 0, &mut out);
        assert_eq!(out, r#"<pre><code><span class="s">x</span></code></pre>"#);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn render_with_logs(children: &[ContentNode]) -> (String, String) {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let html = tracing::subscriber::with_default(subscriber, || render(children));
        (html, logs.contents())
    }

    #[test]
    fn test_fallback_logs_single_warning() {
        let carrier = ContentNode::element_with_props(
            ElementTag::Code,
            Props::new().with("class", true),
            vec![ContentNode::text("x")],
        );
        let (html, logs) = render_with_logs(&[carrier]);

        assert_eq!(html, "<pre><code>x</code></pre>");
        assert_eq!(logs.matches("WARN").count(), 1);
        assert!(logs.contains("Failed to render code block"));
        assert!(logs.contains("property `class` has unsupported boolean value"));
    }

    #[test]
    fn test_primary_path_logs_nothing() {
        let children = [code(Some("language-js"), vec![ContentNode::text("x")])];
        let (html, logs) = render_with_logs(&children);

        assert_eq!(html, r#"<pre><code class="language-js">x</code></pre>"#);
        assert!(logs.is_empty());
    }
}
