//! Content tree to HTML renderer for feed items.
//!
//! [`TreeRenderer`] walks a parsed post body ([`pf_content::Body`]) and
//! produces escaped HTML suitable for an RSS item's `content:encoded` field.
//!
//! # Output
//!
//! Only a fixed set of tags is ever emitted: `h1`..`h6`, `p`, `a`, `strong`,
//! `em`, `code`, `pre`, `ul`, `ol`, `li`, `blockquote`, `br`, `hr`, `img` and
//! `span` (inside code blocks). Unknown elements are replaced by their
//! rendered children.
//!
//! Rendering never fails. Code blocks that cannot be rendered with their
//! highlighting fall back to plain text and log a warning.
//!
//! # Example
//!
//! ```
//! use pf_renderer::render_value;
//! use serde_json::json;
//!
//! let body = json!({
//!     "type": "root",
//!     "children": [
//!         {"type": "element", "tag": "p", "children": [{"type": "text", "value": "A & B"}]}
//!     ]
//! });
//!
//! assert_eq!(render_value(&body), "<p>A &amp; B</p>");
//! ```

mod code_block;
mod escape;
mod options;
mod renderer;
mod text;

pub use escape::escape_html;
pub use options::{DEFAULT_MAX_DEPTH, RenderOptions};
pub use renderer::{
    TreeRenderer, feed_item_content, render_body, render_node, render_nodes, render_value,
};
pub use text::plain_text;
