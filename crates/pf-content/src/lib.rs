//! Parsed document tree and post records.
//!
//! This crate defines the typed input of the feed renderer:
//!
//! - [`ContentNode`]: a text or element node of a parsed post body
//! - [`ElementTag`]: the closed set of element kinds, plus [`ElementTag::Other`]
//! - [`Props`]: element attributes
//! - [`Post`]: a post record with an optional [`Body`]
//!
//! Untyped JSON from the content-query layer is converted with
//! [`ContentNode::from_value`] and [`Body::from_value`] (or through serde).
//! Conversion never fails; malformed shapes degrade to empty values.
//!
//! # Example
//!
//! ```
//! use pf_content::{Body, ContentNode, ElementTag};
//! use serde_json::json;
//!
//! let body = Body::from_value(&json!({
//!     "type": "root",
//!     "children": [
//!         {"type": "element", "tag": "p", "children": [{"type": "text", "value": "hi"}]}
//!     ]
//! }));
//!
//! assert_eq!(
//!     body.children,
//!     vec![ContentNode::element(ElementTag::Paragraph, vec![ContentNode::text("hi")])]
//! );
//! ```

mod node;
mod post;
mod props;
mod tag;

pub use node::{Body, ContentNode};
pub use post::{Post, PostError, UNTITLED};
pub use props::{PropError, Props};
pub use tag::ElementTag;
