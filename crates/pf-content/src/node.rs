//! Typed document tree.
//!
//! The content-query layer hands over bodies as untyped JSON. Conversion into
//! [`ContentNode`] happens once, here, and absorbs every malformed shape so the
//! renderer can work on well-typed input:
//!
//! - non-object values are not nodes and are dropped
//! - `"type": "text"` objects become [`ContentNode::Text`]
//! - every other object becomes [`ContentNode::Element`]; a missing or
//!   non-string `tag` becomes an empty [`ElementTag::Other`]
//! - non-array `children` and non-object `props` are treated as empty

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::props::Props;
use crate::tag::ElementTag;

/// One node of a parsed document.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentNode {
    /// Literal text.
    Text {
        /// Raw, unescaped value.
        value: String,
    },
    /// Element with optional attributes and ordered children.
    Element {
        tag: ElementTag,
        props: Props,
        children: Vec<ContentNode>,
        /// Raw value carried by some leaf elements (e.g. inline `code`).
        value: Option<String>,
    },
}

impl ContentNode {
    /// Text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Element node without properties.
    #[must_use]
    pub fn element(tag: ElementTag, children: Vec<ContentNode>) -> Self {
        Self::Element {
            tag,
            props: Props::new(),
            children,
            value: None,
        }
    }

    /// Element node with properties.
    #[must_use]
    pub fn element_with_props(tag: ElementTag, props: Props, children: Vec<ContentNode>) -> Self {
        Self::Element {
            tag,
            props,
            children,
            value: None,
        }
    }

    /// Convert an untyped node. Returns `None` for values that are not objects.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        if obj.get("type").and_then(Value::as_str) == Some("text") {
            return Some(Self::text(string_field(obj, "value").unwrap_or_default()));
        }

        let tag = obj
            .get("tag")
            .and_then(Value::as_str)
            .map_or_else(|| ElementTag::Other(String::new()), ElementTag::parse);

        let props = obj
            .get("props")
            .and_then(Value::as_object)
            .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();

        Some(Self::Element {
            tag,
            props,
            children: children_of(obj),
            value: string_field(obj, "value"),
        })
    }

    /// Tag of an element node, `None` for text.
    #[must_use]
    pub fn tag(&self) -> Option<&ElementTag> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            Self::Text { .. } => None,
        }
    }

    /// Children of an element node; text nodes have none.
    #[must_use]
    pub fn children(&self) -> &[ContentNode] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text { .. } => &[],
        }
    }
}

/// Root of a post document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Body {
    pub children: Vec<ContentNode>,
}

impl Body {
    #[must_use]
    pub fn new(children: Vec<ContentNode>) -> Self {
        Self { children }
    }

    /// Convert an untyped body. Anything without a `children` array is empty.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let children = value.as_object().map(children_of).unwrap_or_default();
        Self { children }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

fn children_of(obj: &Map<String, Value>) -> Vec<ContentNode> {
    obj.get("children")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(ContentNode::from_value).collect())
        .unwrap_or_default()
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}
