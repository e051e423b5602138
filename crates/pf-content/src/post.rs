//! Post records as returned by the content-query layer.

use serde::{Deserialize, Deserializer};

use crate::node::Body;

/// Title used for posts without one.
pub const UNTITLED: &str = "Untitled";

/// Error decoding post records.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// JSON decoding error.
    #[error("invalid post JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A published (or draft) blog post.
///
/// Every field is optional on the wire; missing values take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Content path, e.g. `/hello-world`.
    #[serde(rename = "_path", deserialize_with = "null_as_default")]
    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    /// Publication date as provided by the front matter.
    pub date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "_draft", deserialize_with = "null_as_default")]
    pub draft: bool,
    /// Parsed document body.
    pub body: Option<Body>,
}

impl Post {
    /// Decode a single post.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Json`] if the input is not valid JSON or not an object.
    pub fn from_json(json: &str) -> Result<Self, PostError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a list of posts.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Json`] if the input is not a JSON array of objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, PostError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Title, or [`UNTITLED`] when missing or empty.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNTITLED)
    }

    /// Description, falling back to the excerpt, then to an empty string.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.description
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.excerpt.as_deref())
            .unwrap_or_default()
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
