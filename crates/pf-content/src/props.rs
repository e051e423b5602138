//! Element property maps.

use std::collections::BTreeMap;

use serde_json::Value;

/// Error returned when a property has a shape the renderer cannot use.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    /// Property value is neither a string nor a list of strings.
    #[error("property `{key}` has unsupported {kind} value")]
    InvalidType {
        /// Property name.
        key: String,
        /// JSON kind of the offending value.
        kind: &'static str,
    },
}

/// String-keyed element attributes (`href`, `src`, `alt`, `class`, ...).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props(BTreeMap<String, Value>);

impl Props {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Property value if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Resolve the `class` property.
    ///
    /// Highlighters emit either a single string or a list of class names; a
    /// list is joined with single spaces. Absent and `null` classes are `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::InvalidType`] for numbers, booleans, objects, or
    /// lists containing anything other than strings.
    pub fn class(&self) -> Result<Option<String>, PropError> {
        const KEY: &str = "class";
        match self.0.get(KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Array(items)) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(name) => names.push(name),
                        None => {
                            return Err(PropError::InvalidType {
                                key: KEY.to_owned(),
                                kind: "array",
                            });
                        }
                    }
                }
                Ok(Some(names.join(" ")))
            }
            Some(other) => Err(PropError::InvalidType {
                key: KEY.to_owned(),
                kind: value_kind(other),
            }),
        }
    }
}

impl FromIterator<(String, Value)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
