// SPDX-License-Identifier: MPL-2.0
//! Translation bundles and their JSON payload format.
//!
//! A bundle is the complete key → string mapping for one language. Payloads
//! may nest objects; nested keys are flattened with dots, so
//!
//! ```json
//! { "hero": { "title": "Welcome" } }
//! ```
//!
//! is looked up as `hero.title`. Any value that is neither a string nor an
//! object rejects the whole payload: a bundle is either complete or absent.

use crate::error::FetchError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationBundle {
    messages: BTreeMap<String, String>,
}

impl TranslationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON payload into a bundle.
    pub fn from_json(payload: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(payload)?;
        let Value::Object(root) = value else {
            return Err(FetchError::Malformed(
                "top-level value must be an object".to_string(),
            ));
        };

        let mut messages = BTreeMap::new();
        flatten_into(&mut messages, None, root)?;
        Ok(Self { messages })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationBundle
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_into(
    out: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    object: Map<String, Value>,
) -> Result<(), FetchError> {
    for (key, value) in object {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            Value::String(message) => {
                out.insert(full_key, message);
            }
            Value::Object(nested) => flatten_into(out, Some(&full_key), nested)?,
            other => {
                return Err(FetchError::Malformed(format!(
                    "key `{full_key}` holds a {} instead of a string",
                    value_kind(&other)
                )));
            }
        }
    }
    Ok(())
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
