//! Animal record type
//!
//! Field names on the wire are camelCase (`personalityTraits`). Fields the
//! service does not interpret are kept in `extra` and written back unchanged.
//!
//! Trait elements are kept as raw JSON values: creation only requires
//! `personalityTraits` to be an array, so a stored record may carry non-string
//! elements. Those never match a trait query.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One animal entry in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    /// Identifier, unique within the collection
    pub id: String,
    /// Display name
    pub name: String,
    /// Species, e.g. "bear"
    pub species: String,
    /// Diet, e.g. "omnivore"
    pub diet: String,
    /// Ordered personality traits (normally strings)
    pub personality_traits: Vec<Value>,
    /// Any additional fields carried by the source document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Animal {
    /// Create a record with no extra fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        diet: impl Into<String>,
        personality_traits: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            diet: diet.into(),
            personality_traits: personality_traits
                .into_iter()
                .map(|t| Value::String(t.into()))
                .collect(),
            extra: Map::new(),
        }
    }

    /// Build a record from a creation candidate, stamping it with `id`.
    ///
    /// Any `id` already present in the candidate is overwritten. Every
    /// candidate accepted by [`crate::validate`] decodes; anything else is
    /// reported as a validation failure.
    pub fn from_candidate(id: impl Into<String>, candidate: Value) -> Result<Self> {
        let mut fields = match candidate {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::Validation(format!(
                    "expected an object, got {}",
                    kind_of(&other)
                )))
            }
        };
        fields.insert("id".to_string(), Value::String(id.into()));
        serde_json::from_value(Value::Object(fields)).map_err(|e| Error::Validation(e.to_string()))
    }

    /// Check whether the record carries `trait_name` among its traits.
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits
            .iter()
            .any(|t| t.as_str() == Some(trait_name))
    }

    /// String-valued traits, in order.
    pub fn trait_names(&self) -> impl Iterator<Item = &str> {
        self.personality_traits.iter().filter_map(Value::as_str)
    }
}

/// Human-readable name of a JSON value's kind.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
