//! Query criteria
//!
//! A `Criteria` is the set of constraints a query narrows the collection by.
//! It deserializes from any JSON object; unrecognized keys are ignored.
//!
//! - `personalityTraits`: a single string or an array of strings. A lone empty
//!   string is no constraint; inside an array every element is a required trait
//!   as given, empty or not.
//! - `diet`, `species`, `name`: a single string is an exact-match constraint,
//!   an empty one is no constraint. An array (several values for one field)
//!   can never equal a record's single value, so it matches nothing.
//!
//! Query strings and form bodies reach this type through the same rules, so a
//! criterion filters identically whichever way it was submitted.

use serde::{Deserialize, Deserializer};

/// Constraint on a single-valued field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMatch {
    /// The field must equal this value exactly
    Equals(String),
    /// Several values were requested for one field; no record matches
    Unsatisfiable,
}

impl FieldMatch {
    /// Check a record's field value against the constraint.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldMatch::Equals(expected) => expected == value,
            FieldMatch::Unsatisfiable => false,
        }
    }
}

/// Filter constraints combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Every listed trait must appear in the record's traits
    #[serde(default, deserialize_with = "traits")]
    pub personality_traits: Vec<String>,
    /// Diet constraint
    #[serde(default, deserialize_with = "field_match")]
    pub diet: Option<FieldMatch>,
    /// Species constraint
    #[serde(default, deserialize_with = "field_match")]
    pub species: Option<FieldMatch>,
    /// Name constraint
    #[serde(default, deserialize_with = "field_match")]
    pub name: Option<FieldMatch>,
}

impl Criteria {
    /// Criteria with no constraints (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `trait_name` among the record's traits.
    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.personality_traits.push(trait_name.into());
        self
    }

    /// Require all of `traits`.
    pub fn with_traits(mut self, traits: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.personality_traits
            .extend(traits.into_iter().map(Into::into));
        self
    }

    /// Require an exact diet.
    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = equals(diet.into());
        self
    }

    /// Require an exact species.
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = equals(species.into());
        self
    }

    /// Require an exact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = equals(name.into());
        self
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_none()
            && self.species.is_none()
            && self.name.is_none()
    }
}

fn equals(value: String) -> Option<FieldMatch> {
    Some(value)
        .filter(|v| !v.is_empty())
        .map(FieldMatch::Equals)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn traits<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(t)) if t.is_empty() => Vec::new(),
        Some(OneOrMany::One(t)) => vec![t],
        Some(OneOrMany::Many(ts)) => ts,
    })
}

fn field_match<'de, D>(deserializer: D) -> Result<Option<FieldMatch>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => None,
        Some(OneOrMany::One(v)) => equals(v),
        Some(OneOrMany::Many(_)) => Some(FieldMatch::Unsatisfiable),
    })
}
