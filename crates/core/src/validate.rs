//! Structural check for creation candidates
//!
//! A candidate is accepted only when `name`, `species` and `diet` are present
//! non-empty strings and `personalityTraits` is present and is an array. Trait
//! elements are not checked here.

use serde_json::Value;

/// Fields that must be non-empty strings.
const REQUIRED_STRINGS: [&str; 3] = ["name", "species", "diet"];

/// Field that must be an array.
const TRAITS_FIELD: &str = "personalityTraits";

/// Return true when `candidate` is a well-formed animal.
///
/// Never panics; any input that is not an object is simply invalid.
pub fn validate(candidate: &Value) -> bool {
    let Some(fields) = candidate.as_object() else {
        return false;
    };

    let strings_ok = REQUIRED_STRINGS.iter().all(|key| {
        fields
            .get(*key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    });

    strings_ok && fields.get(TRAITS_FIELD).is_some_and(Value::is_array)
}

/// Describe why `candidate` fails [`validate`], or `None` when it passes.
pub fn rejection_reason(candidate: &Value) -> Option<String> {
    let Some(fields) = candidate.as_object() else {
        return Some(format!(
            "expected an object, got {}",
            crate::animal::kind_of(candidate)
        ));
    };

    for key in REQUIRED_STRINGS {
        match fields.get(key) {
            None => return Some(format!("missing field `{key}`")),
            Some(Value::String(s)) if s.is_empty() => {
                return Some(format!("field `{key}` is empty"))
            }
            Some(Value::String(_)) => {}
            Some(other) => {
                return Some(format!(
                    "field `{key}` must be a string, got {}",
                    crate::animal::kind_of(other)
                ))
            }
        }
    }

    match fields.get(TRAITS_FIELD) {
        None => Some(format!("missing field `{TRAITS_FIELD}`")),
        Some(Value::Array(_)) => None,
        Some(other) => Some(format!(
            "field `{TRAITS_FIELD}` must be an array, got {}",
            crate::animal::kind_of(other)
        )),
    }
}
