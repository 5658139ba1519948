//! URL-encoded pairs to JSON
//!
//! Query strings and form bodies arrive as flat `key=value` pairs. They are
//! folded into a JSON object so both go through the same `Criteria` and
//! creation rules as a JSON body:
//!
//! - `key[]=v` always produces an array under `key`
//! - a key given more than once produces an array, in submission order
//! - anything else is a plain string

use serde_json::{Map, Value};
use tracing::warn;

/// Decode `input` into key/value pairs.
///
/// Decoding is lossy and never fails the request; input that cannot be read
/// at all yields no pairs.
pub fn parse_pairs(input: &[u8]) -> Vec<(String, String)> {
    serde_urlencoded::from_bytes(input).unwrap_or_else(|e| {
        warn!("Ignoring undecodable url-encoded input: {}", e);
        Vec::new()
    })
}

/// Fold decoded pairs into a JSON object.
pub fn pairs_to_value(pairs: Vec<(String, String)>) -> Value {
    let mut fields = Map::new();

    for (key, value) in pairs {
        let (name, bracketed) = match key.strip_suffix("[]") {
            Some(name) => (name.to_string(), true),
            None => (key, false),
        };
        let value = Value::String(value);

        match fields.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if bracketed => {
                fields.insert(name, Value::Array(vec![value]));
            }
            None => {
                fields.insert(name, value);
            }
        }
    }

    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(input: &str) -> Value {
        pairs_to_value(parse_pairs(input.as_bytes()))
    }

    #[test]
    fn test_single_keys_are_strings() {
        assert_eq!(
            decode("name=Rex&diet=carnivore"),
            json!({"name": "Rex", "diet": "carnivore"})
        );
    }

    #[test]
    fn test_bracket_key_is_array() {
        assert_eq!(
            decode("personalityTraits[]=loyal"),
            json!({"personalityTraits": ["loyal"]})
        );
        assert_eq!(
            decode("personalityTraits[]=loyal&personalityTraits[]=brave"),
            json!({"personalityTraits": ["loyal", "brave"]})
        );
    }

    #[test]
    fn test_repeated_key_is_array() {
        assert_eq!(
            decode("diet=herbivore&diet=omnivore&diet=carnivore"),
            json!({"diet": ["herbivore", "omnivore", "carnivore"]})
        );
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        assert_eq!(
            decode("name=Big+Mo&species=sea%20lion"),
            json!({"name": "Big Mo", "species": "sea lion"})
        );
    }

    #[test]
    fn test_empty_and_junk_input() {
        assert_eq!(decode(""), json!({}));
        assert_eq!(decode("&&=&flag"), json!({"": "", "flag": ""}));
    }
}
