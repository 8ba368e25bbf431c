//! Forgiving field decoders for backend records
//!
//! Freelancer records are filled in by hand and by several backend versions,
//! so a field can arrive with a surprising type. Each decoder here maps a
//! mismatched value to `None` (or drops the bad list entry) instead of failing
//! the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::freelancer_api::DisplayValue;

/// Text fields: strings as-is, numbers stringified, anything else absent
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_from_value(Value::deserialize(deserializer)?))
}

/// Identifier fields; a populated reference object yields its `_id` or `id`
pub fn identifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(mut map) => map
            .remove("_id")
            .or_else(|| map.remove("id"))
            .and_then(string_from_value),
        other => string_from_value(other),
    })
}

/// Ratings and prices: numbers or strings, anything else absent
pub fn display_value<'de, D>(deserializer: D) -> Result<Option<DisplayValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().map(DisplayValue::Number),
        Value::String(s) => Some(DisplayValue::Text(s)),
        _ => None,
    })
}

/// Label lists: keeps the entries that read as text, drops the rest
pub fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(string_from_value).collect()),
        _ => None,
    })
}

/// Record lists: keeps the entries that decode as `T`, drops the rest
pub fn record_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        log::warn!("Skipping malformed list entry: {}", e);
                        None
                    }
                })
                .collect(),
        ),
        _ => None,
    })
}

fn string_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Owner {
        #[serde(default, deserialize_with = "identifier")]
        owner: Option<String>,
        #[serde(default, deserialize_with = "display_value")]
        score: Option<DisplayValue>,
    }

    fn owner(json: &str) -> Owner {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_identifier_from_reference_object() {
        assert_eq!(owner(r#"{"owner": {"_id": "u1"}}"#).owner.as_deref(), Some("u1"));
        assert_eq!(owner(r#"{"owner": {"id": "u2"}}"#).owner.as_deref(), Some("u2"));
        assert_eq!(owner(r#"{"owner": {"name": "no id"}}"#).owner, None);
        assert_eq!(owner(r#"{"owner": false}"#).owner, None);
        assert_eq!(owner(r#"{}"#).owner, None);
    }

    #[test]
    fn test_display_value_rejects_other_types() {
        assert_eq!(owner(r#"{"score": 3}"#).score, Some(DisplayValue::Number(3.0)));
        assert_eq!(owner(r#"{"score": "n/a"}"#).score, Some(DisplayValue::Text("n/a".to_string())));
        assert_eq!(owner(r#"{"score": [1, 2]}"#).score, None);
        assert_eq!(owner(r#"{"score": null}"#).score, None);
    }
}
