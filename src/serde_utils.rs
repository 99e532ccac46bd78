/// Serde utility functions for common patterns
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Deserialize an optional query parameter, treating an empty value as absent.
///
/// - Missing parameter → `None`
/// - `?genre_id=` → `None`
/// - `?genre_id=3` → `Some(3)`
///
/// Usage:
/// ```ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Filters {
///     #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
///     genre_id: Option<i64>,
/// }
/// ```
pub fn empty_as_none<'de, T, D>(de: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Filters {
        #[serde(default, deserialize_with = "empty_as_none")]
        genre_id: Option<i64>,
    }

    #[test]
    fn test_missing_value_is_none() {
        let filters: Filters = serde_json::from_str("{}").unwrap();
        assert_eq!(filters.genre_id, None);
    }

    #[test]
    fn test_empty_value_is_none() {
        let filters: Filters = serde_json::from_str(r#"{"genre_id": ""}"#).unwrap();
        assert_eq!(filters.genre_id, None);
    }

    #[test]
    fn test_numeric_value_is_parsed() {
        let filters: Filters = serde_json::from_str(r#"{"genre_id": "3"}"#).unwrap();
        assert_eq!(filters.genre_id, Some(3));
    }

    #[test]
    fn test_garbage_value_is_rejected() {
        let result: Result<Filters, _> = serde_json::from_str(r#"{"genre_id": "abc"}"#);
        assert!(result.is_err());
    }
}
