// src/shared/codec.rs
//
// JSON text codec for list/object fields persisted in text columns.
// Decoding is total: a missing, empty, or corrupt value degrades to the
// caller's fallback instead of failing the surrounding request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub fn decode_or<T: DeserializeOwned>(raw: Option<&str>, fallback: T) -> T {
    match raw {
        None => fallback,
        Some(s) if s.trim().is_empty() => fallback,
        Some(s) => serde_json::from_str(s).unwrap_or(fallback),
    }
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Split admin-authored list input: trim every entry, drop blanks,
/// preserve order.
pub fn split_list(input: &str, sep: char) -> Vec<String> {
    input
        .split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Request-side list fields
// ──────────────────────────────────────────────────────────
// The admin forms submit some lists as delimited strings (tech stack and
// tags comma-separated, galleries/bullets/subtitles one-per-line); API
// clients submit proper arrays. Both shapes deserialize to Vec<String>.
//

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn list_from<'de, D>(deserializer: D, sep: char) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let normalized = match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => split_list(&s, sep),
        StringOrList::Many(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    };
    Ok(normalized)
}

pub fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    list_from(deserializer, ',')
}

pub fn newline_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    list_from(deserializer, '\n')
}

pub fn opt_comma_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    comma_list(deserializer).map(Some)
}

pub fn opt_newline_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    newline_list(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_absent_returns_fallback() {
        let v: Vec<String> = decode_or(None, vec!["fallback".to_string()]);
        assert_eq!(v, vec!["fallback"]);
    }

    #[test]
    fn test_decode_empty_returns_fallback() {
        let v: Vec<String> = decode_or(Some("   "), vec![]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_decode_malformed_returns_fallback() {
        let v: Vec<String> = decode_or(Some("{not json"), vec!["d".to_string()]);
        assert_eq!(v, vec!["d"]);
    }

    #[test]
    fn test_decode_wrong_shape_returns_fallback() {
        // Legacy rows stored scalars where lists now live.
        let v: Vec<String> = decode_or(Some("\"just a string\""), vec![]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_decode_valid_json() {
        let v: Vec<String> = decode_or(Some(r#"["a","b"]"#), vec![]);
        assert_eq!(v, vec!["a", "b"]);
    }

    #[test]
    fn test_encode_round_trips_through_decode() {
        let raw = encode(&vec!["x".to_string(), "y".to_string()]).unwrap();
        let back: Vec<String> = decode_or(Some(&raw), vec![]);
        assert_eq!(back, vec!["x", "y"]);
    }

    #[test]
    fn test_split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list("React, Next.js, TypeScript", ','),
            vec!["React", "Next.js", "TypeScript"]
        );
        assert_eq!(split_list("a\n\n  b  \n", '\n'), vec!["a", "b"]);
        assert!(split_list("  , ,", ',').is_empty());
    }

    #[derive(Deserialize)]
    struct TechStackField {
        #[serde(deserialize_with = "comma_list")]
        tech_stack: Vec<String>,
    }

    #[test]
    fn test_comma_list_accepts_delimited_string() {
        let parsed: TechStackField =
            serde_json::from_str(r#"{"tech_stack": "React, Next.js, TypeScript"}"#).unwrap();
        assert_eq!(parsed.tech_stack, vec!["React", "Next.js", "TypeScript"]);
    }

    #[test]
    fn test_comma_list_accepts_array() {
        let parsed: TechStackField =
            serde_json::from_str(r#"{"tech_stack": ["Rust", " Actix "]}"#).unwrap();
        assert_eq!(parsed.tech_stack, vec!["Rust", "Actix"]);
    }
}
