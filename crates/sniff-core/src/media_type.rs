//! The media type handle returned by every lookup.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

/// Canonical name of the universal binary fallback type.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Canonical name of the universal text fallback type.
pub const TEXT_PLAIN: &str = "text/plain";

/// A parsed media type: a lowercased `media/subtype` essence plus any
/// `; key=value` parameters.
///
/// `MediaType` is a plain name handle; it knows nothing about the registry it
/// came from. [`PartialEq`] and [`Hash`] use the essence only, so
/// `"TEXT/HTML; charset=UTF-8"` and `"text/html"` compare equal. Equality
/// that also folds aliases onto their canonical name lives on the registry
/// as [`TypeDb::same_type`](crate::TypeDb::same_type).
#[derive(Debug, Clone)]
pub struct MediaType {
    essence: String,
    params: Vec<(String, String)>,
}

impl MediaType {
    /// Parses a media type from its string form.
    ///
    /// Never fails: arbitrary strings become handles with whatever essence
    /// they spell, and simply resolve to nothing when queried against a
    /// registry.
    pub fn new(value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        let mut parts = value.split(';');
        let essence = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        let params = parts
            .filter_map(|param| {
                let (key, value) = param.split_once('=')?;
                let key = key.trim().to_ascii_lowercase();
                if key.is_empty() {
                    return None;
                }
                Some((key, value.trim().to_string()))
            })
            .collect();
        Self { essence, params }
    }

    /// The universal binary fallback, `application/octet-stream`.
    pub fn octet_stream() -> Self {
        Self::new(OCTET_STREAM)
    }

    /// The universal text fallback, `text/plain`.
    pub fn text_plain() -> Self {
        Self::new(TEXT_PLAIN)
    }

    /// The `media/subtype` part, lowercased, without parameters.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// The media part (`text` in `text/html`). The whole essence if the
    /// string never contained a slash.
    pub fn media(&self) -> &str {
        self.essence.split('/').next().unwrap_or(&self.essence)
    }

    /// The subtype part (`html` in `text/html`), if present.
    pub fn sub(&self) -> Option<&str> {
        self.essence.split_once('/').map(|(_, sub)| sub)
    }

    /// All parsed parameters in source order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Looks up a single parameter by (case-insensitive) key.
    pub fn param(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.essence == other.essence
    }
}

impl Eq for MediaType {}

impl std::hash::Hash for MediaType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.essence.hash(state);
    }
}

impl PartialEq<str> for MediaType {
    fn eq(&self, other: &str) -> bool {
        let other_essence = other.split(';').next().unwrap_or("").trim();
        self.essence.eq_ignore_ascii_case(other_essence)
    }
}

impl PartialEq<&str> for MediaType {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.essence)?;
        for (key, value) in &self.params {
            write!(f, "; {}={}", key, value)?;
        }
        Ok(())
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        &self.essence
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MediaTypeVisitor;

        impl Visitor<'_> for MediaTypeVisitor {
            type Value = MediaType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a media type string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MediaType, E> {
                Ok(MediaType::new(value))
            }
        }

        deserializer.deserialize_str(MediaTypeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Parsing ----

    #[test]
    fn parses_media_and_sub() {
        let t = MediaType::new("text/html");
        assert_eq!(t.essence(), "text/html");
        assert_eq!(t.media(), "text");
        assert_eq!(t.sub(), Some("html"));
    }

    #[test]
    fn lowercases_and_trims_essence() {
        let t = MediaType::new("  TEXT/HTML  ");
        assert_eq!(t.essence(), "text/html");
    }

    #[test]
    fn parses_parameters() {
        let t = MediaType::new("text/html; Charset=UTF-8");
        assert_eq!(t.essence(), "text/html");
        assert_eq!(t.param("charset"), Some("UTF-8"));
        assert_eq!(t.param("CHARSET"), Some("UTF-8"));
        assert_eq!(t.params().len(), 1);
    }

    #[test]
    fn ignores_malformed_parameters() {
        let t = MediaType::new("text/html; notakeyvalue; =empty");
        assert!(t.params().is_empty());
    }

    #[test]
    fn garbage_is_a_valid_handle() {
        let t = MediaType::new("complete nonsense");
        assert_eq!(t.essence(), "complete nonsense");
        assert_eq!(t.sub(), None);
        assert_eq!(t.media(), "complete nonsense");
    }

    // ---- Equality ----

    #[test]
    fn equality_ignores_case_and_parameters() {
        assert_eq!(
            MediaType::new("Text/HTML; charset=utf-8"),
            MediaType::new("text/html")
        );
    }

    #[test]
    fn equality_against_strings() {
        let t = MediaType::new("text/html");
        assert_eq!(t, "text/html");
        assert_eq!(t, "TEXT/HTML; charset=UTF-8");
        assert_ne!(t, "text/plain");
    }

    #[test]
    fn usable_as_hashmap_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(MediaType::new("image/PNG"), 1);
        assert_eq!(map.get(&MediaType::new("image/png")), Some(&1));
    }

    // ---- Display ----

    #[test]
    fn display_round_trips_parameters() {
        let t = MediaType::new("text/plain; charset=US-ASCII");
        assert_eq!(t.to_string(), "text/plain; charset=US-ASCII");
    }

    #[test]
    fn display_plain_essence() {
        assert_eq!(MediaType::new("IMAGE/PNG").to_string(), "image/png");
    }

    // ---- Serde ----

    #[test]
    fn serde_round_trip() {
        let original = MediaType::new("application/xhtml+xml; charset=utf-8");
        let json = serde_json::to_string(&original).expect("serialization should succeed");
        assert_eq!(json, "\"application/xhtml+xml; charset=utf-8\"");
        let back: MediaType = serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, original);
    }

    // ---- Well-known constructors ----

    #[test]
    fn fallback_constructors() {
        assert_eq!(MediaType::octet_stream(), OCTET_STREAM);
        assert_eq!(MediaType::text_plain(), TEXT_PLAIN);
    }
}
