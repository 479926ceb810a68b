//! Untrusted catalog record shapes.
//!
//! Raw records arrive from external JSON documents with optional,
//! loosely-typed fields. They exist only on the near side of
//! [`normalize`](crate::normalize); nothing past the normalizer sees an
//! optional field.

use cuvee_core::ItemId;
use serde::{Deserialize, Serialize};

/// A scalar that may arrive as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    /// Integral payload, e.g. a numeric id.
    Integer(i64),
    /// Floating-point payload.
    Float(f64),
    /// Textual payload, e.g. `"1,203 ratings"`.
    Text(String),
}

impl RawScalar {
    /// Coerce the scalar to text the way loosely-typed sources print it.
    pub fn as_text(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

/// Free-form rating block of a raw record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRating {
    /// Average rating, as a string or number.
    pub average: Option<RawScalar>,
    /// Review count, usually embedded in text such as `"88 ratings"`.
    pub reviews: Option<RawScalar>,
}

/// One catalog record exactly as an external source supplied it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// Winery name.
    pub winery: Option<String>,
    /// Wine name.
    pub wine: Option<String>,
    /// Free-form rating block.
    pub rating: Option<RawRating>,
    /// `"Country · Region"` location string.
    pub location: Option<String>,
    /// Image URL, passed through unmodified.
    pub image: Option<String>,
    /// Source-assigned identity, as a string or number.
    pub id: Option<RawScalar>,
}

impl RawRecord {
    /// The identity used for dedup and preserved on the canonical item.
    ///
    /// Records without an id get a textual identity synthesized from
    /// winery and wine name, so re-supplied copies of the same wine
    /// still collapse to one entry.
    pub fn identity(&self) -> ItemId {
        match &self.id {
            Some(RawScalar::Integer(value)) => ItemId::Number(*value),
            Some(scalar) => ItemId::Text(scalar.as_text()),
            None => ItemId::Text(format!(
                "{}-{}",
                self.winery.as_deref().unwrap_or(""),
                self.wine.as_deref().unwrap_or("")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(json_record(r#"{"id": 7}"#), ItemId::Number(7))]
    #[case(json_record(r#"{"id": "w-7"}"#), ItemId::Text("w-7".into()))]
    #[case(
        json_record(r#"{"winery": "Kistler", "wine": "Chardonnay"}"#),
        ItemId::Text("Kistler-Chardonnay".into())
    )]
    #[case(json_record("{}"), ItemId::Text("-".into()))]
    fn identity_prefers_source_ids(#[case] record: RawRecord, #[case] expected: ItemId) {
        assert_eq!(record.identity(), expected);
    }

    #[test]
    fn scalars_deserialize_from_numbers_and_strings() {
        let rating: RawRating =
            serde_json::from_str(r#"{"average": "4.9", "reviews": 88}"#).expect("valid rating");
        assert_eq!(rating.average, Some(RawScalar::Text("4.9".into())));
        assert_eq!(rating.reviews, Some(RawScalar::Integer(88)));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let record = json_record("{}");
        assert!(record.winery.is_none());
        assert!(record.rating.is_none());
        assert!(record.image.is_none());
    }

    fn json_record(payload: &str) -> RawRecord {
        serde_json::from_str(payload).expect("record-shaped JSON")
    }
}
