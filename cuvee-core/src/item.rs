//! Canonical catalog items.
//!
//! An [`Item`] is the normalized working unit of the recommendation
//! pipeline. All optionality in the raw catalog shape is resolved before
//! an item exists: unparseable numbers become zero, missing location
//! halves become empty strings, and every item carries exactly one
//! inferred [`Style`](crate::Style).

use crate::Style;

/// Stable item identity, preserved from the raw catalog record.
///
/// Catalog sources identify records with either a JSON number or a JSON
/// string; both shapes are kept verbatim. Records without an identity get
/// a textual one synthesized from winery and wine name.
///
/// # Examples
/// ```
/// use cuvee_core::ItemId;
///
/// assert_eq!(ItemId::Number(4).to_string(), "4");
/// assert_eq!(ItemId::Text("bollinger-special".into()).to_string(), "bollinger-special");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ItemId {
    /// Numeric identity.
    Number(i64),
    /// Textual identity.
    Text(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A wine the pipeline can score and recommend.
///
/// Items are immutable once built: a catalog or preference change
/// produces a fresh item set rather than mutating items in place.
///
/// # Examples
/// ```
/// use cuvee_core::{Item, ItemId, Style};
///
/// let item = Item {
///     id: ItemId::Number(4),
///     winery: "Champagne Bollinger".into(),
///     wine_name: "Special Cuvée Brut N.V.".into(),
///     label: "Champagne Bollinger Special Cuvée Brut N.V.".into(),
///     rating: 4.5,
///     review_count: 1203,
///     country: "france".into(),
///     region: "champagne".into(),
///     style: Style::Sparkling,
///     image_url: None,
/// };
/// assert_eq!(item.style, Style::Sparkling);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Identity preserved from the raw record.
    pub id: ItemId,
    /// Winery name as supplied by the catalog.
    pub winery: String,
    /// Wine name as supplied by the catalog.
    pub wine_name: String,
    /// Trimmed display string, `"winery wine-name"`.
    pub label: String,
    /// Average rating; `0.0` when the raw value was unparseable. Callers
    /// must not assume a `[0, 5]` range is enforced here, only produced
    /// by well-formed inputs.
    pub rating: f32,
    /// Review count extracted from free-form text; `0` without digits.
    pub review_count: u64,
    /// Lower-cased country, empty when the location was missing.
    pub country: String,
    /// Lower-cased region, empty when the location had no second half.
    pub region: String,
    /// Inferred wine style; exactly one per item.
    pub style: Style,
    /// Image URL passed through from the raw record, unmodified.
    pub image_url: Option<String>,
}
