//! Normalize untrusted records into canonical items.
//!
//! Normalization is the single choke point that resolves all
//! optionality: every unparseable or missing field degrades to a safe
//! default and never surfaces as an error. The function is pure — the
//! same raw record always yields the same item.

use cuvee_core::{Item, Style};

use crate::record::{RawRecord, RawScalar};

/// Convert one raw record into a canonical [`Item`].
///
/// - The rating parses as a float, `0.0` on failure, without clamping.
/// - The review count is the concatenation of every ASCII digit in the
///   free-form reviews text; no digits yield `0`.
/// - The location splits on the middle dot into lower-cased country and
///   region halves; missing halves become empty strings.
/// - The style is inferred from label and region text.
///
/// # Examples
/// ```
/// use cuvee_catalog::{normalize, RawRecord};
/// use cuvee_core::Style;
///
/// let raw: RawRecord = serde_json::from_str(
///     r#"{
///         "winery": "Champagne Bollinger",
///         "wine": "Special Cuvée Brut N.V.",
///         "rating": {"average": "4.5", "reviews": "1,203 ratings"},
///         "location": "France · Champagne",
///         "id": 4
///     }"#,
/// )
/// .expect("record-shaped JSON");
///
/// let item = normalize(&raw);
/// assert_eq!(item.review_count, 1203);
/// assert_eq!(item.country, "france");
/// assert_eq!(item.style, Style::Sparkling);
/// ```
pub fn normalize(raw: &RawRecord) -> Item {
    let winery = raw.winery.clone().unwrap_or_default();
    let wine_name = raw.wine.clone().unwrap_or_default();
    let label = format!("{winery} {wine_name}").trim().to_owned();
    let rating = raw
        .rating
        .as_ref()
        .and_then(|rating| rating.average.as_ref())
        .map_or(0.0, parse_rating);
    let review_count = raw
        .rating
        .as_ref()
        .and_then(|rating| rating.reviews.as_ref())
        .map_or(0, count_reviews);
    let (country, region) = split_location(raw.location.as_deref().unwrap_or(""));
    let style = Style::infer(&label, &region);

    Item {
        id: raw.identity(),
        winery,
        wine_name,
        label,
        rating,
        review_count,
        country,
        region,
        style,
        image_url: raw.image.clone(),
    }
}

fn parse_rating(value: &RawScalar) -> f32 {
    value.as_text().trim().parse().unwrap_or(0.0)
}

/// Digits-only extraction: thousands separators and surrounding words
/// such as "ratings" are ignored.
fn count_reviews(value: &RawScalar) -> u64 {
    value
        .as_text()
        .chars()
        .filter(char::is_ascii_digit)
        .fold(0_u64, |count, digit| {
            count
                .saturating_mul(10)
                .saturating_add(u64::from(digit) - u64::from('0'))
        })
}

fn split_location(location: &str) -> (String, String) {
    let mut halves = location.split('·');
    let country = clean_half(halves.next().unwrap_or(""));
    let region = clean_half(halves.next().unwrap_or(""));
    (country, region)
}

fn clean_half(half: &str) -> String {
    half.replace('\n', " ").trim().to_lowercase()
}
