//! Merge raw catalog sources into one deduplicated record list.

use std::collections::HashSet;

use cuvee_core::ItemId;
use serde_json::Value;

use crate::record::{RawRating, RawRecord, RawScalar};

/// Combine source documents into a deduplicated record list.
///
/// Sources are visited in the given priority order; values that are not
/// array-shaped and elements that are not record-shaped are skipped.
/// The first occurrence of an identity wins — later duplicates are
/// dropped without merging fields. An empty combined result falls back
/// to the bundled [`default_catalog`], so the pipeline never operates
/// on zero items.
///
/// # Examples
/// ```
/// use cuvee_catalog::merge;
/// use serde_json::json;
///
/// let primary = json!([{ "winery": "Kistler", "id": 7 }]);
/// let duplicate = json!([{ "winery": "Someone Else", "id": 7 }]);
/// let records = merge(&[primary, duplicate]);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].winery.as_deref(), Some("Kistler"));
/// ```
pub fn merge(sources: &[Value]) -> Vec<RawRecord> {
    let mut seen: HashSet<ItemId> = HashSet::new();
    let mut records = Vec::new();
    for source in sources {
        let Some(entries) = source.as_array() else {
            continue;
        };
        for entry in entries {
            let Ok(record) = serde_json::from_value::<RawRecord>(entry.clone()) else {
                continue;
            };
            if seen.insert(record.identity()) {
                records.push(record);
            }
        }
    }
    if records.is_empty() {
        default_catalog()
    } else {
        records
    }
}

/// The bundled sample catalog used whenever no source yields records.
pub fn default_catalog() -> Vec<RawRecord> {
    vec![
        bundled(
            1,
            "Maselva",
            "Emporda 2012",
            "4.9",
            "88 ratings",
            "Spain · Empordà",
            "https://images.vivino.com/thumbs/ApnIiXjcT5Kc33OHgNb9dA_375x500.jpg",
        ),
        bundled(
            2,
            "Ernesto Ruffo",
            "Amarone della Valpolicella Riserva N.V.",
            "4.9",
            "75 ratings",
            "Italy · Amarone della Valpolicella",
            "https://images.vivino.com/thumbs/nC9V6L2mQQSq0s-wZLcaxw_pb_x300.png",
        ),
        bundled(
            3,
            "Bodegas Emilio Moro",
            "Ribera del Duero 2019",
            "4.6",
            "210 ratings",
            "Spain · Ribera del Duero",
            "https://images.unsplash.com/photo-1604908176997-43165108f7f0?q=80&w=1200",
        ),
        bundled(
            4,
            "Champagne Bollinger",
            "Special Cuvée Brut N.V.",
            "4.5",
            "1,203 ratings",
            "France · Champagne",
            "https://images.unsplash.com/photo-1541976076758-347942db1970?q=80&w=1200",
        ),
        bundled(
            5,
            "Taylor's",
            "Late Bottled Vintage Port 2017",
            "4.4",
            "540 ratings",
            "Portugal · Douro",
            "https://images.unsplash.com/photo-1514362545857-3bc16c4c76de?q=80&w=1200",
        ),
        bundled(
            6,
            "Robert Mondavi",
            "Napa Valley Cabernet Sauvignon 2019",
            "4.3",
            "2,430 ratings",
            "United States · Napa Valley",
            "https://images.unsplash.com/photo-1547592180-85f173990554?q=80&w=1200",
        ),
        bundled(
            7,
            "Kistler",
            "Sonoma Coast Chardonnay 2020",
            "4.4",
            "980 ratings",
            "United States · Sonoma Coast",
            "https://images.unsplash.com/photo-1622032287470-69eb7e0a80b2?q=80&w=1200",
        ),
    ]
}

fn bundled(
    id: i64,
    winery: &str,
    wine: &str,
    average: &str,
    reviews: &str,
    location: &str,
    image: &str,
) -> RawRecord {
    RawRecord {
        winery: Some(winery.to_owned()),
        wine: Some(wine.to_owned()),
        rating: Some(RawRating {
            average: Some(RawScalar::Text(average.to_owned())),
            reviews: Some(RawScalar::Text(reviews.to_owned())),
        }),
        location: Some(location.to_owned()),
        image: Some(image.to_owned()),
        id: Some(RawScalar::Integer(id)),
    }
}
