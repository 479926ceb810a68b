//! Score catalog items against user preferences.
//!
//! The `Scorer` trait assigns a desirability score to an
//! [`Item`](crate::Item) given the caller's
//! [`Preferences`](crate::Preferences).

use crate::{Item, Preferences};

/// Calculate a desirability score for a catalog item.
///
/// Higher scores indicate a better match between the item and the
/// caller's preferences. Implementations must be thread-safe
/// (`Send` + `Sync`) so scorers can run across threads.
/// The method is infallible; implementers must return `0.0` when no
/// information is available.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
///
/// Raw scores are unbounded above; they carry relative ranking
/// information only and are normalized into `0.0..=1.0` by the selector
/// when a recommendation set is assembled. Use [`Scorer::sanitise`] to
/// apply the finiteness and sign guards.
///
/// # Examples
///
/// ```rust
/// use cuvee_core::{Item, ItemId, Preferences, Scorer, Style};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _item: &Item, _prefs: &Preferences) -> f32 {
///         1.0
///     }
/// }
///
/// let item = Item {
///     id: ItemId::Number(1),
///     winery: String::new(),
///     wine_name: String::new(),
///     label: String::new(),
///     rating: 0.0,
///     review_count: 0,
///     country: String::new(),
///     region: String::new(),
///     style: Style::Reds,
///     image_url: None,
/// };
/// let prefs = Preferences::new();
/// let scorer = UnitScorer;
/// assert_eq!(scorer.score(&item, &prefs), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `item` according to `prefs`.
    fn score(&self, item: &Item, prefs: &Preferences) -> f32;

    /// Guard a raw score.
    ///
    /// Returns `0.0` for non-finite values and floors at `0.0`. Unlike a
    /// probability, the result is not clamped above.
    fn sanitise(score: f32) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
