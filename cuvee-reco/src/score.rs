//! The preference scoring function.
//!
//! Scoring is pure and deterministic: a base quality term rewards high
//! ratings weighted by logarithmic review-volume confidence, and three
//! independent additive boosts reward style, country, and term matches.
//! No boost is double-applied and the result never drops below zero.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use cuvee_core::{Item, Preferences, Scorer};

use crate::expand::TermExpander;
use crate::text::{normalize_text, strip_whitespace};

/// Additive boost when the item's style is among the selected styles.
const STYLE_BOOST: f32 = 0.4;
/// Additive boost when the item matches the preferred country.
const COUNTRY_BOOST: f32 = 0.2;
/// Additive boost when any needle matches the item's text.
const TERM_BOOST: f32 = 0.35;

/// Score one item against the current preferences.
///
/// The base quality is `(rating / 5) · ln(1 + review_count)`: review
/// volume provides logarithmic confidence weighting, so a 4.9-rated
/// wine with a handful of reviews does not always dominate a 4.3-rated
/// wine with thousands. Matching boosts are additive and independent.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use cuvee_core::{Item, ItemId, Preferences, Style};
/// use cuvee_reco::score_item;
///
/// let item = Item {
///     id: ItemId::Number(1),
///     winery: String::new(),
///     wine_name: String::new(),
///     label: "Champagne Bollinger".into(),
///     rating: 0.0,
///     review_count: 0,
///     country: "france".into(),
///     region: "champagne".into(),
///     style: Style::Sparkling,
///     image_url: None,
/// };
/// let prefs = Preferences::new().with_style(Style::Sparkling);
///
/// // No rating or reviews: the style boost alone carries the score.
/// assert_eq!(score_item(&item, &prefs, &BTreeSet::new()), 0.4);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "quality weighting multiplies the rating by log review volume"
)]
pub fn score_item(item: &Item, prefs: &Preferences, needles: &BTreeSet<String>) -> f32 {
    let quality = (item.rating / 5.0) * (item.review_count as f32).ln_1p();
    let mut boost = 0.0_f32;
    if prefs.prefers_style(item.style) {
        boost += STYLE_BOOST;
    }
    if country_matches(item, prefs) {
        boost += COUNTRY_BOOST;
    }
    if !needles.is_empty() && matches_term(item, needles) {
        boost += TERM_BOOST;
    }
    (quality + boost).max(0.0_f32)
}

/// Report whether any needle matches the item's label and region text.
///
/// A needle matches as a substring of the normalized text or of the
/// same text with all whitespace removed; the double test lets
/// multi-word needles match catalog text that differs only in spacing
/// or hyphenation. An empty needle set matches everything.
#[must_use]
pub fn matches_term(item: &Item, needles: &BTreeSet<String>) -> bool {
    if needles.is_empty() {
        return true;
    }
    let joined = search_text(item);
    let compact = strip_whitespace(&joined);
    needles
        .iter()
        .any(|needle| joined.contains(needle.as_str()) || compact.contains(needle.as_str()))
}

pub(crate) fn country_matches(item: &Item, prefs: &Preferences) -> bool {
    prefs
        .preferred_country()
        .is_some_and(|country| item.country == country)
}

fn search_text(item: &Item) -> String {
    normalize_text(&format!("{} {}", item.label, item.region))
}

/// [`Scorer`] implementation that expands search terms through an alias
/// table before matching.
#[derive(Debug, Default)]
pub struct PreferenceScorer {
    expander: TermExpander,
}

impl PreferenceScorer {
    /// Construct a scorer using `expander` for term expansion.
    #[must_use]
    pub fn new(expander: TermExpander) -> Self {
        Self { expander }
    }
}

impl Scorer for PreferenceScorer {
    fn score(&self, item: &Item, prefs: &Preferences) -> f32 {
        let needles = self.expander.expand(prefs.terms());
        <Self as Scorer>::sanitise(score_item(item, prefs, &needles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuvee_core::{ItemId, Style};
    use rstest::rstest;

    fn sample_item() -> Item {
        Item {
            id: ItemId::Number(4),
            winery: "Champagne Bollinger".into(),
            wine_name: "Special Cuvée Brut N.V.".into(),
            label: "Champagne Bollinger Special Cuvée Brut N.V.".into(),
            rating: 4.5,
            review_count: 1203,
            country: "france".into(),
            region: "champagne".into(),
            style: Style::Sparkling,
            image_url: None,
        }
    }

    fn needles_for(terms: &[&str]) -> BTreeSet<String> {
        let owned: Vec<String> = terms.iter().map(|&term| term.to_owned()).collect();
        TermExpander::with_default_aliases().expand(&owned)
    }

    #[test]
    fn quality_rises_with_review_volume() {
        let prefs = Preferences::new();
        let few = Item {
            review_count: 10,
            ..sample_item()
        };
        let many = Item {
            review_count: 10_000,
            ..sample_item()
        };
        let empty = BTreeSet::new();

        assert!(score_item(&few, &prefs, &empty) < score_item(&many, &prefs, &empty));
    }

    #[rstest]
    #[case(Preferences::new().with_style(Style::Sparkling), 0.4)]
    #[case(Preferences::new().with_country("France"), 0.2)]
    #[case(Preferences::new().with_style(Style::Sparkling).with_country("FRANCE"), 0.6)]
    fn boosts_are_additive_and_case_insensitive(
        #[case] prefs: Preferences,
        #[case] expected_boost: f32,
    ) {
        let item = Item {
            rating: 0.0,
            review_count: 0,
            ..sample_item()
        };
        let without = score_item(&item, &Preferences::new(), &BTreeSet::new());
        let with = score_item(&item, &prefs, &BTreeSet::new());

        assert!((with - without - expected_boost).abs() < 1.0e-6);
    }

    #[test]
    fn term_boost_applies_on_needle_match() {
        let item = Item {
            rating: 0.0,
            review_count: 0,
            ..sample_item()
        };
        let prefs = Preferences::new().with_term("champagne");
        let matched = score_item(&item, &prefs, &needles_for(&["champagne"]));
        let missed = score_item(&item, &prefs, &needles_for(&["riesling"]));

        assert!((matched - 0.35).abs() < 1.0e-6);
        assert_eq!(missed, 0.0);
    }

    #[test]
    fn compact_needles_match_spaced_catalog_text() {
        let item = Item {
            label: "Domaine Pinot Noir Réserve".into(),
            ..sample_item()
        };
        let needles = needles_for(&["피노누아"]);

        assert!(matches_term(&item, &needles));
    }

    #[test]
    fn empty_needle_set_matches_everything() {
        assert!(matches_term(&sample_item(), &BTreeSet::new()));
    }

    #[test]
    fn score_never_drops_below_zero() {
        let item = Item {
            rating: 0.0,
            review_count: 0,
            ..sample_item()
        };
        assert_eq!(score_item(&item, &Preferences::new(), &BTreeSet::new()), 0.0);
    }

    #[test]
    fn scorer_trait_matches_the_free_function() {
        let item = sample_item();
        let prefs = Preferences::new()
            .with_style(Style::Sparkling)
            .with_term("스파클링");
        let scorer = PreferenceScorer::default();
        let needles = needles_for(&["스파클링"]);

        assert_eq!(
            scorer.score(&item, &prefs),
            score_item(&item, &prefs, &needles)
        );
    }
}
