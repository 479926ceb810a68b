//! Recommendation selection: filter, rank, backfill, and explain.
//!
//! The selector orchestrates the whole pipeline for one prediction:
//! style pool → term hard filter → score and rank → top-3 with backfill
//! → preferred-country guarantee → relative score normalization →
//! explanation strings. Every step builds new collections; the catalog
//! snapshot is never mutated.
#![forbid(unsafe_code)]

use std::time::Instant;

use cuvee_core::{Item, Prediction, Preferences, Recommendation, Recommender};

use crate::expand::TermExpander;
use crate::score::{country_matches, matches_term, score_item};

/// Informational model tag attached to every prediction.
pub const MODEL_VERSION: &str = concat!("cuvee-reco@", env!("CARGO_PKG_VERSION"));

const MAX_RECOMMENDATIONS: usize = 3;

/// [`Recommender`] over an owned catalog snapshot.
///
/// Each `predict` call is a one-shot pure computation: items are scored
/// into fresh copies and the snapshot stays untouched, so calls may
/// repeat or run concurrently from multiple callers.
///
/// # Examples
/// ```
/// use cuvee_core::{Preferences, Recommender, Style};
/// use cuvee_reco::CatalogRecommender;
///
/// let recommender = CatalogRecommender::with_default_aliases(Vec::new());
/// let prediction = recommender.predict(&Preferences::new().with_style(Style::Reds));
/// assert!(prediction.recommendations.is_empty());
/// ```
#[derive(Debug)]
pub struct CatalogRecommender {
    items: Vec<Item>,
    expander: TermExpander,
}

#[derive(Debug, Copy, Clone)]
struct Scored<'a> {
    item: &'a Item,
    raw: f32,
}

impl CatalogRecommender {
    /// Construct a recommender over `items`, expanding search terms
    /// through `expander`.
    #[must_use]
    pub fn new(items: Vec<Item>, expander: TermExpander) -> Self {
        Self { items, expander }
    }

    /// Construct a recommender using the bundled default alias table.
    #[must_use]
    pub fn with_default_aliases(items: Vec<Item>) -> Self {
        Self::new(items, TermExpander::with_default_aliases())
    }

    /// The catalog snapshot this recommender scores.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Recommender for CatalogRecommender {
    fn predict(&self, prefs: &Preferences) -> Prediction {
        let started = Instant::now();
        let needles = self.expander.expand(prefs.terms());

        // Style pool, scored once and ranked. An empty style selection
        // matches nothing; callers must select at least one style for a
        // non-empty result.
        let mut scored: Vec<Scored<'_>> = self
            .items
            .iter()
            .filter(|item| prefs.prefers_style(item.style))
            .map(|item| Scored {
                item,
                raw: score_item(item, prefs, &needles),
            })
            .collect();
        sort_descending(&mut scored);

        // Term hard filter. The flag reflects that narrowing happened,
        // whether or not it excluded anything.
        let term_filtered = !needles.is_empty();
        let (selected, backfill): (Vec<Scored<'_>>, Vec<Scored<'_>>) = if term_filtered {
            scored
                .iter()
                .copied()
                .partition(|entry| matches_term(entry.item, &needles))
        } else {
            (scored.clone(), Vec::new())
        };

        // Top-3 with backfill from the style-pool items the narrowing
        // excluded. Both halves keep their rank order, so backfilled
        // entries follow the term matches rather than re-sorting them.
        let mut top: Vec<Scored<'_>> = selected
            .iter()
            .take(MAX_RECOMMENDATIONS)
            .copied()
            .collect();
        let mut term_hint = false;
        if top.len() < MAX_RECOMMENDATIONS {
            term_hint = term_filtered;
            let missing = MAX_RECOMMENDATIONS - top.len();
            top.extend(backfill.iter().take(missing).copied());
        }

        // Preferred-country guarantee over the full scored style pool,
        // not just the top-3.
        let mut country_hint = false;
        if let Some(country) = prefs.preferred_country() {
            match scored.iter().find(|entry| entry.item.country == country) {
                Some(best) if !top.iter().any(|entry| entry.item.country == country) => {
                    top.truncate(MAX_RECOMMENDATIONS - 1);
                    top.push(*best);
                    sort_descending(&mut top);
                }
                Some(_) => {}
                None => country_hint = true,
            }
        }

        Prediction {
            recommendations: explain(&top, prefs),
            country_hint,
            term_filtered,
            term_hint,
            model_version: MODEL_VERSION.to_owned(),
            inference_ms: elapsed_ms(started),
        }
    }
}

fn sort_descending(entries: &mut [Scored<'_>]) {
    // Stable sort: ties keep their prior relative order.
    entries.sort_by(|a, b| b.raw.total_cmp(&a.raw));
}

#[expect(
    clippy::float_arithmetic,
    reason = "relative scores divide by the maximum raw score"
)]
fn explain(entries: &[Scored<'_>], prefs: &Preferences) -> Vec<Recommendation> {
    // Minimum denominator of 1 avoids dividing by zero when every raw
    // score is 0.
    let denominator = entries
        .iter()
        .map(|entry| entry.raw)
        .fold(1.0_f32, f32::max);
    entries
        .iter()
        .map(|entry| Recommendation {
            item: entry.item.clone(),
            score: entry.raw / denominator,
            why: build_why(entry.item, prefs),
        })
        .collect()
}

fn build_why(item: &Item, prefs: &Preferences) -> String {
    let mut bits: Vec<String> = Vec::new();
    if prefs.prefers_style(item.style) {
        bits.push("preferred style".to_owned());
    }
    if country_matches(item, prefs) {
        bits.push("preferred country".to_owned());
    }
    if item.rating > 0.0 {
        bits.push(format!("★{:.1}", item.rating));
    }
    if item.review_count > 0 {
        bits.push(format!("{} reviews", item.review_count));
    }
    if bits.is_empty() {
        "recommended".to_owned()
    } else {
        bits.join(" · ")
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
