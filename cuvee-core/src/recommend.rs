//! Recommendation results and the `Recommender` seam.

use crate::{Item, Preferences};

/// One recommended item together with its score and justification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// A fresh copy of the recommended item; the base set is untouched.
    pub item: Item,
    /// Relative score in `[0, 1]`, normalized within the result set.
    /// This is a ranking signal, not an absolute probability.
    pub score: f32,
    /// Human-readable justification for including the item.
    pub why: String,
}

/// The outcome of one prediction run.
///
/// Hint flags signal data scarcity the selection had to work around;
/// they are soft messages for the caller, never error states.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    /// Up to three recommendations, best first.
    pub recommendations: Vec<Recommendation>,
    /// No item of the preferred country exists in the style pool.
    pub country_hint: bool,
    /// Search terms narrowed the candidate pool, whether or not the
    /// narrowing excluded anything.
    pub term_filtered: bool,
    /// Term narrowing left fewer than three items and backfill had to
    /// compensate.
    pub term_hint: bool,
    /// Informational model tag; not behavioral.
    pub model_version: String,
    /// Informational elapsed time of the prediction call.
    pub inference_ms: u64,
}

impl Prediction {
    /// Report whether any hint applies, for callers that show a single
    /// advisory banner.
    pub fn has_hint(&self) -> bool {
        self.country_hint || self.term_hint
    }
}

/// Produce a recommendation set for the caller's preferences.
///
/// Prediction is a one-shot pure computation over a snapshot of the
/// catalog: implementations must not mutate shared state, and repeated
/// calls with identical inputs must yield identical recommendations and
/// flags. Implementations must be `Send + Sync` to operate safely across
/// threads.
pub trait Recommender: Send + Sync {
    /// Predict up to three recommendations for `prefs`.
    fn predict(&self, prefs: &Preferences) -> Prediction;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_hint_covers_both_flags() {
        let prediction = Prediction {
            recommendations: Vec::new(),
            country_hint: true,
            term_filtered: false,
            term_hint: false,
            model_version: "test".into(),
            inference_ms: 0,
        };
        assert!(prediction.has_hint());
        assert!(
            !Prediction {
                country_hint: false,
                ..prediction
            }
            .has_hint()
        );
    }
}
