//! Scoring and selection for the Cuvée wine recommender.
//!
//! The crate provides the preference side of the pipeline:
//! - **Term expansion** turns raw, possibly localized search terms into
//!   a superset of normalized needles via an injected [`AliasTable`].
//! - **Scoring** combines a quality term — rating weighted by
//!   logarithmic review volume — with additive style, country, and term
//!   boosts. See [`score_item`].
//! - **Selection** runs the full filter → rank → backfill →
//!   country-guarantee → normalize → explain pipeline and implements the
//!   [`Recommender`](cuvee_core::Recommender) trait. See
//!   [`CatalogRecommender`].
//!
//! Everything here is pure and side-effect free: the same catalog
//! snapshot and preferences always produce the same prediction.
//!
//! # Examples
//!
//! ```
//! use cuvee_core::{Preferences, Recommender, Style};
//! use cuvee_reco::CatalogRecommender;
//!
//! let items = cuvee_catalog::default_catalog()
//!     .iter()
//!     .map(cuvee_catalog::normalize)
//!     .collect();
//! let recommender = CatalogRecommender::with_default_aliases(items);
//!
//! let prediction = recommender.predict(
//!     &Preferences::new()
//!         .with_style(Style::Reds)
//!         .with_country("france"),
//! );
//! assert!(prediction.recommendations.len() <= 3);
//! ```

#![forbid(unsafe_code)]

mod expand;
mod score;
mod select;
mod text;

pub use expand::{AliasTable, TermExpander};
pub use score::{PreferenceScorer, matches_term, score_item};
pub use select::{CatalogRecommender, MODEL_VERSION};
pub use text::{normalize_text, strip_whitespace};
