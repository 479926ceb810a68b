//! Facade crate for the Cuvée wine recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring engine,
//! and exposes catalog ingestion behind a feature flag.

#![forbid(unsafe_code)]

pub use cuvee_core::{
    Item, ItemId, Prediction, Preferences, Recommendation, Recommender, Scorer, Style,
};

pub use cuvee_reco::{
    AliasTable, CatalogRecommender, MODEL_VERSION, PreferenceScorer, TermExpander, matches_term,
    normalize_text, score_item, strip_whitespace,
};

#[cfg(feature = "catalog")]
pub use cuvee_catalog::{
    CatalogSource, DEFAULT_SOURCE_NAMES, DirCatalogSource, HttpCatalogSource, RawRating,
    RawRecord, RawScalar, SourceBuildError, SourceError, default_catalog, load_catalog, merge,
    normalize,
};
