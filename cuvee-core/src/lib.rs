//! Core domain types for the Cuvée recommendation engine.
//!
//! This crate defines the canonical shapes the pipeline works with —
//! [`Item`], [`Style`], [`Preferences`], [`Prediction`] — and the trait
//! seams ([`Scorer`], [`Recommender`]) other crates implement. It holds
//! no I/O: raw catalog ingestion lives in `cuvee-catalog`, scoring and
//! selection in `cuvee-reco`.

mod item;
mod prefs;
mod recommend;
mod scorer;
mod style;

pub use item::{Item, ItemId};
pub use prefs::Preferences;
pub use recommend::{Prediction, Recommendation, Recommender};
pub use scorer::Scorer;
pub use style::Style;
