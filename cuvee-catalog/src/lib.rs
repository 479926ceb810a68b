//! Catalog access and ingestion logic for the Cuvée engine.
//!
//! Responsibilities:
//! - Deserialize untrusted, loosely-shaped catalog records.
//! - Merge multiple source documents into one deduplicated record list.
//! - Normalize every record into the canonical `cuvee-core` item shape.
//! - Provide acquisition adapters for HTTP and the filesystem.
//!
//! Boundaries:
//! - Do not encode scoring or selection rules (live in `cuvee-reco`).
//! - Never let optional raw fields leak past the normalizer.
//!
//! Invariants:
//! - Malformed input degrades to safe defaults, never to errors.
//! - A loaded catalog is never empty; total acquisition failure falls
//!   back to the bundled sample set.

mod merge;
mod normalize;
mod record;
mod source;

pub use merge::{default_catalog, merge};
pub use normalize::normalize;
pub use record::{RawRating, RawRecord, RawScalar};
pub use source::{
    CatalogSource, DEFAULT_SOURCE_NAMES, DirCatalogSource, HttpCatalogSource, SourceBuildError,
    SourceError, load_catalog,
};
