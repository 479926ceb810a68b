//! Error types emitted by the Cuvée CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers return
//! `Result<_, CliError>` throughout.

use std::sync::Arc;

use cuvee_catalog::SourceBuildError;
use thiserror::Error;

/// Errors emitted by the Cuvée CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A style value was not recognised.
    #[error("unrecognised style {value:?} (expected reds, whites, rose, port, or sparkling)")]
    InvalidStyle { value: String },
    /// A catalog directory and a base URL were both supplied.
    #[error("--catalog-dir and --base-url are mutually exclusive")]
    ConflictingCatalogSources,
    /// Building the HTTP catalog source failed.
    #[error(transparent)]
    BuildSource(#[from] SourceBuildError),
    /// Building the async runtime for catalog acquisition failed.
    #[error("failed to build async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Serializing the prediction to JSON failed.
    #[error("failed to serialize prediction: {0}")]
    SerializePrediction(#[source] serde_json::Error),
}
