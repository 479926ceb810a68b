//! Command-line interface for the Cuvée wine recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

const ARG_STYLE: &str = "style";
const ARG_COUNTRY: &str = "country";
const ARG_TERM: &str = "term";
const ARG_CATALOG_DIR: &str = "catalog-dir";
const ARG_BASE_URL: &str = "base-url";
const ENV_STYLE: &str = "CUVEE_CMDS_RECOMMEND_STYLE";

/// Run the Cuvée CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cuvee",
    about = "Wine recommendations from soft taste preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend up to three wines for the given preferences.
    Recommend(recommend::RecommendArgs),
}
