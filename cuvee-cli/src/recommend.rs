//! Recommend command implementation for the Cuvée CLI.

use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;
use cuvee_catalog::{
    CatalogSource, DirCatalogSource, HttpCatalogSource, RawRecord, default_catalog, load_catalog,
    normalize,
};
use cuvee_core::{Item, Prediction, Preferences, Recommender, Style};
use cuvee_reco::CatalogRecommender;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_BASE_URL, ARG_CATALOG_DIR, ARG_COUNTRY, ARG_STYLE, ARG_TERM, CliError, ENV_STYLE};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend up to three wines from a catalog. Styles, a \
                 preferred country, and free-text search terms narrow and \
                 boost the candidates. The catalog comes from a directory \
                 or HTTP base URL serving the named JSON documents; with \
                 neither supplied, the bundled sample catalog is used.",
    about = "Recommend wines for the given preferences"
)]
#[ortho_config(prefix = "CUVEE")]
pub(crate) struct RecommendArgs {
    /// Wine style to include; repeat for several (reds, whites, rose,
    /// port, sparkling).
    #[arg(long = ARG_STYLE, value_name = "style")]
    #[serde(default)]
    pub(crate) style: Option<Vec<String>>,
    /// Preferred country, e.g. "france".
    #[arg(long = ARG_COUNTRY, value_name = "name")]
    #[serde(default)]
    pub(crate) country: Option<String>,
    /// Free-text search term; repeat for several.
    #[arg(long = ARG_TERM, value_name = "text")]
    #[serde(default)]
    pub(crate) term: Option<Vec<String>>,
    /// Directory containing the catalog JSON documents.
    #[arg(long = ARG_CATALOG_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) catalog_dir: Option<Utf8PathBuf>,
    /// Base URL serving the catalog JSON documents.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Emit the prediction as JSON instead of text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    #[serde(default)]
    pub(crate) json: Option<bool>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Where the catalog documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogLocation {
    /// The bundled sample catalog.
    Bundled,
    /// JSON documents read from a directory.
    Directory(Utf8PathBuf),
    /// JSON documents fetched from an HTTP base URL.
    Http(String),
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) styles: Vec<Style>,
    pub(crate) country: Option<String>,
    pub(crate) terms: Vec<String>,
    pub(crate) catalog: CatalogLocation,
    pub(crate) json: bool,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let raw_styles = args.style.unwrap_or_default();
        if raw_styles.is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_STYLE,
                env: ENV_STYLE,
            });
        }
        let styles = raw_styles
            .iter()
            .map(|value| {
                Style::from_str(value).map_err(|_| CliError::InvalidStyle {
                    value: value.clone(),
                })
            })
            .collect::<Result<Vec<Style>, CliError>>()?;

        let catalog = match (args.catalog_dir, args.base_url) {
            (Some(_), Some(_)) => return Err(CliError::ConflictingCatalogSources),
            (Some(dir), None) => CatalogLocation::Directory(dir),
            (None, Some(url)) => CatalogLocation::Http(url),
            (None, None) => CatalogLocation::Bundled,
        };

        Ok(Self {
            styles,
            country: args.country,
            terms: args.term.unwrap_or_default(),
            catalog,
            json: args.json.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let records = load_records(&config.catalog)?;
    let items: Vec<Item> = records.iter().map(normalize).collect();
    let recommender = CatalogRecommender::with_default_aliases(items);
    let prediction = recommender.predict(&build_preferences(&config));
    render(&prediction, config.json)
}

fn build_preferences(config: &RecommendConfig) -> Preferences {
    let mut prefs = Preferences::new()
        .with_styles(config.styles.iter().copied())
        .with_terms(config.terms.iter().cloned());
    if let Some(country) = &config.country {
        prefs = prefs.with_country(country.clone());
    }
    prefs
}

fn load_records(location: &CatalogLocation) -> Result<Vec<RawRecord>, CliError> {
    match location {
        CatalogLocation::Bundled => Ok(default_catalog()),
        CatalogLocation::Directory(dir) => {
            let source = DirCatalogSource::new(dir.clone());
            block_on_catalog(&source)
        }
        CatalogLocation::Http(base_url) => {
            let source = HttpCatalogSource::new(base_url.clone())?;
            block_on_catalog(&source)
        }
    }
}

fn block_on_catalog<S: CatalogSource>(source: &S) -> Result<Vec<RawRecord>, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    Ok(runtime.block_on(load_catalog(source)))
}

fn render(prediction: &Prediction, json: bool) -> Result<(), CliError> {
    if json {
        let payload =
            serde_json::to_string_pretty(prediction).map_err(CliError::SerializePrediction)?;
        println!("{payload}");
        return Ok(());
    }

    if prediction.term_filtered {
        println!("[keyword filter applied]");
    }
    if prediction.term_hint {
        println!("Few exact keyword matches; nearby picks fill the remaining slots.");
    } else if prediction.country_hint {
        println!("No wine from the preferred country matches the selected styles.");
    }

    if prediction.recommendations.is_empty() {
        println!("No recommendations. Select at least one style with catalog coverage.");
    }
    for (rank, reco) in prediction.recommendations.iter().enumerate() {
        println!("{}. {}  [{:.2}]", rank + 1, reco.item.label, reco.score);
        if !reco.item.country.is_empty() {
            println!("   {} · {}", reco.item.country, reco.item.region);
        }
        println!("   {}", reco.why);
    }
    println!(
        "model {} · {} ms",
        prediction.model_version, prediction.inference_ms
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args_with_styles(styles: &[&str]) -> RecommendArgs {
        RecommendArgs {
            style: Some(styles.iter().map(|&style| style.to_owned()).collect()),
            ..RecommendArgs::default()
        }
    }

    #[rstest]
    fn converting_without_styles_errors() {
        let err = RecommendConfig::try_from(RecommendArgs::default())
            .expect_err("missing styles should error");
        match err {
            CliError::MissingArgument { field, env } => {
                assert_eq!(field, ARG_STYLE);
                assert_eq!(env, ENV_STYLE);
            }
            other => panic!("expected MissingArgument, found {other:?}"),
        }
    }

    #[rstest]
    fn styles_parse_case_insensitively() {
        let config = RecommendConfig::try_from(args_with_styles(&["Reds", "SPARKLING"]))
            .expect("config should build");
        assert_eq!(config.styles, vec![Style::Reds, Style::Sparkling]);
        assert_eq!(config.catalog, CatalogLocation::Bundled);
    }

    #[rstest]
    fn unknown_styles_are_rejected() {
        let err = RecommendConfig::try_from(args_with_styles(&["orange"]))
            .expect_err("unknown style should error");
        assert!(matches!(err, CliError::InvalidStyle { value } if value == "orange"));
    }

    #[rstest]
    fn catalog_dir_and_base_url_conflict() {
        let args = RecommendArgs {
            catalog_dir: Some(Utf8PathBuf::from("catalog")),
            base_url: Some("http://wines.example.com".to_owned()),
            ..args_with_styles(&["reds"])
        };
        let err = RecommendConfig::try_from(args).expect_err("conflict should error");
        assert!(matches!(err, CliError::ConflictingCatalogSources));
    }

    #[rstest]
    #[case(Some("catalog"), None)]
    #[case(None, Some("http://wines.example.com"))]
    fn catalog_location_follows_the_supplied_flag(
        #[case] dir: Option<&str>,
        #[case] url: Option<&str>,
    ) {
        let args = RecommendArgs {
            catalog_dir: dir.map(Utf8PathBuf::from),
            base_url: url.map(str::to_owned),
            ..args_with_styles(&["reds"])
        };
        let config = RecommendConfig::try_from(args).expect("config should build");
        match config.catalog {
            CatalogLocation::Directory(path) => assert_eq!(Some(path.as_str()), dir),
            CatalogLocation::Http(base) => assert_eq!(Some(base.as_str()), url),
            CatalogLocation::Bundled => panic!("expected a non-bundled catalog location"),
        }
    }

    #[rstest]
    fn preferences_carry_styles_country_and_terms() {
        let args = RecommendArgs {
            country: Some("France".to_owned()),
            term: Some(vec!["피노 누아".to_owned()]),
            ..args_with_styles(&["reds", "whites"])
        };
        let config = RecommendConfig::try_from(args).expect("config should build");

        let prefs = build_preferences(&config);

        assert!(prefs.prefers_style(Style::Reds));
        assert!(prefs.prefers_style(Style::Whites));
        assert_eq!(prefs.preferred_country().as_deref(), Some("france"));
        assert_eq!(prefs.terms(), &["피노 누아"]);
    }
}
