//! Catalog acquisition collaborators.
//!
//! A [`CatalogSource`] supplies named JSON documents in a fixed priority
//! order. Fetch completion order carries no meaning — merge priority
//! always follows the name list. Every source failure is independent: a
//! broken document is skipped, never aborting the others, and a total
//! failure degrades to the bundled default catalog.

use std::time::Duration;

use async_trait::async_trait;
use camino::Utf8PathBuf;
use futures_util::future::join_all;
use log::warn;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::merge::merge;
use crate::record::RawRecord;

/// Named documents fetched for the catalog, in merge priority order.
pub const DEFAULT_SOURCE_NAMES: [&str; 5] = [
    "wines_reds.json",
    "wines_whites.json",
    "wines_rose.json",
    "wines_port.json",
    "wines_sparkling.json",
];

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors building an HTTP catalog source.
#[derive(Debug, Error)]
pub enum SourceBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors fetching one named catalog document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The server answered with a failure status.
    #[error("source {url} returned HTTP status {status}")]
    Http {
        /// Requested document URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The server could not be reached.
    #[error("failed to reach source {url}: {message}")]
    Network {
        /// Requested document URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The document body was not valid JSON.
    #[error("source {location} is not valid JSON")]
    Decode {
        /// Document URL or file path.
        location: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// A document file could not be read.
    #[error("failed to read source file {path}")]
    Io {
        /// Document file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Supplier of named catalog documents.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Named documents this source supplies, in merge priority order.
    fn names(&self) -> &[String];

    /// Fetch one named document.
    async fn fetch(&self, name: &str) -> Result<Value, SourceError>;
}

/// HTTP implementation of [`CatalogSource`].
#[derive(Debug)]
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
    names: Vec<String>,
}

impl HttpCatalogSource {
    /// Construct an HTTP-backed source serving the default document
    /// names under `base_url`.
    ///
    /// # Errors
    /// Returns [`SourceBuildError`] when the HTTP client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceBuildError> {
        let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            names: default_names(),
        })
    }

    /// Override the fetched document names, keeping their order as the
    /// merge priority.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    fn document_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    fn names(&self) -> &[String] {
        &self.names
    }

    async fn fetch(&self, name: &str) -> Result<Value, SourceError> {
        let url = self.document_url(name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, &url))?;
        let body = response
            .text()
            .await
            .map_err(|err| convert_reqwest_error(&err, &url))?;
        serde_json::from_str(&body).map_err(|source| SourceError::Decode {
            location: url,
            source,
        })
    }
}

/// Filesystem implementation of [`CatalogSource`] reading the same named
/// documents from a directory.
#[derive(Debug, Clone)]
pub struct DirCatalogSource {
    dir: Utf8PathBuf,
    names: Vec<String>,
}

impl DirCatalogSource {
    /// Construct a directory-backed source serving the default document
    /// names.
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            names: default_names(),
        }
    }

    /// Override the read document names, keeping their order as the
    /// merge priority.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait(?Send)]
impl CatalogSource for DirCatalogSource {
    fn names(&self) -> &[String] {
        &self.names
    }

    async fn fetch(&self, name: &str) -> Result<Value, SourceError> {
        let path = self.dir.join(name);
        let body = tokio::fs::read_to_string(path.as_std_path())
            .await
            .map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|source| SourceError::Decode {
            location: path.into_string(),
            source,
        })
    }
}

/// Fetch every named document from `source` and merge the results.
///
/// Fetches run concurrently; results are merged in name order
/// regardless of completion order. A failed or malformed document is
/// logged and skipped. When nothing usable arrives, the bundled default
/// catalog is returned — the result is never empty.
pub async fn load_catalog<S>(source: &S) -> Vec<RawRecord>
where
    S: CatalogSource + ?Sized,
{
    let fetches = source.names().iter().map(|name| source.fetch(name));
    let outcomes = join_all(fetches).await;
    let documents: Vec<Value> = source
        .names()
        .iter()
        .zip(outcomes)
        .filter_map(|(name, outcome)| match outcome {
            Ok(document) => Some(document),
            Err(err) => {
                warn!("skipping catalog source {name}: {err}");
                None
            }
        })
        .collect();
    merge(&documents)
}

fn default_names() -> Vec<String> {
    DEFAULT_SOURCE_NAMES.iter().map(|&name| name.to_owned()).collect()
}

fn convert_reqwest_error(error: &reqwest::Error, url: &str) -> SourceError {
    if let Some(status) = error.status() {
        return SourceError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
        };
    }

    SourceError::Network {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::default_catalog;
    use rstest::rstest;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// In-memory source used to exercise merge priority and failure
    /// tolerance without a network.
    struct StaticSource {
        names: Vec<String>,
        documents: HashMap<String, Value>,
    }

    impl StaticSource {
        fn new<const N: usize>(entries: [(&str, Option<Value>); N]) -> Self {
            let names = entries.iter().map(|(name, _)| (*name).to_owned()).collect();
            let documents = entries
                .into_iter()
                .filter_map(|(name, document)| document.map(|doc| (name.to_owned(), doc)))
                .collect();
            Self { names, documents }
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for StaticSource {
        fn names(&self) -> &[String] {
            &self.names
        }

        async fn fetch(&self, name: &str) -> Result<Value, SourceError> {
            self.documents
                .get(name)
                .cloned()
                .ok_or_else(|| SourceError::Http {
                    url: name.to_owned(),
                    status: 404,
                })
        }
    }

    #[rstest]
    fn document_urls_join_base_and_name() {
        let source = HttpCatalogSource::new("http://wines.example.com/")
            .expect("client should build");
        assert_eq!(
            source.document_url("wines_reds.json"),
            "http://wines.example.com/wines_reds.json"
        );
    }

    #[rstest]
    fn default_names_follow_priority_order() {
        let source = DirCatalogSource::new("catalog");
        assert_eq!(source.names(), &DEFAULT_SOURCE_NAMES);
    }

    #[tokio::test]
    async fn failed_sources_never_abort_the_others() {
        let source = StaticSource::new([
            ("first.json", Some(json!([{ "winery": "A", "id": 1 }]))),
            ("missing.json", None),
            ("second.json", Some(json!([{ "winery": "B", "id": 2 }]))),
        ]);

        let records = load_catalog(&source).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].winery.as_deref(), Some("A"));
        assert_eq!(records[1].winery.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn merge_priority_follows_name_order() {
        let source = StaticSource::new([
            ("preferred.json", Some(json!([{ "winery": "Keep", "id": 1 }]))),
            ("fallback.json", Some(json!([{ "winery": "Drop", "id": 1 }]))),
        ]);

        let records = load_catalog(&source).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].winery.as_deref(), Some("Keep"));
    }

    #[tokio::test]
    async fn total_failure_degrades_to_the_bundled_catalog() {
        let source = StaticSource::new([("missing.json", None)]);
        assert_eq!(load_catalog(&source).await, default_catalog());
    }

    #[tokio::test]
    async fn directory_sources_read_and_tolerate_broken_documents() {
        let tmp = TempDir::new().expect("tempdir");
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        std::fs::write(
            dir.join("wines_reds.json").as_std_path(),
            r#"[{ "winery": "Maselva", "wine": "Emporda 2012", "id": 1 }]"#,
        )
        .expect("write reds");
        std::fs::write(dir.join("wines_whites.json").as_std_path(), "not json")
            .expect("write broken whites");

        let source = DirCatalogSource::new(dir);
        let records = load_catalog(&source).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].winery.as_deref(), Some("Maselva"));
    }
}
