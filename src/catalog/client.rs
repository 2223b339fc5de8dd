// src/catalog/client.rs

use std::fmt;
use std::path::PathBuf;

use anyhow::Context;

use crate::catalog::models::ModeRecord;

/// Where the catalog JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// `http://` and `https://` strings are URLs, anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogSource::Url(raw.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Load every record from `source`. Called once at startup; never retried.
    pub async fn fetch(&self, source: &CatalogSource) -> anyhow::Result<Vec<ModeRecord>> {
        let records: Vec<ModeRecord> = match source {
            CatalogSource::Path(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("cannot read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("invalid catalog JSON in {}", path.display()))?
            }
            CatalogSource::Url(url) => self
                .http
                .get(url)
                .send()
                .await
                .and_then(|resp| resp.error_for_status())
                .with_context(|| format!("cannot fetch {url}"))?
                .json::<Vec<ModeRecord>>()
                .await
                .with_context(|| format!("invalid catalog JSON from {url}"))?,
        };
        Ok(records)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
