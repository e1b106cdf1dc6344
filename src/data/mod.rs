use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::PathBuf;
use url::Url;

use crate::logging::{log, log_load_failure, obj, v_num, v_str, Domain, Level};
use crate::render::page::StatusLine;

/// One observation: deviation from the base temperature for a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    pub month: i32,
    pub variance: f64,
}

impl MonthlyVariance {
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

impl Dataset {
    /// SHA-256 over the canonical JSON encoding.
    pub fn fingerprint(&self) -> String {
        let encoded = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&encoded))
    }
}

#[derive(Debug)]
pub enum LoadError {
    Transport(String),
    Status(u16),
    Io(String),
    Parse(String),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => "transport",
            LoadError::Status(_) => "status",
            LoadError::Io(_) => "io",
            LoadError::Parse(_) => "parse",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(e) => write!(f, "request failed: {}", e),
            LoadError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            LoadError::Io(e) => write!(f, "read failed: {}", e),
            LoadError::Parse(e) => write!(f, "malformed dataset: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where the dataset body comes from. One attempt per call, no retry.
#[async_trait]
pub trait DataSource {
    fn describe(&self) -> String;
    async fn fetch_body(&self) -> Result<String, LoadError>;
}

pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_body(&self) -> Result<String, LoadError> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        resp.text().await.map_err(|e| LoadError::Transport(e.to_string()))
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn fetch_body(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io(e.to_string()))
    }
}

pub fn parse_dataset(body: &str) -> Result<Dataset, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))
}

pub async fn fetch_dataset(source: &(dyn DataSource + Send + Sync)) -> Result<Dataset, LoadError> {
    let body = source.fetch_body().await?;
    parse_dataset(&body)
}

/// Fetch and parse, then append the base temperature to `status`.
///
/// Failures are logged and swallowed: the caller gets `None` and leaves the
/// chart surface empty.
pub async fn load_into(
    source: &(dyn DataSource + Send + Sync),
    status: &mut StatusLine,
) -> Option<Dataset> {
    match fetch_dataset(source).await {
        Ok(dataset) => {
            status.append_base_temperature(dataset.base_temperature);
            log(
                Level::Info,
                Domain::Data,
                "load.ok",
                obj(&[
                    ("source", v_str(&source.describe())),
                    ("observations", v_num(dataset.monthly_variance.len() as f64)),
                    ("base_temperature", v_num(dataset.base_temperature)),
                    ("fingerprint", v_str(&dataset.fingerprint())),
                ]),
            );
            Some(dataset)
        }
        Err(err) => {
            log_load_failure(&source.describe(), err.kind(), &err.to_string());
            None
        }
    }
}
