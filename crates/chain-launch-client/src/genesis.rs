use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Error, Debug)]
pub enum GenesisError {
    #[error("Invalid genesis URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported genesis URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Failed to fetch genesis: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Genesis fetch from {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Genesis is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fetched genesis file and the hash of its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    pub content: Vec<u8>,
    pub hash: String,
}

impl Genesis {
    /// Check that `content` is a JSON document and hash it.
    pub fn from_bytes(content: Vec<u8>) -> Result<Self, GenesisError> {
        serde_json::from_slice::<serde_json::Value>(&content)?;
        let hash = genesis_hash(&content);
        Ok(Self { content, hash })
    }
}

/// Lower-case hex SHA-256 of the raw genesis bytes.
pub fn genesis_hash(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

#[async_trait]
pub trait GenesisFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Genesis, GenesisError>;
}

#[derive(Debug, Clone)]
pub struct GenesisFetcherConfig {
    /// Timeout for the whole download.
    pub timeout: Duration,
}

impl Default for GenesisFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// Downloads genesis files over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpGenesisFetcher {
    http: reqwest::Client,
}

impl HttpGenesisFetcher {
    pub fn new() -> Result<Self, GenesisError> {
        Self::with_config(GenesisFetcherConfig::default())
    }

    pub fn with_config(config: GenesisFetcherConfig) -> Result<Self, GenesisError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl GenesisFetcher for HttpGenesisFetcher {
    async fn fetch(&self, url: &str) -> Result<Genesis, GenesisError> {
        let parsed = parse_genesis_url(url)?;

        debug!(url = %parsed, "Fetching genesis");
        let response = self.http.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenesisError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content = response.bytes().await?.to_vec();
        let genesis = Genesis::from_bytes(content)?;
        debug!(url, hash = %genesis.hash, bytes = genesis.content.len(), "Fetched genesis");
        Ok(genesis)
    }
}

fn parse_genesis_url(url: &str) -> Result<Url, GenesisError> {
    let parsed = Url::parse(url).map_err(|source| GenesisError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(GenesisError::UnsupportedScheme(other.to_string())),
    }
}
