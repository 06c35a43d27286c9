use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Retrieval boundary for everything the map does not embed. Implementations
/// own their timeout and retry policy; callers never retry on top.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0 Safari/537.36";

/// HTTP(S) fetcher with a shared client, a desktop User-Agent, and a
/// 30 second request timeout. Transient failures are retried up to
/// `attempts` times.
pub struct HttpFetcher {
    client: Client,
    attempts: usize,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_attempts(3)
    }

    pub fn with_attempts(attempts: usize) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            attempts: attempts.max(1),
        })
    }

    async fn fetch_once(&self, url: Url) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let url = Url::parse(location)?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(FetchError::UnsupportedScheme(other.to_string())),
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.fetch_once(url.clone()).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt >= self.attempts => return Err(e),
                Err(_) => {}
            }
        }
    }
}
