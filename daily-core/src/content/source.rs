//! Remote sources of quotes and facts.
use crate::config::Config;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Upper bound for a single request, connection included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a remote fetch produced no usable content.
///
/// None of these are fatal: the acquirer answers every one of them with a fallback fact.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed payload from {url}: {reason}")]
    Payload { url: String, reason: String },

    #[error("empty response from {url}")]
    Empty { url: String },

    #[error("network access is disabled")]
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuotePayload {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
struct FactPayload {
    text: String,
}

/// Something that can hand out one quote or one fact per call.
///
/// Implementations may be written with `async fn`; tests substitute canned or failing sources.
pub trait ContentSource {
    fn fetch_quote(&self) -> impl Future<Output = Result<QuotePayload, FetchError>>;

    fn fetch_fact(&self) -> impl Future<Output = Result<String, FetchError>>;
}

/// Fetches content over HTTP from the endpoints in [`Config`].
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    quote_url: String,
    fact_url: String,
}

impl HttpSource {
    pub fn new(quote_url: impl Into<String>, fact_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("daily/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            quote_url: quote_url.into(),
            fact_url: fact_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.quote_url, &config.fact_url)
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let http_error = |source| FetchError::Http {
            url: url.to_string(),
            source,
        };
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(http_error)?;
        response.text().await.map_err(http_error)
    }
}

impl ContentSource for HttpSource {
    async fn fetch_quote(&self) -> Result<QuotePayload, FetchError> {
        let body = self.get_text(&self.quote_url).await?;
        parse_quote_payload(&self.quote_url, &body)
    }

    async fn fetch_fact(&self) -> Result<String, FetchError> {
        let body = self.get_text(&self.fact_url).await?;
        parse_fact_payload(&self.fact_url, &body)
    }
}

/// A source that always fails with [`FetchError::Offline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

impl ContentSource for OfflineSource {
    async fn fetch_quote(&self) -> Result<QuotePayload, FetchError> {
        Err(FetchError::Offline)
    }

    async fn fetch_fact(&self) -> Result<String, FetchError> {
        Err(FetchError::Offline)
    }
}

/// Parses `{"content": "...", "author": "..."}`. Extra fields are ignored.
pub fn parse_quote_payload(url: &str, body: &str) -> Result<QuotePayload, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::Empty {
            url: url.to_string(),
        });
    }
    let quote: QuotePayload =
        serde_json::from_str(body).map_err(|error| FetchError::Payload {
            url: url.to_string(),
            reason: error.to_string(),
        })?;
    if quote.content.trim().is_empty() {
        return Err(FetchError::Payload {
            url: url.to_string(),
            reason: "quote has no content".to_string(),
        });
    }
    Ok(QuotePayload {
        content: quote.content.trim().to_string(),
        author: quote.author.trim().to_string(),
    })
}

/// Accepts either `{"text": "..."}` or a bare plain-text sentence, which is used verbatim.
pub fn parse_fact_payload(url: &str, body: &str) -> Result<String, FetchError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(FetchError::Empty {
            url: url.to_string(),
        });
    }
    if !trimmed.starts_with('{') {
        return Ok(trimmed.to_string());
    }
    let fact: FactPayload =
        serde_json::from_str(trimmed).map_err(|error| FetchError::Payload {
            url: url.to_string(),
            reason: error.to_string(),
        })?;
    let text = fact.text.trim();
    if text.is_empty() {
        return Err(FetchError::Empty {
            url: url.to_string(),
        });
    }
    Ok(text.to_string())
}
