//! HTTP client for the scrapers
//!
//! A thin reqwest wrapper that reports every HTTP status as data. Pacing is
//! the caller's job (see `application::delay`), so there is no rate limiter
//! here.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::application::page_fetcher::{FetchedPage, PageFetcher};
use crate::infrastructure::config::HttpConfig;

/// HTTP client used by both pipelines
pub struct HttpClient {
    client: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            });
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        tracing::debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch URL: {url}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from: {url}"))?;

        tracing::debug!("Fetched {} ({}, {} chars)", url, status, body.len());
        Ok(FetchedPage::new(url, status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new(HttpConfig::default()).unwrap();
        assert!(client.config().timeout_seconds.is_none());
    }

    #[test]
    fn test_http_client_with_timeout() {
        let config = HttpConfig {
            timeout_seconds: Some(5),
            follow_redirects: false,
            ..HttpConfig::default()
        };
        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.config().timeout_seconds, Some(5));
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let config = HttpConfig {
            user_agent: "bad\nagent".to_string(),
            ..HttpConfig::default()
        };
        assert!(HttpClient::new(config).is_err());
    }
}
