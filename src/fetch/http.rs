//! HTTP-backed fetcher
//!
//! Wraps a `reqwest` client: GET the page, classify the response into the
//! engine's error taxonomy, and extract outbound links when the body is
//! HTML. Redirects are followed by the client; links are resolved against
//! the final URL after redirects.

use crate::config::FetchConfig;
use crate::fetch::links::extract_links;
use crate::fetch::{FetchedPage, Fetcher};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds an HTTP client with the configured user agent and timeouts
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher that retrieves pages over HTTP
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the `[fetch]` configuration section
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_request_error(url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Failed {
                url: url.to_string(),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let final_url = response.url().clone();

        let body = response.text().await.map_err(|e| FetchError::Failed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        // Only HTML bodies carry links worth following.
        let links = if content_type.contains("text/html") {
            extract_links(&body, &final_url)
        } else {
            tracing::debug!("{} is {}, not extracting links", url, content_type);
            Vec::new()
        };

        Ok(FetchedPage {
            content: body,
            links,
        })
    }
}

/// Maps transport-level errors onto the fetch error taxonomy
fn classify_request_error(url: &str, error: reqwest::Error) -> FetchError {
    let reason = if error.is_timeout() {
        "request timeout".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        error.to_string()
    };

    FetchError::Failed {
        url: url.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> FetchConfig {
        FetchConfig {
            user_agent: "webwalk-test/0.1".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_new_fetcher_from_config() {
        let fetcher = HttpFetcher::new(&test_config());
        assert!(fetcher.is_ok());
    }

    // Response handling is covered end-to-end with a mock server in the
    // integration tests.
}
