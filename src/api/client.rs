//! HTTP client construction and JSON fetching
//!
//! This module handles the HTTP side of the ingester:
//! - Building a reqwest client carrying the fixed Accept/User-Agent pair
//!   the upstream API's bot filtering expects
//! - GET requests for JSON resources with error classification

use crate::{HolocronError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Accept header sent with every request
pub const ACCEPT_JSON: &str = "application/json";

/// User agent identifying this tool to the upstream API
pub const USER_AGENT: &str = concat!("holocron/", env!("CARGO_PKG_VERSION"));

/// Builds an HTTP client with proper configuration
///
/// Every request carries the fixed `Accept: application/json` and
/// `User-Agent: holocron/<version>` pair.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Thin wrapper around the HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url`
    pub fn new(base_url: Url) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self { client, base_url })
    }

    /// URL of the primary character resource for `person_id`
    pub fn person_url(&self, person_id: u32) -> String {
        format!(
            "{}/people/{}/",
            self.base_url.as_str().trim_end_matches('/'),
            person_id
        )
    }

    /// Fetches `url` and parses the body as JSON
    ///
    /// Any non-2xx status or unparseable body is an error; this is the
    /// strict path used for sub-resource resolution.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let (status, body) = self.get_raw(url).await?;

        if !status.is_success() {
            return Err(HolocronError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|source| HolocronError::MalformedResource {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches `url`, returning status and raw body without status filtering
    ///
    /// The primary-record path needs to inspect the body of a not-found
    /// response, so status interpretation is left to the caller here.
    pub async fn get_raw(&self, url: &str) -> Result<(StatusCode, String)> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| HolocronError::Http {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| HolocronError::Http {
                url: url.to_string(),
                source,
            })?;

        Ok((status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("holocron/"));
    }

    #[test]
    fn test_person_url_template() {
        let base = Url::parse("https://swapi.py4e.com/api").unwrap();
        let client = ApiClient::new(base).unwrap();
        assert_eq!(
            client.person_url(4),
            "https://swapi.py4e.com/api/people/4/"
        );
    }

    #[test]
    fn test_person_url_with_trailing_slash_base() {
        let base = Url::parse("https://swapi.py4e.com/api/").unwrap();
        let client = ApiClient::new(base).unwrap();
        assert_eq!(
            client.person_url(1),
            "https://swapi.py4e.com/api/people/1/"
        );
    }
}
