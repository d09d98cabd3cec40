//! HTTP client for stable API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the stable API, mapping non-success responses to typed errors carrying
//! the server's error detail when present.

use super::error::StableError;
use super::models::ErrorDetail;
use reqwest::{Method, Response};

/// Makes requests to the stable API and normalizes failure responses.
///
pub(crate) struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Make a request and return the successful response. Non-success
    /// statuses are turned into an API error with the parsed error detail
    /// from the response body, if it carries one.
    ///
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        params: Option<Vec<(&str, &str)>>,
        body: Option<serde_json::Value>,
    ) -> Result<Response, StableError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut request = self.http_client.request(method, &url);
        if let Some(params) = params {
            request = request.query(&params);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorDetail>()
                .await
                .ok()
                .map(|body| body.detail);
            return Err(StableError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }
}
