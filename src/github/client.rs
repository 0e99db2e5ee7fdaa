//! HTTP client for GitHub REST API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the GitHub API, handling authentication, pagination, and response parsing.

use super::GithubError;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("gh2jira/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// Makes requests to GitHub and tries to conform response data to given model.
///
pub struct Client {
    pub(crate) access_token: Option<String>,
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given access token and base URL.
    ///
    pub fn new(access_token: Option<&str>, base_url: &str) -> Result<Self, GithubError> {
        Ok(Client {
            access_token: access_token.map(str::to_owned),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
        })
    }

    /// Return every record of a list endpoint, following page-number
    /// pagination until a page shorter than `per_page` comes back.
    ///
    pub async fn list_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        per_page: usize,
    ) -> Result<Vec<T>, GithubError> {
        let per_page_str = per_page.to_string();
        let mut all_data = Vec::new();
        let mut page = 1usize;

        loop {
            let page_str = page.to_string();
            let mut page_params: Vec<(&str, &str)> = params.to_vec();
            page_params.push(("per_page", per_page_str.as_str()));
            page_params.push(("page", page_str.as_str()));

            let response = self.call(Method::GET, path, &page_params).await?;
            let status = response.status();

            // Check status before trying to deserialize
            if !status.is_success() {
                let response_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("Unable to read response"));
                log::error!(
                    "API request failed with status {}: {}",
                    status,
                    response_text
                );
                return Err(GithubError::ApiError {
                    status: status.as_u16(),
                    message: response_text,
                });
            }

            let response_bytes = response.bytes().await?;
            let page_data = match serde_json::from_slice::<Vec<T>>(&response_bytes) {
                Ok(data) => data,
                Err(e) => {
                    log::error!(
                        "Failed to deserialize API response: {}. Response body: {}",
                        e,
                        String::from_utf8_lossy(&response_bytes)
                    );
                    return Err(e.into());
                }
            };

            let page_size = page_data.len();
            all_data.extend(page_data);
            log::debug!(
                "Fetched {} page {}: {} items (total so far: {})",
                path,
                page,
                page_size,
                all_data.len()
            );

            if page_size < per_page {
                break;
            }
            page += 1;
        }

        log::debug!(
            "Completed paginated fetch of {}: {} total items across {} pages",
            path,
            all_data.len(),
            page
        );
        Ok(all_data)
    }

    /// Make request and return response or error.
    ///
    async fn call(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Response, GithubError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut request = self
            .http_client
            .request(method, &request_url)
            .header("Accept", ACCEPT)
            .query(params);

        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        Ok(request.send().await?)
    }
}
