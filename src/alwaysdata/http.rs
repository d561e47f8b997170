//! Alwaysdata HTTP request helpers.
//!
//! One shape for every call: build the request with the session auth and the
//! synchronous-processing header, send it, map transport failures, and hand
//! the status plus raw body back to the caller. Status policy (skip a zone
//! candidate, fail the perform path, downgrade on the cleanup path) stays in
//! `provider.rs`.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};

use super::{AlwaysdataClient, USER_AGENT};

impl AlwaysdataClient {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .basic_auth(&self.auth_user, Some(""))
            .header("User-Agent", USER_AGENT)
            .header("alwaysdata-synchronous", "yes")
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<(u16, String)> {
        log::debug!("GET {path} {query:?}");
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(u16, String)> {
        log::debug!("POST {path}");
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(u16, String)> {
        log::debug!("DELETE {path}");
        self.send(self.request(Method::DELETE, path)).await
    }

    async fn send(&self, request_builder: RequestBuilder) -> Result<(u16, String)> {
        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response body: {body}");

        // A rejected credential is never candidate- or status-policy
        // dependent; surface it here for every call site.
        if matches!(status, 401 | 403) {
            return Err(ProviderError::InvalidCredentials {
                raw_message: Some(body),
            });
        }

        Ok((status, body))
    }
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {body}");
        ProviderError::ParseError {
            detail: e.to_string(),
        }
    })
}

pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
