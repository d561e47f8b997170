//! Alwaysdata DNS provider client.

mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::types::Credentials;

pub use provider::{canonical_record_name, zone_candidates};
pub(crate) use types::{AlwaysdataRecord, AlwaysdataZone, CreateRecordBody};

pub(crate) const API_BASE: &str = "https://api.alwaysdata.com";
/// TTL submitted for challenge TXT records, in seconds.
pub const CHALLENGE_TTL: u32 = 60;

const USER_AGENT: &str = concat!("alwaysdata-dns01/", env!("CARGO_PKG_VERSION"));

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Alwaysdata DNS API.
///
/// Holds one HTTP session authenticated with the composite
/// `"<api-key> account=<account>"` credential. Every request carries the
/// `alwaysdata-synchronous: yes` header so writes are processed before the
/// response returns, which avoids polling for eventual consistency.
pub struct AlwaysdataClient {
    pub(crate) client: Client,
    pub(crate) auth_user: String,
    pub(crate) base_url: String,
}

impl AlwaysdataClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: create_http_client(),
            auth_user: credentials.auth_user(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Override the API endpoint, e.g. to point at a mock server in tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}
