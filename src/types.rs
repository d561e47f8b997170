use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Credential field key for the API key.
pub const API_KEY_FIELD: &str = "api-key";
/// Credential field key for the account name.
pub const ACCOUNT_FIELD: &str = "account";

/// API credentials: an API key plus the name of the account owning the
/// domain.
///
/// Immutable for the lifetime of the process; each challenge operation
/// builds its own authenticated client from these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Alwaysdata API key (e.g. `"123456789abcdef"`).
    pub api_key: String,
    /// Name of the account owning the domain (e.g. `"nymous"`).
    pub account: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            account: account.into(),
        }
    }

    /// Construct credentials from a flat key/value source, validating that
    /// both required fields are present and non-empty.
    ///
    /// Keys are [`API_KEY_FIELD`] and [`ACCOUNT_FIELD`], matching the
    /// credential-file convention of the hosting certificate framework.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError`] if a required field is missing or empty.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialsError> {
        Ok(Self {
            api_key: Self::get_required_field(map, API_KEY_FIELD, "API key")?,
            account: Self::get_required_field(map, ACCOUNT_FIELD, "Account")?,
        })
    }

    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialsError> {
        match map.get(key) {
            None => Err(CredentialsError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialsError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }

    /// The composite basic-auth username the API expects; the password is
    /// always empty.
    pub(crate) fn auth_user(&self) -> String {
        format!("{} account={}", self.api_key, self.account)
    }
}

/// Configuration error for provider credentials.
///
/// Distinct from [`ProviderError`](crate::ProviderError): a credentials
/// problem is a local misconfiguration, not an API failure.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialsError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A client was requested before credentials were supplied.
    NotConfigured,
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => {
                write!(f, "Missing required credential: {label}")
            }
            Self::EmptyField { label, .. } => {
                write!(f, "Credential must not be empty: {label}")
            }
            Self::NotConfigured => write!(f, "Credentials have not been configured"),
        }
    }
}

impl std::error::Error for CredentialsError {}

/// A TXT record as seen by consumers of the crate.
///
/// Decoupled from the provider's wire shape; `name` is relative to the
/// owning zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxtRecord {
    /// Record name, relative to the owning zone.
    pub name: String,
    /// Record content.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}
