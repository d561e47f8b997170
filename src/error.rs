use serde::{Deserialize, Serialize};

/// Error type for all Alwaysdata API operations.
///
/// All variants are serializable for structured error reporting.
///
/// Operations on the perform path (record creation, zone resolution) surface
/// these errors to the caller; the cleanup path downgrades them to warnings
/// instead (see [`del_txt_record`](crate::Dns01Provider::del_txt_record)).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rejected the composite `"<api-key> account=<account>"`
    /// credential (HTTP 401/403).
    InvalidCredentials {
        /// Response body from the API, if available.
        raw_message: Option<String>,
    },

    /// No managed zone owns the given domain.
    ///
    /// Carries every candidate zone name that was tried, most-specific first.
    DomainNotFound {
        /// Domain the zone search started from.
        domain: String,
        /// Candidate zone names attempted, in order.
        attempted: Vec<String>,
    },

    /// The API returned a non-success status for a write or lookup.
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Response body from the API.
        detail: String,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

impl ProviderError {
    /// Whether this error is an expected outcome (bad input, missing zone)
    /// rather than an operational failure, for log levelling.
    ///
    /// Returns `true` when `warn` is the right level, `false` for `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::DomainNotFound { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::DomainNotFound { domain, attempted } => {
                write!(
                    f,
                    "Unable to determine zone for '{domain}' using zone names: {}",
                    attempted.join(", ")
                )
            }
            Self::ApiError { status, detail } => {
                write!(f, "API error (HTTP {status}): {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
