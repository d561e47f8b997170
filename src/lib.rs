//! # alwaysdata-dns01
//!
//! dns-01 challenge fulfillment against the [Alwaysdata](https://www.alwaysdata.com/)
//! DNS API: publish the validation TXT record before a challenge, remove it
//! afterwards.
//!
//! The crate is thin glue over the provider's REST API. The interesting parts
//! are zone resolution (progressively shorter candidate names, exact matches
//! only) and the deliberately cautious cleanup policy: when the deletion
//! target is ambiguous, nothing is deleted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alwaysdata_dns01::{Authenticator, Credentials};
//!
//! # async fn example() -> Result<(), alwaysdata_dns01::AuthenticatorError> {
//! let mut authenticator = Authenticator::new();
//! authenticator.set_credentials(Credentials::new("123456789abcdef", "nymous"));
//!
//! authenticator
//!     .perform("example.com", "_acme-challenge.example.com", "validation-token")
//!     .await?;
//! authenticator.wait_propagation().await;
//!
//! // ... the ACME server validates the challenge here ...
//!
//! authenticator
//!     .cleanup("example.com", "_acme-challenge.example.com", "validation-token")
//!     .await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! The perform path is strict: [`Authenticator::perform`] surfaces every
//! failure ([`ProviderError`] for API/transport problems,
//! [`CredentialsError`] for local misconfiguration) so the issuance attempt
//! aborts. The cleanup path is forgiving: [`Authenticator::cleanup`] logs
//! failures and returns, since a leftover TXT record is preferable to a
//! failed renewal batch.
//!
//! ## TLS backend
//!
//! - **`native-tls`** *(default)* — the platform's native TLS implementation.
//! - **`rustls`** — rustls, recommended for cross-compilation.

mod alwaysdata;
mod authenticator;
mod error;
mod traits;
mod types;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export the provider seam and its implementation
pub use alwaysdata::{AlwaysdataClient, CHALLENGE_TTL, canonical_record_name, zone_candidates};
pub use traits::Dns01Provider;

// Re-export challenge glue
pub use authenticator::{Authenticator, AuthenticatorError, DEFAULT_PROPAGATION_SECS};

// Re-export configuration types
pub use types::{ACCOUNT_FIELD, API_KEY_FIELD, Credentials, CredentialsError, TxtRecord};
