//! Challenge lifecycle glue between a certificate-issuance flow and the
//! provider client.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::alwaysdata::{AlwaysdataClient, CHALLENGE_TTL};
use crate::error::ProviderError;
use crate::traits::Dns01Provider;
use crate::types::{Credentials, CredentialsError};

/// Default seconds to wait for DNS propagation between record creation and
/// challenge validation.
pub const DEFAULT_PROPAGATION_SECS: u64 = 10;

/// Error surfaced by the perform path of the [`Authenticator`].
#[derive(Debug, Error)]
pub enum AuthenticatorError {
    /// Credentials are missing or invalid; a local misconfiguration.
    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    /// The provider API could not complete the operation.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Fulfills the dns-01 challenge contract against the Alwaysdata API.
///
/// [`perform`](Self::perform) publishes the validation TXT record and fails
/// loudly; [`cleanup`](Self::cleanup) removes it and never fails, so a
/// broken cleanup cannot abort a renewal batch.
///
/// Each operation constructs its own client from the stored credentials;
/// nothing is shared across concurrent invocations.
pub struct Authenticator {
    credentials: Option<Credentials>,
    propagation: Duration,
    api_url: Option<String>,
}

impl Authenticator {
    pub fn new() -> Self {
        Self {
            credentials: None,
            propagation: Duration::from_secs(DEFAULT_PROPAGATION_SECS),
            api_url: None,
        }
    }

    /// Override the propagation wait.
    #[must_use]
    pub fn with_propagation(mut self, wait: Duration) -> Self {
        self.propagation = wait;
        self
    }

    /// Override the API endpoint, e.g. to point at a mock server in tests.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Supply credentials from a flat key/value source (`api-key`,
    /// `account`), validating both fields.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError`] if a field is missing or empty.
    pub fn setup_credentials(
        &mut self,
        source: &HashMap<String, String>,
    ) -> Result<(), CredentialsError> {
        self.credentials = Some(Credentials::from_map(source)?);
        Ok(())
    }

    /// Supply already-validated credentials.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// The configured propagation wait.
    pub fn propagation(&self) -> Duration {
        self.propagation
    }

    /// Sleep for the propagation wait, giving DNS caches time to pick up a
    /// freshly created record before validation is attempted.
    pub async fn wait_propagation(&self) {
        log::debug!(
            "Waiting {}s for DNS propagation",
            self.propagation.as_secs()
        );
        tokio::time::sleep(self.propagation).await;
    }

    /// Publish the validation TXT record for a dns-01 challenge.
    ///
    /// # Errors
    ///
    /// Any failure aborts the issuance attempt: missing credentials, zone
    /// resolution failure, transport error, or a non-success API status.
    pub async fn perform(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<(), AuthenticatorError> {
        self.client()?
            .add_txt_record(domain, validation_name, validation, CHALLENGE_TTL)
            .await?;
        Ok(())
    }

    /// Remove the validation TXT record after the challenge.
    ///
    /// Best-effort: every failure is logged and swallowed so cleanup never
    /// masks a successful issuance.
    pub async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                log::warn!("Skipping dns-01 cleanup: {e}");
                return;
            }
        };
        if let Err(e) = client
            .del_txt_record(domain, validation_name, validation)
            .await
        {
            if e.is_expected() {
                log::warn!("dns-01 cleanup for '{validation_name}' failed: {e}");
            } else {
                log::error!("dns-01 cleanup for '{validation_name}' failed: {e}");
            }
        }
    }

    fn client(&self) -> Result<AlwaysdataClient, CredentialsError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CredentialsError::NotConfigured)?;
        let client = AlwaysdataClient::new(credentials);
        Ok(match &self.api_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        })
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_before_credentials_is_a_config_error() {
        let authenticator = Authenticator::new();
        let res = authenticator.client();
        assert!(
            matches!(&res, Err(CredentialsError::NotConfigured)),
            "unexpected result: {:?}",
            res.err()
        );
    }

    #[test]
    fn default_propagation_is_ten_seconds() {
        let authenticator = Authenticator::new();
        assert_eq!(authenticator.propagation(), Duration::from_secs(10));
    }

    #[test]
    fn propagation_override() {
        let authenticator =
            Authenticator::new().with_propagation(Duration::from_secs(120));
        assert_eq!(authenticator.propagation(), Duration::from_secs(120));
    }

    #[test]
    fn setup_credentials_validates_fields() {
        let mut authenticator = Authenticator::new();
        let source: HashMap<String, String> =
            [("account".to_string(), "nymous".to_string())].into();
        let res = authenticator.setup_credentials(&source);
        assert!(
            matches!(&res, Err(CredentialsError::MissingField { field, .. }) if field == "api-key"),
            "unexpected result: {res:?}"
        );
    }
}
