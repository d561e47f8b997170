use async_trait::async_trait;

use crate::error::Result;
use crate::types::TxtRecord;

/// The provider seam for dns-01 challenge records.
///
/// An implementation manages the TXT record a certificate authority checks
/// during a dns-01 challenge: publish it before validation, remove it after.
/// Record names are passed fully qualified (e.g. `_acme-challenge.example.com`);
/// the implementation is responsible for mapping them onto whatever zone and
/// relative-name scheme its API requires.
#[async_trait]
pub trait Dns01Provider: Send + Sync {
    /// Provider identifier, for logging.
    fn id(&self) -> &'static str;

    /// Create a TXT record named `record_name` with the given content under
    /// the zone owning `domain`.
    ///
    /// Any failure is surfaced to the caller: a failed perform step must
    /// abort the issuance attempt.
    async fn add_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_content: &str,
        record_ttl: u32,
    ) -> Result<()>;

    /// Best-effort removal of the TXT record matching `record_name` and
    /// `record_content`.
    ///
    /// Lookup and delete failures are logged and swallowed so that a failed
    /// cleanup never masks a successful issuance. Only zone resolution
    /// errors propagate.
    async fn del_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_content: &str,
    ) -> Result<()>;

    /// Fetch the TXT records currently published for `record_name`.
    async fn get_txt_records(
        &self,
        domain: &str,
        record_name: &str,
    ) -> Result<Vec<TxtRecord>>;
}
