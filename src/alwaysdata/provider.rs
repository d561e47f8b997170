//! Zone resolution and TXT record operations.

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::Dns01Provider;
use crate::types::TxtRecord;

use super::http::{is_success, parse_json};
use super::{AlwaysdataClient, AlwaysdataRecord, AlwaysdataZone, CreateRecordBody};

const TXT_TYPE: &str = "TXT";

impl AlwaysdataClient {
    /// Find the managed zone owning `domain`.
    ///
    /// Tries each candidate from [`zone_candidates`], most-specific first,
    /// and returns the name and id of the first zone whose name matches a
    /// candidate exactly. The API matches on substrings, so results must be
    /// scanned rather than trusted (`example.com.evil.com` is a substring
    /// hit for `example.com` but not a zone match).
    ///
    /// A non-success lookup status skips to the next candidate; transport
    /// errors are fatal.
    ///
    /// # Errors
    ///
    /// [`ProviderError::DomainNotFound`] when no candidate yields an exact
    /// match, naming every candidate attempted.
    pub async fn find_zone(&self, domain: &str) -> Result<(String, u64)> {
        let candidates = zone_candidates(domain);

        for candidate in &candidates {
            let (status, body) = self
                .get("/v1/domain/", &[("name", candidate.as_str())])
                .await?;
            if !is_success(status) {
                log::debug!(
                    "Zone lookup for '{candidate}' returned HTTP {status}, trying next candidate"
                );
                continue;
            }
            let zones: Vec<AlwaysdataZone> = parse_json(&body)?;
            if let Some(zone) = zones.into_iter().find(|z| z.name == *candidate) {
                return Ok((zone.name, zone.id));
            }
        }

        Err(ProviderError::DomainNotFound {
            domain: domain.to_string(),
            attempted: candidates,
        })
    }

    /// Look up the records matching the cleanup filter and pick a deletion
    /// target, refusing to choose when the match is ambiguous.
    ///
    /// TTL is deliberately absent from the filter: the record's TTL may have
    /// changed since creation and is not known at cleanup time.
    async fn deletion_target(
        &self,
        zone_id: u64,
        name: &str,
        value: &str,
    ) -> Result<Option<AlwaysdataRecord>> {
        let zone_param = zone_id.to_string();
        let (status, body) = self
            .get(
                "/v1/record/",
                &[
                    ("domain", zone_param.as_str()),
                    ("type", TXT_TYPE),
                    ("name", name),
                    ("value", value),
                ],
            )
            .await?;
        if !is_success(status) {
            return Err(ProviderError::ApiError {
                status,
                detail: body,
            });
        }

        let mut records: Vec<AlwaysdataRecord> = parse_json(&body)?;
        match records.len() {
            0 => {
                log::warn!("No matching TXT record to delete, skipping cleanup");
                Ok(None)
            }
            1 => Ok(records.pop()),
            n => {
                // prefer to not delete anything instead of deleting randomly
                log::warn!("{n} matching TXT records to delete, skipping cleanup");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl Dns01Provider for AlwaysdataClient {
    fn id(&self) -> &'static str {
        "alwaysdata"
    }

    async fn add_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_content: &str,
        record_ttl: u32,
    ) -> Result<()> {
        let (zone_name, zone_id) = self.find_zone(domain).await?;
        let body = CreateRecordBody {
            domain: zone_id,
            record_type: TXT_TYPE,
            name: canonical_record_name(record_name, &zone_name),
            value: record_content,
            ttl: record_ttl,
        };

        log::debug!("Adding record to zone {zone_id}: {body:?}");
        let (status, response) = self.post("/v1/record/", &body).await?;
        if !is_success(status) {
            return Err(ProviderError::ApiError {
                status,
                detail: response,
            });
        }
        Ok(())
    }

    async fn del_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_content: &str,
    ) -> Result<()> {
        let (zone_name, zone_id) = self.find_zone(domain).await?;
        let name = canonical_record_name(record_name, &zone_name);

        let record = match self.deletion_target(zone_id, name, record_content).await {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(()),
            Err(e) => {
                log::warn!("Error searching TXT record to delete, skipping cleanup: {e}");
                return Ok(());
            }
        };

        match self.delete(&record.href).await {
            Ok((status, _)) if is_success(status) => {
                log::debug!("Deleted TXT record: {}", record.href);
            }
            Ok((status, body)) => {
                log::warn!(
                    "Error deleting TXT record (HTTP {status}), skipping cleanup: {body}"
                );
            }
            Err(e) => {
                log::warn!("Error deleting TXT record, skipping cleanup: {e}");
            }
        }
        Ok(())
    }

    async fn get_txt_records(
        &self,
        domain: &str,
        record_name: &str,
    ) -> Result<Vec<TxtRecord>> {
        let (zone_name, zone_id) = self.find_zone(domain).await?;
        let name = canonical_record_name(record_name, &zone_name);
        let zone_param = zone_id.to_string();

        let (status, body) = self
            .get(
                "/v1/record/",
                &[
                    ("domain", zone_param.as_str()),
                    ("type", TXT_TYPE),
                    ("name", name),
                ],
            )
            .await?;
        if !is_success(status) {
            return Err(ProviderError::ApiError {
                status,
                detail: body,
            });
        }

        let records: Vec<AlwaysdataRecord> = parse_json(&body)?;
        Ok(records
            .into_iter()
            .map(|r| TxtRecord {
                name: r.name,
                value: r.value,
                ttl: r.ttl,
            })
            .collect())
    }
}

/// Candidate zone names for `domain`, most-specific first.
///
/// Each candidate strips one more leading label:
/// `a.b.example.com` -> `["a.b.example.com", "b.example.com", "example.com", "com"]`.
pub fn zone_candidates(domain: &str) -> Vec<String> {
    let domain = domain.trim_end_matches('.');
    if domain.is_empty() {
        return Vec::new();
    }
    let labels: Vec<&str> = domain.split('.').collect();
    (0..labels.len()).map(|i| labels[i..].join(".")).collect()
}

/// Strip the owning zone from a record name.
///
/// The record API expects zone-relative names: adding
/// `foo.bar.example.com` to the `example.com` zone takes the name
/// `foo.bar`. Names without the zone suffix are returned unchanged.
pub fn canonical_record_name<'a>(record_name: &'a str, zone_name: &str) -> &'a str {
    let suffix = format!(".{zone_name}");
    record_name
        .strip_suffix(suffix.as_str())
        .unwrap_or(record_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- zone_candidates ----

    #[test]
    fn candidates_most_specific_first() {
        assert_eq!(
            zone_candidates("a.b.example.com"),
            vec!["a.b.example.com", "b.example.com", "example.com", "com"]
        );
    }

    #[test]
    fn candidates_bare_domain() {
        assert_eq!(zone_candidates("example.com"), vec!["example.com", "com"]);
    }

    #[test]
    fn candidates_trailing_dot_normalized() {
        assert_eq!(zone_candidates("example.com."), vec!["example.com", "com"]);
    }

    #[test]
    fn candidates_empty_domain() {
        assert!(zone_candidates("").is_empty());
    }

    // ---- canonical_record_name ----

    #[test]
    fn record_name_suffix_stripped() {
        assert_eq!(
            canonical_record_name("_acme-challenge.foo.example.com", "example.com"),
            "_acme-challenge.foo"
        );
    }

    #[test]
    fn record_name_without_suffix_unchanged() {
        assert_eq!(canonical_record_name("foo", "example.com"), "foo");
    }

    #[test]
    fn record_name_equal_to_zone_apex() {
        // no leading label to keep, nothing to strip
        assert_eq!(
            canonical_record_name("example.com", "example.com"),
            "example.com"
        );
    }

    #[test]
    fn record_name_similar_but_not_suffix() {
        // "badexample.com" must not be treated as "<x>.example.com"
        assert_eq!(
            canonical_record_name("badexample.com", "example.com"),
            "badexample.com"
        );
    }
}
