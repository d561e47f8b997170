//! Alwaysdata API wire types.

use serde::{Deserialize, Serialize};

/// A zone entry from `GET /v1/domain/`.
///
/// The lookup matches on substrings, so callers must still check `name` for
/// an exact match.
#[derive(Debug, Deserialize)]
pub struct AlwaysdataZone {
    pub id: u64,
    pub name: String,
}

/// A record entry from `GET /v1/record/`.
#[derive(Debug, Deserialize)]
pub struct AlwaysdataRecord {
    /// Self-reference path, used for DELETE.
    pub href: String,
    /// Owning zone id.
    #[allow(dead_code)]
    pub domain: u64,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    pub record_type: String,
    /// Record name, relative to the zone.
    pub name: String,
    pub value: String,
    pub ttl: u32,
}

/// Request body for `POST /v1/record/`.
#[derive(Debug, Serialize)]
pub struct CreateRecordBody<'a> {
    /// Owning zone id.
    pub domain: u64,
    #[serde(rename = "type")]
    pub record_type: &'a str,
    /// Zone-relative record name.
    pub name: &'a str,
    pub value: &'a str,
    pub ttl: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_record_body_wire_shape() {
        let body = CreateRecordBody {
            domain: 42,
            record_type: "TXT",
            name: "_acme-challenge",
            value: "token123",
            ttl: 60,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "domain": 42,
                "type": "TXT",
                "name": "_acme-challenge",
                "value": "token123",
                "ttl": 60,
            })
        );
    }

    #[test]
    fn record_deserializes_with_extra_fields() {
        let json = r#"{
            "href": "/v1/record/1234/",
            "domain": 42,
            "type": "TXT",
            "name": "_acme-challenge",
            "value": "token123",
            "ttl": 60,
            "id": 1234,
            "is_active": true
        }"#;
        let record: AlwaysdataRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.href, "/v1/record/1234/");
        assert_eq!(record.name, "_acme-challenge");
        assert_eq!(record.ttl, 60);
    }
}
