//! Shared scaffolding for the mock-API tests.

#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use alwaysdata_dns01::{AlwaysdataClient, Credentials};

pub const API_KEY: &str = "123456789abcdef";
pub const ACCOUNT: &str = "nymous";

/// The composite basic-auth username derived from the test credentials.
pub const AUTH_USER: &str = "123456789abcdef account=nymous";

pub fn test_credentials() -> Credentials {
    Credentials::new(API_KEY, ACCOUNT)
}

pub fn client_for(server: &MockServer) -> AlwaysdataClient {
    AlwaysdataClient::new(&test_credentials()).with_base_url(server.uri())
}

/// Mount a zone lookup that answers `name=<zone>` with a single exact match.
pub async fn mount_zone(server: &MockServer, zone: &str, id: u64) {
    Mock::given(method("GET"))
        .and(path("/v1/domain/"))
        .and(query_param("name", zone))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": id, "name": zone}])),
        )
        .mount(server)
        .await;
}

/// Mount a zone lookup that answers `name=<zone>` with no results.
pub async fn mount_zone_empty(server: &MockServer, zone: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/domain/"))
        .and(query_param("name", zone))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

/// JSON body of a record lookup entry.
pub fn record_json(href: &str, zone_id: u64, name: &str, value: &str, ttl: u32) -> serde_json::Value {
    json!({
        "href": href,
        "domain": zone_id,
        "type": "TXT",
        "name": name,
        "value": value,
        "ttl": ttl,
    })
}
