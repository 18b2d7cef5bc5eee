// client.rs
use crate::domain::{Listing, OwnedProperty};
use crate::market::{ListingPage, ListingSource};
use crate::torn::models::{RawProperty, RawRentalListing};
use crate::torn::TornError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.torn.com/v2";

const REQUEST_TIMEOUT_SECS: u64 = 20;

pub struct TornClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TornClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, TornError> {
        let api_key: String = api_key.into();
        let base_url: String = base_url.into();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TornError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` with the API key appended, returning the decoded JSON body.
    pub fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, TornError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "torn api request");

        let resp = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| TornError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let text = resp.text().map_err(|e| TornError::Network(e.to_string()))?;

        decode_response(status, &text)
    }

    /// True when the key can read the user's profile. Never errors.
    pub fn validate_key(&self) -> bool {
        if self.api_key.is_empty() {
            return false;
        }
        match self.get("/user/", &[("selections", "profile".to_string())]) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "api key rejected");
                false
            }
        }
    }

    pub fn owned_properties(&self) -> Result<Vec<OwnedProperty>, TornError> {
        let data = self.get("/user/", &[("selections", "properties".to_string())])?;
        Ok(parse_owned_properties(&data))
    }
}

impl ListingSource for TornClient {
    fn get_page(
        &self,
        property_type_id: i64,
        limit: usize,
        offset: usize,
        sort: &str,
    ) -> Result<ListingPage, TornError> {
        let path = format!("/market/{property_type_id}/rentals");
        let data = self.get(
            &path,
            &[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("sort", sort.to_string()),
            ],
        )?;
        Ok(parse_rentals_page(&data))
    }
}

/// Turns a raw HTTP status + body into JSON, surfacing Torn's error payloads.
pub fn decode_response(status: u16, text: &str) -> Result<Value, TornError> {
    let data: Value = serde_json::from_str(text).map_err(|_| TornError::JsonParse {
        status,
        snippet: text.chars().take(200).collect(),
    })?;

    if !data.is_object() {
        return Err(TornError::UnexpectedShape(format!(
            "expected a JSON object (HTTP {status})"
        )));
    }

    // Torn reports most failures as {"error": {"code": .., "error": ".."}}, often with a 200
    if let Some(err) = data.get("error") {
        let code = err.get("code").and_then(Value::as_i64).unwrap_or(0);
        let message = err
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| err.as_str())
            .unwrap_or("unknown error")
            .to_string();
        return Err(TornError::Api { code, message });
    }

    if status >= 400 {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(TornError::Http { status, message });
    }

    Ok(data)
}

/// Reads one page of rental listings. A missing or malformed list is an empty
/// page; a malformed record is skipped.
pub fn parse_rentals_page(data: &Value) -> ListingPage {
    let raw = data
        .get("rentals")
        .and_then(|r| r.get("listings"))
        .or_else(|| data.get("listings"))
        .and_then(Value::as_array);

    let listings = match raw {
        Some(arr) => arr
            .iter()
            .filter_map(|v| match serde_json::from_value::<RawRentalListing>(v.clone()) {
                Ok(r) => Some(Listing::new(
                    r.happy.unwrap_or(0),
                    r.cost_per_day.unwrap_or(0),
                    r.rental_period.unwrap_or(0),
                )),
                Err(e) => {
                    debug!(error = %e, "skipping malformed rental listing");
                    None
                }
            })
            .collect(),
        None => {
            warn!("rental page has no listings array");
            Vec::new()
        }
    };

    let has_next = data
        .pointer("/_metadata/links/next")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());

    ListingPage { listings, has_next }
}

/// Reads the user's properties, given either as a list or keyed by id.
pub fn parse_owned_properties(data: &Value) -> Vec<OwnedProperty> {
    let records: Vec<&Value> = match data.get("properties") {
        Some(Value::Array(arr)) => arr.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    };

    records
        .into_iter()
        .filter_map(|v| {
            let raw = match serde_json::from_value::<RawProperty>(v.clone()) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(error = %e, "skipping malformed property record");
                    return None;
                }
            };
            match OwnedProperty::from_raw(&raw) {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!(error = %e, "skipping property");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn torn_error_body_is_an_api_error() {
        let body = r#"{"error":{"code":2,"error":"Incorrect key"}}"#;
        match decode_response(200, body) {
            Err(TornError::Api { code, message }) => {
                assert_eq!(code, 2);
                assert_eq!(message, "Incorrect key");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_a_parse_error() {
        let body = "<html>".repeat(100);
        match decode_response(502, &body) {
            Err(TornError::JsonParse { status, snippet }) => {
                assert_eq!(status, 502);
                assert_eq!(snippet.len(), 200);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn http_error_uses_message_when_present() {
        match decode_response(503, r#"{"message":"maintenance"}"#) {
            Err(TornError::Http { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            decode_response(404, "{}"),
            Err(TornError::Http { status: 404, .. })
        ));
    }

    #[test]
    fn rentals_page_reads_listings_and_next_link() {
        let data = json!({
            "rentals": {
                "property": { "id": 13, "name": "Private Island" },
                "listings": [
                    { "happy": 5025, "cost_per_day": 950000, "rental_period": 30, "market_price": 1 },
                    { "happy": 4525, "cost_per_day": 800000 },
                    { "happy": "lots", "cost_per_day": 1 },
                    { "happy": null, "cost_per_day": 700000, "rental_period": 7 }
                ]
            },
            "_metadata": { "links": { "prev": null, "next": "https://api.torn.com/v2/market/13/rentals?offset=100" } }
        });

        let page = parse_rentals_page(&data);
        assert!(page.has_next);
        assert_eq!(
            page.listings,
            vec![
                Listing::new(5025, 950000, 30),
                Listing::new(4525, 800000, 0),
                Listing::new(0, 700000, 7),
            ]
        );
    }

    #[test]
    fn rentals_page_without_array_is_empty() {
        let page = parse_rentals_page(&json!({ "rentals": { "listings": "nope" } }));
        assert_eq!(page, ListingPage::default());

        let page = parse_rentals_page(&json!({
            "rentals": { "listings": [] },
            "_metadata": { "links": { "next": null } }
        }));
        assert!(!page.has_next);
    }

    #[test]
    fn owned_properties_accepts_list_or_map() {
        let record = json!({
            "id": 99,
            "property": { "id": 13, "name": "Private Island" },
            "status": "none",
            "happy": 5025
        });

        let as_list = parse_owned_properties(&json!({ "properties": [record.clone(), { "id": 1 }] }));
        assert_eq!(as_list.len(), 1);
        assert_eq!(as_list[0].id, 99);

        let as_map = parse_owned_properties(&json!({ "properties": { "99": record } }));
        assert_eq!(as_map.len(), 1);
        assert_eq!(as_map[0].happy, 5025);

        assert!(parse_owned_properties(&json!({})).is_empty());
    }
}
