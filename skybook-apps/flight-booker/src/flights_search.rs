//!  Skybook Flight Booker
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Flight Search Client
//!
//! Effectful (network) search call plus the side-effect free parsing of its
//! JSON response.

use serde::Deserialize;
use serde_json::Value;

use crate::BookerError;
use crate::flights_query_builder::{SearchQuery, build_search_url};

const STAGE: &str = "search";

/// One itinerary returned by the search API. Only the booking token is
/// required to book it, the rest is kept untyped for logging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightOffer {
    pub booking_token: String,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub fly_duration: Option<Value>,
    #[serde(default, rename = "flyFrom")]
    pub fly_from: Option<Value>,
    #[serde(default, rename = "flyTo")]
    pub fly_to: Option<Value>,
}

fn display_field(field: &Option<Value>) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "??".to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "_results")]
    results: u64,
    #[serde(default)]
    data: Vec<FlightOffer>,
}

/// Extract the first offer from a search response body.
pub fn parse_search_response(body: &str) -> Result<FlightOffer, BookerError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|source| BookerError::MalformedResponse {
            stage: STAGE,
            source,
        })?;

    if response.results == 0 {
        return Err(BookerError::NotFound);
    }
    response
        .data
        .into_iter()
        .next()
        .ok_or(BookerError::NotFound)
}

#[derive(Clone)]
pub struct FlightSearchClient {
    client: wreq::Client,
    search_host: String,
}

impl FlightSearchClient {
    pub fn new(client: wreq::Client, search_host: impl Into<String>) -> Self {
        Self {
            client,
            search_host: search_host.into(),
        }
    }

    pub async fn fetch_raw(&self, url: &str) -> Result<String, BookerError> {
        let transport = |source| BookerError::Transport {
            stage: STAGE,
            source,
        };

        let http_start = std::time::Instant::now();
        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        tracing::debug!(
            "[fetch_raw] HTTP Status: {} {} after {:?}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            http_start.elapsed()
        );

        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            let body_preview = body.chars().take(500).collect::<String>();
            return Err(BookerError::SearchFailed {
                status: status.as_u16(),
                body: body_preview,
            });
        }
        Ok(body)
    }

    pub async fn search_flights(&self, query: &SearchQuery) -> Result<FlightOffer, BookerError> {
        let url = build_search_url(&self.search_host, query);
        tracing::debug!("🔗 Search URL: {}", url);

        let body = self.fetch_raw(&url).await?;
        let offer = parse_search_response(&body)?;

        tracing::info!(
            "Selected offer {} -> {} (price: {}, duration: {})",
            display_field(&offer.fly_from),
            display_field(&offer.fly_to),
            display_field(&offer.price),
            display_field(&offer.fly_duration),
        );
        Ok(offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_offer_is_selected() {
        let body = r#"{
            "_results": 2,
            "data": [
                {"booking_token": "first", "price": 42, "flyFrom": "PRG", "flyTo": "LHR", "fly_duration": "1h 55m"},
                {"booking_token": "second", "price": 40}
            ]
        }"#;
        let offer = parse_search_response(body).unwrap();
        assert_eq!(offer.booking_token, "first");
        assert_eq!(display_field(&offer.price), "42");
        assert_eq!(display_field(&offer.fly_from), "PRG");
        assert_eq!(display_field(&offer.fly_duration), "1h 55m");
        assert_eq!(display_field(&None), "??");
    }

    #[test]
    fn test_unexpected_informational_types_do_not_block() {
        let body = r#"{
            "_results": 1,
            "data": [{"booking_token": "tok", "price": "58 EUR", "fly_duration": 6600, "flyFrom": null, "flyTo": ["LTN"]}]
        }"#;
        let offer = parse_search_response(body).unwrap();
        assert_eq!(offer.booking_token, "tok");
        assert_eq!(display_field(&offer.price), "58 EUR");
        assert_eq!(display_field(&offer.fly_duration), "6600");
        assert_eq!(display_field(&offer.fly_from), "??");
        assert_eq!(display_field(&offer.fly_to), r#"["LTN"]"#);
    }

    #[test]
    fn test_zero_results_is_not_found() {
        let err = parse_search_response(r#"{"_results": 0, "data": []}"#).unwrap_err();
        assert!(matches!(err, BookerError::NotFound));
    }

    #[test]
    fn test_empty_data_is_not_found() {
        let err = parse_search_response(r#"{"_results": 3}"#).unwrap_err();
        assert!(matches!(err, BookerError::NotFound));
    }

    #[test]
    fn test_malformed_bodies() {
        for body in ["", "<html>", r#"{"data": []}"#, r#"{"_results": 1, "data": [{"price": 3}]}"#] {
            let err = parse_search_response(body).unwrap_err();
            assert!(
                matches!(err, BookerError::MalformedResponse { stage: "search", .. }),
                "{body:?} gave {err:?}"
            );
        }
    }
}
