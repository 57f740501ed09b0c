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

//! # Flights Query Builder
//!
//! Side-effect free mapping of a [`BookingRequestConfig`] to the search API
//! query string.

use crate::booking_request::{BookingRequestConfig, SortPreference, TripType};

/// Path and API version of the search endpoint.
pub const SEARCH_PATH: &str = "/flights?v=3";

/// Ordered query parameters for one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(&'static str, String)>,
}

impl SearchQuery {
    pub fn from_config(config: &BookingRequestConfig) -> Self {
        let date = config.display_date();
        let mut params = vec![
            ("flyFrom", config.origin.to_string()),
            ("to", config.destination.to_string()),
            // same-day window
            ("dateFrom", date.clone()),
            ("dateTo", date),
        ];

        match config.trip_type {
            TripType::OneWay => params.push(("typeFlight", "oneway".to_string())),
            TripType::Return { nights } => {
                params.push(("typeFlight", "return".to_string()));
                params.push(("daysInDestinationFrom", nights.to_string()));
                params.push(("daysInDestinationTo", nights.to_string()));
            }
        }

        let sort = match config.sort_preference {
            SortPreference::Cheapest => "price",
            SortPreference::Shortest => "duration",
        };
        params.push(("sort", sort.to_string()));

        Self { params }
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn build_search_url(search_host: &str, query: &SearchQuery) -> String {
    format!(
        "{}{}&{}",
        search_host.trim_end_matches('/'),
        SEARCH_PATH,
        query.to_query_string()
    )
}
