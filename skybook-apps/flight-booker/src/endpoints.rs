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

//! # Endpoints
//!
//! Where the two HTTP calls go and how long they may take.

use std::time::Duration;
use wreq::redirect::Policy;

use crate::BookerError;

pub const DEFAULT_SEARCH_HOST: &str = "https://api.skypicker.com";
pub const DEFAULT_BOOKING_HOST: &str = "http://37.139.6.125:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub search_host: String,
    pub booking_host: String,
    pub timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_host: DEFAULT_SEARCH_HOST.to_string(),
            booking_host: DEFAULT_BOOKING_HOST.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Endpoints {
    pub fn booking_url(&self) -> String {
        format!("{}/booking", self.booking_host.trim_end_matches('/'))
    }

    /// HTTP client shared by the search and booking calls.
    pub fn http_client(&self) -> Result<wreq::Client, BookerError> {
        wreq::Client::builder()
            .redirect(Policy::default())
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .build()
            .map_err(BookerError::HttpClient)
    }
}
