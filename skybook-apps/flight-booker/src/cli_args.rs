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

//! # Command-line Arguments
//!
//! Turns a raw argument list into a validated [`BookingRequestConfig`]
//! without any global parser state.

use clap::Parser;
use std::ffi::OsString;
use std::time::Duration;

use crate::BookerError;
use crate::booking_request::{
    BookingRequestConfig, IataCode, SortPreference, TripType, parse_date,
};
use crate::endpoints::{DEFAULT_BOOKING_HOST, DEFAULT_SEARCH_HOST, DEFAULT_TIMEOUT_SECS, Endpoints};

/// Book the first flight matching a route and a date
#[derive(Parser, Debug, Clone)]
#[command(name = "skybook-book")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Date of the flight you want to book (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// IATA code of the departure airport (e.g., PRG)
    #[arg(long)]
    pub from: String,

    /// IATA code of the arrival airport (e.g., LON)
    #[arg(long)]
    pub to: String,

    /// One way flight (default)
    #[arg(long, conflicts_with = "round_trip")]
    pub one_way: bool,

    /// Return flight, staying for the given number of nights
    #[arg(long = "return", value_name = "NIGHTS")]
    pub round_trip: Option<u32>,

    /// Select the cheapest flight (default)
    #[arg(long, conflicts_with = "shortest")]
    pub cheapest: bool,

    /// Select the shortest flight
    #[arg(long)]
    pub shortest: bool,

    /// Base URL of the flight search API
    #[arg(long, default_value = DEFAULT_SEARCH_HOST)]
    pub search_host: String,

    /// Base URL of the booking API
    #[arg(long, default_value = DEFAULT_BOOKING_HOST)]
    pub booking_host: String,

    /// Timeout in seconds for each HTTP call
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, BookerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    pub fn booking_request(&self) -> Result<BookingRequestConfig, BookerError> {
        let date = parse_date("--date", &self.date)?;
        let origin = IataCode::parse("--from", &self.from)?;
        let destination = IataCode::parse("--to", &self.to)?;

        let sort_preference = if self.shortest {
            SortPreference::Shortest
        } else {
            SortPreference::Cheapest
        };

        Ok(BookingRequestConfig::builder(date, origin, destination)
            .trip_type(TripType::from_return_nights(self.round_trip))
            .sort_preference(sort_preference)
            .build())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            search_host: self.search_host.clone(),
            booking_host: self.booking_host.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Parse a full argument list (program name first) into a booking request.
pub fn parse_args<I, T>(args: I) -> Result<BookingRequestConfig, BookerError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_args(args)?.booking_request()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_endpoint_overrides() {
        let args = CliArgs::try_parse_args([
            "skybook-book",
            "--date",
            "2024-03-10",
            "--from",
            "PRG",
            "--to",
            "LON",
            "--search-host",
            "http://127.0.0.1:1234",
            "--booking-host",
            "http://127.0.0.1:5678",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        let endpoints = args.endpoints();
        assert_eq!(endpoints.search_host, "http://127.0.0.1:1234");
        assert_eq!(endpoints.booking_url(), "http://127.0.0.1:5678/booking");
        assert_eq!(endpoints.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_endpoint_defaults() {
        let args =
            CliArgs::try_parse_args(["skybook-book", "--date", "2024-03-10", "--from", "PRG", "--to", "LON"])
                .unwrap();
        assert_eq!(args.endpoints(), Endpoints::default());
        assert!(!args.verbose);
    }
}
