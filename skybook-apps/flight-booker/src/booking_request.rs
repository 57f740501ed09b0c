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

//! # Booking Request
//!
//! Side-effect free validation of what the user asked for. A
//! [`BookingRequestConfig`] can only be built from valid inputs.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::BookerError;

static IATA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Three uppercase letters identifying an airport (e.g. PRG).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IataCode(String);

impl IataCode {
    /// Validate `s` as an IATA code. The whole string must match, so
    /// `XPRGX` or `PRG LON` are rejected.
    pub fn parse(flag: &'static str, s: &str) -> Result<Self, BookerError> {
        if IATA_RE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(BookerError::invalid_input(
                flag,
                format!("{s:?} is not an IATA code (expected three uppercase letters)"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    OneWay,
    Return {
        nights: u32,
    },
}

impl TripType {
    pub fn from_return_nights(nights: Option<u32>) -> Self {
        match nights {
            Some(nights) => Self::Return { nights },
            None => Self::OneWay,
        }
    }

    pub fn nights(&self) -> Option<u32> {
        match self {
            Self::OneWay => None,
            Self::Return { nights } => Some(*nights),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPreference {
    #[default]
    Cheapest,
    Shortest,
}

/// Parse a departure date in the strict `YYYY-MM-DD` form.
pub fn parse_date(flag: &'static str, s: &str) -> Result<NaiveDate, BookerError> {
    // chrono tolerates padding, signs and unpadded fields, so check the shape first
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) if DATE_RE.is_match(s) => Ok(date),
        _ => Err(BookerError::invalid_input(
            flag,
            format!("{s:?} is not a valid date, required format YYYY-MM-DD"),
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequestConfig {
    pub date: NaiveDate,
    pub origin: IataCode,
    pub destination: IataCode,
    pub trip_type: TripType,
    pub sort_preference: SortPreference,
}

impl BookingRequestConfig {
    /// Departure date as `DD/MM/YYYY`, the form the search API expects.
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn builder(
        date: NaiveDate,
        origin: IataCode,
        destination: IataCode,
    ) -> BookingRequestConfigBuilder {
        BookingRequestConfigBuilder {
            date,
            origin,
            destination,
            trip_type: TripType::OneWay,
            sort_preference: SortPreference::Cheapest,
        }
    }
}

#[derive(Clone)]
pub struct BookingRequestConfigBuilder {
    date: NaiveDate,
    origin: IataCode,
    destination: IataCode,
    trip_type: TripType,
    sort_preference: SortPreference,
}

impl BookingRequestConfigBuilder {
    pub fn trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        self
    }

    pub fn sort_preference(mut self, sort_preference: SortPreference) -> Self {
        self.sort_preference = sort_preference;
        self
    }

    pub fn build(self) -> BookingRequestConfig {
        BookingRequestConfig {
            date: self.date,
            origin: self.origin,
            destination: self.destination,
            trip_type: self.trip_type,
            sort_preference: self.sort_preference,
        }
    }
}
