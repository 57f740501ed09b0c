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

// Library for skybook-flight-booker
// Searches a flight API and books the first matching itinerary

mod booking_request;
mod cli_args;
mod endpoints;
mod error;
mod flights_booking;
mod flights_query_builder;
mod flights_search;
mod pipeline;

pub use booking_request::{
    BookingRequestConfig, BookingRequestConfigBuilder, IataCode, SortPreference, TripType,
    parse_date,
};
pub use cli_args::{CliArgs, parse_args};
pub use endpoints::{DEFAULT_BOOKING_HOST, DEFAULT_SEARCH_HOST, DEFAULT_TIMEOUT_SECS, Endpoints};
pub use error::{BookerError, EXIT_INVALID_INPUT, EXIT_RUNTIME_FAILURE};
pub use flights_booking::{
    BOOKING_CURRENCY, BookingClient, BookingConfirmation, BookingRequest, PassengerRecord,
    parse_booking_response,
};
pub use flights_query_builder::{SEARCH_PATH, SearchQuery, build_search_url};
pub use flights_search::{FlightOffer, FlightSearchClient, parse_search_response};
pub use pipeline::search_and_book;
