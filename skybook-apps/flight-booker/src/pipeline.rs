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

//! # Search and Book
//!
//! The whole pipeline: one search, then one booking of the first offer.

use crate::BookerError;
use crate::booking_request::BookingRequestConfig;
use crate::endpoints::Endpoints;
use crate::flights_booking::{BookingClient, BookingConfirmation};
use crate::flights_query_builder::SearchQuery;
use crate::flights_search::FlightSearchClient;

/// Search for the requested flight and book the first result.
///
/// The booking call is only made once the search produced an offer. Nothing
/// is retried and a failed booking is not rolled back.
pub async fn search_and_book(
    config: &BookingRequestConfig,
    endpoints: &Endpoints,
) -> Result<BookingConfirmation, BookerError> {
    let overall_start = std::time::Instant::now();
    let client = endpoints.http_client()?;
    let search = FlightSearchClient::new(client.clone(), endpoints.search_host.clone());
    let booking = BookingClient::new(client, endpoints.booking_url());

    tracing::info!(
        "Searching {} -> {} on {} ({:?}, {:?})",
        config.origin,
        config.destination,
        config.display_date(),
        config.trip_type,
        config.sort_preference
    );
    let query = SearchQuery::from_config(config);
    let offer = search.search_flights(&query).await?;

    let confirmation = booking.book_flight(&offer).await?;
    tracing::debug!("Total search_and_book time: {:?}", overall_start.elapsed());
    Ok(confirmation)
}
