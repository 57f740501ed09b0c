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

//! # Flight Booking Client
//!
//! Books a [`FlightOffer`] for the fixed test passenger and returns the PNR.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::BookerError;
use crate::flights_search::FlightOffer;

const STAGE: &str = "booking";
pub const BOOKING_CURRENCY: &str = "EUR";
const CONFIRMED: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerRecord {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "documentID")]
    pub document_id: String,
    pub birthday: String,
    pub email: String,
    pub title: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl PassengerRecord {
    /// Placeholder passenger the booking API accepts for test bookings.
    /// No real passenger data is ever collected.
    pub fn test_passenger() -> Self {
        Self {
            first_name: "test".into(),
            document_id: "test".into(),
            birthday: "1900-01-01".into(),
            email: "test@test.test".into(),
            title: "Mr".into(),
            last_name: "test".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub booking_token: String,
    pub currency: String,
    pub passengers: Vec<PassengerRecord>,
}

impl BookingRequest {
    pub fn for_offer(offer: &FlightOffer) -> Self {
        Self {
            booking_token: offer.booking_token.clone(),
            currency: BOOKING_CURRENCY.to_string(),
            passengers: vec![PassengerRecord::test_passenger()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub pnr: String,
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pnr)
    }
}

#[derive(Debug, Deserialize)]
struct BookingResponse {
    status: String,
    #[serde(default)]
    pnr: Option<String>,
}

/// Interpret the booking endpoint's answer.
pub fn parse_booking_response(
    status: u16,
    body: &str,
) -> Result<BookingConfirmation, BookerError> {
    if status != 200 {
        return Err(BookerError::BookingFailed {
            status,
            body: body.to_string(),
        });
    }

    let malformed = |source| BookerError::MalformedResponse {
        stage: STAGE,
        source,
    };
    let response: BookingResponse = serde_json::from_str(body).map_err(malformed)?;

    if response.status != CONFIRMED {
        return Err(BookerError::BookingRejected {
            status: response.status,
        });
    }
    match response.pnr {
        Some(pnr) => Ok(BookingConfirmation { pnr }),
        None => Err(malformed(<serde_json::Error as serde::de::Error>::missing_field("pnr"))),
    }
}

#[derive(Clone)]
pub struct BookingClient {
    client: wreq::Client,
    booking_url: String,
}

impl BookingClient {
    pub fn new(client: wreq::Client, booking_url: impl Into<String>) -> Self {
        Self {
            client,
            booking_url: booking_url.into(),
        }
    }

    pub async fn book_flight(&self, offer: &FlightOffer) -> Result<BookingConfirmation, BookerError> {
        let transport = |source| BookerError::Transport {
            stage: STAGE,
            source,
        };
        let request = BookingRequest::for_offer(offer);

        tracing::debug!("Posting booking to {}", self.booking_url);
        let http_start = std::time::Instant::now();
        let response = self
            .client
            .post(&self.booking_url)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        tracing::debug!(
            "Booking response: HTTP {} in {:?}, {} bytes",
            status,
            http_start.elapsed(),
            body.len()
        );

        match parse_booking_response(status, &body) {
            Ok(confirmation) => {
                tracing::info!("Booking confirmed, PNR {}", confirmation.pnr);
                Ok(confirmation)
            }
            Err(e) => {
                tracing::warn!("Booking did not go through: {}", e);
                Err(e)
            }
        }
    }
}
