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

//! # Booker Errors
//!
//! Every failure of the search-then-book pipeline is terminal. Each variant
//! maps to a process exit code in [`BookerError::exit_code`].

use thiserror::Error;

/// Exit code for bad command-line input.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code for search, booking and transport failures.
pub const EXIT_RUNTIME_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum BookerError {
    #[error("invalid value for {flag}: {reason}")]
    InvalidInput { flag: &'static str, reason: String },

    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("search failed with HTTP {status}: {body}")]
    SearchFailed { status: u16, body: String },

    #[error("no matching flight")]
    NotFound,

    #[error("booking rejected: status {status:?} is not \"confirmed\"")]
    BookingRejected { status: String },

    #[error("booking failed with HTTP {status}: {body}")]
    BookingFailed { status: u16, body: String },

    #[error("{stage} request failed: {source}")]
    Transport {
        stage: &'static str,
        #[source]
        source: wreq::Error,
    },

    #[error("malformed {stage} response: {source}")]
    MalformedResponse {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] wreq::Error),
}

impl BookerError {
    pub(crate) fn invalid_input(flag: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            flag,
            reason: reason.into(),
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput { .. } => EXIT_INVALID_INPUT,
            Self::Usage(e) => e.exit_code() as u8,
            _ => EXIT_RUNTIME_FAILURE,
        }
    }

    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Usage(_))
    }
}
