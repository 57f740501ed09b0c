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

//! CLI that books the first flight found for a route and date.

use anyhow::{Context, Result};
use skybook_flight_booker::{
    BookerError, BookingConfirmation, CliArgs, EXIT_RUNTIME_FAILURE, search_and_book,
};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configure logging based on verbosity level. Logs go to stderr, stdout
/// only ever carries the confirmation code.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(args: &CliArgs) -> Result<BookingConfirmation> {
    let config = args.booking_request()?;
    let endpoints = args.endpoints();
    tracing::debug!("Endpoints: {:?}", endpoints);

    let confirmation = search_and_book(&config, &endpoints)
        .await
        .with_context(|| format!("Booking {} -> {} failed", config.origin, config.destination))?;
    Ok(confirmation)
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = err
        .downcast_ref::<BookerError>()
        .map_or(EXIT_RUNTIME_FAILURE, BookerError::exit_code);
    ExitCode::from(code)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(BookerError::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };
    setup_logging(args.verbose);
    tracing::debug!("Args: {:?}", args);

    match run(&args).await {
        Ok(confirmation) => {
            println!("{}", confirmation);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Failure: {:?}", e);
            eprintln!("error: {:#}", e);
            exit_code(&e)
        }
    }
}
