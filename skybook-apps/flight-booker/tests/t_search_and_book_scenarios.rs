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

//! Search-then-book scenarios against in-process mock APIs.
//!
//! Run with:
//!     cargo test --test t_search_and_book_scenarios


use axum::http::StatusCode;
use mock_services::{MockServices, MockState};
use serde_json::json;
use skybook_flight_booker::{
    BookerError, BookingRequestConfig, Endpoints, parse_args, search_and_book,
};
use std::time::Duration;

fn endpoints(mock: &MockServices) -> Endpoints {
    Endpoints {
        search_host: mock.base_url.clone(),
        booking_host: mock.base_url.clone(),
        timeout: Duration::from_secs(5),
    }
}

fn prague_london_return() -> BookingRequestConfig {
    parse_args([
        "skybook-book",
        "--date",
        "2024-03-10",
        "--from",
        "PRG",
        "--to",
        "LON",
        "--return",
        "3",
        "--shortest",
    ])
    .expect("valid arguments")
}

#[tokio::test]
async fn test_confirmed_booking_returns_pnr() {
    let mock = MockServices::start(MockState::with_offer("abc123")).await;

    let confirmation = search_and_book(&prague_london_return(), &endpoints(&mock))
        .await
        .expect("booking should be confirmed");
    assert_eq!(confirmation.pnr, "XYZ999");
    assert_eq!(mock.search_calls(), 1);
    assert_eq!(mock.booking_calls(), 1);

    let query = mock.last_query();
    assert_eq!(query.get("v").map(String::as_str), Some("3"));
    assert_eq!(query.get("flyFrom").map(String::as_str), Some("PRG"));
    assert_eq!(query.get("to").map(String::as_str), Some("LON"));
    assert_eq!(query.get("dateFrom").map(String::as_str), Some("10/03/2024"));
    assert_eq!(query.get("dateTo").map(String::as_str), Some("10/03/2024"));
    assert_eq!(query.get("typeFlight").map(String::as_str), Some("return"));
    assert_eq!(query.get("daysInDestinationFrom").map(String::as_str), Some("3"));
    assert_eq!(query.get("daysInDestinationTo").map(String::as_str), Some("3"));
    assert_eq!(query.get("sort").map(String::as_str), Some("duration"));

    assert_eq!(
        mock.last_booking(),
        json!({
            "booking_token": "abc123",
            "currency": "EUR",
            "passengers": [{
                "firstName": "test",
                "documentID": "test",
                "birthday": "1900-01-01",
                "email": "test@test.test",
                "title": "Mr",
                "lastName": "test"
            }]
        })
    );
}

#[tokio::test]
async fn test_one_way_query_has_no_night_bounds() {
    let mock = MockServices::start(MockState::with_offer("tok")).await;
    let config = parse_args(["skybook-book", "--date", "2025-01-05", "--from", "BCN", "--to", "PRG"])
        .expect("valid arguments");

    search_and_book(&config, &endpoints(&mock)).await.expect("booked");

    let query = mock.last_query();
    assert_eq!(query.get("typeFlight").map(String::as_str), Some("oneway"));
    assert_eq!(query.get("sort").map(String::as_str), Some("price"));
    assert!(!query.contains_key("daysInDestinationFrom"));
    assert!(!query.contains_key("daysInDestinationTo"));
}

#[tokio::test]
async fn test_no_results_skips_booking() {
    let mock = MockServices::start(MockState::with_no_results()).await;

    let err = search_and_book(&prague_london_return(), &endpoints(&mock))
        .await
        .unwrap_err();
    assert!(matches!(err, BookerError::NotFound), "got {err:?}");
    assert_eq!(err.to_string(), "no matching flight");
    assert_eq!(err.exit_code(), 1);
    assert_eq!(mock.search_calls(), 1);
    assert_eq!(mock.booking_calls(), 0);
}

#[tokio::test]
async fn test_unconfirmed_status_is_rejected() {
    let state = MockState::with_offer("abc123")
        .booking_response(StatusCode::OK, r#"{"status": "cancelled"}"#);
    let mock = MockServices::start(state).await;

    let err = search_and_book(&prague_london_return(), &endpoints(&mock))
        .await
        .unwrap_err();
    match &err {
        BookerError::BookingRejected { status } => assert_eq!(status, "cancelled"),
        other => panic!("expected BookingRejected, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert_eq!(mock.booking_calls(), 1);
}

#[tokio::test]
async fn test_server_error_is_booking_failed() {
    let state = MockState::with_offer("abc123")
        .booking_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
    let mock = MockServices::start(state).await;

    let err = search_and_book(&prague_london_return(), &endpoints(&mock))
        .await
        .unwrap_err();
    match &err {
        BookerError::BookingFailed { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected BookingFailed, got {other:?}"),
    }
    assert!(err.to_string().contains("500"));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_search_http_error_skips_booking() {
    let state = MockState::with_offer("abc123")
        .search_response(StatusCode::BAD_REQUEST, r#"{"message": "bad date"}"#);
    let mock = MockServices::start(state).await;

    let err = search_and_book(&prague_london_return(), &endpoints(&mock))
        .await
        .unwrap_err();
    assert!(
        matches!(err, BookerError::SearchFailed { status: 400, .. }),
        "got {err:?}"
    );
    assert_eq!(mock.booking_calls(), 0);
}

#[tokio::test]
async fn test_unreachable_search_host_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let endpoints = Endpoints {
        search_host: format!("http://{}", addr),
        booking_host: format!("http://{}", addr),
        timeout: Duration::from_secs(2),
    };
    let err = search_and_book(&prague_london_return(), &endpoints)
        .await
        .unwrap_err();
    assert!(
        matches!(err, BookerError::Transport { stage: "search", .. }),
        "got {err:?}"
    );
}
