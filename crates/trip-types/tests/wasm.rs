//! WASM-target tests for trip-types.
//!
//! Exercises the wire schemas under wasm32-unknown-unknown via
//! `wasm-pack test --node`.

use wasm_bindgen_test::*;

use trip_types::config::TripConfig;
use trip_types::itinerary::WeatherIcon;
use trip_types::message::ConversationMessage;
use trip_types::raw::{RawSchedulePayload, ScheduleRequest};
use trip_types::realtime::SummaryFrame;
use trip_types::session::SessionContext;

#[wasm_bindgen_test]
fn raw_payload_parses() {
    let payload: RawSchedulePayload = serde_json::from_str(
        r#"{"scheduled_itineraries": [{"day": "2025-09-20", "itinerary": [
            {"id": 3, "name": "Beach", "geom": {"lat": 35.15, "lon": 129.16}}
        ]}]}"#,
    )
    .unwrap();
    assert_eq!(payload.scheduled_itineraries[0].itinerary[0].id, 3);
    assert!(payload.daily_forecast.is_empty());
}

#[wasm_bindgen_test]
fn schedule_request_body() {
    let start = chrono::NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2025, 9, 21).unwrap();
    let req = ScheduleRequest::new(["jazz bar", ""], TripConfig::default().origin, start, end).unwrap();
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains(r#""start_date":"2025-09-20""#));
    assert!(json.contains(r#""queries":["jazz bar"]"#));
}

#[wasm_bindgen_test]
fn summary_frame_extraction() {
    assert_eq!(SummaryFrame::parse_summary(r#"{"summary":"ok"}"#).as_deref(), Some("ok"));
    assert!(SummaryFrame::parse_summary(r#"{"summary":null}"#).is_none());
}

#[wasm_bindgen_test]
fn icon_and_message_helpers() {
    assert_eq!(WeatherIcon::from_condition(Some("overcast clouds")), WeatherIcon::Clouds);
    assert_eq!(ConversationMessage::user("hi").prompt_line(), "user: hi");
    assert!(SessionContext::default().authorization_header().is_none());
}
