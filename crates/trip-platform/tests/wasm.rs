//! WASM-target tests for trip-platform (Node.js runtime).
//!
//! Covers the response mapping and adapter construction under
//! wasm32-unknown-unknown via `wasm-pack test --node`. Live sockets and
//! `localStorage` need a browser and are not exercised here.

use wasm_bindgen_test::*;

use trip_platform::assistant::extract_reply;
use trip_platform::schedule::parse_schedule_body;
use trip_platform::settings::decode_config;
use trip_platform::{HttpScheduleClient, ProxyChatClient, WebSocketRealtime};
use trip_types::config::TripConfig;
use trip_types::session::SessionContext;
use trip_types::TripError;

// ─── Scheduler ───────────────────────────────────────────

#[wasm_bindgen_test]
fn schedule_body_maps() {
    let payload = parse_schedule_body(
        r#"{"scheduled_itineraries": [{"day": "2025-09-20", "itinerary": []}],
            "daily_forecast": [{"date": "2025-09-20", "dominant_weather": "clear sky", "avg_temp": 24.4}],
            "summary": "Sunny start"}"#,
    )
    .unwrap();
    assert_eq!(payload.scheduled_itineraries.len(), 1);
    assert_eq!(payload.daily_forecast[0].avg_temp, 24.4);
    assert_eq!(payload.summary.as_deref(), Some("Sunny start"));
}

#[wasm_bindgen_test]
fn schedule_body_wrong_shape() {
    let err = parse_schedule_body(r#"{"itineraries": []}"#).unwrap_err();
    assert!(matches!(err, TripError::Mapping(_)));
}

#[wasm_bindgen_test]
fn schedule_client_constructs() {
    let config = TripConfig::default();
    let _client = HttpScheduleClient::new(&config.api, SessionContext::with_token("abc"));
}

// ─── Chat proxy ──────────────────────────────────────────

#[wasm_bindgen_test]
fn chat_reply_extraction() {
    let reply = extract_reply(r#"{"candidates": [{"content": {"parts": [{"text": "Bring an umbrella."}]}}]}"#);
    assert_eq!(reply.unwrap(), "Bring an umbrella.");
}

#[wasm_bindgen_test]
fn chat_reply_missing_text() {
    let reply = extract_reply(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#);
    assert!(matches!(reply, Err(TripError::Chat(_))));
}

#[wasm_bindgen_test]
fn chat_client_constructs() {
    let _client = ProxyChatClient::new(&TripConfig::default().chat);
}

// ─── Realtime / settings ─────────────────────────────────

#[wasm_bindgen_test]
fn realtime_constructs() {
    let _port = WebSocketRealtime::new(TripConfig::default().api.realtime_url);
}

#[wasm_bindgen_test]
fn saved_config_overrides_defaults() {
    let config = decode_config(Some(r#"{"api": {"base_url": "http://localhost:8000/"}}"#));
    assert_eq!(config.api.schedule_url(), "http://localhost:8000/schedule");
    assert_eq!(config.chat, TripConfig::default().chat);
}
