//! WASM-target tests for trip-core.
//!
//! Runs the normalizer, the summary channel guard and the chat assistant
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use trip_core::channel::{ChannelState, SummaryChannel};
use trip_core::chat::{ChatAssistant, ChatContext, CHAT_FAILURE_MESSAGE};
use trip_core::normalize::normalize_json;
use trip_core::ports::*;
use trip_core::view::ItineraryView;
use trip_types::config::ChatConfig;
use trip_types::itinerary::WeatherIcon;
use trip_types::realtime::SummarySnapshot;
use trip_types::TripError;

const PAYLOAD: &str = r#"{
    "scheduled_itineraries": [
        {"day": "2025-09-20", "itinerary": [
            {"id": 1, "name": "Temple", "description": "Quiet. Old. Big.",
             "geom": {"lat": 35.1, "lon": 129.1}, "operating_hours": {"monday": "9-5"}}
        ]},
        {"day": "2025-09-21", "itinerary": [
            {"id": 2, "name": "Market", "description": "Busy.",
             "geom": {"lat": 35.2, "lon": 129.0}}
        ]}
    ],
    "daily_forecast": [
        {"date": "2025-09-20", "dominant_weather": "light rain", "avg_temp": 19.6},
        {"date": "2025-09-21", "dominant_weather": "scattered clouds", "avg_temp": 22.1}
    ]
}"#;

#[derive(Default)]
struct LoopbackRealtime {
    sinks: RefCell<Vec<TransportSink>>,
}

struct NoopConnection;

impl RealtimeConnection for NoopConnection {
    fn close(&mut self) {}
}

impl RealtimePort for LoopbackRealtime {
    fn connect(&self, _outbound: String, sink: TransportSink) -> trip_types::Result<Box<dyn RealtimeConnection>> {
        self.sinks.borrow_mut().push(sink);
        Ok(Box::new(NoopConnection))
    }
}

impl LoopbackRealtime {
    fn push(&self, json: &str) {
        let mut sinks = self.sinks.borrow_mut();
        if let Some(sink) = sinks.last_mut() {
            sink(TransportEvent::Frame(json.to_string()));
        }
    }
}

struct DownChat;

#[async_trait(?Send)]
impl ChatPort for DownChat {
    async fn generate(&self, _prompt: &str) -> trip_types::Result<String> {
        Err(TripError::Network("offline".to_string()))
    }
}

// ─── Normalizer ──────────────────────────────────────────

#[wasm_bindgen_test]
fn normalize_two_days() {
    let page = normalize_json(PAYLOAD).unwrap();
    assert_eq!(page.day_count(), 2);
    assert_eq!(page.full_itinerary[1].day, 21);
    assert_eq!(page.full_itinerary[0].items[0].open_hours, "OPEN 9-5");
    assert_eq!(page.full_itinerary[1].items[0].open_hours, "OPEN N/A");
    assert_eq!(page.weather_forecasts[0].icon, WeatherIcon::Rain);
    assert_eq!(page.weather_forecasts[0].temp, 20);
    assert_eq!(page.weather_forecasts[1].day, "SUN");
}

#[wasm_bindgen_test]
fn normalize_empty_is_none() {
    assert!(normalize_json(r#"{"scheduled_itineraries": []}"#).is_none());
}

// ─── Summary channel ─────────────────────────────────────

#[wasm_bindgen_test]
fn channel_close_blocks_late_frames() {
    let port = LoopbackRealtime::default();
    let received = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = received.clone();
    let page = normalize_json(PAYLOAD).unwrap();

    let mut handle = SummaryChannel::open(&port, &SummarySnapshot::from_page(&page), move |t| {
        sink.borrow_mut().push(t)
    });
    port.push(r#"{"summary": "X"}"#);
    handle.close();
    port.push(r#"{"summary": "late"}"#);

    assert_eq!(handle.state(), ChannelState::Closed);
    assert_eq!(*received.borrow(), vec!["X"]);
}

// ─── View ────────────────────────────────────────────────

#[wasm_bindgen_test]
fn view_applies_summary_and_clamps() {
    let port = LoopbackRealtime::default();
    let mut view = ItineraryView::new(&ChatConfig::default());
    view.load(normalize_json(PAYLOAD).unwrap(), &port);

    port.push(r#"{"summary": "Two easy days"}"#);
    view.pump();
    assert_eq!(view.summary_display(), "Two easy days");

    assert!(!view.prev_day());
    assert!(view.next_day());
    assert!(!view.next_day());
    assert_eq!(view.map_view().markers[0].title, "Market");
}

// ─── Chat ────────────────────────────────────────────────

#[wasm_bindgen_test]
async fn chat_failure_uses_fallback() {
    let mut chat = ChatAssistant::new(4);
    assert!(chat.send("Is it raining?", &ChatContext::default(), &DownChat).await);
    assert_eq!(chat.history().len(), 2);
    assert_eq!(chat.history()[1].content, CHAT_FAILURE_MESSAGE);
    assert!(!chat.is_sending());
}
