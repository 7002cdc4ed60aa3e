#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::itinerary::*;
    use crate::message::*;
    use crate::raw::*;
    use crate::realtime::*;
    use crate::session::*;
    use chrono::NaiveDate;

    fn item(id: i64, title: &str, weather: Option<&str>) -> ItineraryItem {
        ItineraryItem {
            id,
            title: title.to_string(),
            open_hours: "OPEN 9-5".to_string(),
            lat: 35.1,
            lon: 129.1,
            description: format!("{} description", title),
            website_url: None,
            naver_url: None,
            slot: Some("Activity 🌳".to_string()),
            weather: weather.map(String::from),
            summary: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_constructors() {
        let user = ConversationMessage::user("Where is lunch?");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "Where is lunch?");

        let reply = ConversationMessage::assistant("At the market");
        assert_eq!(reply.role, Role::Assistant);
    }

    #[test]
    fn test_message_prompt_line() {
        assert_eq!(ConversationMessage::user("hi").prompt_line(), "user: hi");
        assert_eq!(
            ConversationMessage::assistant("hello").prompt_line(),
            "assistant: hello"
        );
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ConversationMessage::assistant("x")).unwrap();
        assert!(json.contains(r#""role":"assistant""#));
    }

    // ─── WeatherIcon Tests ───────────────────────────────────

    #[test]
    fn test_icon_mapping() {
        assert_eq!(WeatherIcon::from_condition(Some("light rain")), WeatherIcon::Rain);
        assert_eq!(
            WeatherIcon::from_condition(Some("scattered clouds")),
            WeatherIcon::Clouds
        );
        assert_eq!(WeatherIcon::from_condition(Some("clear sky")), WeatherIcon::Clear);
        assert_eq!(WeatherIcon::from_condition(Some("haze")), WeatherIcon::Mist);
        assert_eq!(WeatherIcon::from_condition(None), WeatherIcon::Mist);
    }

    #[test]
    fn test_icon_mapping_case_insensitive() {
        assert_eq!(WeatherIcon::from_condition(Some("Heavy RAIN")), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::from_condition(Some("Clear")), WeatherIcon::Clear);
    }

    #[test]
    fn test_rain_wins_over_clouds() {
        assert_eq!(
            WeatherIcon::from_condition(Some("rain and clouds")),
            WeatherIcon::Rain
        );
    }

    #[test]
    fn test_icon_urls_distinct() {
        let urls = [
            WeatherIcon::Rain.url(),
            WeatherIcon::Clouds.url(),
            WeatherIcon::Clear.url(),
            WeatherIcon::Mist.url(),
        ];
        for (i, a) in urls.iter().enumerate() {
            for b in &urls[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(WeatherIcon::Clear.url().contains("01d"));
    }

    // ─── Raw payload Tests ───────────────────────────────────

    #[test]
    fn test_raw_payload_deserializes_with_nulls() {
        let json = r#"{
            "scheduled_itineraries": [{
                "day": "2025-09-20",
                "itinerary": [{
                    "id": 1, "name": "Temple", "description": "Old.",
                    "geom": {"lat": 35.1, "lon": 129.1},
                    "operating_hours": {"monday": "9-5"},
                    "website": null, "naver_url": null,
                    "slot": "Activity", "weather": null
                }]
            }],
            "daily_forecast": [{"date": "2025-09-20", "dominant_weather": "clear sky", "avg_temp": 21.4}]
        }"#;
        let payload: RawSchedulePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.scheduled_itineraries.len(), 1);
        let place = &payload.scheduled_itineraries[0].itinerary[0];
        assert_eq!(place.name, "Temple");
        assert!(place.website.is_none());
        assert_eq!(
            place.operating_hours.as_ref().unwrap().get("monday").unwrap(),
            "9-5"
        );
        assert_eq!(payload.daily_forecast[0].avg_temp, 21.4);
        assert!(payload.summary.is_none());
    }

    #[test]
    fn test_raw_payload_missing_geom_is_error() {
        let json = r#"{"scheduled_itineraries": [{"day": "2025-09-20",
            "itinerary": [{"id": 1, "name": "No geom"}]}]}"#;
        assert!(serde_json::from_str::<RawSchedulePayload>(json).is_err());
    }

    // ─── ScheduleRequest Tests ───────────────────────────────

    #[test]
    fn test_schedule_request_drops_blank_prompts() {
        let origin = TripConfig::default().origin;
        let req = ScheduleRequest::new(
            ["temples and tea", "   ", "", "night market"],
            origin,
            date("2025-09-20"),
            date("2025-09-22"),
        )
        .unwrap();
        assert_eq!(req.queries, vec!["temples and tea", "night market"]);
        assert_eq!(req.user_lat, 35.1796);
    }

    #[test]
    fn test_schedule_request_requires_prompt() {
        let origin = TripConfig::default().origin;
        let err = ScheduleRequest::new(["  "], origin, date("2025-09-20"), date("2025-09-20"))
            .unwrap_err();
        assert!(matches!(err, TripError::InvalidRequest(_)));
    }

    #[test]
    fn test_schedule_request_rejects_reversed_dates() {
        let origin = TripConfig::default().origin;
        let err = ScheduleRequest::new(["x"], origin, date("2025-09-22"), date("2025-09-20"))
            .unwrap_err();
        assert!(err.to_string().contains("before"));
    }

    #[test]
    fn test_schedule_request_wire_dates() {
        let origin = GeoPoint { lat: 1.0, lon: 2.0 };
        let req = ScheduleRequest::new(["x"], origin, date("2025-09-20"), date("2025-09-22"))
            .unwrap();
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["start_date"], "2025-09-20");
        assert_eq!(value["end_date"], "2025-09-22");
        assert_eq!(value["queries"][0], "x");
        assert_eq!(value["user_lon"], 2.0);
    }

    // ─── Realtime wire Tests ─────────────────────────────────

    #[test]
    fn test_snapshot_from_page() {
        let page = PageItinerary {
            full_itinerary: vec![
                ItineraryDay {
                    day: 20,
                    items: vec![item(1, "Temple", Some("12:00 Clear (21.0)")), item(2, "Cafe", None)],
                },
                ItineraryDay { day: 21, items: vec![] },
            ],
            weather_forecasts: vec![],
            summary_text: String::new(),
        };

        let snapshot = SummarySnapshot::from_page(&page);
        assert_eq!(snapshot.scheduled_itineraries.len(), 2);

        let first = &snapshot.scheduled_itineraries[0];
        assert_eq!(first.day, 20);
        assert_eq!(first.itinerary.len(), 2);
        assert_eq!(first.itinerary[0].name, "Temple");
        assert_eq!(first.weather.as_deref(), Some("12:00 Clear (21.0)"));
        assert!(!first.warning);

        assert!(snapshot.scheduled_itineraries[1].weather.is_none());
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let page = PageItinerary {
            full_itinerary: vec![ItineraryDay { day: 3, items: vec![item(7, "Beach", None)] }],
            weather_forecasts: vec![],
            summary_text: String::new(),
        };
        let value = serde_json::to_value(SummarySnapshot::from_page(&page)).unwrap();
        let day = &value["scheduled_itineraries"][0];
        assert_eq!(day["day"], 3);
        assert_eq!(day["warning"], false);
        assert!(day["weather"].is_null());
        assert_eq!(day["itinerary"][0]["id"], 7);
        assert_eq!(day["itinerary"][0]["name"], "Beach");
        assert!(day["itinerary"][0].get("title").is_none());
    }

    #[test]
    fn test_summary_frame_parse() {
        assert_eq!(
            SummaryFrame::parse_summary(r#"{"summary":"Day 1: sunny","scheduled_itineraries":[]}"#),
            Some("Day 1: sunny".to_string())
        );
        assert_eq!(SummaryFrame::parse_summary(r#"{"summary":null}"#), None);
        assert_eq!(SummaryFrame::parse_summary(r#"{"other":1}"#), None);
        assert_eq!(SummaryFrame::parse_summary("not json"), None);
        assert_eq!(SummaryFrame::parse_summary(r#"{"summary":""}"#), None);
        assert_eq!(SummaryFrame::parse_summary(r#"{"summary":" \n "}"#), None);
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_header() {
        assert_eq!(
            SessionContext::with_token("abc").authorization_header(),
            Some("Bearer abc".to_string())
        );
        assert!(SessionContext::anonymous().authorization_header().is_none());
        assert!(SessionContext::with_token("  ").token.is_none());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = TripConfig::default();
        assert_eq!(config.chat.max_memory, 10);
        assert!(config.api.realtime_url.starts_with("wss://"));
        assert_eq!(
            config.api.schedule_url(),
            "https://tueniuu-itinerary-recommender-api.hf.space/schedule"
        );
    }

    #[test]
    fn test_schedule_url_trims_slash() {
        let api = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.schedule_url(), "http://localhost:8000/schedule");
    }

    #[test]
    fn test_config_partial_override() {
        let config: TripConfig =
            serde_json::from_str(r#"{"chat": {"max_memory": 4}}"#).unwrap();
        assert_eq!(config.chat.max_memory, 4);
        assert_eq!(config.chat.model, ChatConfig::default().model);
        assert_eq!(config.api, ApiConfig::default());
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = TripError::Http { status: 403, body: "forbidden".to_string() };
        assert_eq!(err.to_string(), "HTTP 403: forbidden");

        let err: TripError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, TripError::Serialization(_)));
    }
}
