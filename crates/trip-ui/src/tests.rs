#[cfg(test)]
mod tests {
    use crate::panels::map::Projection;
    use crate::state::*;
    use egui::{Pos2, Rect, Vec2};
    use trip_core::map::{plan_map, MapViewport, DEFAULT_CENTER, DEFAULT_ZOOM};
    use trip_types::config::{GeoPoint, TripConfig};
    use trip_types::event::AppEvent;
    use trip_types::itinerary::{ItineraryDay, ItineraryItem, PageItinerary};

    fn origin() -> GeoPoint {
        TripConfig::default().origin
    }

    fn item(id: i64, lat: f64, lon: f64) -> ItineraryItem {
        ItineraryItem {
            id,
            title: format!("Place {}", id),
            open_hours: "OPEN N/A".to_string(),
            lat,
            lon,
            description: String::new(),
            website_url: None,
            naver_url: None,
            slot: None,
            weather: None,
            summary: None,
        }
    }

    fn page() -> PageItinerary {
        PageItinerary {
            full_itinerary: vec![ItineraryDay {
                day: 20,
                items: vec![item(1, 35.1, 129.1)],
            }],
            weather_forecasts: vec![],
            summary_text: String::new(),
        }
    }

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0))
    }

    // ─── PlannerForm Tests ───────────────────────────────────

    #[test]
    fn test_planner_form_initial() {
        let form = PlannerForm::new();
        assert_eq!(form.start_date, "2025-09-20");
        assert_eq!(form.end_date, "2025-09-22");
        assert_eq!(form.prompts, vec![String::new()]);
    }

    #[test]
    fn test_planner_form_add_day_and_example() {
        let mut form = PlannerForm::new();
        form.add_day();
        assert_eq!(form.prompts.len(), 2);

        form.load_example();
        assert_eq!(form.prompts.len(), 2);
        assert!(form.prompts[1].contains("jazz club"));
    }

    #[test]
    fn test_planner_form_build_request() {
        let mut form = PlannerForm::new();
        form.prompts = vec!["temples".to_string(), "  ".to_string(), "beach".to_string()];
        let req = form.build_request(origin()).unwrap();
        assert_eq!(req.queries, vec!["temples", "beach"]);
        assert_eq!(req.user_lat, 35.1796);
        assert_eq!(req.start_date.to_string(), "2025-09-20");
    }

    #[test]
    fn test_planner_form_rejects_bad_date() {
        let mut form = PlannerForm::new();
        form.prompts = vec!["temples".to_string()];
        form.start_date = "20/09/2025".to_string();
        let err = form.build_request(origin()).unwrap_err();
        assert!(err.to_string().contains("20/09/2025"));
    }

    #[test]
    fn test_planner_form_rejects_empty_prompts() {
        let form = PlannerForm::new();
        assert!(form.build_request(origin()).is_err());
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert_eq!(state.screen, Screen::Planner);
        assert!(!state.generating);
        assert!(state.error.is_none());
        assert!(state.chat_input.is_empty());
        assert!(!state.show_settings);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_begin_generation_sets_error_on_invalid_form() {
        let mut state = UiState::new();
        assert!(state.begin_generation(origin()).is_none());
        assert!(!state.generating);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_begin_generation_is_single_flight() {
        let mut state = UiState::new();
        state.planner.prompts = vec!["markets".to_string()];
        state.error = Some("old".to_string());

        assert!(state.begin_generation(origin()).is_some());
        assert!(state.generating);
        assert!(state.error.is_none());
        assert_eq!(state.status_text, "Generating...");

        assert!(state.begin_generation(origin()).is_none());
    }

    #[test]
    fn test_process_itinerary_ready() {
        let mut state = UiState::new();
        state.generating = true;
        state.chat_input = "stale".to_string();

        let ready = state.process_events(vec![AppEvent::ItineraryReady { page: page() }]);

        assert_eq!(ready, Some(page()));
        assert_eq!(state.screen, Screen::Itinerary);
        assert!(!state.generating);
        assert!(state.chat_input.is_empty());
        assert_eq!(state.status_text, "1 day itinerary");
    }

    #[test]
    fn test_process_generation_failed() {
        let mut state = UiState::new();
        state.generating = true;

        let ready = state.process_events(vec![AppEvent::GenerationFailed {
            message: "nothing came back".to_string(),
        }]);

        assert!(ready.is_none());
        assert_eq!(state.screen, Screen::Planner);
        assert!(!state.generating);
        assert_eq!(state.error.as_deref(), Some("nothing came back"));
    }

    #[test]
    fn test_back_to_planner() {
        let mut state = UiState::new();
        state.process_events(vec![AppEvent::ItineraryReady { page: page() }]);
        state.chat_input = "draft".to_string();
        state.back_to_planner();
        assert_eq!(state.screen, Screen::Planner);
        assert!(state.chat_input.is_empty());
    }

    // ─── Projection Tests ────────────────────────────────────

    #[test]
    fn test_projection_fit_keeps_markers_inside_padding() {
        let items = vec![item(1, 35.10, 129.00), item(2, 35.20, 129.20), item(3, 35.15, 129.05)];
        let map = plan_map(&items);
        let rect = canvas();
        let projection = Projection::new(&map.viewport, rect);
        let inner = rect.shrink(50.0 - 0.5);

        for marker in &map.markers {
            let pos = projection.project(marker.lat, marker.lon);
            assert!(inner.contains(pos), "marker {} at {:?}", marker.number, pos);
        }
    }

    #[test]
    fn test_projection_north_is_up() {
        let items = vec![item(1, 35.10, 129.10), item(2, 35.20, 129.10)];
        let map = plan_map(&items);
        let projection = Projection::new(&map.viewport, canvas());
        let south = projection.project(35.10, 129.10);
        let north = projection.project(35.20, 129.10);
        assert!(north.y < south.y);
    }

    #[test]
    fn test_projection_single_marker_is_centered() {
        let map = plan_map(&[item(1, 35.1, 129.1)]);
        let rect = canvas();
        let pos = Projection::new(&map.viewport, rect).project(35.1, 129.1);
        assert!((pos - rect.center()).length() < 0.5);
    }

    #[test]
    fn test_projection_default_viewport_centers_default_point() {
        let map = plan_map(&[]);
        assert_eq!(
            map.viewport,
            MapViewport::Default {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM
            }
        );
        let rect = canvas();
        let pos = Projection::new(&map.viewport, rect).project(DEFAULT_CENTER.lat, DEFAULT_CENTER.lon);
        assert!((pos - rect.center()).length() < 0.5);
    }
}
