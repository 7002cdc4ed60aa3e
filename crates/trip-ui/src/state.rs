//! UI-level state that is not owned by the itinerary view:
//! which screen is up, the trip input form, and transient status.

use chrono::NaiveDate;

use trip_types::{
    Result, TripError,
    config::GeoPoint,
    event::AppEvent,
    itinerary::PageItinerary,
    raw::ScheduleRequest,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Planner,
    Itinerary,
}

/// Trip input form
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerForm {
    pub start_date: String,
    pub end_date: String,
    /// One free-text prompt per day
    pub prompts: Vec<String>,
}

impl PlannerForm {
    pub fn new() -> Self {
        Self {
            start_date: "2025-09-20".to_string(),
            end_date: "2025-09-22".to_string(),
            prompts: vec![String::new()],
        }
    }

    pub fn add_day(&mut self) {
        self.prompts.push(String::new());
    }

    /// Replace the prompts with a worked example
    pub fn load_example(&mut self) {
        self.prompts = vec![
            "I want to go shopping at a mall, I want to go to a Cirque to watch a show for entertainment"
                .to_string(),
            "I want to eat at a korean restaurant, go on a sky capsule ride, go to a luxurious italian restaurant, and drink at a jazz club"
                .to_string(),
        ];
    }

    pub fn build_request(&self, origin: GeoPoint) -> Result<ScheduleRequest> {
        let start = parse_form_date(&self.start_date)?;
        let end = parse_form_date(&self.end_date)?;
        ScheduleRequest::new(self.prompts.iter().map(String::as_str), origin, start, end)
    }
}

impl Default for PlannerForm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_form_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        TripError::InvalidRequest(format!("'{}' is not a YYYY-MM-DD date", value.trim()))
    })
}

/// Save feedback shown under the settings panel
#[derive(Debug, Clone, PartialEq)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

pub struct UiState {
    pub screen: Screen,
    pub planner: PlannerForm,
    /// Chat input field content
    pub chat_input: String,
    pub generating: bool,
    /// Error shown on the planner screen
    pub error: Option<String>,
    pub show_settings: bool,
    pub save_feedback: Option<SaveFeedback>,
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Planner,
            planner: PlannerForm::new(),
            chat_input: String::new(),
            generating: false,
            error: None,
            show_settings: false,
            save_feedback: None,
            status_text: "Ready".to_string(),
        }
    }

    /// Validate the form and enter the generating state.
    /// Returns `None` (with `error` set) if the form is unusable or a
    /// generation is already running.
    pub fn begin_generation(&mut self, origin: GeoPoint) -> Option<ScheduleRequest> {
        if self.generating {
            return None;
        }
        match self.planner.build_request(origin) {
            Ok(req) => {
                self.generating = true;
                self.error = None;
                self.status_text = "Generating...".to_string();
                Some(req)
            }
            Err(e) => {
                log::warn!("Trip form rejected: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply app events. Returns the newest itinerary, if one arrived, for
    /// the caller to load into a view.
    pub fn process_events(&mut self, events: Vec<AppEvent>) -> Option<PageItinerary> {
        let mut ready = None;
        for event in events {
            match event {
                AppEvent::ItineraryReady { page } => {
                    self.generating = false;
                    self.error = None;
                    self.screen = Screen::Itinerary;
                    self.chat_input.clear();
                    self.status_text = format!("{} day itinerary", page.day_count());
                    ready = Some(page);
                }
                AppEvent::GenerationFailed { message } => {
                    self.generating = false;
                    self.status_text = "Ready".to_string();
                    self.error = Some(message);
                }
            }
        }
        ready
    }

    pub fn back_to_planner(&mut self) {
        self.screen = Screen::Planner;
        self.chat_input.clear();
        self.status_text = "Ready".to_string();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
