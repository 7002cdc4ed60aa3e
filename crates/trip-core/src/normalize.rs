//! Response normalizer: raw `/schedule` payload → [`PageItinerary`].
//!
//! Pure transformation. Dates are handled as `NaiveDate` (no timezone) and
//! formatted with chrono's fixed English names, so output is deterministic.

use chrono::{Datelike, NaiveDate};
use trip_types::{
    itinerary::{ItineraryDay, ItineraryItem, PageItinerary, WeatherForecastEntry, WeatherIcon},
    raw::{RawDaySchedule, RawForecast, RawPlace, RawSchedulePayload},
};

/// Number of forecast days shown
pub const FORECAST_DAYS: usize = 6;

/// Sentinel shown when no operating hours are known
pub const HOURS_NOT_AVAILABLE: &str = "N/A";

/// The scheduler fills operating hours for Monday at minimum
const REFERENCE_WEEKDAY: &str = "monday";

/// Normalize a deserialized payload. Returns `None` when there is nothing to show.
pub fn normalize(raw: &RawSchedulePayload) -> Option<PageItinerary> {
    if raw.scheduled_itineraries.is_empty() {
        log::error!("Itinerary payload has no scheduled days");
        return None;
    }

    let full_itinerary = raw
        .scheduled_itineraries
        .iter()
        .enumerate()
        .map(|(index, day)| normalize_day(index, day))
        .collect();

    let weather_forecasts = raw
        .daily_forecast
        .iter()
        .take(FORECAST_DAYS)
        .map(normalize_forecast)
        .collect();

    Some(PageItinerary {
        full_itinerary,
        weather_forecasts,
        summary_text: raw.summary.clone().unwrap_or_default(),
    })
}

/// Deserialize and normalize a response body. Schema mismatches are logged
/// here, once, and surface as `None`.
pub fn normalize_json(body: &str) -> Option<PageItinerary> {
    match serde_json::from_str::<RawSchedulePayload>(body) {
        Ok(raw) => normalize(&raw),
        Err(e) => {
            log::error!("Itinerary response does not match the schedule schema: {}", e);
            None
        }
    }
}

fn normalize_day(index: usize, raw: &RawDaySchedule) -> ItineraryDay {
    let date = parse_date(&raw.day);
    let day = match date {
        Some(d) => d.day(),
        None => {
            log::warn!("Unparseable schedule date {:?}, using ordinal {}", raw.day, index + 1);
            index as u32 + 1
        }
    };

    ItineraryDay {
        day,
        items: raw.itinerary.iter().map(|place| normalize_place(place, date)).collect(),
    }
}

fn normalize_place(place: &RawPlace, date: Option<NaiveDate>) -> ItineraryItem {
    ItineraryItem {
        id: place.id,
        title: place.name.clone(),
        open_hours: open_hours(place, date),
        lat: place.geom.lat,
        lon: place.geom.lon,
        description: place.description.clone(),
        website_url: place.website.clone(),
        naver_url: place.naver_url.clone(),
        slot: place.slot.clone(),
        weather: place.weather.clone(),
        summary: None,
    }
}

/// `OPEN <hours>` for the visit weekday, else the reference weekday, else `N/A`.
pub fn open_hours(place: &RawPlace, date: Option<NaiveDate>) -> String {
    let hours = place
        .operating_hours
        .as_ref()
        .and_then(|table| {
            date.and_then(|d| table.get(weekday_key(d).as_str()))
                .or_else(|| table.get(REFERENCE_WEEKDAY))
        })
        .map(|h| h.trim())
        .filter(|h| !h.is_empty())
        .unwrap_or(HOURS_NOT_AVAILABLE);

    format!("OPEN {}", hours)
}

fn normalize_forecast(raw: &RawForecast) -> WeatherForecastEntry {
    let day = match parse_date(&raw.date) {
        Some(d) => weekday_label(d),
        None => raw.date.clone(),
    };

    WeatherForecastEntry {
        day,
        icon: WeatherIcon::from_condition(raw.dominant_weather.as_deref()),
        temp: raw.avg_temp.round() as i32,
    }
}

/// `YYYY-MM-DD`, tolerating a trailing time component.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| s.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// "SAT"
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string().to_uppercase()
}

/// "saturday", the key format of the operating-hours table
fn weekday_key(date: NaiveDate) -> String {
    date.format("%A").to_string().to_lowercase()
}
