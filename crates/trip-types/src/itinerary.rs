//! UI-ready itinerary model produced by the normalizer.

use serde::{Deserialize, Serialize};

/// The aggregate held by the itinerary view for the lifetime of one screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageItinerary {
    pub full_itinerary: Vec<ItineraryDay>,
    pub weather_forecasts: Vec<WeatherForecastEntry>,
    /// Summary supplied at generation time; empty when the backend sent none.
    #[serde(default)]
    pub summary_text: String,
}

impl PageItinerary {
    pub fn day_count(&self) -> usize {
        self.full_itinerary.len()
    }

    pub fn day(&self, index: usize) -> Option<&ItineraryDay> {
        self.full_itinerary.get(index)
    }
}

/// One scheduled day. `items` keeps the backend order, which is the visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub items: Vec<ItineraryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: i64,
    pub title: String,
    pub open_hours: String,
    pub lat: f64,
    pub lon: f64,
    pub description: String,
    pub website_url: Option<String>,
    pub naver_url: Option<String>,
    /// Category tag, e.g. "Activity 🌳" or "Cafe ☕"
    pub slot: Option<String>,
    /// Raw hourly forecast string from the scheduler
    pub weather: Option<String>,
    /// Reserved for per-item enrichment. Nothing populates it yet.
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecastEntry {
    /// Short uppercase weekday, e.g. "SAT"
    pub day: String,
    pub icon: WeatherIcon,
    pub temp: i32,
}

impl WeatherForecastEntry {
    pub fn icon_url(&self) -> &'static str {
        self.icon.url()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Rain,
    Clouds,
    Clear,
    /// Fallback for anything unrecognised
    Mist,
}

impl WeatherIcon {
    /// Case-insensitive substring match on a dominant-weather description.
    pub fn from_condition(condition: Option<&str>) -> Self {
        let Some(condition) = condition else {
            return WeatherIcon::Mist;
        };
        let condition = condition.to_lowercase();
        if condition.contains("rain") {
            WeatherIcon::Rain
        } else if condition.contains("clouds") {
            WeatherIcon::Clouds
        } else if condition.contains("clear") {
            WeatherIcon::Clear
        } else {
            WeatherIcon::Mist
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            WeatherIcon::Rain => "https://openweathermap.org/img/wn/10d@2x.png",
            WeatherIcon::Clouds => "https://openweathermap.org/img/wn/03d@2x.png",
            WeatherIcon::Clear => "https://openweathermap.org/img/wn/01d@2x.png",
            WeatherIcon::Mist => "https://openweathermap.org/img/wn/50d@2x.png",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Rain => "🌧",
            WeatherIcon::Clouds => "☁",
            WeatherIcon::Clear => "☀",
            WeatherIcon::Mist => "🌫",
        }
    }
}
