//! Messages exchanged with the remote summarizer over the realtime connection.

use serde::{Deserialize, Serialize};

use crate::itinerary::PageItinerary;

/// Outbound snapshot, sent once when the connection becomes ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub scheduled_itineraries: Vec<SnapshotDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDay {
    pub day: u32,
    pub itinerary: Vec<SnapshotItem>,
    pub weather: Option<String>,
    pub warning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    pub weather: Option<String>,
}

impl SummarySnapshot {
    /// Restructure a normalized itinerary into the summarizer's input shape.
    /// A day's weather is taken from its first item.
    pub fn from_page(page: &PageItinerary) -> Self {
        let scheduled_itineraries = page
            .full_itinerary
            .iter()
            .map(|day| SnapshotDay {
                day: day.day,
                itinerary: day
                    .items
                    .iter()
                    .map(|item| SnapshotItem {
                        id: item.id,
                        name: item.title.clone(),
                        description: item.description.clone(),
                        lat: item.lat,
                        lon: item.lon,
                        weather: item.weather.clone(),
                    })
                    .collect(),
                weather: day.items.first().and_then(|item| item.weather.clone()),
                warning: false,
            })
            .collect();

        Self { scheduled_itineraries }
    }
}

/// Inbound update. Only `summary` is consumed; other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryFrame {
    #[serde(default)]
    pub summary: Option<String>,
}

impl SummaryFrame {
    /// Extract the summary text from a raw text frame, if it carries one.
    /// Blank summaries count as none.
    pub fn parse_summary(raw: &str) -> Option<String> {
        serde_json::from_str::<SummaryFrame>(raw)
            .ok()
            .and_then(|frame| frame.summary)
            .filter(|s| !s.trim().is_empty())
    }
}
