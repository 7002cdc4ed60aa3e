use serde::{Deserialize, Serialize};

use crate::itinerary::PageItinerary;

/// Events delivered to an itinerary view from async work it started.
/// The view drains these on each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewEvent {
    /// The realtime summarizer pushed new summary text
    SummaryUpdated { generation: u64, text: String },
    /// The chat backend answered
    ChatReplied { text: String },
    /// The chat request failed
    ChatFailed { message: String },
}

/// Application-level events (outside any single itinerary view).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// A generation request produced a usable itinerary
    ItineraryReady { page: PageItinerary },
    /// Generation failed or the response was empty/malformed
    GenerationFailed { message: String },
}
