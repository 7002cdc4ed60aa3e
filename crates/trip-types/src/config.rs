use serde::{Deserialize, Serialize};

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
    /// Where the traveller starts from; sent with every generation request
    pub origin: GeoPoint,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            chat: ChatConfig::default(),
            origin: GeoPoint {
                lat: 35.1796,
                lon: 129.0756,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub realtime_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tueniuu-itinerary-recommender-api.hf.space".to_string(),
            realtime_url: "wss://tueniuu-itinerary-recommender-api.hf.space/ws/itinerary"
                .to_string(),
        }
    }
}

impl ApiConfig {
    pub fn schedule_url(&self) -> String {
        format!("{}/schedule", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Server-side proxy that holds the generative-text credential
    pub proxy_url: String,
    pub model: String,
    /// Maximum number of messages kept in the conversation history
    pub max_memory: usize,
    pub placeholder: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            proxy_url: "/api/assistant/generate".to_string(),
            model: "gemini-1.5-flash-latest".to_string(),
            max_memory: 10,
            placeholder: "Type a message...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}
