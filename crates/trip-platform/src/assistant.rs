//! Chat assistant adapter.
//!
//! Talks to a same-origin proxy that forwards to the Gemini
//! `generateContent` endpoint, so no provider key ever reaches the client.
//! Uses browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use trip_core::ports::ChatPort;
use trip_types::{Result, TripError, config::ChatConfig};

pub struct ProxyChatClient {
    url: String,
    model: String,
}

impl ProxyChatClient {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            url: config.proxy_url.clone(),
            model: config.model.clone(),
        }
    }

    fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
        })
    }
}

#[async_trait(?Send)]
impl ChatPort for ProxyChatClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = self.build_request_body(prompt);

        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| TripError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| TripError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TripError::Http { status, body: text });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TripError::Network(e.to_string()))?;
        extract_reply(&text)
    }
}

/// Pull the first candidate's text out of a `generateContent` response.
pub fn extract_reply(body: &str) -> Result<String> {
    let data: ApiResponse =
        serde_json::from_str(body).map_err(|e| TripError::Chat(e.to_string()))?;

    data.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| TripError::Chat("No candidates in response".to_string()))
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Deserialize)]
struct ApiCandidate {
    content: ApiContent,
}

#[derive(Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: Option<String>,
}
