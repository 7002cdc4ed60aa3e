//! HTTP adapter for the itinerary scheduler (`POST /schedule`).
//! Uses browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use trip_core::ports::SchedulePort;
use trip_types::{
    Result, TripError,
    config::ApiConfig,
    raw::{RawSchedulePayload, ScheduleRequest},
    session::SessionContext,
};

pub struct HttpScheduleClient {
    url: String,
    session: SessionContext,
}

impl HttpScheduleClient {
    pub fn new(api: &ApiConfig, session: SessionContext) -> Self {
        Self {
            url: api.schedule_url(),
            session,
        }
    }
}

#[async_trait(?Send)]
impl SchedulePort for HttpScheduleClient {
    async fn generate(&self, req: &ScheduleRequest) -> Result<RawSchedulePayload> {
        let mut builder = Request::post(&self.url).header("Content-Type", "application/json");
        match self.session.authorization_header() {
            Some(auth) => builder = builder.header("Authorization", &auth),
            None => log::warn!("No session token; the scheduler may reject the request"),
        }

        let response = builder
            .json(req)
            .map_err(|e| TripError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| TripError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            log::error!("Scheduler returned HTTP {}: {}", status, body);
            return Err(TripError::Http { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TripError::Network(e.to_string()))?;
        parse_schedule_body(&body)
    }
}

/// Map a response body onto the documented schema.
pub fn parse_schedule_body(body: &str) -> Result<RawSchedulePayload> {
    serde_json::from_str(body).map_err(|e| TripError::Mapping(e.to_string()))
}
