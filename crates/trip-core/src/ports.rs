//! Port traits: the hexagonal architecture boundary.
//!
//! Defined here in `trip-core` (pure Rust); browser implementations live in
//! `trip-platform`. The core only ever depends on these traits, so every
//! collaborator can be replaced by a mock in tests.

use async_trait::async_trait;
use trip_types::{
    Result,
    raw::{RawSchedulePayload, ScheduleRequest},
};

// ─── Itinerary generation Port ───────────────────────────────

#[async_trait(?Send)]
pub trait SchedulePort {
    /// Ask the external scheduler for an itinerary (`POST /schedule`)
    async fn generate(&self, req: &ScheduleRequest) -> Result<RawSchedulePayload>;
}

// ─── Chat Port ───────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatPort {
    /// Send a fully rendered prompt and return the reply text
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// ─── Realtime Port ───────────────────────────────────────────

/// Something the transport observed on an open connection
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// A text frame from the remote end
    Frame(String),
    /// The remote end (or the network) closed the connection
    Closed,
    /// Transport-level error
    Error(String),
}

/// Callback the transport invokes for every [`TransportEvent`].
pub type TransportSink = Box<dyn FnMut(TransportEvent)>;

pub trait RealtimePort {
    /// Open one connection. `outbound` must be sent as a single text message
    /// as soon as the connection is ready.
    fn connect(&self, outbound: String, sink: TransportSink) -> Result<Box<dyn RealtimeConnection>>;
}

pub trait RealtimeConnection {
    /// Terminate the connection. Must be safe to call more than once.
    fn close(&mut self);
}
