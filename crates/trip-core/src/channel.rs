//! Realtime summary channel.
//!
//! Wraps one [`RealtimePort`] connection: pushes the itinerary snapshot when
//! the connection is ready and turns inbound frames carrying a `summary` into
//! `on_update` calls. The guard lives here rather than in the transport, so
//! no transport can deliver an update after [`ChannelHandle::close`] returns.

use std::cell::Cell;
use std::rc::Rc;

use trip_types::realtime::{SummaryFrame, SummarySnapshot};

use crate::ports::{RealtimeConnection, RealtimePort, TransportEvent, TransportSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Open,
    /// The remote end went away. Terminal: there is no reconnect.
    Dropped,
    /// Closed locally
    Closed,
}

/// Owner of an open summary connection. Dropping it closes the connection.
pub struct ChannelHandle {
    state: Rc<Cell<ChannelState>>,
    connection: Option<Box<dyn RealtimeConnection>>,
}

impl ChannelHandle {
    fn dead(state: Rc<Cell<ChannelState>>) -> Self {
        state.set(ChannelState::Dropped);
        Self {
            state,
            connection: None,
        }
    }

    pub fn state(&self) -> ChannelState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get() == ChannelState::Open
    }

    /// Terminate the connection unconditionally. Idempotent.
    pub fn close(&mut self) {
        if self.state.get() != ChannelState::Closed {
            self.state.set(ChannelState::Closed);
            log::info!("Summary channel closed");
        }
        if let Some(mut connection) = self.connection.take() {
            connection.close();
        }
    }
}

impl Drop for ChannelHandle {
    fn drop(&mut self) {
        self.close();
    }
}

pub struct SummaryChannel;

impl SummaryChannel {
    /// Open exactly one connection and return its handle.
    ///
    /// Never fails into the caller: serialization or connect errors are
    /// logged and yield a handle that is already [`ChannelState::Dropped`].
    pub fn open<F>(port: &dyn RealtimePort, snapshot: &SummarySnapshot, mut on_update: F) -> ChannelHandle
    where
        F: FnMut(String) + 'static,
    {
        let state = Rc::new(Cell::new(ChannelState::Open));

        let outbound = match serde_json::to_string(snapshot) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode itinerary snapshot: {}", e);
                return ChannelHandle::dead(state);
            }
        };

        let sink_state = state.clone();
        let sink: TransportSink = Box::new(move |event| {
            if sink_state.get() != ChannelState::Open {
                return;
            }
            match event {
                TransportEvent::Frame(raw) => match SummaryFrame::parse_summary(&raw) {
                    Some(text) => on_update(text),
                    None => log::debug!("Ignoring realtime frame without a summary"),
                },
                TransportEvent::Closed => {
                    log::warn!("Summary channel closed by remote; keeping the last summary");
                    sink_state.set(ChannelState::Dropped);
                }
                TransportEvent::Error(message) => {
                    log::error!("Summary channel transport error: {}", message);
                }
            }
        });

        match port.connect(outbound, sink) {
            Ok(connection) => {
                log::info!("Summary channel opened");
                ChannelHandle {
                    state,
                    connection: Some(connection),
                }
            }
            Err(e) => {
                log::error!("Failed to open summary channel: {}", e);
                ChannelHandle::dead(state)
            }
        }
    }
}
