//! WebSocket transport for the realtime summary channel.
//!
//! The browser drives the socket through callbacks; each one forwards a
//! `TransportEvent` into the sink handed over by `trip-core`. The closures
//! are owned by the connection and unregistered on close, so nothing fires
//! into a torn-down view.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, Event, MessageEvent, WebSocket};

use trip_core::ports::{RealtimeConnection, RealtimePort, TransportEvent, TransportSink};
use trip_types::{Result, TripError};

pub struct WebSocketRealtime {
    url: String,
}

impl WebSocketRealtime {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RealtimePort for WebSocketRealtime {
    fn connect(&self, outbound: String, sink: TransportSink) -> Result<Box<dyn RealtimeConnection>> {
        let ws = WebSocket::new(&self.url)
            .map_err(|e| TripError::Channel(format!("Failed to create WebSocket: {:?}", e)))?;
        let sink = Rc::new(RefCell::new(sink));

        // Push the snapshot as soon as the socket is ready
        let ws_for_open = ws.clone();
        let sink_for_open = sink.clone();
        let onopen = Closure::wrap(Box::new(move |_: Event| {
            log::info!("Connected to itinerary WebSocket");
            if let Err(e) = ws_for_open.send_with_str(&outbound) {
                (sink_for_open.borrow_mut())(TransportEvent::Error(format!(
                    "Failed to send snapshot: {:?}",
                    e
                )));
            }
        }) as Box<dyn FnMut(Event)>);

        let sink_for_message = sink.clone();
        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            let event = match event.data().as_string() {
                Some(text) => TransportEvent::Frame(text),
                None => TransportEvent::Error("Ignoring non-text frame".to_string()),
            };
            (sink_for_message.borrow_mut())(event);
        }) as Box<dyn FnMut(MessageEvent)>);

        let sink_for_close = sink.clone();
        let onclose = Closure::wrap(Box::new(move |event: CloseEvent| {
            log::info!("WebSocket connection closed (code {})", event.code());
            (sink_for_close.borrow_mut())(TransportEvent::Closed);
        }) as Box<dyn FnMut(CloseEvent)>);

        let sink_for_error = sink;
        let onerror = Closure::wrap(Box::new(move |event: ErrorEvent| {
            (sink_for_error.borrow_mut())(TransportEvent::Error(event.message()));
        }) as Box<dyn FnMut(ErrorEvent)>);

        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        Ok(Box::new(WebSocketConnection {
            ws,
            _onopen: onopen,
            _onmessage: onmessage,
            _onclose: onclose,
            _onerror: onerror,
            closed: false,
        }))
    }
}

struct WebSocketConnection {
    ws: WebSocket,
    _onopen: Closure<dyn FnMut(Event)>,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onclose: Closure<dyn FnMut(CloseEvent)>,
    _onerror: Closure<dyn FnMut(ErrorEvent)>,
    closed: bool,
}

impl RealtimeConnection for WebSocketConnection {
    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        // Unhook before closing so the closures can be freed with `self`
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onclose(None);
        self.ws.set_onerror(None);

        if let Err(e) = self.ws.close() {
            log::warn!("WebSocket close failed: {:?}", e);
        }
    }
}

impl Drop for WebSocketConnection {
    fn drop(&mut self) {
        self.close();
    }
}
