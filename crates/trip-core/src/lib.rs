//! Core of the itinerary screen.
//!
//! Everything here is platform-free: browser adapters plug in through the
//! traits in [`ports`], and async results come back through an [`event_bus::EventBus`].

pub mod ports;
pub mod event_bus;
pub mod normalize;
pub mod channel;
pub mod chat;
pub mod map;
pub mod detail;
pub mod view;
pub mod planner;
