pub mod itinerary;
pub mod raw;
pub mod realtime;
pub mod message;
pub mod event;
pub mod config;
pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::TripError;

pub type Result<T> = std::result::Result<T, TripError>;
