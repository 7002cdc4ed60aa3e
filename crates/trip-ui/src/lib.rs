//! egui rendering for the trip planner.
//!
//! Panels read `trip-core` state and hand user intent back to the caller
//! as return values; they never talk to adapters directly.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
