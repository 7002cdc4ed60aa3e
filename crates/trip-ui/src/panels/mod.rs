pub mod chat;
pub mod detail;
pub mod itinerary;
pub mod map;
pub mod planner;
pub mod settings;
pub mod summary;
