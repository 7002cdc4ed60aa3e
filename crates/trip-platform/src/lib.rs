//! Browser implementations of the `trip-core` ports.

pub mod schedule;
pub mod realtime;
pub mod assistant;
pub mod settings;

pub use assistant::ProxyChatClient;
pub use realtime::WebSocketRealtime;
pub use schedule::HttpScheduleClient;
