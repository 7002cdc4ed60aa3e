//! Itinerary generation: call the scheduler and normalize its answer.

use trip_types::{itinerary::PageItinerary, raw::ScheduleRequest};

use crate::normalize::normalize;
use crate::ports::SchedulePort;

/// Shown when generation yields nothing usable
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate itinerary. The response was empty. Please try again.";

/// Request an itinerary and normalize it. Failures are logged and become `None`.
pub async fn generate_itinerary(port: &dyn SchedulePort, req: &ScheduleRequest) -> Option<PageItinerary> {
    log::info!(
        "Requesting itinerary for {} day prompt(s), {} to {}",
        req.queries.len(),
        req.start_date,
        req.end_date
    );
    match port.generate(req).await {
        Ok(raw) => {
            let page = normalize(&raw);
            if let Some(ref page) = page {
                log::info!("Itinerary ready: {} day(s)", page.day_count());
            }
            page
        }
        Err(e) => {
            log::error!("Failed to generate itinerary: {}", e);
            None
        }
    }
}
