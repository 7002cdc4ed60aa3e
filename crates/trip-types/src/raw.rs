//! Wire schema of the itinerary-generation endpoint (`POST /schedule`).
//!
//! These types document the exact response shape. Anything that fails to
//! deserialize into them is a mapping error at the integration boundary.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, TripError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSchedulePayload {
    pub scheduled_itineraries: Vec<RawDaySchedule>,
    #[serde(default)]
    pub daily_forecast: Vec<RawForecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDaySchedule {
    /// `YYYY-MM-DD`
    pub day: String,
    #[serde(default)]
    pub itinerary: Vec<RawPlace>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlace {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub geom: RawGeom,
    /// Weekday name (lowercase) → display hours
    #[serde(default)]
    pub operating_hours: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub naver_url: Option<String>,
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawGeom {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForecast {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub dominant_weather: Option<String>,
    pub avg_temp: f64,
}

/// Body of `POST /schedule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub queries: Vec<String>,
    pub user_lat: f64,
    pub user_lon: f64,
    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub end_date: NaiveDate,
}

impl ScheduleRequest {
    /// Build a request from per-day prompts. Blank prompts are dropped.
    pub fn new<I, S>(
        prompts: I,
        origin: crate::config::GeoPoint,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let queries: Vec<String> = prompts
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if queries.is_empty() {
            return Err(TripError::InvalidRequest(
                "at least one day prompt is required".to_string(),
            ));
        }
        if end_date < start_date {
            return Err(TripError::InvalidRequest(format!(
                "end date {} is before start date {}",
                end_date, start_date
            )));
        }

        Ok(Self {
            queries,
            user_lat: origin.lat,
            user_lon: origin.lon,
            start_date,
            end_date,
        })
    }
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(d)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
