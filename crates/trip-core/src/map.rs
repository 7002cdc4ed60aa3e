//! Map planning for the current day: markers plus the viewport to show them in.

use trip_types::{config::GeoPoint, itinerary::ItineraryItem};

/// Shown when a day has nothing to plot
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 35.165,
    lon: 129.135,
};
pub const DEFAULT_ZOOM: u8 = 13;
pub const FIT_PADDING_PX: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: i64,
    /// 1-based position in the day's visiting order
    pub number: usize,
    pub lat: f64,
    pub lon: f64,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    fn around(lat: f64, lon: f64) -> Self {
        Self {
            south: lat,
            west: lon,
            north: lat,
            east: lon,
        }
    }

    fn extend(&mut self, lat: f64, lon: f64) {
        self.south = self.south.min(lat);
        self.north = self.north.max(lat);
        self.west = self.west.min(lon);
        self.east = self.east.max(lon);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapViewport {
    /// Fit the viewport to the markers' bounding box
    Fit { bounds: GeoBounds, padding_px: f32 },
    Default { center: GeoPoint, zoom: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    pub viewport: MapViewport,
}

pub fn plan_map(items: &[ItineraryItem]) -> MapView {
    let markers: Vec<MapMarker> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.lat.is_finite() && item.lon.is_finite())
        .map(|(index, item)| MapMarker {
            id: item.id,
            number: index + 1,
            lat: item.lat,
            lon: item.lon,
            title: item.title.clone(),
        })
        .collect();

    let viewport = match markers.split_first() {
        Some((first, rest)) => {
            let mut bounds = GeoBounds::around(first.lat, first.lon);
            for m in rest {
                bounds.extend(m.lat, m.lon);
            }
            MapViewport::Fit {
                bounds,
                padding_px: FIT_PADDING_PX,
            }
        }
        None => MapViewport::Default {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        },
    };

    MapView { markers, viewport }
}
