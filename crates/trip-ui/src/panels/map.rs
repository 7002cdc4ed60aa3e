//! Map panel: projects the day's markers onto a painter canvas and draws
//! numbered pins. Tiles are not rendered; a plain grid stands in for them.

use std::f64::consts::PI;

use egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use trip_core::map::{MapView, MapViewport};

use crate::theme::*;

const TILE_SIZE: f64 = 256.0;
/// Zoom used when every marker sits on the same spot
const SINGLE_POINT_ZOOM: f64 = 15.0;
const PIN_RADIUS: f32 = 12.0;

/// Web-Mercator position normalized to `0.0..=1.0` on both axes
fn mercator(lat: f64, lon: f64) -> (f64, f64) {
    let lat = lat.clamp(-85.0511, 85.0511).to_radians();
    let x = (lon + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
    (x, y)
}

/// Maps geographic coordinates into a screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: (f64, f64),
    /// Screen pixels per normalized Mercator unit
    scale: f64,
    origin: Pos2,
}

impl Projection {
    pub fn new(viewport: &MapViewport, rect: Rect) -> Self {
        let origin = rect.center();
        match viewport {
            MapViewport::Fit { bounds, padding_px } => {
                let (west, north) = mercator(bounds.north, bounds.west);
                let (east, south) = mercator(bounds.south, bounds.east);
                let span_x = east - west;
                let span_y = south - north;

                let width = (rect.width() - 2.0 * padding_px).max(1.0) as f64;
                let height = (rect.height() - 2.0 * padding_px).max(1.0) as f64;

                let scale = if span_x <= f64::EPSILON && span_y <= f64::EPSILON {
                    TILE_SIZE * 2f64.powf(SINGLE_POINT_ZOOM)
                } else {
                    let sx = if span_x > f64::EPSILON { width / span_x } else { f64::INFINITY };
                    let sy = if span_y > f64::EPSILON { height / span_y } else { f64::INFINITY };
                    sx.min(sy)
                };

                Self {
                    center: ((west + east) / 2.0, (north + south) / 2.0),
                    scale,
                    origin,
                }
            }
            MapViewport::Default { center, zoom } => Self {
                center: mercator(center.lat, center.lon),
                scale: TILE_SIZE * 2f64.powi(*zoom as i32),
                origin,
            },
        }
    }

    pub fn project(&self, lat: f64, lon: f64) -> Pos2 {
        let (x, y) = mercator(lat, lon);
        Pos2::new(
            self.origin.x + ((x - self.center.0) * self.scale) as f32,
            self.origin.y + ((y - self.center.1) * self.scale) as f32,
        )
    }
}

/// Render the map. Returns the list index of a clicked pin, if any.
pub fn map_panel(ui: &mut egui::Ui, map: &MapView) -> Option<usize> {
    let size = ui.available_size().max(Vec2::new(200.0, 200.0));
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, PANEL_ROUNDING, MAP_WATER);
    let grid = Stroke::new(1.0, MAP_GRID);
    let step = 40.0;
    let mut x = rect.left() + step;
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], grid);
        x += step;
    }
    let mut y = rect.top() + step;
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], grid);
        y += step;
    }

    let projection = Projection::new(&map.viewport, rect);
    let mut clicked = None;

    for marker in &map.markers {
        let pos = projection.project(marker.lat, marker.lon);
        if !rect.contains(pos) {
            continue;
        }
        painter.circle(pos, PIN_RADIUS, PIN, Stroke::new(2.0, Color32::WHITE));
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            marker.number.to_string(),
            FontId::proportional(13.0),
            Color32::WHITE,
        );

        let pin_rect = Rect::from_center_size(pos, Vec2::splat(PIN_RADIUS * 2.0));
        let response = ui
            .interact(pin_rect, ui.id().with(("map_pin", marker.id)), Sense::click())
            .on_hover_text(&marker.title);
        if response.clicked() {
            clicked = Some(marker.number - 1);
        }
    }

    clicked
}
