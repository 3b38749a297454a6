// src/map/projection.rs
//
// Web Mercator layout of a fixed-size map frame. Offsets are measured from
// the frame center so the page can position tiles and markers with
// `calc(50% + dx)` and stay fluid in width.

use crate::domain::property::Coordinate;
use crate::map::viewport::Viewport;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;

/// World pixel position of a coordinate at `zoom`.
pub fn project(coord: Coordinate, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * 2f64.powi(zoom as i32);
    let lat = coord.lat.to_radians();

    let x = (coord.lng + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Wrapped tile column, what the provider is asked for.
    pub x: u32,
    pub y: u32,
    pub z: u8,
    /// Top-left corner relative to the frame center.
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct MapFrame {
    pub viewport: Viewport,
    pub width: u32,
    pub height: u32,
    center_px: (f64, f64),
}

impl MapFrame {
    pub fn new(viewport: Viewport, width: u32, height: u32) -> Self {
        Self {
            viewport,
            width,
            height,
            center_px: project(viewport.center, viewport.zoom),
        }
    }

    /// Offset of a coordinate from the frame center, in CSS pixels.
    pub fn offset(&self, coord: Coordinate) -> (f64, f64) {
        let (x, y) = project(coord, self.viewport.zoom);
        (x - self.center_px.0, y - self.center_px.1)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        let (dx, dy) = self.offset(coord);
        dx.abs() <= self.width as f64 / 2.0 && dy.abs() <= self.height as f64 / 2.0
    }

    /// Every tile that intersects the frame, row by row.
    pub fn tiles(&self) -> Vec<TilePlacement> {
        let z = self.viewport.zoom;
        let count = 1i64 << z;
        let (cx, cy) = self.center_px;
        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;

        let first_col = ((cx - half_w) / TILE_SIZE).floor() as i64;
        let last_col = ((cx + half_w) / TILE_SIZE).floor() as i64;
        let first_row = ((cy - half_h) / TILE_SIZE).floor() as i64;
        let last_row = ((cy + half_h) / TILE_SIZE).floor() as i64;

        let mut tiles = Vec::new();
        for row in first_row.max(0)..=last_row.min(count - 1) {
            for col in first_col..=last_col {
                tiles.push(TilePlacement {
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    z,
                    dx: col as f64 * TILE_SIZE - cx,
                    dy: row as f64 * TILE_SIZE - cy,
                });
            }
        }
        tiles
    }
}
