//! Isometric projection between grid cells and screen space.
//!
//! Grid x grows towards the lower right of the screen, grid y towards the
//! lower left. The returned point is the top vertex of the tile diamond.

use crate::types::{TILE_H, TILE_W};

/// Project a grid position into isometric screen space.
///
/// # Examples
///
/// ```
/// use iso_dungeon_core::iso::to_iso;
///
/// assert_eq!(to_iso(0, 0), (0.0, 0.0));
/// assert_eq!(to_iso(1, 0), (32.0, 16.0));
/// assert_eq!(to_iso(0, 1), (-32.0, 16.0));
/// ```
#[inline]
pub fn to_iso(grid_x: i32, grid_y: i32) -> (f32, f32) {
    let iso_x = (grid_x - grid_y) as f32 * (TILE_W / 2.0);
    let iso_y = (grid_x + grid_y) as f32 * (TILE_H / 2.0);
    (iso_x, iso_y)
}

/// Inverse of [`to_iso`], returning fractional grid coordinates.
#[inline]
pub fn from_iso(iso_x: f32, iso_y: f32) -> (f32, f32) {
    let a = iso_x / (TILE_W / 2.0);
    let b = iso_y / (TILE_H / 2.0);
    ((a + b) / 2.0, (b - a) / 2.0)
}

/// Nearest grid cell for a screen-space point.
pub fn cell_at(iso_x: f32, iso_y: f32) -> (i32, i32) {
    let (gx, gy) = from_iso(iso_x, iso_y);
    (gx.round() as i32, gy.round() as i32)
}
