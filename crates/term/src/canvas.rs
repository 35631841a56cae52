//! Isometric canvas: maps screen-unit draw calls onto terminal cells.
//!
//! One terminal column is [`PX_PER_COL`] screen units wide and one row is
//! [`PX_PER_ROW`] tall. With a 64×32 tile this makes every floor diamond
//! exactly 8 columns on a single row, and the rows of diamonds interlock
//! like bricks with no gaps.

use crate::atlas::Atlas;
use crate::core::Canvas;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{DrawKind, Shape, TILE_H, TILE_W};

/// Screen units per terminal column.
pub const PX_PER_COL: f32 = 8.0;
/// Screen units per terminal row.
pub const PX_PER_ROW: f32 = 16.0;

/// Width of a health bar in columns.
const BAR_COLS: i32 = 4;
const BAR_FULL: Rgb = Rgb::new(0, 255, 0);
const BAR_EMPTY: Rgb = Rgb::new(255, 0, 0);

fn col(x: f32) -> i32 {
    (x / PX_PER_COL).floor() as i32
}

fn row(y: f32) -> i32 {
    (y / PX_PER_ROW).floor() as i32
}

fn darken(c: Rgb) -> Rgb {
    Rgb::new(c.r / 3, c.g / 3, c.b / 3)
}

pub struct IsoCanvas<'a> {
    fb: &'a mut FrameBuffer,
    atlas: &'a Atlas,
}

impl<'a> IsoCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, atlas: &'a Atlas) -> Self {
        Self { fb, atlas }
    }

    /// Write a glyph keeping whatever background is already under it.
    fn overlay(&mut self, cx: i32, cy: i32, ch: char, fg: Rgb) {
        if cx < 0 || cy < 0 {
            return;
        }
        let Some(under) = self.fb.get(cx as u16, cy as u16) else {
            return;
        };
        let style = CellStyle {
            fg,
            bold: true,
            ..under.style
        };
        self.fb.set(cx as u16, cy as u16, Cell { ch, style });
    }

    fn tile(&mut self, x: f32, y: f32, ch: char, fg: Rgb, bg: Rgb) {
        // Anchor is the top vertex; the diamond's widest row is half a tile down.
        let cy = row(y + TILE_H / 2.0);
        let left = col(x - TILE_W / 2.0);
        let cols = (TILE_W / PX_PER_COL) as i32;
        let cell = CellStyle::fg_on(fg, bg).into_cell(ch);
        for dx in 0..cols {
            self.fb.set_signed(left + dx, cy, cell);
        }
    }
}

impl Canvas for IsoCanvas<'_> {
    fn draw(&mut self, kind: DrawKind, x: f32, y: f32, fallback: Rgb, shape: Shape) {
        let glyph = self.atlas.get(kind);
        match (shape, glyph) {
            (Shape::Diamond, Some(g)) => {
                let fg = g.fg.unwrap_or(fallback);
                self.tile(x, y, g.ch, fg, darken(fg));
            }
            (Shape::Diamond, None) => self.tile(x, y, '░', fallback, darken(fallback)),
            (_, Some(g)) => {
                self.overlay(col(x), row(y + TILE_H / 2.0), g.ch, g.fg.unwrap_or(fallback));
            }
            (Shape::Circle, None) => self.overlay(col(x), row(y + TILE_H / 2.0), '●', fallback),
            (Shape::Rect, None) => self.overlay(col(x), row(y + TILE_H / 2.0), '■', fallback),
        }
    }

    fn health_bar(&mut self, x: f32, y: f32, fraction: f32) {
        let cy = row(y + TILE_H / 2.0) - 1;
        let left = col(x) - BAR_COLS / 2;
        let filled = (fraction.clamp(0.0, 1.0) * BAR_COLS as f32).round() as i32;
        for dx in 0..BAR_COLS {
            let color = if dx < filled { BAR_FULL } else { BAR_EMPTY };
            self.overlay(left + dx, cy, '▀', color);
        }
    }
}
