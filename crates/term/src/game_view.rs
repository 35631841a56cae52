//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::atlas::Atlas;
use crate::canvas::{IsoCanvas, PX_PER_COL, PX_PER_ROW};
use crate::core::{draw_scene, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{palette, GameMode, ROOM_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size of the viewport in screen units, for the camera.
    pub fn pixels(&self) -> (f32, f32) {
        (
            self.width as f32 * PX_PER_COL,
            self.height as f32 * PX_PER_ROW,
        )
    }
}

const HUD_BG: Rgb = Rgb::new(50, 50, 50);
const LOG_FG: Rgb = Rgb::new(200, 200, 200);
const MUTED: Rgb = Rgb::new(150, 150, 150);
const PANEL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const DEFEAT: Rgb = Rgb::new(255, 0, 0);
const VICTORY: Rgb = Rgb::new(255, 215, 0);

/// Inventory panel size in cells (400×300 screen units).
const PANEL_W: u16 = 50;
const PANEL_H: u16 = 19;

/// Terminal presentation of a game session.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    atlas: Atlas,
}

impl GameView {
    pub fn new(atlas: Atlas) -> Self {
        Self { atlas }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::fg_on(palette::TEXT, palette::BACKGROUND).into_cell(' '));

        if snap.mode == GameMode::Menu {
            self.draw_menu(fb);
            return;
        }

        draw_scene(snap, &mut IsoCanvas::new(fb, &self.atlas));
        self.draw_hud(fb, snap);
        self.draw_log(fb, snap);

        match snap.mode {
            GameMode::Inventory => self.draw_inventory(fb, snap),
            GameMode::Pause => self.draw_centered(fb, 0, "PAUSED", palette::TEXT),
            GameMode::GameOver => {
                self.draw_centered(fb, 0, "GAME OVER", DEFEAT);
                self.draw_centered(fb, 3, "[R] Restart", palette::TEXT);
            }
            GameMode::Win => {
                self.draw_centered(fb, 0, "VICTORY!", VICTORY);
                let line = format!("Final level: {}", snap.hud.level);
                self.draw_centered(fb, 3, &line, palette::TEXT);
            }
            GameMode::Menu | GameMode::Play => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer) {
        self.draw_centered(fb, -3, "ISOMETRIC DUNGEON", palette::TEXT);
        self.draw_centered(fb, 3, "Press [ENTER]", LOG_FG);

        let hint = "arrows/WASD move  SPACE attack  E use  I inventory  Q quit";
        if let Some(y) = fb.height().checked_sub(2) {
            fb.put_str_centered(y, hint, CellStyle::fg_on(MUTED, palette::BACKGROUND));
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let Some(y) = fb.height().checked_sub(1) else {
            return;
        };
        let style = CellStyle::fg_on(palette::TEXT, HUD_BG);
        fb.fill_rect(0, y, fb.width(), 1, ' ', style);

        let hud = &snap.hud;
        let line = format!(
            "HP: {}/{}  |  STR: {}  |  Weapon: {}  |  XP: {}  |  Room {}/{} ({})",
            hud.health,
            hud.max_health,
            hud.strength,
            hud.weapon.name,
            hud.experience,
            snap.room_index + 1,
            ROOM_COUNT,
            snap.room_kind.as_str(),
        );
        fb.put_str(1, y, &line, style);
    }

    fn draw_log(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let style = CellStyle::fg_on(LOG_FG, palette::BACKGROUND);
        for (y, msg) in snap.log.iter().rev().enumerate() {
            fb.put_str(1, y as u16, msg, style);
        }
    }

    fn draw_inventory(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let w = PANEL_W.min(fb.width());
        let h = PANEL_H.min(fb.height());
        if w < 4 || h < 4 {
            return;
        }
        let x = (fb.width() - w) / 2;
        let y = (fb.height() - h) / 2;

        let body = CellStyle::fg_on(palette::TEXT, PANEL_BG);
        fb.fill_rect(x, y, w, h, ' ', body);
        self.draw_border(fb, x, y, w, h, CellStyle::fg_on(BORDER, PANEL_BG));

        fb.put_str(x + 2, y + 1, "INVENTORY (ESC to close)", body);
        let mut row = y + 3;
        if snap.inventory.is_empty() {
            fb.put_str(x + 3, row, "Empty...", CellStyle::fg_on(MUTED, PANEL_BG));
            return;
        }
        for item in &snap.inventory {
            if row + 1 >= y + h {
                break;
            }
            let line = format!("- {} (+{} atk)", item.name, item.damage);
            fb.put_str(x + 3, row, &line, body);
            row += 2;
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Bold text centered horizontally, `dy` rows from the middle row.
    fn draw_centered(&self, fb: &mut FrameBuffer, dy: i32, text: &str, fg: Rgb) {
        let y = fb.height() as i32 / 2 + dy;
        if y < 0 || y >= fb.height() as i32 {
            return;
        }
        let style = CellStyle {
            fg,
            bg: palette::BACKGROUND,
            bold: true,
            dim: false,
        };
        fb.put_str_centered(y as u16, text, style);
    }
}
