//! Terminal presentation for the dungeon.
//!
//! Rather than a widget toolkit, the game is drawn into a plain framebuffer
//! of styled cells which is then diffed and flushed to the terminal.
//!
//! - [`canvas`] implements the core draw contract on top of the framebuffer
//! - [`atlas`] supplies optional glyph "sprites" from a JSON file
//! - [`game_view`] lays out the scene, HUD, log and overlays
//! - [`renderer`] owns the real terminal

pub mod atlas;
pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use iso_dungeon_core as core;
pub use iso_dungeon_types as types;

pub use atlas::{Atlas, Glyph};
pub use canvas::{IsoCanvas, PX_PER_COL, PX_PER_ROW};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
