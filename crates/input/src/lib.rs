//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and collects the
//! events that arrived since the previous frame, so the game loop can drain
//! them all before the simulation advances.

pub mod handler;
pub mod map;

pub use iso_dungeon_types as types;

pub use handler::{FrameInput, InputHandler, MAX_ACTIONS_PER_FRAME};
pub use map::{handle_key_event, should_quit};
