//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: rooms, entities, combat, the
//! top-level state machine and the draw contract. It has **no dependencies**
//! on terminals, files or clocks, making it:
//!
//! - **Deterministic**: there is no randomness; the same inputs always
//!   produce the same run
//! - **Testable**: every rule can be driven tick by tick from a test
//! - **Portable**: any front end that implements [`scene::Canvas`] can draw it
//!
//! # Module Structure
//!
//! - [`iso`]: grid ↔ isometric screen transform
//! - [`map`]: rectangular floor/wall grid
//! - [`entity`]: shared body with smoothed visual position, [`Entity`] trait
//! - [`player`], [`enemy`], [`object`]: the closed set of entity kinds
//! - [`combat`]: area melee and enemy AI
//! - [`room`]: the five-room catalog and portal progression
//! - [`session`]: [`GameSession`] and the Menu/Play/Pause/... state machine
//! - [`camera`], [`snapshot`], [`scene`]: what the renderer consumes
//!
//! # Game Rules
//!
//! - **Movement**: one cell per input, 4 directions, blocked by walls and
//!   map bounds
//! - **Attack**: weapon damage + strength to every enemy within Manhattan
//!   distance 1, then a 30-tick cooldown
//! - **Enemies**: act every 60 ticks (bosses every 45); strike when adjacent,
//!   otherwise step towards the player, x first
//! - **Portal**: locked in combat and boss rooms until every enemy is dead
//! - **Win**: enter the unlocked portal of the fifth room
//!
//! # Example
//!
//! ```
//! use iso_dungeon_core::GameSession;
//! use iso_dungeon_types::{GameAction, GameMode};
//!
//! let mut game = GameSession::new();
//! assert_eq!(game.mode(), GameMode::Menu);
//!
//! game.step(&[GameAction::Confirm, GameAction::MoveRight]);
//! assert_eq!(game.mode(), GameMode::Play);
//! assert_eq!(game.player().body.grid_x, 2);
//! assert_eq!(game.ticks(), 1);
//! ```
//!
//! # Timing
//!
//! The simulation is tick based. The caller runs
//! [`GameSession::step`](session::GameSession::step) once per frame at a fixed
//! rate (60 Hz by default); every timer counts ticks, not wall-clock time.

pub mod camera;
pub mod combat;
pub mod enemy;
pub mod entity;
pub mod iso;
pub mod item;
pub mod map;
pub mod message_log;
pub mod object;
pub mod player;
pub mod room;
pub mod scene;
pub mod session;
pub mod snapshot;

pub use iso_dungeon_types as types;

// Re-export commonly used types for convenience
pub use camera::Camera;
pub use combat::{player_attack, AttackOutcome, EnemyAction};
pub use enemy::{Enemy, EnemySpawn};
pub use entity::{Body, Entity};
pub use iso::{from_iso, to_iso};
pub use item::Item;
pub use map::{RoomMap, Tile};
pub use message_log::MessageLog;
pub use object::{InteractiveObject, Interaction, Payload};
pub use player::Player;
pub use room::{Room, RoomTemplate, CATALOG};
pub use scene::{draw_scene, Canvas};
pub use session::{Flow, GameSession};
pub use snapshot::{GameSnapshot, HudSnapshot, SpriteSnapshot};
