//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, tests).
//!
//! # Tile Geometry
//!
//! Rooms are drawn as isometric diamonds:
//!
//! - **Tile width**: 64 screen units
//! - **Tile height**: 32 screen units
//! - **Default screen**: 800x600 screen units
//!
//! # Simulation Timing
//!
//! All timers count simulation ticks (one tick per loop iteration in Play):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Target loop rate |
//! | `ATTACK_COOLDOWN_TICKS` | 30 | Ticks between two player attacks |
//! | `ENEMY_ACTION_TICKS` | 60 | Ticks between two normal enemy actions |
//! | `BOSS_ACTION_TICKS` | 45 | Ticks between two boss actions |
//!
//! # Smoothing
//!
//! - `VISUAL_SMOOTHING`: 0.2 - fraction of the remaining distance an entity's
//!   visual position covers each tick
//! - `CAMERA_SMOOTHING`: 0.1 - same, for the camera offset
//!
//! # Examples
//!
//! ```
//! use iso_dungeon_types::{GameAction, GameMode, RoomKind, TILE_W};
//!
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::MoveUp);
//!
//! assert!(RoomKind::Boss.locks_portal());
//! assert!(!RoomKind::Fountain.locks_portal());
//!
//! assert!(GameMode::Play.simulates());
//! assert_eq!(TILE_W, 64.0);
//! ```

/// Isometric tile width in screen units
pub const TILE_W: f32 = 64.0;

/// Isometric tile height in screen units
pub const TILE_H: f32 = 32.0;

/// Default screen width in screen units
pub const SCREEN_W: f32 = 800.0;

/// Default screen height in screen units
pub const SCREEN_H: f32 = 600.0;

/// Target loop rate (frames per second)
pub const FPS: u32 = 60;

/// Fraction of the remaining distance a visual position closes per tick
pub const VISUAL_SMOOTHING: f32 = 0.2;

/// Fraction of the remaining distance the camera closes per tick
pub const CAMERA_SMOOTHING: f32 = 0.1;

/// Cooldown applied after each player attack
pub const ATTACK_COOLDOWN_TICKS: u32 = 30;

/// Action interval of a normal enemy
pub const ENEMY_ACTION_TICKS: u32 = 60;

/// Action interval of a boss
pub const BOSS_ACTION_TICKS: u32 = 45;

/// Maximum number of messages kept in the message log
pub const MESSAGE_LOG_CAPACITY: usize = 5;

/// Number of rooms in a run
pub const ROOM_COUNT: usize = 5;

/// Cell the player is placed on whenever a room loads
pub const SPAWN_CELL: (i32, i32) = (1, 1);

/// Cell of the exit portal in every room
pub const PORTAL_CELL: (i32, i32) = (7, 7);

/// Starting strength
pub const BASE_STRENGTH: i32 = 5;

/// Starting dexterity
pub const BASE_DEXTERITY: i32 = 3;

/// Starting vitality
pub const BASE_VITALITY: i32 = 10;

/// Max health granted per point of vitality
pub const HEALTH_PER_VITALITY: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(FPS, 60);
        assert_eq!(ATTACK_COOLDOWN_TICKS, 30);
        assert_eq!(ENEMY_ACTION_TICKS, 60);
        assert_eq!(BOSS_ACTION_TICKS, 45);
        assert_eq!(MESSAGE_LOG_CAPACITY, 5);
    }

    #[test]
    fn action_names_round_trip() {
        for action in GameAction::ALL {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn draw_kind_names_round_trip() {
        for kind in DrawKind::ALL {
            assert_eq!(DrawKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(DrawKind::from_str("dragon"), None);
    }
}

/// Discrete player inputs
///
/// Every action is delivered as a single event; holding a key never turns
/// into continuous movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move one cell towards -y
    MoveUp,
    /// Move one cell towards +y
    MoveDown,
    /// Move one cell towards -x
    MoveLeft,
    /// Move one cell towards +x
    MoveRight,
    /// Melee attack on every adjacent enemy
    Attack,
    /// Use the chest or fountain under the player
    Interact,
    /// Open the inventory screen
    OpenInventory,
    /// Toggle pause, or close the inventory
    Pause,
    /// Leave the title menu
    Confirm,
    /// Start over after game over or victory
    Restart,
    /// Exit the program
    Quit,
}

impl GameAction {
    pub const ALL: [GameAction; 11] = [
        GameAction::MoveUp,
        GameAction::MoveDown,
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Attack,
        GameAction::Interact,
        GameAction::OpenInventory,
        GameAction::Pause,
        GameAction::Confirm,
        GameAction::Restart,
        GameAction::Quit,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_dungeon_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("attack"), Some(GameAction::Attack));
    /// assert_eq!(GameAction::from_str("openInventory"), Some(GameAction::OpenInventory));
    /// assert_eq!(GameAction::from_str("fly"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "attack" => Some(GameAction::Attack),
            "interact" => Some(GameAction::Interact),
            "openinventory" => Some(GameAction::OpenInventory),
            "pause" => Some(GameAction::Pause),
            "confirm" => Some(GameAction::Confirm),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Attack => "attack",
            GameAction::Interact => "interact",
            GameAction::OpenInventory => "openInventory",
            GameAction::Pause => "pause",
            GameAction::Confirm => "confirm",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }

    /// Grid delta for movement actions
    pub fn move_delta(&self) -> Option<(i32, i32)> {
        match self {
            GameAction::MoveUp => Some((0, -1)),
            GameAction::MoveDown => Some((0, 1)),
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            _ => None,
        }
    }
}

/// Top-level game state
///
/// The session starts in `Menu`. Only `Play` advances the simulation; every
/// other mode freezes it and renders an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Play,
    Pause,
    Inventory,
    GameOver,
    Win,
}

impl GameMode {
    pub fn simulates(&self) -> bool {
        matches!(self, GameMode::Play)
    }

    /// Terminal modes wait for a restart.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameMode::GameOver | GameMode::Win)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Menu => "menu",
            GameMode::Play => "play",
            GameMode::Pause => "pause",
            GameMode::Inventory => "inventory",
            GameMode::GameOver => "gameOver",
            GameMode::Win => "win",
        }
    }
}

/// Room archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Combat,
    Treasure,
    Fountain,
    Boss,
}

impl RoomKind {
    /// Whether the portal starts locked and opens only once the room is cleared.
    pub fn locks_portal(&self) -> bool {
        matches!(self, RoomKind::Combat | RoomKind::Boss)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Combat => "combat",
            RoomKind::Treasure => "treasure",
            RoomKind::Fountain => "fountain",
            RoomKind::Boss => "boss",
        }
    }
}

/// Interactive object kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Chest,
    Fountain,
    Portal,
}

/// Item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Weapon,
}

/// Semantic kind passed through the draw contract
///
/// The presentation layer resolves a kind to a sprite (a glyph in the
/// terminal) or falls back to the supplied color and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Floor,
    Wall,
    Player,
    Enemy,
    Chest,
    Fountain,
    Portal,
}

impl DrawKind {
    pub const ALL: [DrawKind; 7] = [
        DrawKind::Floor,
        DrawKind::Wall,
        DrawKind::Player,
        DrawKind::Enemy,
        DrawKind::Chest,
        DrawKind::Fountain,
        DrawKind::Portal,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "floor" => Some(DrawKind::Floor),
            "wall" => Some(DrawKind::Wall),
            "player" => Some(DrawKind::Player),
            "enemy" => Some(DrawKind::Enemy),
            "chest" => Some(DrawKind::Chest),
            "fountain" => Some(DrawKind::Fountain),
            "portal" => Some(DrawKind::Portal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawKind::Floor => "floor",
            DrawKind::Wall => "wall",
            DrawKind::Player => "player",
            DrawKind::Enemy => "enemy",
            DrawKind::Chest => "chest",
            DrawKind::Fountain => "fountain",
            DrawKind::Portal => "portal",
        }
    }
}

impl From<ObjectKind> for DrawKind {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Chest => DrawKind::Chest,
            ObjectKind::Fountain => DrawKind::Fountain,
            ObjectKind::Portal => DrawKind::Portal,
        }
    }
}

/// Geometric placeholder used when no sprite exists for a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Flat isometric tile
    Diamond,
    /// Standing character
    Circle,
    /// Object box
    Rect,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fallback palette
pub mod palette {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::new(20, 20, 30);
    pub const FLOOR: Rgb = Rgb::new(34, 139, 34);
    pub const WALL: Rgb = Rgb::new(60, 60, 70);
    pub const PLAYER: Rgb = Rgb::new(50, 100, 255);
    pub const ENEMY: Rgb = Rgb::new(200, 50, 50);
    pub const BOSS: Rgb = Rgb::new(100, 0, 0);
    pub const CHEST: Rgb = Rgb::new(255, 215, 0);
    pub const FOUNTAIN: Rgb = Rgb::new(0, 255, 255);
    pub const PORTAL: Rgb = Rgb::new(148, 0, 211);
    pub const PORTAL_LOCKED: Rgb = Rgb::new(50, 0, 0);
    pub const TEXT: Rgb = Rgb::new(255, 255, 255);
    pub const HIGHLIGHT: Rgb = Rgb::new(255, 255, 0);
}
