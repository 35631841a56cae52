//! Render snapshot handed to the presentation layer once per tick.
//!
//! The snapshot is a plain copy of session state, so the renderer never
//! holds a reference into the live simulation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::camera::Camera;
use crate::entity::Entity;
use crate::item::Item;
use crate::map::RoomMap;
use crate::types::{DrawKind, GameMode, Rgb, RoomKind, Shape};

/// One drawable entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSnapshot {
    pub kind: DrawKind,
    /// Visual position in world (isometric) space, before the camera.
    pub x: f32,
    pub y: f32,
    /// Grid row, used for painter's ordering.
    pub grid_y: i32,
    pub color: Rgb,
    pub shape: Shape,
    /// `(current, max)` for entities with a health bar.
    pub health: Option<(i32, i32)>,
}

impl SpriteSnapshot {
    pub fn of(entity: &impl Entity) -> Self {
        let body = entity.body();
        let (color, shape) = entity.fallback();
        Self {
            kind: entity.draw_kind(),
            x: body.visual_x,
            y: body.visual_y,
            grid_y: body.grid_y,
            color,
            shape,
            health: entity.health_bar(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudSnapshot {
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub vitality: i32,
    pub experience: u32,
    pub level: u32,
    pub weapon: Item,
}

impl Default for HudSnapshot {
    fn default() -> Self {
        Self {
            health: 0,
            max_health: 0,
            strength: 0,
            dexterity: 0,
            vitality: 0,
            experience: 0,
            level: 0,
            weapon: Item::starting_weapon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub room_index: usize,
    pub room_kind: RoomKind,
    pub portal_open: bool,
    pub map: RoomMap,
    /// Player, visible enemies and objects, sorted back to front.
    pub sprites: Vec<SpriteSnapshot>,
    pub camera: Camera,
    pub hud: HudSnapshot,
    /// Message log, oldest first.
    pub log: Vec<String>,
    pub log_total: u64,
    pub inventory: Vec<Item>,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.mode = GameMode::Menu;
        self.room_index = 0;
        self.room_kind = RoomKind::Combat;
        self.portal_open = false;
        self.sprites.clear();
        self.camera = Camera::default();
        self.hud = HudSnapshot::default();
        self.log.clear();
        self.log_total = 0;
        self.inventory.clear();
        self.ticks = 0;
    }

    /// Whether the simulation is running (the frame changes every tick).
    pub fn animating(&self) -> bool {
        self.mode.simulates()
    }

    /// Cheap change detector for static screens.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.mode.hash(&mut h);
        self.room_index.hash(&mut h);
        self.portal_open.hash(&mut h);
        self.ticks.hash(&mut h);
        self.log_total.hash(&mut h);
        self.inventory.len().hash(&mut h);
        self.hud.health.hash(&mut h);
        self.camera.width.to_bits().hash(&mut h);
        self.camera.height.to_bits().hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            mode: GameMode::Menu,
            room_index: 0,
            room_kind: RoomKind::Combat,
            portal_open: false,
            map: RoomMap::open(0, 0),
            sprites: Vec::new(),
            camera: Camera::default(),
            hud: HudSnapshot::default(),
            log: Vec::new(),
            log_total: 0,
            inventory: Vec::new(),
            ticks: 0,
        }
    }
}
