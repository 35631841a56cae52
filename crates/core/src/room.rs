//! Room module - the fixed five-room catalog and live room instances
//!
//! A [`RoomTemplate`] is an immutable `'static` description. Loading a room
//! builds a [`Room`] with fresh enemies and objects from the template; the
//! instance is dropped when the player moves on.
//!
//! # Catalog
//!
//! | # | Kind | Contents |
//! |---|------|----------|
//! | 1 | combat | Slime |
//! | 2 | combat | two Goblins |
//! | 3 | treasure | chest with a Longsword |
//! | 4 | fountain | healing fountain |
//! | 5 | boss | Orc King |
//!
//! # Portal
//!
//! Every room has an exit portal at [`PORTAL_CELL`]. It starts locked in
//! combat and boss rooms and unlocks once no enemy is left alive.

use crate::enemy::{Enemy, EnemySpawn};
use crate::entity::Entity;
use crate::map::RoomMap;
use crate::object::{InteractiveObject, ObjectSpawn};
use crate::types::{ObjectKind, RoomKind, PORTAL_CELL, ROOM_COUNT};

/// Immutable room description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomTemplate {
    pub kind: RoomKind,
    pub layout: &'static [&'static str],
    pub enemies: &'static [EnemySpawn],
    pub objects: &'static [ObjectSpawn],
}

const OPEN_8X8: &[&str] = &[
    "........", //
    "........", //
    "........", //
    "........", //
    "........", //
    "........", //
    "........", //
    "........", //
];

/// The rooms of a run, in order.
pub static CATALOG: [RoomTemplate; ROOM_COUNT] = [
    RoomTemplate {
        kind: RoomKind::Combat,
        layout: OPEN_8X8,
        enemies: &[EnemySpawn {
            name: "Slime",
            health: 20,
            damage: 2,
            experience: 10,
            pos: (4, 4),
            boss: false,
        }],
        objects: &[],
    },
    RoomTemplate {
        kind: RoomKind::Combat,
        layout: OPEN_8X8,
        enemies: &[
            EnemySpawn {
                name: "Goblin",
                health: 30,
                damage: 5,
                experience: 20,
                pos: (3, 3),
                boss: false,
            },
            EnemySpawn {
                name: "Goblin",
                health: 30,
                damage: 5,
                experience: 20,
                pos: (5, 2),
                boss: false,
            },
        ],
        objects: &[],
    },
    RoomTemplate {
        kind: RoomKind::Treasure,
        layout: OPEN_8X8,
        enemies: &[],
        objects: &[ObjectSpawn {
            kind: ObjectKind::Chest,
            pos: (4, 4),
            item: Some(("Longsword", 8)),
        }],
    },
    RoomTemplate {
        kind: RoomKind::Fountain,
        layout: OPEN_8X8,
        enemies: &[],
        objects: &[ObjectSpawn {
            kind: ObjectKind::Fountain,
            pos: (4, 4),
            item: None,
        }],
    },
    RoomTemplate {
        kind: RoomKind::Boss,
        layout: OPEN_8X8,
        enemies: &[EnemySpawn {
            name: "Orc King",
            health: 150,
            damage: 12,
            experience: 500,
            pos: (5, 5),
            boss: true,
        }],
        objects: &[],
    },
];

/// A loaded room with live enemies and objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub index: usize,
    pub kind: RoomKind,
    pub map: RoomMap,
    pub enemies: Vec<Enemy>,
    /// Chests and fountains. The portal is kept apart.
    pub objects: Vec<InteractiveObject>,
    pub portal: InteractiveObject,
}

impl Room {
    /// Instantiate catalog room `index`.
    ///
    /// Out-of-range indices are clamped to the last room.
    pub fn load(index: usize) -> Self {
        let index = index.min(CATALOG.len() - 1);
        Self::from_template(index, &CATALOG[index])
    }

    pub fn from_template(index: usize, template: &RoomTemplate) -> Self {
        let enemies = template.enemies.iter().map(Enemy::spawn).collect();
        let objects = template
            .objects
            .iter()
            .map(InteractiveObject::spawn)
            .collect();
        let portal =
            InteractiveObject::portal(PORTAL_CELL.0, PORTAL_CELL.1, !template.kind.locks_portal());

        Self {
            index,
            kind: template.kind,
            map: RoomMap::from_rows(template.layout),
            enemies,
            objects,
            portal,
        }
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= CATALOG.len()
    }

    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    /// Unlock the portal once the room is cleared.
    ///
    /// Returns true only on the tick the portal opens.
    pub fn update_clear(&mut self) -> bool {
        if self.portal.active || !self.kind.locks_portal() {
            return false;
        }
        if self.living_enemies() > 0 {
            return false;
        }
        self.portal.active = true;
        true
    }

    pub fn portal_at(&self, x: i32, y: i32) -> bool {
        self.portal.body.is_at(x, y)
    }

    /// Advance visuals of every enemy, dead ones included.
    pub fn update_visuals(&mut self) {
        for enemy in &mut self.enemies {
            enemy.update_visual();
        }
    }
}
