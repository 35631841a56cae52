//! Player module - the hero that persists across every room of a run

use crate::entity::{Body, Entity};
use crate::item::Item;
use crate::map::RoomMap;
use crate::types::{
    palette, DrawKind, Rgb, Shape, BASE_DEXTERITY, BASE_STRENGTH, BASE_VITALITY,
    HEALTH_PER_VITALITY,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub strength: i32,
    pub dexterity: i32,
    pub vitality: i32,
    health: i32,
    pub experience: u32,
    pub level: u32,
    pub inventory: Vec<Item>,
    pub weapon: Item,
    /// Ticks until the next attack is allowed.
    pub attack_cooldown: u32,
}

impl Player {
    pub fn new(grid_x: i32, grid_y: i32) -> Self {
        let vitality = BASE_VITALITY;
        Self {
            body: Body::new(grid_x, grid_y, "Hero"),
            strength: BASE_STRENGTH,
            dexterity: BASE_DEXTERITY,
            vitality,
            health: vitality * HEALTH_PER_VITALITY,
            experience: 0,
            level: 1,
            inventory: Vec::new(),
            weapon: Item::starting_weapon(),
            attack_cooldown: 0,
        }
    }

    pub fn max_health(&self) -> i32 {
        self.vitality * HEALTH_PER_VITALITY
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Set health, clamped to `[0, max_health]`.
    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, self.max_health());
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.set_health(self.health.saturating_sub(amount));
    }

    pub fn heal_full(&mut self) {
        self.health = self.max_health();
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Damage dealt to each enemy hit by one attack.
    pub fn attack_damage(&self) -> i32 {
        self.weapon.damage + self.strength
    }

    /// Try to step by (dx, dy).
    ///
    /// The step is refused without side effects when the target lies outside
    /// the map or on a wall.
    pub fn move_by(&mut self, dx: i32, dy: i32, map: &RoomMap) -> bool {
        let nx = self.body.grid_x + dx;
        let ny = self.body.grid_y + dy;
        if !map.is_walkable(nx, ny) {
            return false;
        }
        self.body.grid_x = nx;
        self.body.grid_y = ny;
        true
    }

    pub fn tick_cooldown(&mut self) {
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }

    /// Add an item to the inventory. The equipped weapon never changes.
    pub fn grant(&mut self, item: Item) {
        self.inventory.push(item);
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn draw_kind(&self) -> DrawKind {
        DrawKind::Player
    }

    fn fallback(&self) -> (Rgb, Shape) {
        (palette::PLAYER, Shape::Circle)
    }
}
