//! Interactive objects: chests, fountains and the exit portal

use crate::entity::{Body, Entity};
use crate::item::Item;
use crate::types::{palette, DrawKind, ObjectKind, Rgb, Shape};

/// What an object does when used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Chest contents.
    Grant(Item),
    /// Fountain effect.
    HealFull,
    /// Portals carry nothing.
    None,
}

/// Static description of an object, as authored in the room catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectSpawn {
    pub kind: ObjectKind,
    pub pos: (i32, i32),
    /// Weapon in a chest as `(name, damage)`.
    pub item: Option<(&'static str, i32)>,
}

/// Result of using an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Granted(Item),
    Healed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveObject {
    pub body: Body,
    pub kind: ObjectKind,
    pub payload: Payload,
    /// Chest/fountain: not yet used. Portal: unlocked.
    pub active: bool,
}

impl InteractiveObject {
    pub fn spawn(spec: &ObjectSpawn) -> Self {
        let payload = match spec.kind {
            ObjectKind::Chest => match spec.item {
                Some((name, damage)) => Payload::Grant(Item::weapon(name, damage)),
                None => Payload::None,
            },
            ObjectKind::Fountain => Payload::HealFull,
            ObjectKind::Portal => Payload::None,
        };
        Self::new(spec.kind, spec.pos.0, spec.pos.1, payload)
    }

    pub fn new(kind: ObjectKind, grid_x: i32, grid_y: i32, payload: Payload) -> Self {
        let name = match kind {
            ObjectKind::Chest => "chest",
            ObjectKind::Fountain => "fountain",
            ObjectKind::Portal => "portal",
        };
        Self {
            body: Body::new(grid_x, grid_y, name),
            kind,
            payload,
            active: true,
        }
    }

    pub fn portal(grid_x: i32, grid_y: i32, unlocked: bool) -> Self {
        let mut portal = Self::new(ObjectKind::Portal, grid_x, grid_y, Payload::None);
        portal.active = unlocked;
        portal
    }

    /// Consume a one-shot object.
    ///
    /// Returns None for inactive objects and portals; those are ignored
    /// without comment.
    pub fn use_once(&mut self) -> Option<Interaction> {
        if !self.active {
            return None;
        }
        let interaction = match (&self.kind, &self.payload) {
            (ObjectKind::Chest, Payload::Grant(item)) => Interaction::Granted(item.clone()),
            (ObjectKind::Fountain, Payload::HealFull) => Interaction::Healed,
            _ => return None,
        };
        self.active = false;
        Some(interaction)
    }
}

impl Entity for InteractiveObject {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn draw_kind(&self) -> DrawKind {
        self.kind.into()
    }

    fn fallback(&self) -> (Rgb, Shape) {
        let color = match self.kind {
            ObjectKind::Chest => palette::CHEST,
            ObjectKind::Fountain => palette::FOUNTAIN,
            ObjectKind::Portal if self.active => palette::PORTAL,
            ObjectKind::Portal => palette::PORTAL_LOCKED,
        };
        (color, Shape::Rect)
    }

    // Used objects vanish; a locked portal stays visible.
    fn visible(&self) -> bool {
        self.active || self.kind == ObjectKind::Portal
    }
}
