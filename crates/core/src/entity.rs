//! Entity module - the shared body of everything that stands on the grid
//!
//! The grid position is authoritative. The visual position is cosmetic and
//! chases the isometric projection of the grid position by a fixed fraction
//! each tick, so movement reads as a short slide instead of a jump.

use crate::iso::to_iso;
use crate::types::{DrawKind, Rgb, Shape, VISUAL_SMOOTHING};

/// Position, name and liveness shared by every entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub grid_x: i32,
    pub grid_y: i32,
    pub visual_x: f32,
    pub visual_y: f32,
    pub name: String,
    pub alive: bool,
}

impl Body {
    /// Create a body standing on (x, y) with its visual already in place.
    pub fn new(grid_x: i32, grid_y: i32, name: impl Into<String>) -> Self {
        let (visual_x, visual_y) = to_iso(grid_x, grid_y);
        Self {
            grid_x,
            grid_y,
            visual_x,
            visual_y,
            name: name.into(),
            alive: true,
        }
    }

    /// Screen-space point the visual position is converging on.
    pub fn target(&self) -> (f32, f32) {
        to_iso(self.grid_x, self.grid_y)
    }

    /// Advance the visual position one tick towards the grid target.
    pub fn update_visual(&mut self) {
        let (tx, ty) = self.target();
        self.visual_x += (tx - self.visual_x) * VISUAL_SMOOTHING;
        self.visual_y += (ty - self.visual_y) * VISUAL_SMOOTHING;
    }

    /// Teleport to (x, y), visual included. Only used on room load.
    pub fn place(&mut self, grid_x: i32, grid_y: i32) {
        self.grid_x = grid_x;
        self.grid_y = grid_y;
        let (vx, vy) = to_iso(grid_x, grid_y);
        self.visual_x = vx;
        self.visual_y = vy;
    }

    /// Manhattan distance between two bodies.
    pub fn distance_to(&self, other: &Body) -> i32 {
        (self.grid_x - other.grid_x).abs() + (self.grid_y - other.grid_y).abs()
    }

    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.grid_x == x && self.grid_y == y
    }
}

/// Capabilities common to the closed set of entity kinds.
///
/// Rendering resolves through these methods; nothing downstream inspects the
/// concrete type.
pub trait Entity {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Semantic kind for the draw contract.
    fn draw_kind(&self) -> DrawKind;

    /// Color and shape used when the presentation layer has no sprite.
    fn fallback(&self) -> (Rgb, Shape);

    /// Health as `(current, max)` for entities that show a health bar.
    fn health_bar(&self) -> Option<(i32, i32)> {
        None
    }

    /// Whether the entity is drawn at all.
    fn visible(&self) -> bool {
        self.body().alive
    }

    fn update_visual(&mut self) {
        self.body_mut().update_visual();
    }
}
