//! Camera - a smoothed screen translation that keeps the player centered

use crate::types::{CAMERA_SMOOTHING, SCREEN_H, SCREEN_W};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Screen size in screen units.
    pub width: f32,
    pub height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(SCREEN_W, SCREEN_H)
    }
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Offset that would put (x, y) exactly at the screen center.
    pub fn centering(&self, x: f32, y: f32) -> (f32, f32) {
        (-x + (self.width / 2.0).trunc(), -y + (self.height / 2.0).trunc())
    }

    /// Move one tick towards centering the given visual position.
    pub fn follow(&mut self, x: f32, y: f32) {
        let (tx, ty) = self.centering(x, y);
        self.offset_x += (tx - self.offset_x) * CAMERA_SMOOTHING;
        self.offset_y += (ty - self.offset_y) * CAMERA_SMOOTHING;
    }

    /// World (isometric) point to screen point.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.offset_x, y + self.offset_y)
    }
}
