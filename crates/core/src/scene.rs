//! Scene drawing - the core side of the draw contract
//!
//! The core decides *what* is drawn and *where* (camera-transformed screen
//! coordinates). A [`Canvas`] decides *how*: a sprite if it has one for the
//! kind, otherwise the supplied fallback color and shape. The core never
//! assumes sprite dimensions.

use crate::iso::to_iso;
use crate::map::Tile;
use crate::snapshot::GameSnapshot;
use crate::types::{palette, DrawKind, Rgb, Shape};

/// Presentation surface the scene is drawn onto.
pub trait Canvas {
    /// Draw `kind` anchored at the top vertex of its tile at `(x, y)`.
    fn draw(&mut self, kind: DrawKind, x: f32, y: f32, fallback: Rgb, shape: Shape);

    /// Health bar above the entity anchored at `(x, y)`. `fraction` is in `[0, 1]`.
    fn health_bar(&mut self, x: f32, y: f32, fraction: f32);
}

/// Draw floor tiles, then entities back to front.
pub fn draw_scene(snap: &GameSnapshot, canvas: &mut impl Canvas) {
    for (gx, gy, tile) in snap.map.iter() {
        let (ix, iy) = to_iso(gx, gy);
        let (sx, sy) = snap.camera.apply(ix, iy);
        match tile {
            Tile::Floor => canvas.draw(DrawKind::Floor, sx, sy, palette::FLOOR, Shape::Diamond),
            Tile::Wall => canvas.draw(DrawKind::Wall, sx, sy, palette::WALL, Shape::Diamond),
        }
    }

    for sprite in &snap.sprites {
        let (sx, sy) = snap.camera.apply(sprite.x, sprite.y);
        canvas.draw(sprite.kind, sx, sy, sprite.color, sprite.shape);
        if let Some((hp, max)) = sprite.health {
            if max > 0 {
                let fraction = (hp as f32 / max as f32).clamp(0.0, 1.0);
                canvas.health_bar(sx, sy, fraction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameSession;
    use crate::types::GameAction;

    #[derive(Default)]
    struct Recorder {
        draws: Vec<(DrawKind, f32, f32, Rgb)>,
        bars: Vec<f32>,
    }

    impl Canvas for Recorder {
        fn draw(&mut self, kind: DrawKind, x: f32, y: f32, fallback: Rgb, _shape: Shape) {
            self.draws.push((kind, x, y, fallback));
        }

        fn health_bar(&mut self, _x: f32, _y: f32, fraction: f32) {
            self.bars.push(fraction);
        }
    }

    #[test]
    fn floor_first_then_entities() {
        let s = GameSession::new();
        let mut rec = Recorder::default();
        draw_scene(&s.snapshot(), &mut rec);

        assert_eq!(rec.draws.len(), 64 + 3);
        assert!(rec.draws[..64].iter().all(|d| d.0 == DrawKind::Floor));
        let tail: Vec<_> = rec.draws[64..].iter().map(|d| d.0).collect();
        assert_eq!(tail, vec![DrawKind::Player, DrawKind::Enemy, DrawKind::Portal]);
        assert_eq!(rec.draws[66].3, palette::PORTAL_LOCKED);
        assert_eq!(rec.bars, vec![1.0]);
    }

    #[test]
    fn health_bar_tracks_damage() {
        let mut s = GameSession::new();
        s.room_mut().enemies[0].take_damage(5);
        let mut rec = Recorder::default();
        draw_scene(&s.snapshot(), &mut rec);
        assert_eq!(rec.bars, vec![0.75]);
    }

    #[test]
    fn camera_offset_is_applied() {
        let mut s = GameSession::new();
        s.apply_action(GameAction::Confirm);
        s.tick();
        let snap = s.snapshot();
        let mut rec = Recorder::default();
        draw_scene(&snap, &mut rec);
        let (kind, x, y, _) = rec.draws[0];
        assert_eq!(kind, DrawKind::Floor);
        assert_eq!((x, y), snap.camera.apply(0.0, 0.0));
    }
}
