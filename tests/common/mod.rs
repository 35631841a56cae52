//! Helpers shared by the integration tests.

#![allow(dead_code)]

use iso_dungeon::core::GameSession;
use iso_dungeon::types::{GameAction, GameMode, PORTAL_CELL};

/// A session already past the title menu.
pub fn playing() -> GameSession {
    let mut s = GameSession::new();
    s.step(&[GameAction::Confirm]);
    assert_eq!(s.mode(), GameMode::Play);
    s
}

/// Walk one cell per tick, x first. Stops early if the mode leaves Play
/// or a portal moves the player into another room.
pub fn walk_to(s: &mut GameSession, x: i32, y: i32) {
    let start_room = s.room_index();
    for _ in 0..64 {
        if s.mode() != GameMode::Play || s.room_index() != start_room {
            return;
        }
        let body = &s.player().body;
        let action = if body.grid_x < x {
            GameAction::MoveRight
        } else if body.grid_x > x {
            GameAction::MoveLeft
        } else if body.grid_y < y {
            GameAction::MoveDown
        } else if body.grid_y > y {
            GameAction::MoveUp
        } else {
            return;
        };
        s.step(&[action]);
    }
    panic!("could not reach ({x}, {y})");
}

/// Kill whatever is left in the room and walk through its portal.
pub fn clear_and_leave(s: &mut GameSession) {
    for enemy in &mut s.room_mut().enemies {
        enemy.take_damage(10_000);
    }
    s.step(&[]);
    assert!(s.room().portal.active);
    // The floor is only checked on a move, so step off a portal first.
    if (s.player().body.grid_x, s.player().body.grid_y) == PORTAL_CELL {
        s.step(&[GameAction::MoveLeft]);
    }
    walk_to(s, PORTAL_CELL.0, PORTAL_CELL.1);
}

/// A playing session standing on the spawn cell of room `index`.
pub fn playing_in_room(index: usize) -> GameSession {
    let mut s = playing();
    while s.room_index() < index {
        clear_and_leave(&mut s);
    }
    s
}

pub fn log_contains(s: &GameSession, message: &str) -> bool {
    s.log().entries().iter().any(|m| m == message)
}
