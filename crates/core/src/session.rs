//! Game session module - owns all mutable game state
//!
//! `GameSession` ties together the player, the current room, the message
//! log and the camera, and runs the top-level state machine:
//!
//! ```text
//! Menu --confirm--> Play <--pause--> Pause
//!                    |  <--open/pause--> Inventory
//!                    |--health 0--> GameOver --restart--> Menu
//!                    '--last portal--> Win --restart--> Menu
//! ```
//!
//! Only `Play` advances the simulation. Every other mode is frozen.

use crate::camera::Camera;
use crate::combat::{self, AttackOutcome};
use crate::entity::Entity;
use crate::message_log::MessageLog;
use crate::object::Interaction;
use crate::player::Player;
use crate::room::Room;
use crate::snapshot::{GameSnapshot, HudSnapshot, SpriteSnapshot};
use crate::types::{GameAction, GameMode, SPAWN_CELL};

/// Whether the loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    player: Player,
    room: Room,
    log: MessageLog,
    camera: Camera,
    /// Play ticks simulated since the last reset.
    ticks: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session on the title menu with room 1 loaded.
    pub fn new() -> Self {
        let mut session = Self {
            mode: GameMode::Menu,
            player: Player::new(SPAWN_CELL.0, SPAWN_CELL.1),
            room: Room::load(0),
            log: MessageLog::new(),
            camera: Camera::default(),
            ticks: 0,
        };
        session.enter_room(0);
        session
    }

    /// Start a fresh run: new player, empty log, room 1, title menu.
    ///
    /// The camera keeps its viewport size.
    pub fn reset(&mut self) {
        log::info!("session reset");
        self.mode = GameMode::Menu;
        self.player = Player::new(SPAWN_CELL.0, SPAWN_CELL.1);
        self.log.clear();
        self.camera = Camera::new(self.camera.width, self.camera.height);
        self.ticks = 0;
        self.enter_room(0);
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player access for scripted scenarios.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Mutable room access for scripted scenarios.
    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    pub fn room_index(&self) -> usize {
        self.room.index
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Update the screen size the camera centers on.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    /// Dispatch all actions drained this frame, then run one tick.
    pub fn step(&mut self, actions: &[GameAction]) -> Flow {
        for &action in actions {
            if self.apply_action(action) == Flow::Quit {
                return Flow::Quit;
            }
        }
        self.tick();
        Flow::Continue
    }

    /// Apply one input action according to the current mode.
    pub fn apply_action(&mut self, action: GameAction) -> Flow {
        if action == GameAction::Quit {
            return Flow::Quit;
        }

        match (self.mode, action) {
            (GameMode::Menu, GameAction::Confirm) => self.set_mode(GameMode::Play),
            (GameMode::Play, GameAction::Pause) => self.set_mode(GameMode::Pause),
            (GameMode::Pause, GameAction::Pause) => self.set_mode(GameMode::Play),
            (GameMode::Inventory, GameAction::Pause) => self.set_mode(GameMode::Play),
            (GameMode::Play, GameAction::OpenInventory) => self.set_mode(GameMode::Inventory),
            (GameMode::Play, GameAction::Attack) => {
                self.attack();
            }
            (GameMode::Play, GameAction::Interact) => self.interact(),
            (GameMode::Play, _) => {
                if let Some((dx, dy)) = action.move_delta() {
                    self.move_player(dx, dy);
                }
            }
            (GameMode::GameOver | GameMode::Win, GameAction::Restart) => self.reset(),
            _ => {}
        }
        Flow::Continue
    }

    /// Run one simulation tick. Returns false when the mode is frozen.
    pub fn tick(&mut self) -> bool {
        if !self.mode.simulates() {
            return false;
        }
        self.ticks += 1;

        self.player.update_visual();
        self.player.tick_cooldown();

        if self.room.update_clear() {
            self.log.push("The room is open!");
        }

        self.room.update_visuals();
        combat::enemies_act(&mut self.room.enemies, &mut self.player);

        if self.player.is_dead() {
            log::info!("player died in room {}", self.room.index + 1);
            self.log.push("You died.");
            self.set_mode(GameMode::GameOver);
        }

        self.camera
            .follow(self.player.body.visual_x, self.player.body.visual_y);
        true
    }

    /// Player attack, logging the outcome.
    ///
    /// Returns None when the attack was still on cooldown.
    pub fn attack(&mut self) -> Option<AttackOutcome> {
        let outcome = combat::player_attack(&mut self.player, &mut self.room.enemies)?;
        self.log.push(outcome.message());
        Some(outcome)
    }

    fn move_player(&mut self, dx: i32, dy: i32) {
        self.player.move_by(dx, dy, &self.room.map);
        self.check_floor();
    }

    /// React to the cell the player just stepped on.
    fn check_floor(&mut self) {
        let (x, y) = (self.player.body.grid_x, self.player.body.grid_y);
        if !self.room.portal_at(x, y) {
            return;
        }
        if !self.room.portal.active {
            self.log.push("Locked! Defeat the enemies.");
            return;
        }
        if self.room.is_last() {
            log::info!("run won with {} xp", self.player.experience);
            self.set_mode(GameMode::Win);
        } else {
            self.enter_room(self.room.index + 1);
        }
    }

    fn interact(&mut self) {
        let (x, y) = (self.player.body.grid_x, self.player.body.grid_y);
        for i in 0..self.room.objects.len() {
            if !self.room.objects[i].body.is_at(x, y) {
                continue;
            }
            match self.room.objects[i].use_once() {
                Some(Interaction::Granted(item)) => {
                    self.log.push(format!("Picked up: {}", item.name));
                    self.player.grant(item);
                }
                Some(Interaction::Healed) => {
                    self.player.heal_full();
                    self.log.push("Health restored!");
                }
                None => {}
            }
        }
    }

    fn enter_room(&mut self, index: usize) {
        self.room = Room::load(index);
        self.player.body.place(SPAWN_CELL.0, SPAWN_CELL.1);
        log::debug!("loaded room {} ({})", index + 1, self.room.kind.as_str());
        self.log.push(format!("Entered room {}", index + 1));
    }

    fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::debug!("mode {} -> {}", self.mode.as_str(), mode.as_str());
            self.mode = mode;
        }
    }

    /// Copy everything the presentation layer needs into `out`.
    ///
    /// `out` is cleared first and its allocations are reused.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.mode = self.mode;
        out.room_index = self.room.index;
        out.room_kind = self.room.kind;
        out.portal_open = self.room.portal.active;
        out.map.clone_from(&self.room.map);
        out.camera = self.camera;
        out.ticks = self.ticks;
        out.log_total = self.log.total();
        out.log.extend(self.log.entries().iter().cloned());
        out.inventory.extend(self.player.inventory.iter().cloned());
        out.hud = HudSnapshot {
            health: self.player.health(),
            max_health: self.player.max_health(),
            strength: self.player.strength,
            dexterity: self.player.dexterity,
            vitality: self.player.vitality,
            experience: self.player.experience,
            level: self.player.level,
            weapon: self.player.weapon.clone(),
        };

        out.sprites.push(SpriteSnapshot::of(&self.player));
        for enemy in self.room.enemies.iter().filter(|e| e.visible()) {
            out.sprites.push(SpriteSnapshot::of(enemy));
        }
        for object in self.room.objects.iter().filter(|o| o.visible()) {
            out.sprites.push(SpriteSnapshot::of(object));
        }
        out.sprites.push(SpriteSnapshot::of(&self.room.portal));
        // Stable: ties keep player, enemies, objects order.
        out.sprites.sort_by_key(|s| s.grid_y);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DrawKind, RoomKind};

    fn playing() -> GameSession {
        let mut s = GameSession::new();
        s.apply_action(GameAction::Confirm);
        s
    }

    #[test]
    fn new_session_is_on_menu_in_room_one() {
        let s = GameSession::new();
        assert_eq!(s.mode(), GameMode::Menu);
        assert_eq!(s.room_index(), 0);
        assert_eq!(s.log().last(), Some("Entered room 1"));
        assert_eq!(
            (s.player().body.grid_x, s.player().body.grid_y),
            SPAWN_CELL
        );
    }

    #[test]
    fn menu_ignores_everything_but_confirm() {
        let mut s = GameSession::new();
        s.apply_action(GameAction::MoveRight);
        s.apply_action(GameAction::Attack);
        s.apply_action(GameAction::Pause);
        assert_eq!(s.mode(), GameMode::Menu);
        assert_eq!(s.player().body.grid_x, 1);
        s.apply_action(GameAction::Confirm);
        assert_eq!(s.mode(), GameMode::Play);
    }

    #[test]
    fn pause_toggles_and_freezes() {
        let mut s = playing();
        s.apply_action(GameAction::Pause);
        assert_eq!(s.mode(), GameMode::Pause);
        assert!(!s.tick());
        assert_eq!(s.ticks(), 0);
        s.apply_action(GameAction::Pause);
        assert_eq!(s.mode(), GameMode::Play);
        assert!(s.tick());
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn inventory_opens_and_closes_on_cancel() {
        let mut s = playing();
        s.apply_action(GameAction::OpenInventory);
        assert_eq!(s.mode(), GameMode::Inventory);
        s.apply_action(GameAction::MoveRight);
        assert_eq!(s.player().body.grid_x, 1);
        s.apply_action(GameAction::OpenInventory);
        assert_eq!(s.mode(), GameMode::Inventory);
        s.apply_action(GameAction::Pause);
        assert_eq!(s.mode(), GameMode::Play);
    }

    #[test]
    fn quit_is_honored_in_every_mode() {
        let mut s = GameSession::new();
        assert_eq!(s.apply_action(GameAction::Quit), Flow::Quit);
        s.apply_action(GameAction::Confirm);
        assert_eq!(s.step(&[GameAction::MoveRight, GameAction::Quit]), Flow::Quit);
    }

    #[test]
    fn restart_only_from_terminal_modes() {
        let mut s = playing();
        s.apply_action(GameAction::MoveRight);
        s.apply_action(GameAction::Restart);
        assert_eq!(s.mode(), GameMode::Play);
        assert_eq!(s.player().body.grid_x, 2);
    }

    #[test]
    fn death_transitions_once() {
        let mut s = playing();
        s.player_mut().take_damage(500);
        assert!(s.tick());
        assert_eq!(s.mode(), GameMode::GameOver);
        let logged = s.log().total();
        assert!(!s.tick());
        assert_eq!(s.log().total(), logged);
        assert_eq!(s.player().health(), 0);
    }

    #[test]
    fn reset_restores_a_fresh_run() {
        let mut s = playing();
        s.player_mut().take_damage(500);
        s.player_mut().experience = 70;
        s.tick();
        s.set_viewport(1000.0, 500.0);
        s.apply_action(GameAction::Restart);

        assert_eq!(s.mode(), GameMode::Menu);
        assert_eq!(s.room_index(), 0);
        assert_eq!(s.player().health(), 100);
        assert_eq!(s.player().experience, 0);
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.log().entries(), &["Entered room 1"]);
        assert_eq!(s.camera().width, 1000.0);
    }

    #[test]
    fn snapshot_sorts_sprites_by_row() {
        let s = GameSession::new();
        let snap = s.snapshot();
        let kinds: Vec<_> = snap.sprites.iter().map(|sp| sp.kind).collect();
        assert_eq!(
            kinds,
            vec![DrawKind::Player, DrawKind::Enemy, DrawKind::Portal]
        );
        assert_eq!(snap.room_kind, RoomKind::Combat);
        assert!(!snap.portal_open);
    }

    #[test]
    fn dead_enemies_leave_the_snapshot() {
        let mut s = playing();
        s.room_mut().enemies[0].take_damage(100);
        let snap = s.snapshot();
        assert!(snap.sprites.iter().all(|sp| sp.kind != DrawKind::Enemy));
    }
}
