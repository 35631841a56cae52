//! Combat module - player melee and enemy AI resolution
//!
//! The player's attack is an area swing: it hits every living enemy within
//! Manhattan distance 1 (including one sharing the player's cell), never a
//! single chosen target.
//!
//! Enemies act on their own timers. When it is an enemy's turn it either
//! strikes an adjacent player or takes one step towards them, closing the x
//! gap before the y gap. Enemy steps ignore walls.

use crate::enemy::Enemy;
use crate::player::Player;
use crate::types::ATTACK_COOLDOWN_TICKS;

/// Result of a player attack that was not blocked by the cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Damage applied to each enemy hit.
    pub damage: i32,
    pub hits: u32,
    pub kills: u32,
    /// Experience awarded for the kills.
    pub experience: u32,
}

impl AttackOutcome {
    pub fn missed(&self) -> bool {
        self.hits == 0
    }

    /// Log line for this attack.
    pub fn message(&self) -> String {
        if self.missed() {
            "Missed!".to_string()
        } else {
            format!("Hit {}!", self.damage)
        }
    }
}

/// What an enemy did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// Timer not yet elapsed, or dead.
    Wait,
    /// Hit the player for this much.
    Strike(i32),
    /// Moved by (dx, dy).
    Step(i32, i32),
}

/// Swing at every adjacent enemy.
///
/// Returns None while the attack is on cooldown; nothing changes in that case.
pub fn player_attack(player: &mut Player, enemies: &mut [Enemy]) -> Option<AttackOutcome> {
    if player.attack_cooldown > 0 {
        return None;
    }
    player.attack_cooldown = ATTACK_COOLDOWN_TICKS;

    let mut outcome = AttackOutcome {
        damage: player.attack_damage(),
        hits: 0,
        kills: 0,
        experience: 0,
    };

    for enemy in enemies.iter_mut().filter(|e| e.is_alive()) {
        if player.body.distance_to(&enemy.body) > 1 {
            continue;
        }
        outcome.hits += 1;
        if enemy.take_damage(outcome.damage) {
            outcome.kills += 1;
            outcome.experience += enemy.experience;
            log::debug!("{} defeated (+{} xp)", enemy.body.name, enemy.experience);
        }
    }
    player.experience += outcome.experience;

    Some(outcome)
}

/// Run one tick of AI for a single enemy.
pub fn enemy_act(enemy: &mut Enemy, player: &mut Player) -> EnemyAction {
    if !enemy.advance_timer() {
        return EnemyAction::Wait;
    }

    if enemy.body.distance_to(&player.body) <= 1 {
        player.take_damage(enemy.damage);
        return EnemyAction::Strike(enemy.damage);
    }

    let dx = (player.body.grid_x - enemy.body.grid_x).signum();
    let dy = (player.body.grid_y - enemy.body.grid_y).signum();
    let step = if dx != 0 { (dx, 0) } else { (0, dy) };
    enemy.body.grid_x += step.0;
    enemy.body.grid_y += step.1;
    EnemyAction::Step(step.0, step.1)
}

/// Run one tick of AI for every enemy, returning the total damage dealt.
pub fn enemies_act(enemies: &mut [Enemy], player: &mut Player) -> i32 {
    let mut dealt = 0;
    for enemy in enemies.iter_mut() {
        if let EnemyAction::Strike(damage) = enemy_act(enemy, player) {
            dealt += damage;
        }
    }
    dealt
}
