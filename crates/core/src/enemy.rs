//! Enemy module - room monsters driven by a fixed action timer

use crate::entity::{Body, Entity};
use crate::types::{palette, DrawKind, Rgb, Shape, BOSS_ACTION_TICKS, ENEMY_ACTION_TICKS};

/// Static description of an enemy, as authored in the room catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemySpawn {
    pub name: &'static str,
    pub health: i32,
    pub damage: i32,
    pub experience: u32,
    pub pos: (i32, i32),
    pub boss: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub max_health: i32,
    health: i32,
    /// Contact damage per strike.
    pub damage: i32,
    /// Experience awarded to the player on kill.
    pub experience: u32,
    pub boss: bool,
    pub action_timer: u32,
    pub action_interval: u32,
}

impl Enemy {
    pub fn spawn(spec: &EnemySpawn) -> Self {
        Self {
            body: Body::new(spec.pos.0, spec.pos.1, spec.name),
            max_health: spec.health,
            health: spec.health,
            damage: spec.damage,
            experience: spec.experience,
            boss: spec.boss,
            action_timer: 0,
            action_interval: if spec.boss {
                BOSS_ACTION_TICKS
            } else {
                ENEMY_ACTION_TICKS
            },
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.body.alive
    }

    /// Apply damage. Returns true if this call killed the enemy.
    ///
    /// Death is permanent: a dead enemy ignores further damage.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.body.alive {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health <= 0 {
            self.body.alive = false;
            return true;
        }
        false
    }

    /// Advance the action timer by one tick.
    ///
    /// Returns true on the tick the enemy gets to act.
    pub fn advance_timer(&mut self) -> bool {
        if !self.body.alive {
            return false;
        }
        self.action_timer += 1;
        if self.action_timer >= self.action_interval {
            self.action_timer = 0;
            return true;
        }
        false
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn draw_kind(&self) -> DrawKind {
        DrawKind::Enemy
    }

    fn fallback(&self) -> (Rgb, Shape) {
        let color = if self.boss {
            palette::BOSS
        } else {
            palette::ENEMY
        };
        (color, Shape::Circle)
    }

    fn health_bar(&self) -> Option<(i32, i32)> {
        Some((self.health, self.max_health))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slime() -> EnemySpawn {
        EnemySpawn {
            name: "Slime",
            health: 20,
            damage: 2,
            experience: 10,
            pos: (4, 4),
            boss: false,
        }
    }

    #[test]
    fn interval_depends_on_boss_flag() {
        assert_eq!(Enemy::spawn(&slime()).action_interval, 60);
        let boss = EnemySpawn {
            boss: true,
            ..slime()
        };
        assert_eq!(Enemy::spawn(&boss).action_interval, 45);
    }

    #[test]
    fn death_is_reported_once_and_permanent() {
        let mut e = Enemy::spawn(&slime());
        assert!(!e.take_damage(8));
        assert!(e.is_alive());
        assert!(!e.take_damage(8));
        assert!(e.take_damage(8));
        assert!(!e.is_alive());
        assert!(!e.take_damage(8));
        assert!(!e.is_alive());
        assert_eq!(e.health(), -4);
    }

    #[test]
    fn timer_fires_on_interval() {
        let mut e = Enemy::spawn(&slime());
        for _ in 0..59 {
            assert!(!e.advance_timer());
        }
        assert!(e.advance_timer());
        assert_eq!(e.action_timer, 0);
    }

    #[test]
    fn dead_enemy_timer_is_frozen() {
        let mut e = Enemy::spawn(&slime());
        e.take_damage(100);
        for _ in 0..120 {
            assert!(!e.advance_timer());
        }
        assert_eq!(e.action_timer, 0);
    }
}
