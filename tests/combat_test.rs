//! Player melee, enemy AI and death, driven tick by tick.

mod common;

use common::{log_contains, playing, walk_to};
use iso_dungeon::core::AttackOutcome;
use iso_dungeon::types::{
    GameAction, GameMode, ATTACK_COOLDOWN_TICKS, BOSS_ACTION_TICKS, ENEMY_ACTION_TICKS,
};

#[test]
fn slime_dies_to_three_hits_thirty_ticks_apart() {
    let mut s = playing();
    walk_to(&mut s, 4, 3);
    assert_eq!(s.player().attack_damage(), 8);

    let mut swings: Vec<(u64, AttackOutcome)> = Vec::new();
    for _ in 0..200 {
        if let Some(outcome) = s.attack() {
            swings.push((s.ticks(), outcome));
        }
        if !s.room().enemies[0].is_alive() {
            break;
        }
        s.step(&[]);
    }

    assert_eq!(swings.len(), 3);
    assert!(swings
        .windows(2)
        .all(|w| w[1].0 - w[0].0 == u64::from(ATTACK_COOLDOWN_TICKS)));
    assert!(swings.iter().all(|(_, o)| o.damage == 8 && o.hits == 1));
    assert_eq!(swings[2].1.kills, 1);
    assert_eq!(swings[2].1.experience, 10);
    assert!(s.room().enemies[0].health() <= 0);
    assert_eq!(s.player().experience, 10);
    assert!(log_contains(&s, "Hit 8!"));

    // The portal opens on the next tick.
    assert!(!s.room().portal.active);
    s.step(&[]);
    assert!(s.room().portal.active);
    assert_eq!(s.log().last(), Some("The room is open!"));
}

#[test]
fn attack_on_cooldown_is_a_no_op() {
    let mut s = playing();
    s.step(&[GameAction::Attack]);
    assert_eq!(s.log().last(), Some("Missed!"));
    let total = s.log().total();

    s.step(&[GameAction::Attack]);
    assert_eq!(s.log().total(), total);
    assert!(s.attack().is_none());
}

#[test]
fn dead_enemies_cannot_be_hit_again() {
    let mut s = playing();
    walk_to(&mut s, 4, 3);
    s.room_mut().enemies[0].take_damage(100);
    let outcome = s.attack().expect("cooldown is clear");
    assert!(outcome.missed());
    assert_eq!(s.player().experience, 0);
}

#[test]
fn slime_walks_x_first_then_strikes() {
    let mut s = playing();
    // Player (1, 1), slime (4, 4): three steps on x, two on y, then adjacent.
    let interval = ENEMY_ACTION_TICKS as usize;
    let mut path = Vec::new();
    for _ in 0..5 {
        for _ in 0..interval {
            s.step(&[]);
        }
        let e = &s.room().enemies[0].body;
        path.push((e.grid_x, e.grid_y));
    }
    assert_eq!(path, vec![(3, 4), (2, 4), (1, 4), (1, 3), (1, 2)]);

    let health = s.player().health();
    for _ in 0..interval {
        s.step(&[]);
    }
    assert_eq!(s.player().health(), health - 2);
    assert_eq!(s.room().enemies[0].body.grid_y, 2);
}

#[test]
fn boss_acts_faster() {
    let mut s = common::playing_in_room(4);
    let boss = &s.room().enemies[0];
    assert!(boss.boss);
    assert_eq!(boss.action_interval, BOSS_ACTION_TICKS);

    for _ in 0..BOSS_ACTION_TICKS {
        s.step(&[]);
    }
    assert_eq!(s.room().enemies[0].body.grid_x, 4);
}

#[test]
fn death_ends_the_run_once() {
    let mut s = playing();
    walk_to(&mut s, 4, 3);
    s.player_mut().set_health(1);

    for _ in 0..ENEMY_ACTION_TICKS {
        s.step(&[]);
    }
    assert_eq!(s.mode(), GameMode::GameOver);
    assert_eq!(s.player().health(), 0);
    assert_eq!(s.log().last(), Some("You died."));

    let total = s.log().total();
    let ticks = s.ticks();
    for _ in 0..10 {
        s.step(&[GameAction::Attack, GameAction::MoveUp]);
    }
    assert_eq!(s.log().total(), total);
    assert_eq!(s.ticks(), ticks);

    s.step(&[GameAction::Restart]);
    assert_eq!(s.mode(), GameMode::Menu);
    assert_eq!(s.player().health(), s.player().max_health());
}
