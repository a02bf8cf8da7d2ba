//! Collision detection and resolution
//!
//! One pass per tick, in a fixed order that keeps outcomes deterministic and
//! rules out double-kills:
//!
//! 1. Enemy-enemy: overlapping pairs get a symmetric repulsion impulse.
//!    Soft separation only; overlaps dissolve over a few ticks.
//! 2. Enemy-bullet: an overlap kills the enemy (scored through the
//!    multiplier) and expires the bullet. Entities expired earlier in the
//!    pass are skipped, so a bullet kills at most the first enemy in list
//!    order.
//! 3. Player-enemy: only fully materialized enemies count. The first
//!    overlap kills the player once and wipes every live enemy; scanning
//!    stops there.
//!
//! All overlap tests compare squared distances; no square roots.

use super::entity::Body;
use super::state::{GameEvent, GameState};

/// Circle-circle overlap via squared distance
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    let r = a.radius + b.radius;
    a.position.distance_squared(b.position) < r * r
}

/// Resolve all collisions against the current (pre-update) positions
pub fn handle_collisions(state: &mut GameState) {
    let GameState {
        player,
        enemies,
        bullets,
        status,
        spawner,
        events,
        ..
    } = state;

    // Enemy-enemy repulsion over every unordered pair. Impulses only touch
    // velocity, so positions stay a stable snapshot for the whole pass.
    for i in 0..enemies.len() {
        let (left, right) = enemies.split_at_mut(i + 1);
        let a = &mut left[i];
        for b in right.iter_mut() {
            if bodies_overlap(&a.body, &b.body) {
                let (pos_a, pos_b) = (a.body.position, b.body.position);
                a.repel_from(pos_b);
                b.repel_from(pos_a);
            }
        }
    }

    // Enemy-bullet kills, first match in list order
    for enemy in enemies.iter_mut() {
        for bullet in bullets.iter_mut() {
            if enemy.body.expired || bullet.body.expired {
                continue;
            }
            if bodies_overlap(&enemy.body, &bullet.body) {
                enemy.kill(events);
                status.add_points(enemy.point_value);
                status.increase_multiplier();
                bullet.body.expired = true;
            }
        }
    }

    // Player-enemy: a single death per tick, then every live enemy is wiped.
    // The wipe awards nothing since the player is already dead.
    if !player.is_dead() {
        let hit = enemies.iter().any(|enemy| {
            enemy.is_active() && !enemy.body.expired && bodies_overlap(&player.body, &enemy.body)
        });
        if hit {
            player.kill();
            status.remove_life();
            if status.is_game_over() {
                events.push(GameEvent::GameOver {
                    score: status.score,
                });
            }
            for enemy in enemies.iter_mut() {
                if !enemy.body.expired {
                    enemy.kill(events);
                }
            }
            spawner.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPAWN_RAMP_START;
    use crate::sim::bullet::Bullet;
    use crate::sim::enemy::Enemy;
    use crate::sim::state::{SimConfig, SoundCue};
    use glam::Vec2;
    use rand::SeedableRng;

    fn screen_center() -> Vec2 {
        Vec2::new(640.0, 360.0)
    }

    fn state_with_enemies(positions: &[Vec2]) -> GameState {
        let mut state = GameState::new(SimConfig::default());
        for &pos in positions {
            let mut enemy = Enemy::seeker(pos);
            enemy.materialize();
            state.add_enemy(enemy);
        }
        state
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Body::new(crate::sim::Sprite::Seeker, Vec2::ZERO, 20.0);
        let mut b = Body::new(crate::sim::Sprite::Seeker, Vec2::new(40.0, 0.0), 20.0);
        // Exactly touching circles do not overlap
        assert!(!bodies_overlap(&a, &b));
        b.position.x = 39.9;
        assert!(bodies_overlap(&a, &b));
    }

    #[test]
    fn test_overlapping_enemies_repel_symmetrically() {
        let mut state = state_with_enemies(&[Vec2::new(100.0, 300.0), Vec2::new(110.0, 300.0)]);
        handle_collisions(&mut state);

        let va = state.enemies[0].body.velocity;
        let vb = state.enemies[1].body.velocity;
        assert!(va.x < 0.0, "left enemy pushed further left");
        assert!(vb.x > 0.0, "right enemy pushed further right");
        assert_eq!(va.x, -vb.x);
        assert!(!state.enemies[0].body.expired);
        assert!(!state.enemies[1].body.expired);
    }

    #[test]
    fn test_distant_enemies_ignore_each_other() {
        let mut state = state_with_enemies(&[Vec2::new(100.0, 300.0), Vec2::new(500.0, 300.0)]);
        handle_collisions(&mut state);
        assert_eq!(state.enemies[0].body.velocity, Vec2::ZERO);
        assert_eq!(state.enemies[1].body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_bullet_kills_enemy_and_expires() {
        let mut state = state_with_enemies(&[Vec2::new(200.0, 200.0)]);
        state.add_bullet(Bullet::new(Vec2::new(210.0, 200.0), Vec2::new(11.0, 0.0)));

        handle_collisions(&mut state);

        assert!(state.enemies[0].body.expired);
        assert!(state.bullets[0].body.expired);
        assert_eq!(state.status.score, 1);
        assert_eq!(state.status.multiplier, 2);
        assert!(
            state
                .events
                .contains(&GameEvent::Sound(SoundCue::Explosion))
        );
    }

    #[test]
    fn test_bullet_hits_first_of_overlapping_enemies() {
        // Two enemies stacked on the same spot, one bullet: first in list
        // order wins, the second survives
        let mut state = state_with_enemies(&[Vec2::new(200.0, 200.0), Vec2::new(205.0, 200.0)]);
        state.add_bullet(Bullet::new(Vec2::new(200.0, 200.0), Vec2::new(11.0, 0.0)));

        handle_collisions(&mut state);

        assert!(state.enemies[0].body.expired);
        assert!(!state.enemies[1].body.expired);
        assert_eq!(state.status.score, 1);
    }

    #[test]
    fn test_player_death_wipes_all_enemies_without_points() {
        let mut state = state_with_enemies(&[
            screen_center() + Vec2::new(5.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(1000.0, 600.0),
            Vec2::new(100.0, 600.0),
        ]);
        // A still-materializing enemy is wiped along with the rest
        state.add_enemy(Enemy::wanderer(
            Vec2::new(900.0, 100.0),
            &mut rand_pcg::Pcg32::seed_from_u64(9),
        ));
        // Let the ramp decay a little so the reset is observable
        for _ in 0..100 {
            state.spawner.decay();
        }
        let lives_before = state.status.lives;

        handle_collisions(&mut state);

        assert!(state.player.is_dead());
        assert_eq!(state.status.lives, lives_before - 1);
        assert!(state.enemies.iter().all(|e| e.body.expired));
        assert_eq!(state.status.score, 0);
        assert_eq!(state.status.multiplier, 1);
        assert_eq!(state.spawner.inverse_spawn_chance(), SPAWN_RAMP_START);
    }

    #[test]
    fn test_materializing_enemy_cannot_kill_player() {
        let mut state = GameState::new(SimConfig::default());
        // Freshly spawned, spawn timer still running
        state.add_enemy(Enemy::seeker(screen_center()));

        handle_collisions(&mut state);

        assert!(!state.player.is_dead());
        assert!(!state.enemies[0].body.expired);
    }

    #[test]
    fn test_game_over_event_on_last_life() {
        let mut state = state_with_enemies(&[screen_center() + Vec2::new(5.0, 0.0)]);
        while state.status.lives > 1 {
            state.status.remove_life();
        }

        handle_collisions(&mut state);

        assert!(state.status.is_game_over());
        assert!(state.events.contains(&GameEvent::GameOver { score: 0 }));
    }
}
