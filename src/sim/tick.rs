//! Fixed timestep simulation tick
//!
//! One `tick` call per rendered frame: spawn rolls, then collision
//! resolution against the pre-update snapshot, then every entity's update in
//! registry order, then the deferred-add merge and the expiry prune.

use glam::Vec2;

use super::behavior::BehaviorEnv;
use super::collision;
use super::spawner;
use super::state::GameState;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Movement direction, length clamped to 1 by the caller
    pub movement: Vec2,
    /// Aim direction, unit length or zero when idle
    pub aim: Vec2,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // New enemies materialize first; collisions then resolve against the
    // pre-update snapshot of positions
    spawner::run(state);
    collision::handle_collisions(state);

    // Update pass in registry order: player, enemies, bullets. Entities
    // created here (bullets being fired) go through the pending buffer, so
    // the live lists never grow mid-iteration.
    {
        let GameState {
            player,
            bounds,
            rng,
            pending,
            status,
            events,
            ..
        } = state;
        player.update(input, *bounds, rng, pending, status, events);
    }
    {
        let GameState {
            player,
            enemies,
            bounds,
            rng,
            ..
        } = state;
        let mut env = BehaviorEnv {
            player_pos: player.body.position,
            bounds: *bounds,
            rng,
        };
        for enemy in enemies.iter_mut() {
            enemy.update(&mut env);
        }
    }
    let bounds = state.bounds;
    for bullet in state.bullets.iter_mut() {
        bullet.update(bounds);
    }

    // Merge deferred spawns, then prune everything that expired this tick
    state.flush_pending();
    state.enemies.retain(|enemy| !enemy.body.expired);
    state.bullets.retain(|bullet| !bullet.body.expired);

    state.status.update(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use crate::sim::bullet::Bullet;
    use crate::sim::enemy::Enemy;
    use crate::sim::state::SimConfig;

    fn scripted_input(tick_no: u32) -> TickInput {
        let t = tick_no as f32 * 0.05;
        TickInput {
            movement: Vec2::new(t.cos(), t.sin()),
            aim: if tick_no % 3 == 0 {
                Vec2::new(1.0, 0.0)
            } else {
                Vec2::ZERO
            },
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs stay identical
        let config = SimConfig {
            seed: 99_999,
            ..Default::default()
        };
        let mut state_a = GameState::new(config);
        let mut state_b = GameState::new(config);

        for tick_no in 0..500 {
            let input = scripted_input(tick_no);
            tick(&mut state_a, &input, TICK_DT);
            tick(&mut state_b, &input, TICK_DT);
        }

        assert_eq!(state_a.time_ticks, state_b.time_ticks);
        assert_eq!(state_a.status.score, state_b.status.score);
        assert_eq!(state_a.enemies.len(), state_b.enemies.len());
        assert_eq!(state_a.bullets.len(), state_b.bullets.len());
        assert_eq!(state_a.player.body.position, state_b.player.body.position);
        for (a, b) in state_a.enemies.iter().zip(&state_b.enemies) {
            assert_eq!(a.body.position, b.body.position);
        }
    }

    #[test]
    fn test_fired_bullets_land_after_the_update_pass() {
        let mut state = GameState::new(SimConfig::default());
        let input = TickInput {
            movement: Vec2::ZERO,
            aim: Vec2::new(0.0, -1.0),
        };

        tick(&mut state, &input, TICK_DT);

        // Both muzzle bullets were merged from the pending buffer
        assert_eq!(state.bullets.len(), 2);
        assert!(state.pending.bullets.is_empty());
    }

    #[test]
    fn test_player_death_clears_enemy_list_same_tick() {
        let mut state = GameState::new(SimConfig::default());
        let player_pos = state.player.body.position;

        for i in 0..4 {
            let mut enemy = Enemy::seeker(Vec2::new(100.0 + 200.0 * i as f32, 100.0));
            enemy.materialize();
            state.add_enemy(enemy);
        }
        let mut overlapping = Enemy::seeker(player_pos + Vec2::new(5.0, 0.0));
        overlapping.materialize();
        state.add_enemy(overlapping);
        assert_eq!(state.enemies.len(), 5);

        tick(&mut state, &TickInput::default(), TICK_DT);

        // The wipe and the prune land in the same tick
        assert!(state.player.is_dead());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_expired_bullets_are_pruned() {
        let mut state = GameState::new(SimConfig::default());
        state.add_bullet(Bullet::new(Vec2::new(1275.0, 300.0), Vec2::new(11.0, 0.0)));
        state.add_bullet(Bullet::new(Vec2::new(200.0, 300.0), Vec2::new(11.0, 0.0)));

        tick(&mut state, &TickInput::default(), TICK_DT);

        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].body.position, Vec2::new(211.0, 300.0));
    }

    #[test]
    fn test_long_run_stays_consistent() {
        let mut state = GameState::new(SimConfig {
            seed: 7,
            ..Default::default()
        });

        for tick_no in 0..3_600 {
            let input = scripted_input(tick_no);
            tick(&mut state, &input, TICK_DT);

            assert!((1..=crate::consts::MAX_MULTIPLIER).contains(&state.status.multiplier));
            assert!(!state.enemies.iter().any(|e| e.body.expired));
            assert!(!state.bullets.iter().any(|b| b.body.expired));
            let half = state.player.body.sprite.size() / 2.0;
            assert!(
                state
                    .bounds
                    .contains_inset(state.player.body.position, half)
            );
        }
        assert_eq!(state.time_ticks, 3_600);
    }
}
