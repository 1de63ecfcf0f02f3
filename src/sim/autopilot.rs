//! Scripted player for demos and soak runs
//!
//! Produces raw key states, so its output goes through the same edge
//! latching as a real keyboard.

use super::state::{BeamOwner, GameState};
use crate::input::HeldKeys;

/// How far above the ship an enemy beam counts as incoming
const DODGE_RANGE: i32 = 160;

/// Pick this frame's keys for the current state
pub fn drive(state: &GameState) -> HeldKeys {
    // Tap restart on alternate frames so every tap is a fresh press
    if state.can_restart() {
        return HeldKeys {
            restart: state.frame % 2 == 0,
            ..Default::default()
        };
    }

    let player = &state.player;
    let width = state.sprites.player.x;
    let center = player.pos.x + width / 2;
    let mut keys = HeldKeys {
        down: true,
        ..Default::default()
    };

    // Sidestep the closest enemy beam coming down on us
    let threat = state
        .lasers
        .iter()
        .filter(|l| l.is_active() && l.owner == BeamOwner::Enemy)
        .filter(|l| (0..=DODGE_RANGE).contains(&(player.pos.y - l.pos.y)))
        .filter(|l| l.pos.x <= player.pos.x + width && player.pos.x <= l.pos.x + width)
        .max_by_key(|l| l.pos.y);

    if let Some(laser) = threat {
        if laser.pos.x + width / 2 >= center {
            keys.left = true;
        } else {
            keys.right = true;
        }
        return keys;
    }

    // Otherwise line up under the nearest enemy and shoot
    let enemy_w = state.sprites.enemy.x;
    let target = state
        .enemies
        .iter()
        .filter(|e| e.active)
        .map(|e| e.pos.x + enemy_w / 2)
        .min_by_key(|x| (x - center).abs());

    if let Some(x) = target {
        let dx = x - center;
        if dx < -crate::consts::PLAYER_SPEED {
            keys.left = true;
        } else if dx > crate::consts::PLAYER_SPEED {
            keys.right = true;
        }
        keys.fire = dx.abs() <= enemy_w / 2 && state.frame % 8 < 4;
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Controls;
    use crate::sim::state::{Enemy, Laser};
    use crate::sim::tick;
    use glam::IVec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn lone_enemy_at(state: &mut GameState, pos: IVec2) {
        for enemy in state.enemies.iter_mut() {
            enemy.active = false;
        }
        state.enemies[0] = Enemy {
            active: true,
            pos,
            begin: pos,
            target: pos,
            timer: 0.0,
            laser_cooldown: 100.0,
        };
    }

    #[test]
    fn test_steers_toward_enemy() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(&mut rng);
        lone_enemy_at(&mut state, IVec2::new(0, 50));

        let keys = drive(&state);
        assert!(keys.left);
        assert!(!keys.right);
        assert!(keys.down);
    }

    #[test]
    fn test_dodges_incoming_beam() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = GameState::new(&mut rng);
        lone_enemy_at(&mut state, IVec2::new(0, 50));
        let above = state.player.pos - IVec2::new(-10, 100);
        state.lasers.spawn(Laser::fired(BeamOwner::Enemy, above));

        let keys = drive(&state);
        assert!(keys.left);
        assert!(!keys.fire);
    }

    #[test]
    fn test_taps_restart_when_over() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(&mut rng);
        state.player.lives = 0;
        state.frame = 10;
        assert!(drive(&state).restart);
        state.frame = 11;
        assert!(!drive(&state).restart);
    }

    #[test]
    fn test_soak_run_keeps_invariants() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut state = GameState::new(&mut rng);
        let mut controls = Controls::default();
        let mut kills = 0;

        for _ in 0..60 * 120 {
            controls.update(&drive(&state));
            tick(&mut state, &controls.tick_input(), 1.0 / 60.0, &mut rng);

            kills += state
                .events
                .iter()
                .filter(|e| matches!(e, crate::sim::GameEvent::EnemyDestroyed { .. }))
                .count();
            assert!(state.player.lives <= crate::consts::START_LIVES);
            assert!(state.active_laser_count() <= crate::consts::MAX_LASER_COUNT);
            assert!(state.player.pos.y >= state.arena.half_height());
        }
        assert!(kills > 0, "autopilot should hit something in two minutes");
    }
}
