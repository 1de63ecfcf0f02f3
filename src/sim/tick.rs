//! Per-frame simulation tick
//!
//! The stages run in a fixed order and later stages read what earlier ones
//! wrote in the same frame: player movement, restart, player fire, lasers,
//! enemies, then animation timers.

use rand::Rng;

use super::collision::{BeamHalf, beam_collider, enemy_collider, player_collider};
use super::state::{BeamOwner, GameEvent, GameState, Laser, random_cooldown, random_patrol_point};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held direction keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire key, true only on the frame it went down
    pub fire: bool,
    /// Restart key, true only on the frame it went down
    pub restart: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut R) {
    state.events.clear();
    let was_over = state.is_game_over();
    let was_won = state.is_victory();

    move_player(state, input);

    if input.restart && state.can_restart() {
        state.reset(rng);
        state.events.push(GameEvent::Restarted);
        return;
    }

    state.frame += 1;

    if input.fire {
        fire_player_laser(state);
    }
    update_lasers(state);
    update_enemies(state, dt, rng);
    advance_animations(state, dt);

    if !was_over && state.is_game_over() {
        log::info!("Game over at frame {} (score {})", state.frame, state.player.score);
        state.events.push(GameEvent::GameOver);
    }
    if !was_won && state.is_victory() {
        log::info!("All enemies down at frame {} (score {})", state.frame, state.player.score);
        state.events.push(GameEvent::Victory);
    }
}

/// Held keys add up, so diagonals are faster than straight moves
fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if input.left {
        player.pos.x -= PLAYER_SPEED;
    }
    if input.right {
        player.pos.x += PLAYER_SPEED;
    }
    if input.up {
        player.pos.y -= PLAYER_SPEED;
    }
    if input.down {
        player.pos.y += PLAYER_SPEED;
    }
    player.clamp_to_play_area(&state.arena, &state.sprites);
}

fn fire_player_laser(state: &mut GameState) {
    match state.lasers.spawn(Laser::fired(BeamOwner::Player, state.player.pos)) {
        Some(slot) => state.events.push(GameEvent::PlayerFired { slot }),
        None => {
            log::debug!("Laser pool full, player shot dropped");
            state.events.push(GameEvent::ShotDropped {
                owner: BeamOwner::Player,
            });
        }
    }
}

fn update_lasers(state: &mut GameState) {
    let GameState {
        arena,
        sprites,
        player,
        lasers,
        enemies,
        damage_flash,
        score_pulse,
        events,
        ..
    } = state;

    for laser in lasers.iter_mut().filter(|l| l.is_active()) {
        match laser.owner {
            BeamOwner::Enemy => {
                laser.pos.y += LASER_SPEED;
                if laser.pos.y > arena.height {
                    laser.retire();
                    continue;
                }

                let target = player_collider(player.pos, sprites);
                for half in [BeamHalf::Left, BeamHalf::Right] {
                    if laser.half_active(half)
                        && beam_collider(laser.pos, half, sprites).overlaps(&target)
                    {
                        laser.set_half_active(half, false);
                        player.take_hit();
                        damage_flash.trigger();
                        events.push(GameEvent::PlayerHit {
                            lives_left: player.lives,
                        });
                    }
                }
            }
            BeamOwner::Player => {
                laser.pos.y -= LASER_SPEED;
                if laser.pos.y + sprites.beam.y < 0 {
                    laser.retire();
                    continue;
                }

                // Each enemy's active flag is read once, so two halves landing
                // on the same enemy this frame both score.
                for (index, enemy) in enemies.iter_mut().enumerate() {
                    if !enemy.active {
                        continue;
                    }
                    let target = enemy_collider(enemy.pos, sprites);
                    for half in [BeamHalf::Left, BeamHalf::Right] {
                        if laser.half_active(half)
                            && beam_collider(laser.pos, half, sprites).overlaps(&target)
                        {
                            enemy.active = false;
                            laser.set_half_active(half, false);
                            player.score += SCORE_PER_KILL;
                            score_pulse.trigger();
                            events.push(GameEvent::EnemyDestroyed { index });
                        }
                    }
                }
            }
        }
    }
}

fn update_enemies<R: Rng + ?Sized>(state: &mut GameState, dt: f32, rng: &mut R) {
    state.any_enemy_alive = state.enemies.iter().any(|e| e.active);

    let GameState {
        arena,
        sprites,
        lasers,
        enemies,
        events,
        ..
    } = state;

    for (index, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.active {
            continue;
        }

        enemy.pos = enemy.patrol_position();
        enemy.timer += dt;
        enemy.laser_cooldown -= dt;

        if enemy.timer >= ENEMY_ANIM_DURATION {
            enemy.begin = enemy.target;
            enemy.pos = enemy.target;
            enemy.target = random_patrol_point(rng, arena, sprites);
            enemy.timer = 0.0;
        }

        if enemy.laser_cooldown < 0.0 {
            match lasers.spawn(Laser::fired(BeamOwner::Enemy, enemy.pos)) {
                Some(slot) => events.push(GameEvent::EnemyFired { enemy: index, slot }),
                None => {
                    log::debug!("Laser pool full, enemy {} shot dropped", index);
                    events.push(GameEvent::ShotDropped {
                        owner: BeamOwner::Enemy,
                    });
                }
            }
            enemy.laser_cooldown = random_cooldown(rng);
        }
    }
}

/// The damage flash freezes once the ship is gone
fn advance_animations(state: &mut GameState, dt: f32) {
    if state.player.lives > 0 {
        state.damage_flash.advance(dt);
    }
    state.score_pulse.advance(dt);
}
