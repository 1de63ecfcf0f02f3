//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes in as `dt`, never from a clock
//! - Randomness comes from an injected, seedable RNG
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod anim;
pub mod autopilot;
pub mod collision;
pub mod easing;
pub mod pool;
pub mod state;
pub mod tick;

pub use anim::{DamageFlash, ScorePulse};
pub use collision::{BeamHalf, Rect, beam_collider, beam_origin, enemy_collider, player_collider};
pub use easing::{ease_channel, ease_quad_in_out};
pub use pool::{Pool, Slot};
pub use state::{
    Arena, BeamOwner, Enemy, EnemyPool, GameEvent, GameState, Laser, LaserPool, Player,
    SpriteSizes,
};
pub use tick::{TickInput, tick};
