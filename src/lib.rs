//! Laser Siege - a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, pools, timers)
//! - `view`: Renderable snapshot derived from the simulation
//! - `input`: Edge-triggered key latching for hosts
//! - `settings`: Arena, sprite and run settings

pub mod input;
pub mod settings;
pub mod sim;
pub mod view;

pub use input::{ButtonState, Controls, HeldKeys};
pub use settings::Settings;
pub use view::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Default arena size (256px art scaled 4x)
    pub const SCREEN_WIDTH: i32 = 256 * 4;
    pub const SCREEN_HEIGHT: i32 = SCREEN_WIDTH;

    /// Pixels the player moves per held direction key per frame
    pub const PLAYER_SPEED: i32 = 5;
    /// Pixels a beam travels per frame
    pub const LASER_SPEED: i32 = 10;

    /// Pool capacities
    pub const MAX_LASER_COUNT: usize = 99;
    pub const MAX_ENEMY_COUNT: usize = 10;

    /// Seconds per enemy patrol segment
    pub const ENEMY_ANIM_DURATION: f32 = 1.0;
    /// Enemy fire cooldown range (whole seconds, inclusive)
    pub const ENEMY_COOLDOWN_MIN: i32 = 1;
    pub const ENEMY_COOLDOWN_MAX: i32 = 5;

    pub const START_LIVES: u8 = 3;
    pub const SCORE_PER_KILL: u32 = 100;
    /// HP shown on the HUD per remaining life
    pub const HP_PER_LIFE: u32 = 1000;

    /// Damage flash: blinks per hit and seconds per fade leg
    pub const PLAYER_ANIM_FLASH_COUNT: u8 = 3;
    pub const PLAYER_DAMAGE_FLASH_ANIM_DURATION: f32 = 0.15;

    /// Score text pulse: seconds per grow/shrink leg
    pub const FONT_ANIM_DURATION: f32 = 0.3;
    /// Base glyph height of the renderer's default font
    pub const FONT_BASE_SIZE: i32 = 10;
}

/// Uniform integer in `[lo, hi]`; an inverted range collapses to `lo`
#[inline]
pub fn random_between<R: rand::Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        lo
    } else {
        rng.random_range(lo..=hi)
    }
}
