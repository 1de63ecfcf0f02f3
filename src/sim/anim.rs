//! Timer-driven animation state machines
//!
//! Both machines advance on accumulated seconds only, never on frame count,
//! so the same total `dt` yields the same sequence at any frame rate.

use crate::consts::{
    FONT_ANIM_DURATION, PLAYER_ANIM_FLASH_COUNT, PLAYER_DAMAGE_FLASH_ANIM_DURATION,
};

/// Red blink over the player ship after a hit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DamageFlash {
    #[default]
    Idle,
    /// One blink is a fade-in leg followed by a fade-out leg
    Flashing {
        /// Seconds into the current leg
        timer: f32,
        fading_out: bool,
        flashes_left: u8,
    },
}

impl DamageFlash {
    /// Start (or restart) a full set of blinks. An ongoing blink keeps its
    /// phase so the overlay never jumps.
    pub fn trigger(&mut self) {
        *self = match *self {
            Self::Idle => Self::Flashing {
                timer: 0.0,
                fading_out: false,
                flashes_left: PLAYER_ANIM_FLASH_COUNT,
            },
            Self::Flashing { timer, fading_out, .. } => Self::Flashing {
                timer,
                fading_out,
                flashes_left: PLAYER_ANIM_FLASH_COUNT,
            },
        };
    }

    pub fn advance(&mut self, dt: f32) {
        let Self::Flashing {
            mut timer,
            mut fading_out,
            mut flashes_left,
        } = *self
        else {
            return;
        };

        timer += dt;
        if timer >= PLAYER_DAMAGE_FLASH_ANIM_DURATION {
            timer = 0.0;
            if fading_out {
                flashes_left = flashes_left.saturating_sub(1);
                if flashes_left == 0 {
                    *self = Self::Idle;
                    return;
                }
            }
            fading_out = !fading_out;
        }

        *self = Self::Flashing {
            timer,
            fading_out,
            flashes_left,
        };
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn timer(&self) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Flashing { timer, .. } => *timer,
        }
    }

    pub fn is_fading_out(&self) -> bool {
        matches!(self, Self::Flashing { fading_out: true, .. })
    }

    pub fn flashes_left(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Flashing { flashes_left, .. } => *flashes_left,
        }
    }
}

/// Score text grows, then shrinks back, once per kill streak
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScorePulse {
    /// Resting at the small size
    #[default]
    Idle,
    Growing { timer: f32 },
    Shrinking { timer: f32 },
}

impl ScorePulse {
    /// Start a pulse. Has no effect while one is already playing.
    pub fn trigger(&mut self) {
        if let Self::Idle = self {
            *self = Self::Growing { timer: 0.0 };
        }
    }

    pub fn advance(&mut self, dt: f32) {
        *self = match *self {
            Self::Idle => Self::Idle,
            Self::Growing { timer } => {
                let timer = timer + dt;
                if timer >= FONT_ANIM_DURATION {
                    Self::Shrinking { timer: 0.0 }
                } else {
                    Self::Growing { timer }
                }
            }
            Self::Shrinking { timer } => {
                let timer = timer + dt;
                if timer >= FONT_ANIM_DURATION {
                    Self::Idle
                } else {
                    Self::Shrinking { timer }
                }
            }
        };
    }

    pub fn timer(&self) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Growing { timer } | Self::Shrinking { timer } => *timer,
        }
    }

    pub fn is_playing(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_retracting(&self) -> bool {
        matches!(self, Self::Shrinking { .. })
    }
}
