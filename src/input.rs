//! Edge-triggered key latching
//!
//! Hosts sample "is this key down right now" once per frame. `Controls` turns
//! those samples into a `TickInput` where fire and restart report exactly one
//! press per physical key-down, however long the key is held.

use crate::sim::TickInput;

/// Raw key states for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub restart: bool,
}

/// One action key across frames; the `Just*` states last a single sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    JustPressed,
    Pressed,
    JustReleased,
}

impl ButtonState {
    /// Fold in this frame's raw sample
    pub fn sample(self, down: bool) -> Self {
        match (self.is_down(), down) {
            (false, true) => Self::JustPressed,
            (true, true) => Self::Pressed,
            (true, false) => Self::JustReleased,
            (false, false) => Self::Released,
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// The key went down on the latest sample
    pub fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }
}

/// Latched state of every game action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: ButtonState,
    pub right: ButtonState,
    pub up: ButtonState,
    pub down: ButtonState,
    pub fire: ButtonState,
    pub restart: ButtonState,
}

impl Controls {
    /// Feed one frame of raw key samples
    pub fn update(&mut self, held: &HeldKeys) {
        self.left = self.left.sample(held.left);
        self.right = self.right.sample(held.right);
        self.up = self.up.sample(held.up);
        self.down = self.down.sample(held.down);
        self.fire = self.fire.sample(held.fire);
        self.restart = self.restart.sample(held.restart);
    }

    /// Input for the tick that follows the latest `update`
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left.is_down(),
            right: self.right.is_down(),
            up: self.up.is_down(),
            down: self.down.is_down(),
            fire: self.fire.is_just_pressed(),
            restart: self.restart.is_just_pressed(),
        }
    }
}
