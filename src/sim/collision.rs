//! Collision detection for sprites and beams
//!
//! Everything is an axis-aligned rectangle in integer screen space. Colliders
//! are rebuilt from positions and sprite sizes whenever they are needed.

use glam::IVec2;

use super::state::SpriteSizes;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Overlap test. Touching edges count as a hit.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

/// Which of the two beams of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamHalf {
    Left,
    Right,
}

/// Top-left corner of one beam half of a shot anchored at `anchor`.
///
/// The right half sits flush with the right edge of the player's sprite
/// footprint, whichever ship fired it.
#[inline]
pub fn beam_origin(anchor: IVec2, half: BeamHalf, sprites: &SpriteSizes) -> IVec2 {
    match half {
        BeamHalf::Left => anchor,
        BeamHalf::Right => IVec2::new(anchor.x + sprites.player.x - sprites.beam.x, anchor.y),
    }
}

/// Collider of one beam half
#[inline]
pub fn beam_collider(anchor: IVec2, half: BeamHalf, sprites: &SpriteSizes) -> Rect {
    Rect::from_pos_size(beam_origin(anchor, half, sprites), sprites.beam)
}

#[inline]
pub fn player_collider(pos: IVec2, sprites: &SpriteSizes) -> Rect {
    Rect::from_pos_size(pos, sprites.player)
}

#[inline]
pub fn enemy_collider(pos: IVec2, sprites: &SpriteSizes) -> Rect {
    Rect::from_pos_size(pos, sprites.enemy)
}
