//! Renderable snapshot of a frame
//!
//! Everything a renderer needs to draw one frame, derived from `GameState`
//! without touching it. Text measurement stays with the renderer, so text
//! items carry an anchor rather than a pixel position.

use glam::IVec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::collision::{BeamHalf, beam_origin};
use crate::sim::easing::{ease_channel, ease_quad_in_out};
use crate::sim::{BeamOwner, DamageFlash, GameState, ScorePulse};

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const YELLOW: Self = Self::new(253, 249, 0, 255);
    pub const RED: Self = Self::new(230, 41, 55, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Where a text item is pinned on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anchor {
    TopLeft { x: i32, y: i32 },
    /// Right edge `margin` pixels in from the screen edge
    TopRight { margin: i32, y: i32 },
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextItem {
    pub text: String,
    pub font_size: i32,
    pub color: Rgba,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerSprite {
    pub pos: IVec2,
    /// Tint drawn over the ship; alpha 0 when not flashing
    pub flash: Rgba,
}

/// One visible beam half; `owner` selects the texture
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeamSprite {
    pub pos: IVec2,
    pub owner: BeamOwner,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// `None` once the ship is destroyed
    pub player: Option<PlayerSprite>,
    pub enemies: Vec<IVec2>,
    pub beams: Vec<BeamSprite>,
    pub score: TextItem,
    pub hp: TextItem,
    /// Game-over and win banners, drawn last
    pub banners: Vec<TextItem>,
}

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const WIN_TEXT: &str = "YOU WIN LASER SIEGE";

const HUD_MARGIN: i32 = 20;
const HUD_FONT_SIZE: i32 = FONT_BASE_SIZE * 3;
const BANNER_FONT_SIZE: i32 = FONT_BASE_SIZE * 5;
const SCORE_FONT_SMALL: i32 = FONT_BASE_SIZE * 3;
const SCORE_FONT_BIG: i32 = FONT_BASE_SIZE * 6;

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = (state.player.lives > 0).then(|| PlayerSprite {
            pos: state.player.pos,
            flash: Rgba::RED.with_alpha(flash_alpha(&state.damage_flash)),
        });

        let enemies = state
            .enemies
            .iter()
            .filter(|e| e.active)
            .map(|e| e.pos)
            .collect();

        let mut beams = Vec::new();
        for laser in state.lasers.iter() {
            for half in [BeamHalf::Left, BeamHalf::Right] {
                if laser.half_active(half) {
                    beams.push(BeamSprite {
                        pos: beam_origin(laser.pos, half, &state.sprites),
                        owner: laser.owner,
                    });
                }
            }
        }

        let score = TextItem {
            text: format!("Score: {}", state.player.score),
            font_size: score_font_size(&state.score_pulse),
            color: score_color(&state.score_pulse),
            anchor: Anchor::TopLeft {
                x: HUD_MARGIN,
                y: HUD_MARGIN,
            },
        };

        let hp = TextItem {
            text: format!("HP: {}", state.player.lives as u32 * HP_PER_LIFE),
            font_size: HUD_FONT_SIZE,
            color: Rgba::WHITE,
            anchor: Anchor::TopRight {
                margin: HUD_MARGIN,
                y: HUD_MARGIN,
            },
        };

        let mut banners = Vec::new();
        if state.is_game_over() {
            banners.push(banner(GAME_OVER_TEXT));
        }
        if state.is_victory() {
            banners.push(banner(WIN_TEXT));
        }

        Self {
            player,
            enemies,
            beams,
            score,
            hp,
            banners,
        }
    }
}

fn banner(text: &str) -> TextItem {
    TextItem {
        text: text.to_string(),
        font_size: BANNER_FONT_SIZE,
        color: Rgba::WHITE,
        anchor: Anchor::Center,
    }
}

/// Alpha of the red damage overlay
pub fn flash_alpha(flash: &DamageFlash) -> u8 {
    let (from, to) = if flash.is_fading_out() { (255, 0) } else { (0, 255) };
    ease_channel(flash.timer(), from, to, PLAYER_DAMAGE_FLASH_ANIM_DURATION)
}

pub fn score_font_size(pulse: &ScorePulse) -> i32 {
    let (from, to) = if pulse.is_retracting() {
        (SCORE_FONT_BIG, SCORE_FONT_SMALL)
    } else {
        (SCORE_FONT_SMALL, SCORE_FONT_BIG)
    };
    ease_quad_in_out(pulse.timer(), from as f32, (to - from) as f32, FONT_ANIM_DURATION) as i32
}

pub fn score_color(pulse: &ScorePulse) -> Rgba {
    let (from, to) = if pulse.is_retracting() {
        (Rgba::YELLOW, Rgba::WHITE)
    } else {
        (Rgba::WHITE, Rgba::YELLOW)
    };
    let t = pulse.timer();
    Rgba::new(
        ease_channel(t, from.r, to.r, FONT_ANIM_DURATION),
        ease_channel(t, from.g, to.g, FONT_ANIM_DURATION),
        ease_channel(t, from.b, to.b, FONT_ANIM_DURATION),
        255,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Laser, Slot};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fresh() -> GameState {
        let mut rng = Pcg32::seed_from_u64(42);
        GameState::new(&mut rng)
    }

    #[test]
    fn test_fresh_session_snapshot() {
        let state = fresh();
        let snap = Snapshot::capture(&state);

        let player = snap.player.expect("player should be drawn");
        assert_eq!(player.pos, state.player.pos);
        assert_eq!(player.flash.a, 0);
        assert_eq!(snap.enemies.len(), MAX_ENEMY_COUNT);
        assert!(snap.beams.is_empty());
        assert_eq!(snap.score.text, "Score: 0");
        assert_eq!(snap.score.font_size, SCORE_FONT_SMALL);
        assert_eq!(snap.score.color, Rgba::WHITE);
        assert_eq!(snap.hp.text, "HP: 3000");
        assert!(snap.banners.is_empty());
    }

    #[test]
    fn test_game_over_hides_player() {
        let mut state = fresh();
        state.player.lives = 0;
        state.damage_flash.trigger();
        let snap = Snapshot::capture(&state);

        assert!(snap.player.is_none());
        assert_eq!(snap.hp.text, "HP: 0");
        assert_eq!(snap.banners.len(), 1);
        assert_eq!(snap.banners[0].text, GAME_OVER_TEXT);
        assert_eq!(snap.banners[0].anchor, Anchor::Center);
    }

    #[test]
    fn test_win_banner_over_normal_scene() {
        let mut state = fresh();
        for enemy in state.enemies.iter_mut() {
            enemy.active = false;
        }
        state.any_enemy_alive = false;
        let snap = Snapshot::capture(&state);

        assert!(snap.player.is_some());
        assert!(snap.enemies.is_empty());
        assert_eq!(snap.banners.len(), 1);
        assert_eq!(snap.banners[0].text, WIN_TEXT);
    }

    #[test]
    fn test_beam_halves_listed_separately() {
        let mut state = fresh();
        let anchor = IVec2::new(100, 200);
        state.lasers.spawn(Laser::fired(BeamOwner::Player, anchor));
        state.lasers.spawn(Laser {
            owner: BeamOwner::Enemy,
            left_active: false,
            right_active: true,
            pos: anchor,
        });
        assert!(!state.lasers[1].is_free());

        let snap = Snapshot::capture(&state);
        let right_x = anchor.x + state.sprites.player.x - state.sprites.beam.x;
        let beam = |x, owner| BeamSprite {
            pos: IVec2::new(x, anchor.y),
            owner,
        };
        assert_eq!(
            snap.beams,
            vec![
                beam(anchor.x, BeamOwner::Player),
                beam(right_x, BeamOwner::Player),
                beam(right_x, BeamOwner::Enemy),
            ]
        );
    }

    #[test]
    fn test_flash_alpha_follows_legs() {
        let mut flash = DamageFlash::default();
        assert_eq!(flash_alpha(&flash), 0);

        flash.trigger();
        flash.advance(PLAYER_DAMAGE_FLASH_ANIM_DURATION / 2.0);
        assert_eq!(flash_alpha(&flash), 127);

        // Fading out starts fully opaque
        flash.advance(PLAYER_DAMAGE_FLASH_ANIM_DURATION / 2.0);
        assert!(flash.is_fading_out());
        assert_eq!(flash_alpha(&flash), 255);
    }

    #[test]
    fn test_score_pulse_size_and_colour() {
        let mut pulse = ScorePulse::default();
        pulse.trigger();
        pulse.advance(FONT_ANIM_DURATION / 2.0);

        assert_eq!(score_font_size(&pulse), 45);
        let color = score_color(&pulse);
        assert_eq!(color.b, 127);
        assert_eq!(color.a, 255);

        // Shrinking starts at the big size in yellow
        pulse.advance(FONT_ANIM_DURATION / 2.0);
        assert!(pulse.is_retracting());
        assert_eq!(score_font_size(&pulse), SCORE_FONT_BIG);
        assert_eq!(score_color(&pulse), Rgba::YELLOW);

        pulse.advance(FONT_ANIM_DURATION);
        assert_eq!(score_font_size(&pulse), SCORE_FONT_SMALL);
        assert_eq!(score_color(&pulse), Rgba::WHITE);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = Snapshot::capture(&fresh());
        let json = serde_json::to_string(&snap).expect("snapshot should serialize");
        assert!(json.contains("\"Score: 0\""));
    }
}
