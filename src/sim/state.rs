//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in `GameState`. Nothing here is
//! global; hosts own the state and hand it to `tick` each frame.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::anim::{DamageFlash, ScorePulse};
use super::collision::BeamHalf;
use super::easing::ease_quad_in_out;
use super::pool::{Pool, Slot};
use crate::consts::*;
use crate::random_between;

/// Play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Arena {
    /// Top of the player's half; enemies patrol above it
    #[inline]
    pub fn half_height(&self) -> i32 {
        self.height / 2
    }
}

/// Sprite dimensions used for colliders and layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSizes {
    pub player: IVec2,
    pub enemy: IVec2,
    /// One beam half (both owners share it)
    pub beam: IVec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            player: IVec2::new(96, 96),
            enemy: IVec2::new(96, 96),
            beam: IVec2::new(16, 48),
        }
    }
}

/// Who fired a beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BeamOwner {
    #[default]
    Player,
    Enemy,
}

/// One logical shot, drawn as two side-by-side beam halves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Laser {
    pub owner: BeamOwner,
    pub left_active: bool,
    pub right_active: bool,
    /// Anchor for both halves
    pub pos: IVec2,
}

impl Slot for Laser {
    fn is_free(&self) -> bool {
        !self.left_active && !self.right_active
    }
}

impl Laser {
    /// A fresh shot with both halves live
    pub fn fired(owner: BeamOwner, pos: IVec2) -> Self {
        Self {
            owner,
            left_active: true,
            right_active: true,
            pos,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_free()
    }

    /// Retire both halves, freeing the slot
    pub fn retire(&mut self) {
        self.left_active = false;
        self.right_active = false;
    }

    #[inline]
    pub fn half_active(&self, half: BeamHalf) -> bool {
        match half {
            BeamHalf::Left => self.left_active,
            BeamHalf::Right => self.right_active,
        }
    }

    pub fn set_half_active(&mut self, half: BeamHalf, active: bool) {
        match half {
            BeamHalf::Left => self.left_active = active,
            BeamHalf::Right => self.right_active = active,
        }
    }
}

/// A patrolling enemy ship
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Enemy {
    pub active: bool,
    pub pos: IVec2,
    /// Start of the current patrol segment
    pub begin: IVec2,
    /// End of the current patrol segment
    pub target: IVec2,
    /// Seconds into the current segment
    pub timer: f32,
    /// Seconds until the next shot; fires once it drops below zero
    pub laser_cooldown: f32,
}

impl Slot for Enemy {
    fn is_free(&self) -> bool {
        !self.active
    }
}

impl Enemy {
    /// Spawn at a random point with a random first target and cooldown
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, arena: &Arena, sprites: &SpriteSizes) -> Self {
        let begin = random_patrol_point(rng, arena, sprites);
        let target = random_patrol_point(rng, arena, sprites);
        Self {
            active: true,
            pos: begin,
            begin,
            target,
            timer: 0.0,
            laser_cooldown: random_cooldown(rng),
        }
    }

    /// Where the current segment's easing puts the ship at `timer`
    pub fn patrol_position(&self) -> IVec2 {
        let begin = self.begin.as_vec2();
        let delta = (self.target - self.begin).as_vec2();
        IVec2::new(
            ease_quad_in_out(self.timer, begin.x, delta.x, ENEMY_ANIM_DURATION) as i32,
            ease_quad_in_out(self.timer, begin.y, delta.y, ENEMY_ANIM_DURATION) as i32,
        )
    }
}

/// Random top-left position that keeps an enemy fully inside the upper half
pub fn random_patrol_point<R: Rng + ?Sized>(
    rng: &mut R,
    arena: &Arena,
    sprites: &SpriteSizes,
) -> IVec2 {
    IVec2::new(
        random_between(rng, 0, arena.width - sprites.enemy.x),
        random_between(rng, 0, arena.half_height() - sprites.enemy.y),
    )
}

/// Whole-second enemy fire cooldown
pub fn random_cooldown<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    random_between(rng, ENEMY_COOLDOWN_MIN, ENEMY_COOLDOWN_MAX) as f32
}

/// The player's ship and run totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: IVec2,
    pub lives: u8,
    pub score: u32,
}

impl Player {
    /// Fresh ship, centred horizontally and dropped onto the top of its half
    pub fn spawn(arena: &Arena, sprites: &SpriteSizes) -> Self {
        let mut player = Self {
            pos: IVec2::new(
                arena.width / 2 - sprites.player.x / 2,
                arena.height / 2 - sprites.player.y / 2 - sprites.player.y,
            ),
            lives: START_LIVES,
            score: 0,
        };
        player.clamp_to_play_area(arena, sprites);
        player
    }

    /// Keep the sprite inside the lower half and the horizontal bounds.
    /// The bottom/right limits win if the half is too small for the sprite.
    pub fn clamp_to_play_area(&mut self, arena: &Arena, sprites: &SpriteSizes) {
        if self.pos.y < arena.half_height() {
            self.pos.y = arena.half_height();
        }
        if self.pos.x < 0 {
            self.pos.x = 0;
        }
        if self.pos.x + sprites.player.x > arena.width {
            self.pos.x = arena.width - sprites.player.x;
        }
        if self.pos.y + sprites.player.y > arena.height {
            self.pos.y = arena.height - sprites.player.y;
        }
    }

    /// Lose one life, never going below zero
    pub fn take_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

/// Notable things that happened during one tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerFired { slot: usize },
    EnemyFired { enemy: usize, slot: usize },
    /// The laser pool was full; the shot never existed
    ShotDropped { owner: BeamOwner },
    PlayerHit { lives_left: u8 },
    EnemyDestroyed { index: usize },
    GameOver,
    Victory,
    Restarted,
}

pub type LaserPool = Pool<Laser, MAX_LASER_COUNT>;
pub type EnemyPool = Pool<Enemy, MAX_ENEMY_COUNT>;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub sprites: SpriteSizes,
    pub player: Player,
    pub lasers: LaserPool,
    pub enemies: EnemyPool,
    /// OR of every enemy's `active` flag, refreshed during the enemy update
    pub any_enemy_alive: bool,
    pub damage_flash: DamageFlash,
    pub score_pulse: ScorePulse,
    /// Frames simulated since the last reset
    pub frame: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session with default arena and sprite sizes
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_layout(Arena::default(), SpriteSizes::default(), rng)
    }

    pub fn with_layout<R: Rng + ?Sized>(arena: Arena, sprites: SpriteSizes, rng: &mut R) -> Self {
        let mut state = Self {
            arena,
            sprites,
            player: Player::spawn(&arena, &sprites),
            lasers: Pool::new(),
            enemies: Pool::new(),
            any_enemy_alive: false,
            damage_flash: DamageFlash::Idle,
            score_pulse: ScorePulse::Idle,
            frame: 0,
            events: Vec::new(),
        };
        state.reset(rng);
        state
    }

    /// Reinitialize the whole session: player, pools, timers and positions
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.player = Player::spawn(&self.arena, &self.sprites);
        self.lasers.clear();
        self.enemies.clear();
        for _ in 0..MAX_ENEMY_COUNT {
            self.enemies.spawn(Enemy::spawn(rng, &self.arena, &self.sprites));
        }
        self.any_enemy_alive = true;
        self.damage_flash = DamageFlash::Idle;
        self.score_pulse = ScorePulse::Idle;
        self.frame = 0;

        log::info!(
            "Session reset: {} enemies, {} lives",
            self.enemies.occupied_count(),
            self.player.lives
        );
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.player.lives == 0
    }

    #[inline]
    pub fn is_victory(&self) -> bool {
        !self.any_enemy_alive
    }

    /// The restart key only works once the run has ended either way
    #[inline]
    pub fn can_restart(&self) -> bool {
        self.is_game_over() || self.is_victory()
    }

    pub fn active_enemy_count(&self) -> usize {
        self.enemies.occupied_count()
    }

    pub fn active_laser_count(&self) -> usize {
        self.lasers.occupied_count()
    }
}
