//! Game state and core entity types
//!
//! Every entity is owned by the [`World`] aggregate; nothing outlives it.
//! Collections are plain `Vec`s mutated only inside the owning tick, and all
//! randomness flows through the World's seeded RNG so a run is reproducible
//! from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::sim::collision::Aabb;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Level cleared, waiting for the continue signal
    LevelComplete,
    /// Out of lives, waiting for the restart signal
    GameOver,
}

/// Named sound triggers emitted by the simulation. Playback is external;
/// the audio collaborator maps [`GameEvent::sound_key`] to a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Ball or bullet damaged something, or the ball bounced off the paddle
    Hit,
    /// Power-up collected
    PowerUp,
    /// Player volley fired
    Shoot,
    /// Boss spawned at level start
    BossAppear,
    /// Level cleared
    LevelUp,
    /// Lives exhausted
    GameOver,
}

impl GameEvent {
    pub fn sound_key(&self) -> &'static str {
        match self {
            GameEvent::Hit => "hit",
            GameEvent::PowerUp => "powerup",
            GameEvent::Shoot => "shoot",
            GameEvent::BossAppear => "boss_appear",
            GameEvent::LevelUp => "level_up",
            GameEvent::GameOver => "game_over",
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    /// Ticks until the next volley is accepted
    pub shoot_cooldown: u32,
    /// Damage dealt per player bullet
    pub bullet_power: u32,
    /// Bullets per volley; also drives paddle width/color growth
    pub bullet_width: u32,
    /// Current tint, updated by the power-up system
    pub color: crate::assets::Rgb,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (WIDTH - PADDLE_BASE_WIDTH) / 2.0,
                HEIGHT - PADDLE_BOTTOM_MARGIN - PADDLE_HEIGHT,
            ),
            width: PADDLE_BASE_WIDTH,
            shoot_cooldown: 0,
            bullet_power: 1,
            bullet_width: 1,
            color: crate::assets::PADDLE_BASE_COLOR,
        }
    }
}

impl Paddle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, PADDLE_HEIGHT))
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Move by the paddle speed, clamped to the field
    pub fn slide(&mut self, dir: f32) {
        self.pos.x = (self.pos.x + dir * PADDLE_SPEED).clamp(0.0, WIDTH - self.width);
    }

    /// Recenter horizontally without losing width/weapon state
    pub fn keep_in_field(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, WIDTH - self.width);
    }
}

/// The ball. Persists for the whole session; repositioned, never recreated.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Inactive after falling off the bottom; no velocity effect until reset
    pub active: bool,
}

impl Ball {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(BALL_SIZE))
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + BALL_SIZE / 2.0
    }
}

/// A player bullet, travelling up along its fan angle
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bullet {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT))
    }

    pub fn off_screen(&self) -> bool {
        self.pos.y + BULLET_HEIGHT < 0.0 || self.pos.x + BULLET_WIDTH < 0.0 || self.pos.x > WIDTH
    }
}

/// A destructible block
#[derive(Debug, Clone)]
pub struct Block {
    pub pos: Vec2,
    /// Remaining hit points, 1..=5
    pub strength: u8,
    pub max_strength: u8,
    /// Row color lookup id (see `assets::block_color`)
    pub color_id: u8,
}

impl Block {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT) / 2.0
    }

    /// Apply one unit of damage. Returns true if the block is destroyed.
    /// Strength never underflows; a dead block stays at zero.
    pub fn hit(&mut self) -> bool {
        self.strength = self.strength.saturating_sub(1);
        self.strength == 0
    }
}

/// Power-up kinds dropped by destroyed blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerUpKind {
    /// +1 bullet damage
    Damage,
    /// +1 bullet per volley, widens and recolors the paddle
    MultiShot,
    /// +1 life
    Life,
}

/// A falling power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(POWERUP_SIZE))
    }

    pub fn off_screen(&self) -> bool {
        self.pos.y > HEIGHT
    }
}

/// A bullet fired by the boss
#[derive(Debug, Clone)]
pub struct BossBullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl BossBullet {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BOSS_BULLET_WIDTH, BOSS_BULLET_HEIGHT))
    }

    pub fn off_screen(&self) -> bool {
        self.pos.y > HEIGHT || self.pos.x + BOSS_BULLET_WIDTH < 0.0 || self.pos.x > WIDTH
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// 1-based level number
    pub level: u32,
    /// Ball launch speed multiplier, ×1.1 per level-up
    pub speed_scale: f32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bullets: Vec<Bullet>,
    pub blocks: Vec<Block>,
    pub power_ups: Vec<PowerUp>,
    pub boss: Option<crate::sim::boss::Boss>,
    pub boss_bullets: Vec<BossBullet>,
    /// Sound triggers emitted this tick, cleared at tick start
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Create a session and build level 1
    pub fn new(seed: u64) -> Self {
        let mut world = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            speed_scale: 1.0,
            paddle: Paddle::default(),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                active: false,
            },
            bullets: Vec::new(),
            blocks: Vec::new(),
            power_ups: Vec::new(),
            boss: None,
            boss_bullets: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
        };
        world.reset_ball();
        crate::sim::level::setup_level(&mut world);
        world
    }

    /// Recenter the ball and relaunch with a re-randomized horizontal
    /// direction, scaled by the current difficulty ramp
    pub fn reset_ball(&mut self) {
        const LAUNCH_VX: [f32; 4] = [-4.0, -3.0, 3.0, 4.0];
        let vx = LAUNCH_VX[self.rng.random_range(0..LAUNCH_VX.len())];
        self.ball.pos = Vec2::new((WIDTH - BALL_SIZE) / 2.0, (HEIGHT - BALL_SIZE) / 2.0);
        self.ball.vel = Vec2::new(vx, -BALL_LAUNCH_VY) * self.speed_scale;
        self.ball.active = true;
    }

    /// Whether the current level is a boss encounter
    pub fn is_boss_level(&self) -> bool {
        crate::sim::level::is_boss_level(self.level)
    }

    /// Full session reset back to level 1, keeping the RNG stream
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.speed_scale = 1.0;
        self.paddle = Paddle::default();
        self.bullets.clear();
        self.blocks.clear();
        self.power_ups.clear();
        self.boss = None;
        self.boss_bullets.clear();
        self.reset_ball();
        crate::sim::level::setup_level(self);
        log::info!("session restarted (seed {})", self.seed);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
