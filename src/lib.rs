//! Brick Blaster - a brick-breaking shoot-em-up
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, boss AI, progression)
//! - `assets`: Logical asset keys and solid-color fallback resolution
//!
//! Rendering, audio playback and input device mapping are external: the
//! embedding application feeds a [`sim::TickInput`] each frame and consumes
//! the [`sim::Snapshot`] (entity views, HUD scalars, sound triggers) the
//! simulation produces.

pub mod assets;
pub mod sim;

pub use assets::{AssetKey, Rgb, VisualHandle};
pub use sim::{GameEvent, GamePhase, Snapshot, TickInput, World, tick};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels, y grows downward)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_BASE_WIDTH: f32 = 100.0;
    pub const PADDLE_MAX_WIDTH: f32 = WIDTH / 3.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Vertical launch speed; horizontal is drawn from [-4, -3, 3, 4]
    pub const BALL_LAUNCH_VY: f32 = 4.0;
    /// Speed scale multiplier applied on each level-up
    pub const LEVEL_SPEED_RAMP: f32 = 1.1;

    /// Player bullets
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Ticks between volleys, independent of volley size
    pub const SHOOT_COOLDOWN_TICKS: u32 = 15;
    /// Fan span per stream (degrees), capped
    pub const SPREAD_PER_STREAM_DEG: f32 = 10.0;
    pub const MAX_SPREAD_DEG: f32 = 60.0;

    /// Blocks
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const BLOCK_ROWS: u32 = 5;
    pub const BLOCK_COLS: u32 = 9;
    pub const BLOCK_GRID_X: f32 = 20.0;
    pub const BLOCK_GRID_Y: f32 = 50.0;
    pub const BLOCK_STRIDE_X: f32 = 85.0;
    pub const BLOCK_STRIDE_Y: f32 = 35.0;
    pub const BLOCK_MAX_STRENGTH: u8 = 5;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_FALL_SPEED: f32 = 3.0;
    /// Drop probability when a block is destroyed (outside boss levels)
    pub const POWERUP_DROP_CHANCE: f64 = 0.2;

    /// Boss
    pub const BOSS_TOP_MARGIN: f32 = 50.0;
    pub const BOSS_WALL_MARGIN: f32 = 20.0;
    pub const BOSS_PATTERN_DELAY_TICKS: u32 = 300;
    pub const BOSS_BULLET_WIDTH: f32 = 8.0;
    pub const BOSS_BULLET_HEIGHT: f32 = 16.0;
    pub const BOSS_BULLET_SPEED: f32 = 5.0;
    /// Level N hosts a boss iff N % BOSS_LEVEL_INTERVAL == 0
    pub const BOSS_LEVEL_INTERVAL: u32 = 3;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
}

/// Degrees to radians. Fan angles are specified in degrees throughout, so the
/// conversion lives here rather than being repeated at each call site.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}
