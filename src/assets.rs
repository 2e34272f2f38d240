//! Logical asset keys and fallback resolution
//!
//! The simulation never touches image data. It tags every renderable entity
//! with an [`AssetKey`]; the embedding application resolves keys to real
//! visuals through [`ResolveVisual`], and anything unresolved degrades to a
//! solid-color placeholder of the key's nominal size. Gameplay is identical
//! either way.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation, `t` clamped to [0, 1]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Darken toward black by `amount` in [0, 1]
    pub fn darken(self, amount: f32) -> Rgb {
        self.lerp(Rgb::new(0, 0, 0), amount)
    }
}

/// Paddle tint before any MultiShot growth
pub const PADDLE_BASE_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Fallback when a color id has no table entry
pub const NEUTRAL_GRAY: Rgb = Rgb::new(128, 128, 128);

/// Block row colors by `color_id`: red, orange, yellow, green, purple.
/// Unknown ids fall back to neutral gray rather than failing the tick.
pub fn block_color(color_id: u8) -> Rgb {
    match color_id {
        0 => Rgb::new(255, 0, 0),
        1 => Rgb::new(255, 165, 0),
        2 => Rgb::new(255, 255, 0),
        3 => Rgb::new(0, 255, 0),
        4 => Rgb::new(128, 0, 128),
        _ => {
            log::warn!("unknown block color id {color_id}, using neutral gray");
            NEUTRAL_GRAY
        }
    }
}

/// Damage fade for a block: darkens linearly with lost strength, down to 40%
/// brightness at one remaining hit point.
pub fn block_fade_color(color_id: u8, strength: u8, max_strength: u8) -> Rgb {
    let base = block_color(color_id);
    if max_strength <= 1 {
        return base;
    }
    let lost = max_strength.saturating_sub(strength.min(max_strength)) as f32;
    let fade = 0.6 * lost / (max_strength - 1) as f32;
    base.darken(fade)
}

/// Logical asset keys the renderer resolves to visuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssetKey {
    Paddle,
    Ball,
    Bullet,
    BlockRed,
    BlockOrange,
    BlockYellow,
    BlockGreen,
    BlockPurple,
    Boss,
    PowerUpDamage,
    PowerUpMulti,
    PowerUpLife,
    BossBullet,
}

impl AssetKey {
    /// Stable string key, matching the asset catalog file names
    pub fn key(&self) -> &'static str {
        match self {
            AssetKey::Paddle => "paddle",
            AssetKey::Ball => "ball",
            AssetKey::Bullet => "bullet",
            AssetKey::BlockRed => "block_red",
            AssetKey::BlockOrange => "block_orange",
            AssetKey::BlockYellow => "block_yellow",
            AssetKey::BlockGreen => "block_green",
            AssetKey::BlockPurple => "block_purple",
            AssetKey::Boss => "boss",
            AssetKey::PowerUpDamage => "powerup_damage",
            AssetKey::PowerUpMulti => "powerup_multi",
            AssetKey::PowerUpLife => "powerup_life",
            AssetKey::BossBullet => "boss_bullet",
        }
    }

    /// Block key for a row color id
    pub fn for_block(color_id: u8) -> Self {
        match color_id {
            0 => AssetKey::BlockRed,
            1 => AssetKey::BlockOrange,
            2 => AssetKey::BlockYellow,
            3 => AssetKey::BlockGreen,
            _ => AssetKey::BlockPurple,
        }
    }

    /// Nominal sprite size used for the solid-color placeholder
    pub fn nominal_size(&self) -> Vec2 {
        match self {
            AssetKey::Paddle => Vec2::new(PADDLE_BASE_WIDTH, PADDLE_HEIGHT),
            AssetKey::Ball => Vec2::splat(BALL_SIZE),
            AssetKey::Bullet => Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            AssetKey::BlockRed
            | AssetKey::BlockOrange
            | AssetKey::BlockYellow
            | AssetKey::BlockGreen
            | AssetKey::BlockPurple => Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            AssetKey::Boss => Vec2::splat(100.0),
            AssetKey::PowerUpDamage | AssetKey::PowerUpMulti | AssetKey::PowerUpLife => {
                Vec2::splat(POWERUP_SIZE)
            }
            AssetKey::BossBullet => Vec2::new(BOSS_BULLET_WIDTH, BOSS_BULLET_HEIGHT),
        }
    }

    /// Placeholder color when the key cannot be resolved
    pub fn fallback_color(&self) -> Rgb {
        match self {
            AssetKey::Paddle => PADDLE_BASE_COLOR,
            AssetKey::Ball => Rgb::new(255, 255, 255),
            AssetKey::Bullet => Rgb::new(0, 255, 0),
            AssetKey::BlockRed => block_color(0),
            AssetKey::BlockOrange => block_color(1),
            AssetKey::BlockYellow => block_color(2),
            AssetKey::BlockGreen => block_color(3),
            AssetKey::BlockPurple => block_color(4),
            AssetKey::Boss => Rgb::new(255, 0, 0),
            AssetKey::PowerUpDamage => Rgb::new(255, 255, 0),
            AssetKey::PowerUpMulti => Rgb::new(0, 255, 0),
            AssetKey::PowerUpLife => Rgb::new(255, 0, 0),
            AssetKey::BossBullet => Rgb::new(255, 128, 0),
        }
    }
}

/// A resolved visual: either an opaque handle supplied by the renderer or a
/// solid-color placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualHandle {
    /// Index into the embedding application's texture catalog
    Image(u32),
    /// Procedural fallback
    Solid { color: Rgb, size: Vec2 },
}

/// Supplied by the embedding application to map keys to loaded visuals.
pub trait ResolveVisual {
    fn resolve(&self, key: AssetKey) -> Option<VisualHandle>;

    /// Resolve a key, degrading to the solid-color placeholder. This never
    /// fails: a missing asset must not fail the tick.
    fn resolve_or_fallback(&self, key: AssetKey) -> VisualHandle {
        self.resolve(key).unwrap_or(VisualHandle::Solid {
            color: key.fallback_color(),
            size: key.nominal_size(),
        })
    }
}

/// Resolver with no catalog at all; everything becomes a placeholder.
pub struct NoAssets;

impl ResolveVisual for NoAssets {
    fn resolve(&self, _key: AssetKey) -> Option<VisualHandle> {
        None
    }
}
