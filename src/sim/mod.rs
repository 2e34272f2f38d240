//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only, one tick per rendered frame
//! - Seeded RNG only (the World owns it)
//! - No rendering, audio or platform dependencies
//!
//! Data flows one direction per tick: input, entity motion, collision
//! resolution in a fixed order, effect application, progression, output
//! events.

pub mod boss;
pub mod collision;
pub mod level;
pub mod powerup;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod weapon;

pub use boss::{AttackPattern, Boss};
pub use collision::Aabb;
pub use snapshot::{EntityView, Hud, Snapshot};
pub use state::{
    Ball, Block, BossBullet, Bullet, GameEvent, GamePhase, Paddle, PowerUp, PowerUpKind, World,
};
pub use tick::{TickInput, tick};
