//! Renderable snapshot of one tick
//!
//! The output half of the external contract: everything a renderer needs to
//! draw the frame (entity views in draw order, HUD scalars) plus the sound
//! triggers the audio collaborator should play. The snapshot is plain data
//! and serializes, so it can cross a process boundary if the embedder wants.

use glam::Vec2;
use serde::Serialize;

use crate::assets::{AssetKey, Rgb, block_fade_color};
use crate::sim::state::{GameEvent, GamePhase, PowerUpKind, World};

/// One drawable entity
#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub pos: Vec2,
    pub size: Vec2,
    pub asset: AssetKey,
    /// Dynamic tint (paddle growth color, block damage fade); `None` means
    /// the asset's own appearance is used as-is.
    pub tint: Option<Rgb>,
}

/// HUD scalars for the frame
#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub bullet_power: u32,
    pub bullet_width: u32,
    pub paddle_width: f32,
    /// (current, max) while a boss is alive
    pub boss_health: Option<(f32, f32)>,
    pub phase: GamePhase,
}

/// Complete per-tick output
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub entities: Vec<EntityView>,
    pub hud: Hud,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    /// Capture the current world. Only alive entities appear.
    pub fn capture(world: &World) -> Self {
        let mut entities = Vec::new();

        for block in &world.blocks {
            let bounds = block.bounds();
            entities.push(EntityView {
                pos: bounds.pos,
                size: bounds.size,
                asset: AssetKey::for_block(block.color_id),
                tint: Some(block_fade_color(
                    block.color_id,
                    block.strength,
                    block.max_strength,
                )),
            });
        }
        for power_up in &world.power_ups {
            let bounds = power_up.bounds();
            entities.push(EntityView {
                pos: bounds.pos,
                size: bounds.size,
                asset: match power_up.kind {
                    PowerUpKind::Damage => AssetKey::PowerUpDamage,
                    PowerUpKind::MultiShot => AssetKey::PowerUpMulti,
                    PowerUpKind::Life => AssetKey::PowerUpLife,
                },
                tint: None,
            });
        }
        for bullet in &world.bullets {
            let bounds = bullet.bounds();
            entities.push(EntityView {
                pos: bounds.pos,
                size: bounds.size,
                asset: AssetKey::Bullet,
                tint: None,
            });
        }
        for bullet in &world.boss_bullets {
            let bounds = bullet.bounds();
            entities.push(EntityView {
                pos: bounds.pos,
                size: bounds.size,
                asset: AssetKey::BossBullet,
                tint: None,
            });
        }
        if let Some(boss) = &world.boss {
            let bounds = boss.bounds();
            entities.push(EntityView {
                pos: bounds.pos,
                size: bounds.size,
                asset: AssetKey::Boss,
                tint: None,
            });
        }
        {
            let bounds = world.paddle.bounds();
            entities.push(EntityView {
                pos: bounds.pos,
                size: bounds.size,
                asset: AssetKey::Paddle,
                tint: Some(world.paddle.color),
            });
        }
        if world.ball.active {
            let bounds = world.ball.bounds();
            entities.push(EntityView {
                pos: bounds.pos,
                size: bounds.size,
                asset: AssetKey::Ball,
                tint: None,
            });
        }

        Self {
            entities,
            hud: Hud {
                score: world.score,
                lives: world.lives,
                level: world.level,
                bullet_power: world.paddle.bullet_power,
                bullet_width: world.paddle.bullet_width,
                paddle_width: world.paddle.width,
                boss_health: world.boss.as_ref().map(|b| (b.health, b.max_health)),
                phase: world.phase,
            },
            events: world.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts_and_hud() {
        let world = World::new(4);
        let snap = Snapshot::capture(&world);
        // 45 blocks + paddle + ball on level 1
        assert_eq!(snap.entities.len(), 47);
        assert_eq!(snap.hud.level, 1);
        assert_eq!(snap.hud.lives, crate::consts::STARTING_LIVES);
        assert!(snap.hud.boss_health.is_none());
    }

    #[test]
    fn test_boss_health_in_hud_on_boss_levels() {
        let mut world = World::new(4);
        world.level = 3;
        crate::sim::level::setup_level(&mut world);
        let snap = Snapshot::capture(&world);
        assert_eq!(snap.hud.boss_health, Some((25_000.0, 25_000.0)));
        assert!(snap.entities.iter().any(|e| e.asset == AssetKey::Boss));
    }

    #[test]
    fn test_inactive_ball_is_not_rendered() {
        let mut world = World::new(4);
        world.ball.active = false;
        let snap = Snapshot::capture(&world);
        assert!(!snap.entities.iter().any(|e| e.asset == AssetKey::Ball));
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::new(4);
        let snap = Snapshot::capture(&world);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"score\":0"));
    }
}
