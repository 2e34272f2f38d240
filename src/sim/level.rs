//! Level setup and difficulty scaling
//!
//! Every third level swaps the block field for a boss encounter. All scaling
//! formulas are pure functions of the level (or boss index) so progression is
//! deterministic and monotonic.

use glam::Vec2;

use crate::consts::*;
use crate::sim::boss::{AttackPattern, Boss};
use crate::sim::state::{Block, GameEvent, World};

/// Level N hosts a boss iff N is a multiple of the boss interval
pub fn is_boss_level(level: u32) -> bool {
    level % BOSS_LEVEL_INTERVAL == 0
}

/// Boss index: boss level number divided by the interval
pub fn boss_index(level: u32) -> u32 {
    level / BOSS_LEVEL_INTERVAL
}

/// Boss side length, growing 15px per index up to 250
pub fn boss_size(index: u32) -> f32 {
    (100.0 + index as f32 * 15.0).min(250.0)
}

/// Boss health: 25 * index^5 * 1000. Grows extremely fast by design.
pub fn boss_health(index: u32) -> f32 {
    25.0 * (index as f32).powi(5) * 1000.0
}

/// Horizontal sweep speed, capped at 5
pub fn boss_speed(index: u32) -> f32 {
    (2.0 + index as f32 * 0.2).min(5.0)
}

/// Ticks between boss shots, floored at 20
pub fn boss_shoot_delay(index: u32) -> u32 {
    60u32.saturating_sub(index * 5).max(20)
}

/// Bullets per spread fan, capped at 10
pub fn boss_bullet_count(index: u32) -> u32 {
    (1 + index).min(10)
}

/// Block strength for a level, capped at the block maximum
pub fn block_strength(level: u32) -> u8 {
    (level + 1).min(BLOCK_MAX_STRENGTH as u32) as u8
}

/// (Re)build the current level's entities. Clears everything spawned by the
/// previous level; the paddle and ball persist.
pub fn setup_level(world: &mut World) {
    world.blocks.clear();
    world.bullets.clear();
    world.power_ups.clear();
    world.boss_bullets.clear();
    world.boss = None;

    if is_boss_level(world.level) {
        let index = boss_index(world.level);
        let size = boss_size(index);
        world.boss = Some(Boss {
            pos: Vec2::new((WIDTH - size) / 2.0, BOSS_TOP_MARGIN),
            size,
            health: boss_health(index),
            max_health: boss_health(index),
            direction: 1.0,
            speed: boss_speed(index),
            pattern: AttackPattern::Aimed,
            shoot_timer: 0,
            shoot_delay: boss_shoot_delay(index),
            pattern_timer: 0,
            bullet_count: boss_bullet_count(index),
        });
        world.push_event(GameEvent::BossAppear);
        log::info!(
            "level {}: boss {} spawned (health {})",
            world.level,
            index,
            boss_health(index)
        );
    } else {
        let strength = block_strength(world.level);
        for row in 0..BLOCK_ROWS {
            for col in 0..BLOCK_COLS {
                world.blocks.push(Block {
                    pos: Vec2::new(
                        col as f32 * BLOCK_STRIDE_X + BLOCK_GRID_X,
                        row as f32 * BLOCK_STRIDE_Y + BLOCK_GRID_Y,
                    ),
                    strength,
                    max_strength: strength,
                    color_id: row as u8,
                });
            }
        }
        log::info!(
            "level {}: {} blocks of strength {}",
            world.level,
            world.blocks.len(),
            strength
        );
    }
}

/// Advance to the next level: ramp the ball speed, rebuild, announce.
/// The caller parks the session in `LevelComplete` until the continue signal.
pub fn advance_level(world: &mut World) {
    world.level += 1;
    world.speed_scale *= LEVEL_SPEED_RAMP;
    setup_level(world);
    world.reset_ball();
    world.push_event(GameEvent::LevelUp);
}
