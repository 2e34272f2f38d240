//! Fixed timestep simulation tick
//!
//! One tick runs the whole pipeline to completion: input, entity motion,
//! collision resolution in its fixed order, then progression. The paused
//! phases (`LevelComplete`, `GameOver`) only poll their exit signal and
//! perform no entity updates.

use crate::consts::*;
use crate::sim::state::{GameEvent, GamePhase, World};
use crate::sim::{boss, collision, level, weapon};

/// Input commands for a single tick. Device mapping is external; quit is
/// handled by the driver loop, not the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire_held: bool,
    /// Continue signal (also dismisses the level-complete pause)
    pub launch_pressed: bool,
    /// Restart signal, honored only in the game-over pause
    pub restart_pressed: bool,
}

/// Advance the world by one tick.
pub fn tick(world: &mut World, input: &TickInput) {
    world.events.clear();

    match world.phase {
        GamePhase::GameOver => {
            if input.restart_pressed {
                world.restart();
            }
            return;
        }
        GamePhase::LevelComplete => {
            if input.launch_pressed {
                world.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Playing => {}
    }

    world.time_ticks += 1;

    // Input
    if input.move_left {
        world.paddle.slide(-1.0);
    }
    if input.move_right {
        world.paddle.slide(1.0);
    }
    if world.paddle.shoot_cooldown > 0 {
        world.paddle.shoot_cooldown -= 1;
    }
    if input.fire_held {
        weapon::try_fire(world);
    }

    // Entity motion
    update_ball(world);
    for bullet in &mut world.bullets {
        bullet.pos += bullet.vel;
    }
    world.bullets.retain(|b| !b.off_screen());
    for power_up in &mut world.power_ups {
        power_up.pos.y += POWERUP_FALL_SPEED;
    }
    world.power_ups.retain(|p| !p.off_screen());
    boss::update(world);
    for bullet in &mut world.boss_bullets {
        bullet.pos += bullet.vel;
    }
    world.boss_bullets.retain(|b| !b.off_screen());

    // Collision resolution, fixed order
    collision::resolve_ball_paddle(world);
    collision::resolve_ball_blocks(world);
    collision::resolve_bullet_blocks(world);
    collision::resolve_bullet_boss(world);
    collision::resolve_paddle_power_ups(world);
    collision::resolve_paddle_boss_bullets(world);

    // Progression
    if !world.ball.active {
        world.lives = world.lives.saturating_sub(1);
        if world.lives > 0 {
            world.reset_ball();
        }
    }
    if world.lives == 0 {
        world.phase = GamePhase::GameOver;
        world.push_event(GameEvent::GameOver);
        log::info!(
            "game over at level {} with score {}",
            world.level,
            world.score
        );
        return;
    }

    let cleared = if world.is_boss_level() {
        world.boss.is_none()
    } else {
        world.blocks.is_empty()
    };
    if cleared {
        level::advance_level(world);
        world.phase = GamePhase::LevelComplete;
    }
}

/// Move the ball and handle the field borders. Wall and ceiling contacts set
/// the velocity sign explicitly so a contact flips a component exactly once;
/// leaving the bottom edge deactivates the ball (a lost life).
fn update_ball(world: &mut World) {
    let ball = &mut world.ball;
    if !ball.active {
        return;
    }
    ball.pos += ball.vel;

    if ball.pos.x <= 0.0 {
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x + BALL_SIZE >= WIDTH {
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.pos.y <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
    }
    if ball.pos.y + BALL_SIZE >= HEIGHT {
        ball.active = false;
    }
}
