//! Power-up effects
//!
//! Collected capsules mutate paddle/weapon state. MultiShot additionally
//! grows and recolors the paddle as the stream count climbs; the visual
//! refresh reports whether anything actually changed so the renderer is not
//! asked to rebuild an identical sprite.

use crate::assets::{PADDLE_BASE_COLOR, Rgb};
use crate::consts::*;
use crate::sim::state::{Paddle, PowerUpKind, World};

/// Paddle width for a given stream count: base width up to 5 streams, then
/// linear growth toward the maximum as the count approaches 25.
pub fn paddle_width_for(bullet_width: u32) -> f32 {
    if bullet_width <= 5 {
        return PADDLE_BASE_WIDTH;
    }
    let t = (bullet_width.min(25) - 5) as f32 / 20.0;
    (PADDLE_BASE_WIDTH + t * (PADDLE_MAX_WIDTH - PADDLE_BASE_WIDTH)).min(PADDLE_MAX_WIDTH)
}

/// Paddle tint for a given stream count. Three gradients, each a per-channel
/// lerp over a span of 5 pickups: blue to green past 5, green to yellow past
/// 10, then yellow holds until 20 and shifts to red by 25.
pub fn paddle_color_for(bullet_width: u32) -> Rgb {
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const YELLOW: Rgb = Rgb::new(255, 255, 0);
    const RED: Rgb = Rgb::new(255, 0, 0);

    let bw = bullet_width as f32;
    if bullet_width <= 5 {
        PADDLE_BASE_COLOR
    } else if bullet_width <= 10 {
        PADDLE_BASE_COLOR.lerp(GREEN, (bw - 5.0) / 5.0)
    } else if bullet_width <= 15 {
        GREEN.lerp(YELLOW, (bw - 10.0) / 5.0)
    } else if bullet_width <= 20 {
        YELLOW
    } else {
        YELLOW.lerp(RED, ((bw - 20.0) / 5.0).min(1.0))
    }
}

/// Recompute paddle width and tint from the current stream count, keeping
/// the paddle centered on its old midpoint. Returns true if either changed.
pub fn refresh_paddle_visual(paddle: &mut Paddle) -> bool {
    let width = paddle_width_for(paddle.bullet_width);
    let color = paddle_color_for(paddle.bullet_width);
    if width == paddle.width && color == paddle.color {
        return false;
    }

    let center = paddle.center_x();
    paddle.width = width;
    paddle.color = color;
    paddle.pos.x = center - width / 2.0;
    paddle.keep_in_field();
    true
}

/// Apply a collected power-up effect
pub fn apply(world: &mut World, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Damage => {
            world.paddle.bullet_power += 1;
        }
        PowerUpKind::MultiShot => {
            world.paddle.bullet_width += 1;
            if refresh_paddle_visual(&mut world.paddle) {
                log::debug!(
                    "paddle visual refreshed: width {} color {:?}",
                    world.paddle.width,
                    world.paddle.color
                );
            }
        }
        PowerUpKind::Life => {
            world.lives += 1;
        }
    }
}
