//! Player volley fire
//!
//! A volley is rate-limited by the paddle's shoot cooldown. Multi-bullet
//! volleys fan out evenly across a span that widens with the stream count up
//! to a capped maximum; the cooldown after firing is a short fixed value so
//! sustained fire is not penalized by larger volleys.

use glam::Vec2;

use crate::consts::*;
use crate::deg_to_rad;
use crate::sim::state::{Bullet, GameEvent, World};

/// Total fan span in degrees for a given stream count
pub fn spread_deg(bullet_width: u32) -> f32 {
    (bullet_width as f32 * SPREAD_PER_STREAM_DEG).min(MAX_SPREAD_DEG)
}

/// Fan angle (degrees from straight up) for bullet `i` of `count`.
/// A single bullet goes straight up; two bullets sit at the span endpoints;
/// larger volleys distribute evenly between them.
pub fn fan_angle_deg(i: u32, count: u32, span: f32) -> f32 {
    if count <= 1 {
        0.0
    } else {
        -span / 2.0 + span * i as f32 / (count - 1) as f32
    }
}

/// Fire a volley from the paddle top if the cooldown allows it.
pub fn try_fire(world: &mut World) {
    if world.paddle.shoot_cooldown > 0 {
        return;
    }

    let count = world.paddle.bullet_width.max(1);
    let span = spread_deg(count);
    let origin = Vec2::new(
        world.paddle.center_x() - BULLET_WIDTH / 2.0,
        world.paddle.pos.y - BULLET_HEIGHT,
    );

    for i in 0..count {
        let angle = deg_to_rad(fan_angle_deg(i, count, span));
        world.bullets.push(Bullet {
            pos: origin,
            vel: Vec2::new(BULLET_SPEED * angle.sin(), -BULLET_SPEED * angle.cos()),
        });
    }

    world.paddle.shoot_cooldown = SHOOT_COOLDOWN_TICKS;
    world.push_event(GameEvent::Shoot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_rejects_volley() {
        let mut world = World::new(1);
        world.paddle.shoot_cooldown = 3;
        try_fire(&mut world);
        assert!(world.bullets.is_empty());
        assert!(!world.events.contains(&GameEvent::Shoot));
    }

    #[test]
    fn test_single_bullet_goes_straight_up() {
        let mut world = World::new(1);
        try_fire(&mut world);
        assert_eq!(world.bullets.len(), 1);
        assert!(world.bullets[0].vel.x.abs() < 1e-6);
        assert!((world.bullets[0].vel.y + BULLET_SPEED).abs() < 1e-6);
        assert_eq!(world.paddle.shoot_cooldown, SHOOT_COOLDOWN_TICKS);
    }

    #[test]
    fn test_two_bullets_sit_at_span_endpoints() {
        let span = spread_deg(2);
        assert_eq!(fan_angle_deg(0, 2, span), -span / 2.0);
        assert_eq!(fan_angle_deg(1, 2, span), span / 2.0);
    }

    #[test]
    fn test_fan_is_even_and_symmetric() {
        let span = spread_deg(5);
        let angles: Vec<f32> = (0..5).map(|i| fan_angle_deg(i, 5, span)).collect();
        assert_eq!(angles[2], 0.0);
        for pair in angles.windows(2) {
            assert!((pair[1] - pair[0] - span / 4.0).abs() < 1e-4);
        }
        assert!((angles[0] + angles[4]).abs() < 1e-4);
    }

    #[test]
    fn test_spread_is_capped() {
        assert_eq!(spread_deg(1), SPREAD_PER_STREAM_DEG);
        assert_eq!(spread_deg(25), MAX_SPREAD_DEG);
    }

    #[test]
    fn test_volley_size_matches_bullet_width() {
        let mut world = World::new(1);
        world.paddle.bullet_width = 7;
        try_fire(&mut world);
        assert_eq!(world.bullets.len(), 7);
        // Cooldown is the same fixed value regardless of volley size
        assert_eq!(world.paddle.shoot_cooldown, SHOOT_COOLDOWN_TICKS);
    }
}
