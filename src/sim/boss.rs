//! Boss AI
//!
//! A boss sweeps horizontally between wall margins while a pattern timer
//! cycles through its three attack patterns. The shoot timer is independent
//! of the pattern timer: patterns change what a shot looks like, not when it
//! happens.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::deg_to_rad;
use crate::sim::collision::Aabb;
use crate::sim::state::{BossBullet, World};

/// Attack patterns, cycled by the pattern timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPattern {
    /// One bullet aimed at the paddle's current position
    Aimed,
    /// A fan of bullets spanning -45 to +45 degrees
    Spread,
    /// Three bullets with random horizontal jitter
    RapidFire,
}

impl AttackPattern {
    pub fn next(self) -> Self {
        match self {
            AttackPattern::Aimed => AttackPattern::Spread,
            AttackPattern::Spread => AttackPattern::RapidFire,
            AttackPattern::RapidFire => AttackPattern::Aimed,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            AttackPattern::Aimed => 0,
            AttackPattern::Spread => 1,
            AttackPattern::RapidFire => 2,
        }
    }
}

/// A boss encounter. One per boss level, owned by the World.
#[derive(Debug, Clone)]
pub struct Boss {
    /// Top-left corner; bosses are square
    pub pos: Vec2,
    pub size: f32,
    pub health: f32,
    pub max_health: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    pub speed: f32,
    pub pattern: AttackPattern,
    pub shoot_timer: u32,
    pub shoot_delay: u32,
    pub pattern_timer: u32,
    /// Bullets per spread fan
    pub bullet_count: u32,
}

impl Boss {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Sweep horizontally, flipping direction at the wall margins. The clamp
    /// is a hard stop in case a flip and a large speed ever disagree.
    fn advance_movement(&mut self) {
        self.pos.x += self.direction * self.speed;
        if self.direction > 0.0 && self.pos.x + self.size >= WIDTH - BOSS_WALL_MARGIN {
            self.direction = -1.0;
        } else if self.direction < 0.0 && self.pos.x <= BOSS_WALL_MARGIN {
            self.direction = 1.0;
        }
        self.pos.x = self.pos.x.clamp(0.0, WIDTH - self.size);
    }
}

/// Advance the boss one tick: movement, pattern cycling, firing.
pub fn update(world: &mut World) {
    let paddle_target = Vec2::new(
        world.paddle.center_x(),
        world.paddle.pos.y + PADDLE_HEIGHT / 2.0,
    );

    let Some(boss) = world.boss.as_mut() else {
        return;
    };

    boss.advance_movement();

    boss.pattern_timer += 1;
    if boss.pattern_timer >= BOSS_PATTERN_DELAY_TICKS {
        boss.pattern = boss.pattern.next();
        boss.pattern_timer = 0;
        log::debug!("boss switched to pattern {:?}", boss.pattern);
    }

    boss.shoot_timer += 1;
    if boss.shoot_timer >= boss.shoot_delay {
        boss.shoot_timer = 0;
        let origin = Vec2::new(boss.center().x, boss.pos.y + boss.size);
        match boss.pattern {
            AttackPattern::Aimed => {
                world.boss_bullets.push(aimed_bullet(origin, paddle_target));
            }
            AttackPattern::Spread => {
                let count = boss.bullet_count;
                world
                    .boss_bullets
                    .extend((0..count).map(|i| spread_bullet(origin, i, count)));
            }
            AttackPattern::RapidFire => {
                let jitter = boss.size / 3.0;
                for _ in 0..3 {
                    let offset = world.rng.random_range(-jitter..=jitter);
                    world.boss_bullets.push(BossBullet {
                        pos: Vec2::new(origin.x + offset - BOSS_BULLET_WIDTH / 2.0, origin.y),
                        vel: Vec2::new(0.0, BOSS_BULLET_SPEED),
                    });
                }
            }
        }
    }
}

/// One bullet whose velocity points from the boss toward the paddle,
/// normalized to the fixed bullet speed.
fn aimed_bullet(origin: Vec2, target: Vec2) -> BossBullet {
    let dir = (target - origin).normalize_or_zero();
    let vel = if dir == Vec2::ZERO {
        Vec2::new(0.0, BOSS_BULLET_SPEED)
    } else {
        dir * BOSS_BULLET_SPEED
    };
    BossBullet {
        pos: origin - Vec2::new(BOSS_BULLET_WIDTH / 2.0, 0.0),
        vel,
    }
}

/// Bullet `i` of an evenly spaced fan from -45 to +45 degrees off straight
/// down. A single bullet fires straight down.
fn spread_bullet(origin: Vec2, i: u32, count: u32) -> BossBullet {
    let angle_deg = if count <= 1 {
        0.0
    } else {
        -45.0 + 90.0 * i as f32 / (count - 1) as f32
    };
    let angle = deg_to_rad(angle_deg);
    BossBullet {
        pos: origin - Vec2::new(BOSS_BULLET_WIDTH / 2.0, 0.0),
        vel: Vec2::new(
            BOSS_BULLET_SPEED * angle.sin(),
            BOSS_BULLET_SPEED * angle.cos(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level;

    fn boss_world() -> World {
        let mut world = World::new(11);
        world.level = 3;
        level::setup_level(&mut world);
        world
    }

    #[test]
    fn test_direction_flips_at_right_margin() {
        let mut world = boss_world();
        {
            let boss = world.boss.as_mut().unwrap();
            boss.pos.x = WIDTH - BOSS_WALL_MARGIN - boss.size - 0.5;
            boss.direction = 1.0;
        }
        update(&mut world);
        let boss = world.boss.as_ref().unwrap();
        assert_eq!(boss.direction, -1.0);
        assert!(boss.pos.x + boss.size <= WIDTH);
    }

    #[test]
    fn test_direction_flips_at_left_margin() {
        let mut world = boss_world();
        {
            let boss = world.boss.as_mut().unwrap();
            boss.pos.x = BOSS_WALL_MARGIN + 0.5;
            boss.direction = -1.0;
        }
        update(&mut world);
        assert_eq!(world.boss.as_ref().unwrap().direction, 1.0);
    }

    #[test]
    fn test_position_never_leaves_the_field() {
        let mut world = boss_world();
        for _ in 0..5000 {
            update(&mut world);
            let boss = world.boss.as_ref().unwrap();
            assert!(boss.pos.x >= 0.0);
            assert!(boss.pos.x + boss.size <= WIDTH);
        }
    }

    #[test]
    fn test_pattern_cycles_every_pattern_delay() {
        let mut world = boss_world();
        assert_eq!(world.boss.as_ref().unwrap().pattern, AttackPattern::Aimed);
        for _ in 0..BOSS_PATTERN_DELAY_TICKS {
            update(&mut world);
        }
        assert_eq!(world.boss.as_ref().unwrap().pattern, AttackPattern::Spread);
        for _ in 0..BOSS_PATTERN_DELAY_TICKS {
            update(&mut world);
        }
        assert_eq!(
            world.boss.as_ref().unwrap().pattern,
            AttackPattern::RapidFire
        );
        for _ in 0..BOSS_PATTERN_DELAY_TICKS {
            update(&mut world);
        }
        assert_eq!(world.boss.as_ref().unwrap().pattern, AttackPattern::Aimed);
    }

    #[test]
    fn test_shoot_timer_fires_at_delay_and_resets() {
        let mut world = boss_world();
        let delay = world.boss.as_ref().unwrap().shoot_delay;
        for _ in 0..delay - 1 {
            update(&mut world);
        }
        assert!(world.boss_bullets.is_empty());
        update(&mut world);
        assert!(!world.boss_bullets.is_empty());
        assert_eq!(world.boss.as_ref().unwrap().shoot_timer, 0);
    }

    #[test]
    fn test_aimed_bullet_is_normalized_toward_target() {
        let origin = Vec2::new(400.0, 150.0);
        let target = Vec2::new(200.0, 570.0);
        let bullet = aimed_bullet(origin, target);
        assert!((bullet.vel.length() - BOSS_BULLET_SPEED).abs() < 1e-4);
        // Pointing down and to the left, toward the target
        assert!(bullet.vel.x < 0.0);
        assert!(bullet.vel.y > 0.0);
    }

    #[test]
    fn test_spread_fan_endpoints_and_center() {
        let origin = Vec2::new(400.0, 150.0);
        let first = spread_bullet(origin, 0, 5);
        let mid = spread_bullet(origin, 2, 5);
        let last = spread_bullet(origin, 4, 5);
        assert!(first.vel.x < 0.0);
        assert!(mid.vel.x.abs() < 1e-4);
        assert!((mid.vel.y - BOSS_BULLET_SPEED).abs() < 1e-4);
        assert!(last.vel.x > 0.0);
        // -45 and +45 degrees mirror each other
        assert!((first.vel.x + last.vel.x).abs() < 1e-4);
    }

    #[test]
    fn test_single_spread_bullet_fires_straight_down() {
        let bullet = spread_bullet(Vec2::new(400.0, 150.0), 0, 1);
        assert!(bullet.vel.x.abs() < 1e-6);
        assert!(bullet.vel.y > 0.0);
    }

    #[test]
    fn test_rapid_fire_jitter_stays_within_a_third_of_width() {
        let mut world = boss_world();
        let (size, delay, center_x) = {
            let boss = world.boss.as_mut().unwrap();
            boss.pattern = AttackPattern::RapidFire;
            boss.speed = 0.0; // keep the center fixed for the assertion
            (boss.size, boss.shoot_delay, boss.center().x)
        };
        for _ in 0..delay {
            update(&mut world);
        }
        assert_eq!(world.boss_bullets.len(), 3);
        for bullet in &world.boss_bullets {
            let bullet_center = bullet.pos.x + BOSS_BULLET_WIDTH / 2.0;
            assert!((bullet_center - center_x).abs() <= size / 3.0 + 1e-3);
            assert_eq!(bullet.vel.x, 0.0);
        }
    }
}
