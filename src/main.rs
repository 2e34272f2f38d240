//! Headless demo driver
//!
//! Runs the simulation without a renderer: a scripted pilot follows the ball
//! and holds fire, ticking at simulation rate until the run ends or the tick
//! budget is spent. Useful for exercising the core and eyeballing the event
//! stream; the real game embeds the library behind a window and input loop.

use brick_blaster::consts::*;
use brick_blaster::sim::{GameEvent, GamePhase, Snapshot, TickInput, World, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("starting headless run with seed {seed}");

    let mut world = World::new(seed);
    let max_ticks = 60 * 60 * 5; // five simulated minutes

    for _ in 0..max_ticks {
        let input = pilot_input(&world);
        tick(&mut world, &input);

        for event in &world.events {
            log::debug!("sound trigger: {}", event.sound_key());
        }
        if world.events.contains(&GameEvent::GameOver) {
            break;
        }
    }

    let snapshot = Snapshot::capture(&world);
    log::info!(
        "run finished: level {} score {} lives {} ({} entities on screen)",
        snapshot.hud.level,
        snapshot.hud.score,
        snapshot.hud.lives,
        snapshot.entities.len()
    );
    match serde_json::to_string_pretty(&snapshot.hud) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize HUD: {e}"),
    }
}

/// Scripted input: chase the ball, hold fire, continue through pauses.
fn pilot_input(world: &World) -> TickInput {
    let mut input = TickInput {
        fire_held: true,
        launch_pressed: world.phase == GamePhase::LevelComplete,
        ..TickInput::default()
    };
    let target = if world.ball.active {
        world.ball.center_x()
    } else {
        WIDTH / 2.0
    };
    let diff = target - world.paddle.center_x();
    if diff < -PADDLE_SPEED / 2.0 {
        input.move_left = true;
    } else if diff > PADDLE_SPEED / 2.0 {
        input.move_right = true;
    }
    input
}
