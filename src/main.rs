use anyhow::{Context, Result};
use chakram_quest::engine::game_loop::{GameLoop, FIXED_TIMESTEP};
use chakram_quest::engine::input::{Action, InputState};
use chakram_quest::game::{GameEvent, Level, SimulationConfig, World};
use log::info;
use std::time::Duration;

/// Frames the headless demo runs for (a little over ten seconds)
const DEMO_FRAMES: u32 = 600;

/// Simulated render frame times in milliseconds, cycled through. Some frames
/// buy no tick, some buy two.
const FRAME_TIMES_MS: [u64; 5] = [12, 16, 20, 33, 8];

/// Scripted intents for a frame of the demo
fn scripted_input(frame: u32, input: &mut InputState) {
    input.set(Action::MoveRight, (10..40).contains(&frame));
    input.set(Action::MoveUp, (120..150).contains(&frame));
    input.set(Action::MoveLeft, (300..330).contains(&frame));
    input.set(Action::Jump, (60..90).contains(&frame) || (360..362).contains(&frame));
    input.set(
        Action::Attack,
        frame == 75 || frame == 200 || frame == 380,
    );
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Chakram Quest (headless)...");

    let level = Level::demo().context("Failed to build the demo level")?;
    let seed = std::env::var("CHAKRAM_SEED")
        .ok()
        .map(|value| value.parse::<u64>())
        .transpose()
        .context("CHAKRAM_SEED must be an unsigned integer")?;
    let config = SimulationConfig {
        seed,
        ..SimulationConfig::default()
    };
    let mut world = World::new(level, config).context("Invalid simulation config")?;

    let mut game_loop = GameLoop::new();
    let mut input = InputState::new();

    for frame in 0..DEMO_FRAMES {
        scripted_input(frame, &mut input);

        let frame_time = Duration::from_millis(FRAME_TIMES_MS[frame as usize % FRAME_TIMES_MS.len()]);
        for _ in 0..game_loop.advance(frame_time) {
            world.tick(&input, FIXED_TIMESTEP);
            input.update();

            for event in world.events() {
                match event {
                    GameEvent::PlayerDamaged { health } => info!("Mike hit, health {}", health),
                    GameEvent::EnemyKilled { enemy } => info!("Enemy {} defeated", enemy),
                    other => info!("{:?}", other),
                }
            }
        }

        if frame % 60 == 0 {
            let snapshot = world.snapshot();
            info!(
                "t={} state={:?} pos=({:.2}, {:.2}) health={} enemies={} chakrams={}",
                snapshot.tick,
                snapshot.player.state,
                snapshot.player.position.x,
                snapshot.player.position.y,
                snapshot.player.health,
                snapshot.enemies.len(),
                snapshot.chakrams.len()
            );
        }
    }

    info!(
        "Demo finished after {} ticks ({} frames, {} loop updates)",
        world.tick_count(),
        game_loop.frame_count(),
        game_loop.update_count()
    );

    Ok(())
}
