//! Bullet Hell headless runner
//!
//! Builds the reference level and drives it with a deterministic pilot.
//! Window, textures and keyboard polling live outside this binary.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use bullet_hell::Settings;
use bullet_hell::cli::Args;
use bullet_hell::settings::PilotMode;
use bullet_hell::sim::{Pilot, RenderSnapshot, Scenario, SimEvent, tick};

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.apply(Settings::load(args.settings.as_deref()));

    let dt = match settings.tick_duration() {
        Ok(dt) => dt,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mut state = match Scenario::reference().build() {
        Ok(state) => state,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut pilot = match settings.pilot {
        PilotMode::Idle => Pilot::scripted(Vec::new()),
        PilotMode::Random => Pilot::random(settings.seed, state.characters.len()),
    };

    log::info!(
        "Running {} ticks of {} ms ({} pilot, seed {})",
        settings.ticks,
        settings.tick_ms,
        settings.pilot.as_str(),
        settings.seed
    );

    let mut hits = 0u64;
    let mut respawns = 0u64;
    let mut shots = 0u64;
    let mut deadline = Instant::now();
    for _ in 0..settings.ticks {
        let input = pilot.next_input();
        tick(&mut state, &input, dt);

        for event in &state.events {
            match event {
                SimEvent::CharacterHit { .. } => hits += 1,
                SimEvent::CharacterRespawned { .. } => respawns += 1,
                SimEvent::ProjectileSpawned { .. } => shots += 1,
                _ => {}
            }
        }

        if settings.realtime {
            deadline += dt.as_duration();
            if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
                std::thread::sleep(wait);
            }
        }
    }

    log::info!(
        "Finished at tick {}: {} projectiles spawned, {} hits, {} respawns, {} live",
        state.time_ticks,
        shots,
        hits,
        respawns,
        state.projectiles.len()
    );
    for (i, c) in state.characters.iter().enumerate() {
        log::info!(
            "Character {}: pos=({:.2}, {:.2}) health={} aim={}",
            i,
            c.body.pos.x,
            c.body.pos.y,
            c.health,
            c.aim
        );
    }

    if settings.print_snapshot {
        match RenderSnapshot::capture(&state).to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("failed to serialize snapshot: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
