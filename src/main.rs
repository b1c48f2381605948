//! Dino Runner headless entry point
//!
//! Drives the simulation at a fixed frame length without a renderer, routing
//! events to a logging host. Useful for balance checks and soak runs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dino_runner::audio::LogAudio;
use dino_runner::autopilot::Autopilot;
use dino_runner::consts::FRAME_MS;
use dino_runner::platform::{LoggingHost, dispatch};
use dino_runner::sim::{Control, GameState, TickInput, tick};
use dino_runner::tuning::Tuning;

#[derive(Parser, Debug)]
#[command(name = "dino-runner")]
#[command(about = "Run the runner simulation headless and report the score")]
struct Args {
    /// Run seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Stop after this many frames
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u32,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = FRAME_MS)]
    dt: f32,

    /// JSON file overriding tuning values
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Let the demo player play instead of a single jump
    #[arg(long)]
    autopilot: bool,

    /// Mute sound cues
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    log::info!("Dino Runner (headless) starting with seed {}", args.seed);
    let mut state = GameState::with_tuning(args.seed, tuning);
    let mut audio = LogAudio::new();
    audio.set_muted(args.mute);
    let mut host = LoggingHost::new(audio);
    let mut input = TickInput::default();
    let mut pilot = Autopilot::new();

    dispatch(&mut state, &mut host);

    if !args.autopilot {
        // A single tap starts the run; nobody dodges after that
        state.handle_control(&mut input, Control::Jump, true);
        state.handle_control(&mut input, Control::Jump, false);
    }

    let mut frame = 0;
    while frame < args.frames && !host.game_over {
        if args.autopilot {
            pilot.drive(&mut state, &mut input);
        }
        tick(&mut state, &input, args.dt);
        dispatch(&mut state, &mut host);
        frame += 1;
    }

    println!(
        "seed {} | frames {} | score {} | speed {:.2} | {}",
        args.seed,
        frame,
        state.score_floored,
        state.speed,
        if state.is_game_over { "crashed" } else { "alive" }
    );
    log::info!("Sound cues played: {}", host.audio.played());

    Ok(())
}
