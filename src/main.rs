use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::{info, trace, warn};
use orbit_raise_sim::choreography::launch_sequence::{LaunchSequence, LaunchStage};
use orbit_raise_sim::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LOG_VAR: &str = "ORBIT_RAISE_LOG";
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Headless run of the orbit-raise mission with a simple autopilot.
#[derive(Parser, Debug)]
#[command(name = "orbit_raise", version)]
struct Args {
    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 20_000)]
    frames: u64,

    /// TOML mission configuration; built-in catalog when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the autopilot's reaction jitter
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Largest reaction delay, in frames, after entering the burn window
    #[arg(long, default_value_t = 20)]
    jitter: u32,

    /// How many times to retry after a failed mission
    #[arg(long, default_value_t = 0)]
    retries: u32,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Play the launch stages' cue timelines before the orbit raise
    #[arg(long)]
    with_launch: bool,

    /// Only print the final summary
    #[arg(long)]
    summary_only: bool,
}

/// Toggles the engine near perigee and cuts it once the raise is under way.
struct Autopilot {
    rng: StdRng,
    jitter: u32,
    wait: Option<u32>,
}

impl Autopilot {
    fn new(seed: u64, jitter: u32) -> Self {
        Autopilot {
            rng: StdRng::seed_from_u64(seed),
            jitter,
            wait: None,
        }
    }

    fn decide(&mut self, state: &GameState, params: &PropulsionParams) -> Option<InputEvent> {
        if state.engine_on {
            return state.is_transitioning.then_some(InputEvent::EngineToggle);
        }
        if state.is_transitioning || !params.in_burn_window(state.progress_in_orbit) {
            self.wait = None;
            return None;
        }
        let jitter = self.jitter;
        let rng = &mut self.rng;
        let wait = self.wait.get_or_insert_with(|| rng.gen_range(0..=jitter));
        if *wait == 0 {
            self.wait = None;
            Some(InputEvent::EngineToggle)
        } else {
            *wait -= 1;
            None
        }
    }
}

#[derive(Default)]
struct LogRenderer {
    submitted: u64,
}

impl SceneRenderer for LogRenderer {
    fn submit(&mut self, frame: &SceneFrame<'_>) {
        self.submitted += 1;
        trace!(
            "frame {}: satellite ({:.3}, {:.3}), flame {}, trail {}",
            self.submitted,
            frame.satellite_position.x,
            frame.satellite_position.z,
            if frame.flame_visible { "on" } else { "off" },
            frame.trail.len()
        );
    }
}

// Launch stages are pure choreography: step each timeline on a simulated clock.
fn play_launch_stages() {
    for stage in LaunchStage::ALL {
        let mut sequence = LaunchSequence::new(stage);
        sequence.trigger(0);
        let mut now_ms = 0;
        while !sequence.is_complete() {
            for cue in sequence.advance(now_ms) {
                info!("{:?} +{}ms: {:?}", stage, now_ms, cue);
            }
            now_ms += FRAME_MS as u64;
        }
    }
}

fn init_logging() {
    if env::var(LOG_VAR).is_ok() {
        pretty_env_logger::init_custom_env(LOG_VAR);
    } else {
        pretty_env_logger::init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MissionConfig::load(path)?,
        None => MissionConfig::default(),
    };
    if let Some(width) = args.width {
        config.viewport_width = width;
    }
    if let Some(height) = args.height {
        config.viewport_height = height;
    }

    if args.with_launch {
        play_launch_stages();
    }

    let mut game = OrbitGame::new(&config)?;
    let mut pilot = Autopilot::new(args.seed, args.jitter);
    let mut renderer = LogRenderer::default();
    let mut telemetry = Telemetry::new();
    let mut retries_left = args.retries;

    for frame in 0..args.frames {
        if let Some(event) = pilot.decide(game.state(), game.params()) {
            game.handle_event(event);
        }

        let clock_ms = (frame as f64 * FRAME_MS) as u64;
        let output = game.frame(clock_ms);
        game.render(&mut renderer);
        telemetry.collect_data(&output);

        if !args.summary_only && output.frame % 600 == 0 {
            info!(
                "fuel {} ({}), orbit {:.2}, apogee label at ({:.0}, {:.0})",
                output.hud.fuel_readout,
                output.hud.fuel_color,
                output.state.orbit_index,
                output.hud.labels.apogee.left,
                output.hud.labels.apogee.top
            );
        }

        if output.next_stage_requested {
            break;
        }
        if output.hud.controls.boost_shown {
            game.handle_event(InputEvent::Boost);
        } else if output.hud.controls.failure_shown
            && output.phase != PropulsionPhase::Transitioning
        {
            if retries_left == 0 {
                warn!("Mission failed with no retries left");
                break;
            }
            retries_left -= 1;
            game.handle_event(InputEvent::Retry);
        }
    }

    println!("{}", telemetry.summary());
    println!("Frames rendered: {}", renderer.submitted);

    Ok(())
}
