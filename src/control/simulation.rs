use log::{debug, info, warn};

use crate::config::MissionConfig;
use crate::constants::{
    APOGEE_ARC, BOOST_SCALE, CENTRAL_BODY_SPIN, ORBIT_PATH_SEGMENTS, PERIGEE_ARC, TRAIL_COLOR,
};
use crate::control::game_state::GameState;
use crate::control::input::InputEvent;
use crate::control::mission::{MissionControls, MissionOutcome};
use crate::control::propulsion::{self, BurnClass, PropulsionParams, PropulsionPhase};
use crate::errors::SimulationError;
use crate::scene::camera::{PerspectiveCamera, Projector};
use crate::scene::renderer::{SceneFrame, SceneRenderer};
use crate::telemetry_system::hud::{HudFrame, HudProjector, Viewport};
use crate::telemetry_system::trail::TrailBuffer;
use crate::trajectory_system::orbit_catalog::OrbitCatalog;
use crate::trajectory_system::transition::{FlameAttitude, TransitionInterpolator};
use crate::utils::vector3d::Vector3D;

/// Result of one frame, for the HUD sink and for telemetry.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub frame: u64,
    pub state: GameState,
    pub burn: BurnClass,
    pub phase: PropulsionPhase,
    pub outcome: MissionOutcome,
    pub hud: HudFrame,
    pub next_stage_requested: bool,
}

/// The orbit-raise mini-game: owns the state and runs the frame loop.
pub struct OrbitGame<P: Projector = PerspectiveCamera> {
    params: PropulsionParams,
    catalog: OrbitCatalog,
    orbit_paths: Vec<Vec<Vector3D>>,
    trail: TrailBuffer,
    controls: MissionControls,
    state: GameState,
    projector: P,
    viewport: Viewport,
    frame: u64,
    phase: PropulsionPhase,
    satellite_position: Vector3D,
    satellite_scale: f64,
    flame: FlameAttitude,
    perigee_arc: Vec<Vector3D>,
    apogee_arc: Vec<Vector3D>,
    central_body_rotation: f64,
    next_stage_requested: bool,
}

impl OrbitGame<PerspectiveCamera> {
    pub fn new(config: &MissionConfig) -> Result<Self, SimulationError> {
        let aspect = config.viewport_width / config.viewport_height;
        Self::with_projector(config, PerspectiveCamera::top_down(aspect))
    }
}

impl<P: Projector> OrbitGame<P> {
    pub fn with_projector(config: &MissionConfig, projector: P) -> Result<Self, SimulationError> {
        config.validate()?;
        let catalog = config.catalog();
        let params = config.propulsion_params();
        let state = GameState::with_fuel(params.initial_fuel);
        let satellite_position = TransitionInterpolator::world_position(&catalog, &state);
        let flame = TransitionInterpolator::flame_attitude(&catalog, &state);
        info!(
            "Mission ready: {} orbits, {:.0}% fuel, trail of {}",
            catalog.len(),
            params.initial_fuel,
            config.trail_capacity
        );

        Ok(OrbitGame {
            orbit_paths: catalog.sample_paths(ORBIT_PATH_SEGMENTS),
            perigee_arc: catalog.arc(0, PERIGEE_ARC.0, PERIGEE_ARC.1),
            apogee_arc: catalog.arc(0, APOGEE_ARC.0, APOGEE_ARC.1),
            trail: TrailBuffer::new(config.trail_capacity),
            controls: MissionControls::default(),
            viewport: Viewport::new(config.viewport_width, config.viewport_height),
            frame: 0,
            phase: PropulsionPhase::Idle,
            satellite_position,
            satellite_scale: 1.0,
            flame,
            central_body_rotation: 0.0,
            next_stage_requested: false,
            params,
            catalog,
            state,
            projector,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replaces the simulation state wholesale, e.g. to stage a scenario.
    /// An orbit index outside the catalog is clamped onto it.
    pub fn set_state(&mut self, mut state: GameState) {
        let last = self.catalog.last_index() as f64;
        if !(0.0..=last).contains(&state.orbit_index) {
            warn!(
                "Orbit index {} outside catalog, clamped to [0, {}]",
                state.orbit_index, last
            );
            state.orbit_index = if state.orbit_index > last { last } else { 0.0 };
        }
        self.state = state;
        self.place_satellite();
    }

    pub fn catalog(&self) -> &OrbitCatalog {
        &self.catalog
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn controls(&self) -> &MissionControls {
        &self.controls
    }

    pub fn params(&self) -> &PropulsionParams {
        &self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn satellite_scale(&self) -> f64 {
        self.satellite_scale
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::EngineToggle => {
                if self.controls.engine_accepts_input() {
                    self.state = propulsion::toggle_engine(self.state);
                    info!(
                        "Engine {} at phase {:.3}",
                        if self.state.engine_on { "on" } else { "off" },
                        self.state.progress_in_orbit
                    );
                } else {
                    debug!("Engine toggle ignored, control unavailable");
                }
            }
            InputEvent::Retry => self.reset(),
            InputEvent::Boost => {
                if self.controls.boost_shown {
                    self.satellite_scale *= BOOST_SCALE;
                    self.next_stage_requested = true;
                    info!("Boost engaged, handing off to the next mission stage");
                } else {
                    debug!("Boost ignored, target orbit not reached");
                }
            }
            InputEvent::WindowResize { width, height } => {
                let usable = |side: f64| side.is_finite() && side > 0.0;
                if !usable(width) || !usable(height) {
                    warn!("Ignoring resize to {width}x{height}, keeping {:?}", self.viewport);
                    return;
                }
                self.viewport = Viewport::new(width, height);
                self.projector.set_aspect(self.viewport.aspect());
                debug!("Viewport resized to {width}x{height}");
            }
        }
    }

    /// Restores the opening state; the trail keeps its storage.
    pub fn reset(&mut self) {
        self.state = GameState::with_fuel(self.params.initial_fuel);
        self.trail.reset();
        self.controls.reset();
        self.phase = PropulsionPhase::Idle;
        self.satellite_scale = 1.0;
        self.next_stage_requested = false;
        self.place_satellite();
        info!("Mission reset");
    }

    /// Runs one frame. `clock_ms` is a monotonic wall clock used only for HUD flashing.
    pub fn frame(&mut self, clock_ms: u64) -> FrameOutput {
        let orbit_count = self.catalog.len();
        let previous = self.state;

        let (state, burn) = propulsion::update(self.state, &self.params, orbit_count);
        self.state = state;
        self.update_phase(&previous, burn);
        self.place_satellite();

        self.trail.record(self.satellite_position, TRAIL_COLOR);
        self.trail.age_fade();

        let outcome = MissionOutcome::evaluate(&state, orbit_count);
        self.controls.apply(outcome);

        let base = state.base_orbit();
        let labels = HudProjector::labels(&self.catalog, base, &self.projector, self.viewport);
        self.central_body_rotation += CENTRAL_BODY_SPIN;
        self.frame += 1;

        FrameOutput {
            frame: self.frame,
            state,
            burn,
            phase: self.phase,
            outcome,
            hud: HudFrame::new(state.fuel, state.engine_on, burn, clock_ms, labels, self.controls),
            next_stage_requested: self.next_stage_requested,
        }
    }

    /// Hands the most recent frame to a renderer.
    pub fn render<R: SceneRenderer>(&self, renderer: &mut R) {
        renderer.submit(&SceneFrame {
            satellite_position: self.satellite_position,
            satellite_scale: self.satellite_scale,
            flame: self.flame,
            flame_visible: self.state.engine_on && self.phase != PropulsionPhase::Exhausted,
            trail: self.trail.live_points(),
            orbit_paths: &self.orbit_paths,
            perigee_arc: &self.perigee_arc,
            apogee_arc: &self.apogee_arc,
            central_body_rotation: self.central_body_rotation,
        });
    }

    /// Derives the satellite pose and apsis arcs from the current state.
    fn place_satellite(&mut self) {
        let base = self.state.base_orbit();
        let state = &self.state;
        self.satellite_position = TransitionInterpolator::world_position(&self.catalog, state);
        self.flame = TransitionInterpolator::flame_attitude(&self.catalog, state);
        self.perigee_arc = self.catalog.arc(base, PERIGEE_ARC.0, PERIGEE_ARC.1);
        self.apogee_arc = self.catalog.arc(base, APOGEE_ARC.0, APOGEE_ARC.1);
    }

    fn update_phase(&mut self, previous: &GameState, burn: BurnClass) {
        let phase =
            PropulsionPhase::classify(&self.state, burn, &self.params, self.catalog.len());
        if phase != self.phase {
            debug!("Propulsion {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
        if self.state.is_transitioning && !previous.is_transitioning {
            info!(
                "Raising orbit {} -> {} ({:?} burn, {:.0}% fuel left)",
                previous.base_orbit(),
                previous.base_orbit() + 1,
                burn,
                self.state.fuel
            );
        } else if previous.is_transitioning && !self.state.is_transitioning {
            info!("Settled on orbit {}", self.state.base_orbit());
        }
    }
}
