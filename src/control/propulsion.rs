use log::debug;

use crate::constants::{
    BURN_WINDOW_HALF_WIDTH, EFFICIENT_BURN_COST, INEFFICIENT_BURN_COST, INITIAL_FUEL,
    PERIGEE_PHASE, PROGRESS_STEP, TRANSITION_STEP,
};
use crate::control::game_state::GameState;

/// Per-frame rates. Nothing is scaled by elapsed time: one call is one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionParams {
    pub initial_fuel: f64,
    pub efficient_burn_cost: f64,
    pub inefficient_burn_cost: f64,
    pub burn_window_half_width: f64,
    pub progress_step: f64,
    pub transition_step: f64,
}

impl Default for PropulsionParams {
    fn default() -> Self {
        PropulsionParams {
            initial_fuel: INITIAL_FUEL,
            efficient_burn_cost: EFFICIENT_BURN_COST,
            inefficient_burn_cost: INEFFICIENT_BURN_COST,
            burn_window_half_width: BURN_WINDOW_HALF_WIDTH,
            progress_step: PROGRESS_STEP,
            transition_step: TRANSITION_STEP,
        }
    }
}

impl PropulsionParams {
    pub fn in_burn_window(&self, progress_in_orbit: f64) -> bool {
        (progress_in_orbit - PERIGEE_PHASE).abs() < self.burn_window_half_width
    }
}

/// What the engine did during a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnClass {
    Coasting,
    Efficient,
    Inefficient,
}

/// `Idle` means the engine is off. A lit engine that spent nothing this frame reports
/// the burn it is lined up for, or `Exhausted` when the tank is dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropulsionPhase {
    Idle,
    BurningEfficient,
    BurningInefficient,
    Transitioning,
    Exhausted,
}

impl PropulsionPhase {
    pub fn classify(
        state: &GameState,
        burn: BurnClass,
        params: &PropulsionParams,
        orbit_count: usize,
    ) -> Self {
        let last_orbit = orbit_count.saturating_sub(1);
        if state.is_transitioning {
            return PropulsionPhase::Transitioning;
        }
        if state.fuel <= 0.0 && (state.base_orbit() < last_orbit || state.engine_on) {
            return PropulsionPhase::Exhausted;
        }
        match burn {
            BurnClass::Efficient => PropulsionPhase::BurningEfficient,
            BurnClass::Inefficient => PropulsionPhase::BurningInefficient,
            BurnClass::Coasting if !state.engine_on => PropulsionPhase::Idle,
            // Lit but idle for a frame, e.g. the frame a raise settles.
            BurnClass::Coasting if params.in_burn_window(state.progress_in_orbit) => {
                PropulsionPhase::BurningEfficient
            }
            BurnClass::Coasting => PropulsionPhase::BurningInefficient,
        }
    }
}

/// Flips the engine. Accepted in any state; fuel is irrelevant here.
pub fn toggle_engine(state: GameState) -> GameState {
    GameState {
        engine_on: !state.engine_on,
        ..state
    }
}

/// Advances phase, spends fuel and moves the orbit index for one frame.
pub fn update(
    mut state: GameState,
    params: &PropulsionParams,
    orbit_count: usize,
) -> (GameState, BurnClass) {
    let last_orbit = orbit_count.saturating_sub(1);
    state.progress_in_orbit = (state.progress_in_orbit + params.progress_step) % 1.0;

    let mut burn = BurnClass::Coasting;
    if state.engine_on && !state.is_transitioning && state.fuel > 0.0 {
        let cost = if params.in_burn_window(state.progress_in_orbit) {
            burn = BurnClass::Efficient;
            params.efficient_burn_cost
        } else {
            burn = BurnClass::Inefficient;
            params.inefficient_burn_cost
        };
        state.fuel = (state.fuel - cost).max(0.0);
        debug!(
            "{:?} burn at phase {:.3}, fuel now {:.1}",
            burn, state.progress_in_orbit, state.fuel
        );
        if state.base_orbit() < last_orbit {
            state.is_transitioning = true;
        }
    }

    if state.is_transitioning {
        state.orbit_index += params.transition_step;
        let target = state.orbit_index.ceil().min(last_orbit as f64);
        if state.orbit_index >= target - params.transition_step {
            state.orbit_index = target;
            state.is_transitioning = false;
        }
    }

    (state, burn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ORBITS: usize = 5;

    fn at_phase(progress_in_orbit: f64) -> GameState {
        GameState {
            engine_on: true,
            progress_in_orbit,
            ..GameState::default()
        }
    }

    #[test]
    fn test_engine_off_only_advances_phase() {
        let params = PropulsionParams::default();
        let (state, burn) = update(GameState::default(), &params, ORBITS);
        assert_eq!(burn, BurnClass::Coasting);
        assert_eq!(state.fuel, 100.0);
        assert_eq!(state.orbit_index, 0.0);
        assert!(!state.is_transitioning);
        assert_abs_diff_eq!(state.progress_in_orbit, 0.002, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_wraps_at_one() {
        let params = PropulsionParams::default();
        let start = GameState {
            progress_in_orbit: 0.999,
            ..GameState::default()
        };
        let (state, _) = update(start, &params, ORBITS);
        assert_abs_diff_eq!(state.progress_in_orbit, 0.001, epsilon = 1e-9);
    }

    #[test]
    fn test_perigee_burn_is_efficient() {
        let params = PropulsionParams::default();
        let (state, burn) = update(at_phase(0.5), &params, ORBITS);
        assert_eq!(burn, BurnClass::Efficient);
        assert_abs_diff_eq!(state.fuel, 80.0, epsilon = 1e-12);
        assert!(state.is_transitioning);
        assert_abs_diff_eq!(state.orbit_index, 0.01, epsilon = 1e-12);
        assert_eq!(
            PropulsionPhase::classify(&state, burn, &params, ORBITS),
            PropulsionPhase::Transitioning
        );
    }

    #[test]
    fn test_burn_away_from_perigee_is_inefficient() {
        let params = PropulsionParams::default();
        let (state, burn) = update(at_phase(0.2), &params, ORBITS);
        assert_eq!(burn, BurnClass::Inefficient);
        assert_abs_diff_eq!(state.fuel, 50.0, epsilon = 1e-12);
        assert!(state.is_transitioning);
    }

    #[test]
    fn test_window_edges() {
        let params = PropulsionParams::default();
        assert!(params.in_burn_window(0.46));
        assert!(params.in_burn_window(0.54));
        assert!(!params.in_burn_window(0.56));
        assert!(!params.in_burn_window(0.0));
    }

    #[test]
    fn test_fuel_is_clamped_at_zero() {
        let params = PropulsionParams::default();
        let start = GameState {
            fuel: 10.0,
            ..at_phase(0.1)
        };
        let (state, burn) = update(start, &params, ORBITS);
        assert_eq!(burn, BurnClass::Inefficient);
        assert_eq!(state.fuel, 0.0);
    }

    #[test]
    fn test_no_burn_while_transitioning() {
        let params = PropulsionParams::default();
        let start = GameState {
            orbit_index: 1.5,
            is_transitioning: true,
            ..at_phase(0.5)
        };
        let (state, burn) = update(start, &params, ORBITS);
        assert_eq!(burn, BurnClass::Coasting);
        assert_eq!(state.fuel, 100.0);
        assert_abs_diff_eq!(state.orbit_index, 1.51, epsilon = 1e-12);
    }

    #[test]
    fn test_transition_snaps_to_next_orbit() {
        let params = PropulsionParams::default();
        let mut state = GameState {
            orbit_index: 0.01,
            is_transitioning: true,
            ..GameState::default()
        };
        let mut frames = 0;
        while state.is_transitioning {
            state = update(state, &params, ORBITS).0;
            frames += 1;
            assert!(frames < 200, "transition never settled");
        }
        assert_eq!(state.orbit_index, 1.0);
        assert_eq!(state.orbit_index.fract(), 0.0);
        assert!((97..=99).contains(&frames));
    }

    #[test]
    fn test_last_orbit_burns_without_raising() {
        let params = PropulsionParams::default();
        let start = GameState {
            orbit_index: 4.0,
            ..at_phase(0.5)
        };
        let (state, burn) = update(start, &params, ORBITS);
        assert_eq!(burn, BurnClass::Efficient);
        assert!(!state.is_transitioning);
        assert_eq!(state.orbit_index, 4.0);
    }

    #[test]
    fn test_empty_tank_cannot_burn() {
        let params = PropulsionParams::default();
        let start = GameState {
            fuel: 0.0,
            orbit_index: 2.0,
            ..at_phase(0.5)
        };
        let (state, burn) = update(start, &params, ORBITS);
        assert_eq!(burn, BurnClass::Coasting);
        assert!(!state.is_transitioning);
        assert_eq!(
            PropulsionPhase::classify(&state, burn, &params, ORBITS),
            PropulsionPhase::Exhausted
        );
    }

    #[test]
    fn test_toggle_engine_ignores_fuel() {
        let empty = GameState::with_fuel(0.0);
        let toggled = toggle_engine(empty);
        assert!(toggled.engine_on);
        assert!(!toggle_engine(toggled).engine_on);
        assert_eq!(toggled.fuel, 0.0);
    }

    #[test]
    fn test_idle_phase_when_engine_off() {
        assert_eq!(
            PropulsionPhase::classify(
                &GameState::default(),
                BurnClass::Coasting,
                &PropulsionParams::default(),
                ORBITS
            ),
            PropulsionPhase::Idle
        );
    }

    #[test]
    fn test_lit_engine_is_never_idle() {
        let params = PropulsionParams::default();

        // Dry tank on the final orbit with the engine left on.
        let dry = GameState {
            fuel: 0.0,
            orbit_index: 4.0,
            ..at_phase(0.3)
        };
        let (dry, burn) = update(dry, &params, ORBITS);
        assert_eq!(burn, BurnClass::Coasting);
        assert_eq!(
            PropulsionPhase::classify(&dry, burn, &params, ORBITS),
            PropulsionPhase::Exhausted
        );

        // The frame a raise settles spends nothing but the engine is still lit.
        let settling = GameState {
            orbit_index: 0.985,
            is_transitioning: true,
            ..at_phase(0.2)
        };
        let (settled, burn) = update(settling, &params, ORBITS);
        assert!(!settled.is_transitioning);
        assert_eq!(burn, BurnClass::Coasting);
        assert_eq!(
            PropulsionPhase::classify(&settled, burn, &params, ORBITS),
            PropulsionPhase::BurningInefficient
        );

        let at_perigee = GameState {
            progress_in_orbit: 0.5,
            ..settled
        };
        assert_eq!(
            PropulsionPhase::classify(&at_perigee, BurnClass::Coasting, &params, ORBITS),
            PropulsionPhase::BurningEfficient
        );
    }
}
