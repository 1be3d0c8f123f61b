use log::info;

use crate::control::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    Active,
    Failed,
    Succeeded,
}

impl MissionOutcome {
    /// Recomputed from scratch each frame, so repeated calls agree.
    pub fn evaluate(state: &GameState, orbit_count: usize) -> Self {
        let last_orbit = orbit_count.saturating_sub(1);
        let base = state.base_orbit();
        if state.fuel <= 0.0 && base < last_orbit {
            MissionOutcome::Failed
        } else if base >= last_orbit && !state.is_transitioning {
            MissionOutcome::Succeeded
        } else {
            MissionOutcome::Active
        }
    }
}

/// Visibility and enablement flags for the mission's on-screen controls.
///
/// The failure and success indicators latch: once raised they stay up until
/// [`MissionControls::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionControls {
    pub engine_enabled: bool,
    pub engine_hidden: bool,
    pub failure_shown: bool,
    pub boost_shown: bool,
}

impl Default for MissionControls {
    fn default() -> Self {
        MissionControls {
            engine_enabled: true,
            engine_hidden: false,
            failure_shown: false,
            boost_shown: false,
        }
    }
}

impl MissionControls {
    pub fn apply(&mut self, outcome: MissionOutcome) {
        match outcome {
            MissionOutcome::Failed => {
                if !self.failure_shown {
                    info!("Mission failed: out of fuel below the target orbit");
                }
                self.failure_shown = true;
                self.engine_enabled = false;
            }
            MissionOutcome::Succeeded => {
                if !self.boost_shown {
                    info!("Target orbit reached, boost available");
                }
                self.boost_shown = true;
                self.engine_hidden = true;
            }
            MissionOutcome::Active => {}
        }
    }

    pub fn engine_accepts_input(&self) -> bool {
        self.engine_enabled && !self.engine_hidden
    }

    pub fn reset(&mut self) {
        *self = MissionControls::default();
    }
}
