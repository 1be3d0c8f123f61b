use crate::constants::INITIAL_FUEL;

/// The whole mutable simulation, advanced once per frame.
///
/// `orbit_index` is the base orbit while coasting; during an orbit raise its
/// fractional part is the blend toward the next orbit, so
/// `is_transitioning == (orbit_index.fract() != 0.0)` at every frame boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    pub fuel: f64,
    pub engine_on: bool,
    pub orbit_index: f64,
    pub progress_in_orbit: f64,
    pub is_transitioning: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::with_fuel(INITIAL_FUEL)
    }
}

impl GameState {
    pub fn with_fuel(fuel: f64) -> Self {
        GameState {
            fuel,
            engine_on: false,
            orbit_index: 0.0,
            progress_in_orbit: 0.0,
            is_transitioning: false,
        }
    }

    pub fn base_orbit(&self) -> usize {
        self.orbit_index.floor() as usize
    }

    pub fn next_orbit(&self) -> usize {
        self.orbit_index.ceil() as usize
    }

    /// Weight of the next orbit while raising, zero otherwise.
    pub fn blend(&self) -> f64 {
        self.orbit_index - self.orbit_index.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fresh_state() {
        let state = GameState::default();
        assert_eq!(state.fuel, 100.0);
        assert!(!state.engine_on);
        assert_eq!(state.orbit_index, 0.0);
        assert_eq!(state.progress_in_orbit, 0.0);
        assert!(!state.is_transitioning);
    }

    #[test]
    fn test_index_decomposition() {
        let state = GameState {
            orbit_index: 2.25,
            is_transitioning: true,
            ..GameState::default()
        };
        assert_eq!(state.base_orbit(), 2);
        assert_eq!(state.next_orbit(), 3);
        assert_abs_diff_eq!(state.blend(), 0.25, epsilon = 1e-12);

        let settled = GameState {
            orbit_index: 3.0,
            ..GameState::default()
        };
        assert_eq!(settled.base_orbit(), 3);
        assert_eq!(settled.next_orbit(), 3);
        assert_eq!(settled.blend(), 0.0);
    }
}
