//! Mission tuning loaded from TOML. `MissionConfig::default()` is the stock game.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    BURN_WINDOW_HALF_WIDTH, DEFAULT_VIEWPORT, EFFICIENT_BURN_COST, INEFFICIENT_BURN_COST,
    INITIAL_FUEL, MAX_FUEL, ORBIT_CATALOG, PROGRESS_STEP, TRAIL_CAPACITY, TRANSITION_STEP,
};
use crate::control::propulsion::PropulsionParams;
use crate::errors::SimulationError;
use crate::trajectory_system::orbit_catalog::{OrbitCatalog, OrbitDefinition};

// NaN fails this too.
fn positive(value: f64) -> bool {
    value > 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OrbitEntry {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub orbits: Vec<OrbitEntry>,
    pub initial_fuel: f64,
    pub efficient_burn_cost: f64,
    pub inefficient_burn_cost: f64,
    pub burn_window_half_width: f64,
    pub progress_step: f64,
    pub transition_step: f64,
    pub trail_capacity: usize,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        MissionConfig {
            orbits: ORBIT_CATALOG
                .iter()
                .map(|&(semi_major_axis, eccentricity)| OrbitEntry {
                    semi_major_axis,
                    eccentricity,
                })
                .collect(),
            initial_fuel: INITIAL_FUEL,
            efficient_burn_cost: EFFICIENT_BURN_COST,
            inefficient_burn_cost: INEFFICIENT_BURN_COST,
            burn_window_half_width: BURN_WINDOW_HALF_WIDTH,
            progress_step: PROGRESS_STEP,
            transition_step: TRANSITION_STEP,
            trail_capacity: TRAIL_CAPACITY,
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
        }
    }
}

impl MissionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, SimulationError> {
        let config: MissionConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects catalogs and rates the frame loop cannot run on. This is the only
    /// place orbit shapes are checked; the catalog itself trusts its input.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.orbits.is_empty() {
            return Err(SimulationError::ConfigError(
                "at least one orbit is required".to_string(),
            ));
        }
        for (index, orbit) in self.orbits.iter().enumerate() {
            if !positive(orbit.semi_major_axis) {
                return Err(SimulationError::ConfigError(format!(
                    "orbit {index}: semi-major axis must be positive, got {}",
                    orbit.semi_major_axis
                )));
            }
            if !(0.0..1.0).contains(&orbit.eccentricity) {
                return Err(SimulationError::ConfigError(format!(
                    "orbit {index}: eccentricity must be in [0, 1), got {}",
                    orbit.eccentricity
                )));
            }
        }
        if !positive(self.initial_fuel) || self.initial_fuel > MAX_FUEL {
            return Err(SimulationError::ConfigError(format!(
                "initial fuel must be in (0, {MAX_FUEL}], got {}",
                self.initial_fuel
            )));
        }
        let rates = [
            ("efficient_burn_cost", self.efficient_burn_cost),
            ("inefficient_burn_cost", self.inefficient_burn_cost),
            ("burn_window_half_width", self.burn_window_half_width),
            ("progress_step", self.progress_step),
            ("transition_step", self.transition_step),
        ];
        if let Some((name, value)) = rates.iter().find(|(_, value)| !positive(*value)) {
            return Err(SimulationError::ConfigError(format!(
                "{name} must be positive, got {value}"
            )));
        }
        if self.transition_step >= 1.0 {
            return Err(SimulationError::ConfigError(format!(
                "transition_step must be below 1, got {}",
                self.transition_step
            )));
        }
        if self.trail_capacity == 0 {
            return Err(SimulationError::ConfigError(
                "trail_capacity must be at least 1".to_string(),
            ));
        }
        if !positive(self.viewport_width) || !positive(self.viewport_height) {
            return Err(SimulationError::ConfigError(
                "viewport dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn catalog(&self) -> OrbitCatalog {
        OrbitCatalog::new(
            self.orbits
                .iter()
                .map(|o| OrbitDefinition::new(o.semi_major_axis, o.eccentricity))
                .collect(),
        )
    }

    pub fn propulsion_params(&self) -> PropulsionParams {
        PropulsionParams {
            initial_fuel: self.initial_fuel,
            efficient_burn_cost: self.efficient_burn_cost,
            inefficient_burn_cost: self.inefficient_burn_cost,
            burn_window_half_width: self.burn_window_half_width,
            progress_step: self.progress_step,
            transition_step: self.transition_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_builtin_catalog() {
        let config = MissionConfig::default();
        assert_eq!(config.orbits.len(), 5);
        assert_eq!(config.orbits[0].semi_major_axis, 3.0);
        assert_eq!(config.orbits[4].eccentricity, 0.5);
        assert_eq!(config.trail_capacity, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MissionConfig::from_toml_str(
            r#"
            initial_fuel = 80.0

            [[orbits]]
            semi_major_axis = 2.0
            eccentricity = 0.0

            [[orbits]]
            semi_major_axis = 4.0
            eccentricity = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_fuel, 80.0);
        assert_eq!(config.orbits.len(), 2);
        assert_eq!(config.efficient_burn_cost, EFFICIENT_BURN_COST);
        assert_eq!(config.catalog().len(), 2);
    }

    #[test]
    fn test_rejects_open_orbit() {
        let result = MissionConfig::from_toml_str(
            r#"
            [[orbits]]
            semi_major_axis = 5.0
            eccentricity = 1.0
            "#,
        );
        assert!(matches!(result, Err(SimulationError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_empty_catalog_and_bad_rates() {
        let mut config = MissionConfig::default();
        config.orbits.clear();
        assert!(config.validate().is_err());

        let mut config = MissionConfig::default();
        config.progress_step = 0.0;
        assert!(config.validate().is_err());

        let mut config = MissionConfig::default();
        config.trail_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = MissionConfig::from_toml_str("initial_fuel = \"lots\"");
        assert!(matches!(result, Err(SimulationError::Parse(_))));
    }
}
