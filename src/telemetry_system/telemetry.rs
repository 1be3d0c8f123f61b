use log::info;

use crate::control::mission::MissionOutcome;
use crate::control::propulsion::{BurnClass, PropulsionPhase};
use crate::control::simulation::FrameOutput;

/// Running record of a mission, collected once per frame.
pub struct Telemetry {
    frames: u64,
    min_fuel: f64,
    efficient_burns: u32,
    inefficient_burns: u32,
    orbits_raised: u32,
    highest_orbit: usize,
    phase_changes: Vec<(PropulsionPhase, u64)>,
    outcome_changes: Vec<(MissionOutcome, u64)>,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            frames: 0,
            min_fuel: f64::MAX,
            efficient_burns: 0,
            inefficient_burns: 0,
            orbits_raised: 0,
            highest_orbit: 0,
            phase_changes: Vec::new(),
            outcome_changes: Vec::new(),
        }
    }

    fn format_frames(frames: u64) -> String {
        // Nominal 60 Hz display refresh.
        let seconds = frames as f64 / 60.0;
        if seconds >= 60.0 {
            format!("{:.0}m {:.2}s", (seconds / 60.0).floor(), seconds % 60.0)
        } else {
            format!("{:.2}s", seconds)
        }
    }

    pub fn collect_data(&mut self, output: &FrameOutput) {
        self.frames = output.frame;
        self.min_fuel = self.min_fuel.min(output.state.fuel);

        match output.burn {
            BurnClass::Efficient => self.efficient_burns += 1,
            BurnClass::Inefficient => self.inefficient_burns += 1,
            BurnClass::Coasting => {}
        }

        let last_phase = self.phase_changes.last().map(|(phase, _)| *phase);
        if last_phase != Some(output.phase) {
            if output.phase == PropulsionPhase::Transitioning {
                self.orbits_raised += 1;
            }
            self.phase_changes.push((output.phase, output.frame));
        }
        self.highest_orbit = self.highest_orbit.max(output.state.base_orbit());
        if self.outcome_changes.last().map(|(outcome, _)| *outcome) != Some(output.outcome) {
            if !self.outcome_changes.is_empty() {
                info!("Outcome {:?} at frame {}", output.outcome, output.frame);
            }
            self.outcome_changes.push((output.outcome, output.frame));
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn min_fuel(&self) -> f64 {
        self.min_fuel
    }

    pub fn burns(&self) -> (u32, u32) {
        (self.efficient_burns, self.inefficient_burns)
    }

    pub fn orbits_raised(&self) -> u32 {
        self.orbits_raised
    }

    pub fn highest_orbit(&self) -> usize {
        self.highest_orbit
    }

    pub fn final_outcome(&self) -> Option<MissionOutcome> {
        self.outcome_changes.last().map(|(outcome, _)| *outcome)
    }

    pub fn summary(&self) -> String {
        let mut report = String::from("--- Mission Summary ---\n");
        report.push_str(&format!(
            "Frames: {} ({})\n",
            self.frames,
            Self::format_frames(self.frames)
        ));
        let min_fuel = if self.frames == 0 { 0.0 } else { self.min_fuel };
        report.push_str(&format!("Min Fuel: {:.0}%\n", min_fuel));
        report.push_str(&format!(
            "Burns: {} efficient, {} inefficient\n",
            self.efficient_burns, self.inefficient_burns
        ));
        report.push_str(&format!(
            "Orbit raises: {} (highest orbit {})\n",
            self.orbits_raised, self.highest_orbit
        ));

        report.push_str("\n--- Propulsion Phases ---\n");
        for (phase, frame) in &self.phase_changes {
            report.push_str(&format!(
                "{:?} from frame {} ({})\n",
                phase,
                frame,
                Self::format_frames(*frame)
            ));
        }

        report.push_str("\n--- Outcomes ---\n");
        for (outcome, frame) in &self.outcome_changes {
            report.push_str(&format!("{:?} from frame {}\n", outcome, frame));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MissionConfig;
    use crate::control::input::InputEvent;
    use crate::control::simulation::OrbitGame;

    #[test]
    fn test_format_frames() {
        assert_eq!(Telemetry::format_frames(30), "0.50s");
        assert_eq!(Telemetry::format_frames(3_900), "1m 5.00s");
    }

    #[test]
    fn test_collects_burns_and_raises() {
        let mut game = OrbitGame::new(&MissionConfig::default()).unwrap();
        let mut telemetry = Telemetry::new();

        game.handle_event(InputEvent::EngineToggle);
        for frame in 0..400 {
            telemetry.collect_data(&game.frame(frame * 16));
        }

        // Two inefficient burns drain the tank; the second raise fails the mission.
        assert_eq!(telemetry.burns(), (0, 2));
        assert_eq!(telemetry.orbits_raised(), 2);
        assert_eq!(telemetry.min_fuel(), 0.0);
        assert_eq!(telemetry.highest_orbit(), 2);
        assert_eq!(telemetry.final_outcome(), Some(MissionOutcome::Failed));
        assert_eq!(telemetry.frames(), 400);

        let summary = telemetry.summary();
        assert!(summary.contains("Burns: 0 efficient, 2 inefficient"));
        assert!(summary.contains("Failed from frame"));
    }
}
