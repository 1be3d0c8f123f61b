//! Cue lists for the launch stages that precede the orbit-raise game.

use log::info;

use super::timeline::Timeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneElement {
    LaunchControl,
    Flame,
    Smoke,
    Rocket,
    Camera,
    Ground,
    Launchpad,
    Sky,
    Booster,
    BoosterFlame,
    MainRocket,
    MainFlame,
    Space,
    Fairings,
    Satellite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchCue {
    PlaySound,
    Show(SceneElement),
    Hide(SceneElement),
    /// Starts the element's animated state (ignited, launched, separating, deployed).
    Activate(SceneElement),
    /// The stage is over; the success prompt may appear.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStage {
    Liftoff,
    BoosterSeparation,
    AscentToSpace,
    FairingDeploy,
}

impl LaunchStage {
    pub const ALL: [LaunchStage; 4] = [
        LaunchStage::Liftoff,
        LaunchStage::BoosterSeparation,
        LaunchStage::AscentToSpace,
        LaunchStage::FairingDeploy,
    ];

    pub fn timeline(self) -> Timeline<LaunchCue> {
        use LaunchCue::*;
        use SceneElement::*;

        match self {
            LaunchStage::Liftoff => Timeline::new()
                .at(0, Hide(LaunchControl))
                .at(0, PlaySound)
                .at(0, Activate(Flame))
                .at(0, Activate(Smoke))
                .at(500, Activate(Rocket))
                .at(500, Activate(Camera))
                .at(1500, Hide(Ground))
                .at(1500, Hide(Launchpad))
                .at(1500, Show(Sky))
                .at(4000, Complete),
            LaunchStage::BoosterSeparation => Timeline::new()
                .at(0, Hide(LaunchControl))
                .at(0, PlaySound)
                .at(0, Show(BoosterFlame))
                .at(0, Activate(Rocket))
                .at(10, Activate(BoosterFlame))
                .at(2000, Activate(Booster))
                .at(2000, Show(MainRocket))
                .at(2400, Show(MainFlame))
                .at(2410, Activate(MainFlame))
                .at(5000, Complete),
            LaunchStage::AscentToSpace => Timeline::new()
                .at(0, Hide(LaunchControl))
                .at(0, Show(Flame))
                .at(0, Activate(Rocket))
                .at(10, Activate(Flame))
                .at(2000, Show(Space))
                .at(4000, Complete),
            LaunchStage::FairingDeploy => Timeline::new()
                .at(0, Hide(LaunchControl))
                .at(0, Activate(Fairings))
                .at(500, Show(Satellite))
                .at(1500, Activate(Satellite))
                .at(4000, Complete),
        }
    }
}

/// One launch stage being played against a monotonic clock.
pub struct LaunchSequence {
    stage: LaunchStage,
    timeline: Timeline<LaunchCue>,
    completed: bool,
}

impl LaunchSequence {
    pub fn new(stage: LaunchStage) -> Self {
        LaunchSequence {
            stage,
            timeline: stage.timeline(),
            completed: false,
        }
    }

    pub fn stage(&self) -> LaunchStage {
        self.stage
    }

    /// Pressing the launch control; later presses are ignored.
    pub fn trigger(&mut self, now_ms: u64) {
        if !self.timeline.is_started() {
            info!("{:?} sequence started", self.stage);
            self.timeline.start(now_ms);
        }
    }

    pub fn advance(&mut self, now_ms: u64) -> Vec<LaunchCue> {
        let cues = self.timeline.advance(now_ms);
        if cues.contains(&LaunchCue::Complete) {
            info!("{:?} sequence complete", self.stage);
            self.completed = true;
        }
        cues
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_ends_with_complete() {
        for stage in LaunchStage::ALL {
            let mut sequence = LaunchSequence::new(stage);
            sequence.trigger(0);
            let cues = sequence.advance(u64::MAX);
            assert_eq!(cues.last(), Some(&LaunchCue::Complete), "{stage:?}");
            assert_eq!(cues.iter().filter(|c| **c == LaunchCue::Complete).count(), 1);
            assert!(sequence.is_complete());
        }
    }

    #[test]
    fn test_liftoff_order() {
        let mut sequence = LaunchSequence::new(LaunchStage::Liftoff);
        assert!(sequence.advance(10_000).is_empty());

        sequence.trigger(1_000);
        let opening = sequence.advance(1_000);
        assert_eq!(opening[0], LaunchCue::Hide(SceneElement::LaunchControl));
        assert_eq!(opening.len(), 4);

        assert_eq!(
            sequence.advance(1_500),
            vec![
                LaunchCue::Activate(SceneElement::Rocket),
                LaunchCue::Activate(SceneElement::Camera)
            ]
        );
        assert_eq!(sequence.advance(2_500).len(), 3);
        assert!(!sequence.is_complete());
        assert_eq!(sequence.advance(5_000), vec![LaunchCue::Complete]);
        assert!(sequence.is_complete());
    }

    #[test]
    fn test_second_trigger_does_not_restart() {
        let mut sequence = LaunchSequence::new(LaunchStage::FairingDeploy);
        sequence.trigger(0);
        sequence.advance(600);
        sequence.trigger(10_000);
        assert_eq!(
            sequence.advance(1_500),
            vec![LaunchCue::Activate(SceneElement::Satellite)]
        );
    }

    #[test]
    fn test_main_flame_ignites_after_separation() {
        let mut sequence = LaunchSequence::new(LaunchStage::BoosterSeparation);
        sequence.trigger(0);
        let early = sequence.advance(2_000);
        assert!(early.contains(&LaunchCue::Activate(SceneElement::Booster)));
        assert!(!early.contains(&LaunchCue::Show(SceneElement::MainFlame)));
        let later = sequence.advance(2_410);
        assert_eq!(
            later,
            vec![
                LaunchCue::Show(SceneElement::MainFlame),
                LaunchCue::Activate(SceneElement::MainFlame)
            ]
        );
    }
}
