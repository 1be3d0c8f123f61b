pub mod choreography;
pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod scene;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::MissionConfig;
pub use constants::*;
pub use control::game_state::GameState;
pub use control::input::InputEvent;
pub use control::mission::{MissionControls, MissionOutcome};
pub use control::propulsion::{BurnClass, PropulsionParams, PropulsionPhase};
pub use control::simulation::{FrameOutput, OrbitGame};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::orbit_catalog::{OrbitCatalog, OrbitDefinition};
pub use trajectory_system::transition::{FlameAttitude, TransitionInterpolator};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::hud::{HudFrame, HudProjector, Viewport};
pub use telemetry_system::telemetry::Telemetry;
pub use telemetry_system::trail::{TrailBuffer, TrailPoint};

// Scene collaborators
pub use scene::camera::{PerspectiveCamera, Projector};
pub use scene::renderer::{SceneFrame, SceneRenderer};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
pub use utils::vector3d::Vector3D;
