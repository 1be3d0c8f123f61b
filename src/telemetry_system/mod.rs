pub mod hud;
pub mod telemetry;
pub mod trail;
