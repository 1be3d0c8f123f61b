pub mod game_state;
pub mod input;
pub mod mission;
pub mod propulsion;
pub mod simulation;
