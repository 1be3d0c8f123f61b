pub mod camera;
pub mod renderer;
