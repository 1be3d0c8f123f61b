pub mod vector2d;
pub mod vector3d;
