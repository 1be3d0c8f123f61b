use crate::telemetry_system::trail::TrailPoint;
use crate::trajectory_system::transition::FlameAttitude;
use crate::utils::vector3d::Vector3D;

/// Everything a renderer needs to draw one frame of the mission.
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame<'a> {
    pub satellite_position: Vector3D,
    pub satellite_scale: f64,
    pub flame: FlameAttitude,
    pub flame_visible: bool,
    pub trail: &'a [TrailPoint],
    pub orbit_paths: &'a [Vec<Vector3D>],
    pub perigee_arc: &'a [Vector3D],
    pub apogee_arc: &'a [Vector3D],
    pub central_body_rotation: f64,
}

pub trait SceneRenderer {
    fn submit(&mut self, frame: &SceneFrame<'_>);
}
