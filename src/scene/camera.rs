use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_HEIGHT, CAMERA_NEAR};
use crate::utils::vector3d::Vector3D;

/// Maps world points to normalized device coordinates in `[-1, 1]`.
pub trait Projector {
    fn project(&self, point: Vector3D) -> Vector3D;

    fn set_aspect(&mut self, aspect: f64);
}

/// Right-handed look-at camera with a symmetric perspective frustum.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub eye: Vector3D,
    pub target: Vector3D,
    pub up: Vector3D,
    pub aspect: f64,
    pub fovy: f64,
    pub znear: f64,
    pub zfar: f64,
}

impl PerspectiveCamera {
    /// Looking straight down at the orbital plane; screen-up is world `-z`,
    /// which is orbital `+y`.
    pub fn top_down(aspect: f64) -> Self {
        PerspectiveCamera {
            eye: Vector3D::new(0.0, CAMERA_HEIGHT, 0.0),
            target: Vector3D::default(),
            up: Vector3D::new(0.0, 0.0, -1.0),
            aspect,
            fovy: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    fn basis(&self) -> (Vector3D, Vector3D, Vector3D) {
        let backward = (self.eye - self.target).normalize();
        let right = self.up.cross(&backward).normalize();
        let up = backward.cross(&right);
        (right, up, backward)
    }
}

impl Projector for PerspectiveCamera {
    fn project(&self, point: Vector3D) -> Vector3D {
        let (right, up, backward) = self.basis();
        let relative = point - self.eye;
        let view = Vector3D::new(
            relative.dot(&right),
            relative.dot(&up),
            relative.dot(&backward),
        );

        let focal = 1.0 / (self.fovy / 2.0).tan();
        let depth = -view.z;
        let range = self.znear - self.zfar;
        Vector3D::new(
            focal / self.aspect * view.x / depth,
            focal * view.y / depth,
            ((self.zfar + self.znear) / range * view.z + 2.0 * self.zfar * self.znear / range)
                / depth,
        )
    }

    fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect;
    }
}
