//! Satellite placement along the catalog, including mid-raise blending.
//!
//! While raising, the satellite is drawn at the same phase on both orbits and
//! linearly blended between them. This keeps the motion continuous on screen; it
//! is not a model of a real transfer orbit.

use std::f64::consts::FRAC_PI_2;

use crate::constants::{FLAME_DEPTH, FLAME_OFFSET};
use crate::control::game_state::GameState;
use crate::trajectory_system::orbit_catalog::OrbitCatalog;
use crate::utils::vector2d::Vector2D;
use crate::utils::vector3d::Vector3D;

/// Engine flame placement relative to the satellite sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlameAttitude {
    pub offset: Vector3D,
    pub rotation: f64,
}

pub struct TransitionInterpolator;

impl TransitionInterpolator {
    pub fn position(catalog: &OrbitCatalog, state: &GameState) -> Vector2D {
        let base = state.base_orbit();
        let start = catalog.point_at(base, state.progress_in_orbit);
        if state.is_transitioning {
            let end = catalog.point_at(state.next_orbit(), state.progress_in_orbit);
            start.lerp(&end, state.blend())
        } else {
            start
        }
    }

    pub fn world_position(catalog: &OrbitCatalog, state: &GameState) -> Vector3D {
        Self::position(catalog, state).to_world()
    }

    /// The flame trails the direction of travel on the base orbit, even mid-raise.
    pub fn flame_attitude(catalog: &OrbitCatalog, state: &GameState) -> FlameAttitude {
        let tangent = catalog.tangent_at(state.base_orbit(), state.progress_in_orbit);
        FlameAttitude {
            offset: Vector3D::new(
                -tangent.x * FLAME_OFFSET,
                -tangent.y * FLAME_OFFSET,
                FLAME_DEPTH,
            ),
            rotation: tangent.angle() - FRAC_PI_2,
        }
    }
}
