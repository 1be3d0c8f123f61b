use std::f64::consts::TAU;

use crate::constants::{ARC_STEP, ORBIT_CATALOG};
use crate::utils::vector2d::Vector2D;
use crate::utils::vector3d::Vector3D;

/// One closed orbit around the central body, which sits at the origin on a focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDefinition {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

impl OrbitDefinition {
    /// `eccentricity` must be below 1; nothing here checks it.
    pub fn new(semi_major_axis: f64, eccentricity: f64) -> Self {
        OrbitDefinition {
            semi_major_axis,
            eccentricity,
        }
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// Distance from the ellipse center to the occupied focus.
    pub fn focus_offset(&self) -> f64 {
        self.semi_major_axis * self.eccentricity
    }

    /// Phase 0 is apogee, phase 0.5 is perigee.
    pub fn point_at(&self, t: f64) -> Vector2D {
        let angle = TAU * t;
        Vector2D::new(
            self.focus_offset() + self.semi_major_axis * angle.cos(),
            self.semi_minor_axis() * angle.sin(),
        )
    }

    /// Unit direction of travel at phase `t`.
    pub fn tangent_at(&self, t: f64) -> Vector2D {
        let angle = TAU * t;
        Vector2D::new(
            -TAU * self.semi_major_axis * angle.sin(),
            TAU * self.semi_minor_axis() * angle.cos(),
        )
        .normalize()
    }

    pub fn apogee(&self) -> Vector2D {
        Vector2D::new(self.focus_offset() + self.semi_major_axis, 0.0)
    }

    pub fn perigee(&self) -> Vector2D {
        Vector2D::new(self.focus_offset() - self.semi_major_axis, 0.0)
    }
}

#[derive(Debug, Clone)]
pub struct OrbitCatalog {
    orbits: Vec<OrbitDefinition>,
}

impl Default for OrbitCatalog {
    fn default() -> Self {
        OrbitCatalog::new(
            ORBIT_CATALOG
                .iter()
                .map(|&(a, e)| OrbitDefinition::new(a, e))
                .collect(),
        )
    }
}

impl OrbitCatalog {
    pub fn new(orbits: Vec<OrbitDefinition>) -> Self {
        OrbitCatalog { orbits }
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.orbits.len().saturating_sub(1)
    }

    pub fn orbit(&self, index: usize) -> &OrbitDefinition {
        &self.orbits[index]
    }

    pub fn orbits(&self) -> &[OrbitDefinition] {
        &self.orbits
    }

    // Callers keep `index` within the catalog.
    pub fn point_at(&self, index: usize, t: f64) -> Vector2D {
        self.orbits[index].point_at(t)
    }

    pub fn tangent_at(&self, index: usize, t: f64) -> Vector2D {
        self.orbits[index].tangent_at(t)
    }

    /// Closed polyline of `segments + 1` world-space points for drawing the orbit.
    pub fn sample_path(&self, index: usize, segments: usize) -> Vec<Vector3D> {
        let orbit = &self.orbits[index];
        let segments = segments.max(1);
        (0..=segments)
            .map(|step| orbit.point_at(step as f64 / segments as f64).to_world())
            .collect()
    }

    /// Every orbit as a drawable path; computed once at startup.
    pub fn sample_paths(&self, segments: usize) -> Vec<Vec<Vector3D>> {
        (0..self.orbits.len())
            .map(|index| self.sample_path(index, segments))
            .collect()
    }

    /// World-space points of the phase range `[start, end]` in `ARC_STEP` increments.
    pub fn arc(&self, index: usize, start: f64, end: f64) -> Vec<Vector3D> {
        let orbit = &self.orbits[index];
        let steps = ((end - start) / ARC_STEP + 1e-9).floor() as usize;
        (0..=steps)
            .map(|step| orbit.point_at(start + step as f64 * ARC_STEP).to_world())
            .collect()
    }
}
