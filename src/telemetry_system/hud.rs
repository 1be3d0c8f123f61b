use crate::constants::{
    APOGEE_PHASE, FUEL_FLASH_COLORS, FUEL_FLASH_PERIOD_MS, FUEL_NOMINAL_COLOR, PERIGEE_PHASE,
};
use crate::control::mission::MissionControls;
use crate::control::propulsion::BurnClass;
use crate::scene::camera::Projector;
use crate::trajectory_system::orbit_catalog::OrbitCatalog;
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Pixel position, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ApsisLabels {
    pub perigee: ScreenPoint,
    pub apogee: ScreenPoint,
}

pub struct HudProjector;

impl HudProjector {
    pub fn to_screen<P: Projector>(
        projector: &P,
        point: Vector3D,
        viewport: Viewport,
    ) -> ScreenPoint {
        let ndc = projector.project(point);
        ScreenPoint {
            left: (ndc.x + 1.0) / 2.0 * viewport.width,
            top: (-ndc.y + 1.0) / 2.0 * viewport.height,
        }
    }

    /// Perigee and apogee of the base orbit in screen pixels.
    pub fn labels<P: Projector>(
        catalog: &OrbitCatalog,
        base_orbit: usize,
        projector: &P,
        viewport: Viewport,
    ) -> ApsisLabels {
        let perigee = catalog.point_at(base_orbit, PERIGEE_PHASE).to_world();
        let apogee = catalog.point_at(base_orbit, APOGEE_PHASE).to_world();
        ApsisLabels {
            perigee: Self::to_screen(projector, perigee, viewport),
            apogee: Self::to_screen(projector, apogee, viewport),
        }
    }
}

/// Bar color: flashes orange/red whenever the engine is lit outside an efficient burn.
pub fn fuel_bar_color(engine_on: bool, burn: BurnClass, clock_ms: u64) -> &'static str {
    if engine_on && burn != BurnClass::Efficient {
        if clock_ms % FUEL_FLASH_PERIOD_MS < FUEL_FLASH_PERIOD_MS / 2 {
            FUEL_FLASH_COLORS[0]
        } else {
            FUEL_FLASH_COLORS[1]
        }
    } else {
        FUEL_NOMINAL_COLOR
    }
}

/// Payload for the heads-up display sink.
#[derive(Debug, Clone, PartialEq)]
pub struct HudFrame {
    pub fuel_percent: f64,
    pub fuel_readout: String,
    pub fuel_color: &'static str,
    pub engine_label: &'static str,
    pub labels: ApsisLabels,
    pub controls: MissionControls,
}

impl HudFrame {
    pub fn new(
        fuel: f64,
        engine_on: bool,
        burn: BurnClass,
        clock_ms: u64,
        labels: ApsisLabels,
        controls: MissionControls,
    ) -> Self {
        HudFrame {
            fuel_percent: fuel,
            fuel_readout: format!("{}%", fuel.round()),
            fuel_color: fuel_bar_color(engine_on, burn, clock_ms),
            engine_label: if engine_on { "ENGINE ON" } else { "ENGINE OFF" },
            labels,
            controls,
        }
    }
}
