// Orbit Catalog (semi-major axis, eccentricity), innermost first
pub const ORBIT_CATALOG: [(f64, f64); 5] = [
    (3.0, 0.1),
    (4.5, 0.2),
    (6.0, 0.3),
    (7.5, 0.4),
    (9.0, 0.5),
];
pub const ORBIT_PATH_SEGMENTS: usize = 128;

// Propulsion Constants
pub const INITIAL_FUEL: f64 = 100.0; // % of tank
pub const MAX_FUEL: f64 = 100.0; // % of tank
pub const EFFICIENT_BURN_COST: f64 = 20.0; // % per burn frame
pub const INEFFICIENT_BURN_COST: f64 = 50.0; // % per burn frame
pub const PERIGEE_PHASE: f64 = 0.5;
pub const APOGEE_PHASE: f64 = 0.0;
pub const BURN_WINDOW_HALF_WIDTH: f64 = 0.05; // phase units either side of perigee

// Simulation Parameters (per frame, not time-scaled)
pub const PROGRESS_STEP: f64 = 0.002; // orbital phase per frame
pub const TRANSITION_STEP: f64 = 0.01; // orbit index per frame
pub const CENTRAL_BODY_SPIN: f64 = 0.001; // rad per frame

// Trail
pub const TRAIL_CAPACITY: usize = 500;
pub const TRAIL_COLOR: [f32; 4] = [0.5, 0.8, 1.0, 1.0];

// Satellite sprite
pub const FLAME_OFFSET: f64 = 0.3;
pub const FLAME_DEPTH: f64 = 0.1;
pub const BOOST_SCALE: f64 = 1.05;

// Arcs drawn on the current orbit
pub const PERIGEE_ARC: (f64, f64) = (0.45, 0.55);
pub const APOGEE_ARC: (f64, f64) = (0.95, 1.0);
pub const ARC_STEP: f64 = 0.01;

// HUD colors
pub const FUEL_NOMINAL_COLOR: &str = "#00cc00";
pub const FUEL_FLASH_COLORS: [&str; 2] = ["#ff6600", "#ff0000"];
pub const FUEL_FLASH_PERIOD_MS: u64 = 400;

// Camera
pub const CAMERA_FOV_DEGREES: f64 = 75.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 1000.0;
pub const CAMERA_HEIGHT: f64 = 15.0; // top-down
pub const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 720.0); // px
