//! Compile-time tuning for the universe.
//!
//! Every count, spawn range, rate and probability the simulation uses lives
//! here. `UniverseConfig::default()` is assembled from these values and
//! nothing else.

// =============================================================================
// Population
// =============================================================================

pub const STAR_COUNT: usize = 30;
pub const PLANET_COUNT: usize = 60;
/// Each planet draws its moon count uniformly from `0..=MAX_MOONS_PER_PLANET`.
pub const MAX_MOONS_PER_PLANET: usize = 2;
pub const BLACK_HOLE_COUNT: usize = 15;
pub const GALAXY_COUNT: usize = 5;
pub const GALAXY_STAR_COUNT: usize = 80;

// =============================================================================
// Spawn cubes (half-extent, light-year-equivalents)
// =============================================================================

pub const STAR_SPAWN_LY: f64 = 200.0;
pub const BLACK_HOLE_SPAWN_LY: f64 = 300.0;
pub const GALAXY_SPAWN_LY: f64 = 500.0;
pub const COMET_SPAWN_LY: f64 = 500.0;
pub const NEUTRON_STAR_SPAWN_LY: f64 = 400.0;

// =============================================================================
// Body radii (equivalent lengths, drawn at 1/DISPLAY_RADIUS_DIVISOR)
// =============================================================================

pub const STAR_RADIUS_LY: f64 = 1.0;
pub const PLANET_RADIUS_AU: f64 = 0.5;
pub const MOON_RADIUS_AU: f64 = 0.1;
pub const BLACK_HOLE_RADIUS_LY: f64 = 1.5;
pub const GALAXY_STAR_RADIUS_LY: f64 = 0.5;
pub const COMET_RADIUS_AU: f64 = 0.3;
pub const NEUTRON_STAR_RADIUS_LY: f64 = 0.7;

// =============================================================================
// Orbits (AU-equivalents, radians per tick)
// =============================================================================

pub const PLANET_ORBIT_RADIUS_AU: (f64, f64) = (0.5, 5.0);
pub const PLANET_ORBIT_SPEED: (f64, f64) = (0.01, 0.05);
pub const PLANET_SPIN: (f64, f64) = (0.01, 0.03);

pub const MOON_ORBIT_RADIUS_AU: (f64, f64) = (0.1, 0.5);
pub const MOON_ORBIT_SPEED: (f64, f64) = (0.05, 0.1);
pub const MOON_SPIN: (f64, f64) = (0.05, 0.1);

// =============================================================================
// Galaxy disks (raw scene units)
// =============================================================================

pub const GALAXY_INNER_RADIUS: f64 = 50.0;
pub const GALAXY_OUTER_RADIUS: f64 = 150.0;
/// Points scatter vertically within +/- this distance of the centre plane.
pub const GALAXY_HALF_THICKNESS: f64 = 20.0;
/// Full turns covered by the sampled polar angle.
pub const GALAXY_ARM_TURNS: f64 = 2.0;

// =============================================================================
// Cosmetic spin (radians per tick, about +Y)
// =============================================================================

pub const STAR_SPIN: f64 = 0.0005;
pub const BLACK_HOLE_SPIN: f64 = 0.0005;
pub const GALAXY_SPIN: f64 = 0.0002;

// =============================================================================
// Comets
// =============================================================================

/// Each velocity component is uniform in [-COMET_MAX_SPEED, COMET_MAX_SPEED]
/// scene units per tick.
pub const COMET_MAX_SPEED: f64 = 2.0;

// =============================================================================
// Event probabilities (per tick)
// =============================================================================

pub const SUPERNOVA_PROBABILITY: f64 = 0.001;
pub const BLACK_HOLE_FLARE_PROBABILITY: f64 = 0.0005;
pub const COMET_SPAWN_PROBABILITY: f64 = 0.002;
pub const NEUTRON_STAR_SPAWN_PROBABILITY: f64 = 0.001;
pub const BLACK_HOLE_MERGER_PROBABILITY: f64 = 0.0003;

/// Spawning stops here; nothing is ever removed.
pub const MAX_COMETS: usize = 10_000;
pub const MAX_NEUTRON_STARS: usize = 10_000;

// =============================================================================
// Loop and scene
// =============================================================================

pub const TICK_RATE: u32 = 50;

pub const SCENE_TITLE: &str = "Ultimate Universe Simulator";
pub const SCENE_WIDTH: u32 = 1200;
pub const SCENE_HEIGHT: u32 = 800;
pub const SCENE_FORWARD: [f64; 3] = [0.0, -0.3, -1.0];
