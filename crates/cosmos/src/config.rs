use serde::{Deserialize, Serialize};
use units::{AngularVelocity, Length};

use crate::constants::*;
use crate::error::{CosmosError, CosmosResult};
use crate::render::SceneSettings;

/// Closed range sampled uniformly by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T> Range<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Orbit parameter ranges for one tier of the hierarchy (planets or moons).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitRanges {
    pub radius: Range<Length>,
    pub speed: Range<AngularVelocity>,
    pub spin: Range<AngularVelocity>,
}

/// Annulus that galaxy points are scattered over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyDisk {
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub half_thickness: Length,
    pub arm_turns: f64,
}

/// Which axis galaxy points turn about each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GalaxyPivot {
    /// Every galaxy point turns about the vertical axis through the world origin.
    #[default]
    WorldOrigin,
    /// Each galaxy turns about the vertical axis through its own centre.
    OwnCentre,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRates {
    pub supernova: f64,
    pub black_hole_flare: f64,
    pub comet_spawn: f64,
    pub neutron_star_spawn: f64,
    pub black_hole_merger: f64,
}

impl EventRates {
    /// All events disabled. Handy for deterministic runs.
    pub fn quiet() -> Self {
        Self {
            supernova: 0.0,
            black_hole_flare: 0.0,
            comet_spawn: 0.0,
            neutron_star_spawn: 0.0,
            black_hole_merger: 0.0,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("supernova", self.supernova),
            ("black_hole_flare", self.black_hole_flare),
            ("comet_spawn", self.comet_spawn),
            ("neutron_star_spawn", self.neutron_star_spawn),
            ("black_hole_merger", self.black_hole_merger),
        ]
        .into_iter()
    }
}

impl Default for EventRates {
    fn default() -> Self {
        Self {
            supernova: SUPERNOVA_PROBABILITY,
            black_hole_flare: BLACK_HOLE_FLARE_PROBABILITY,
            comet_spawn: COMET_SPAWN_PROBABILITY,
            neutron_star_spawn: NEUTRON_STAR_SPAWN_PROBABILITY,
            black_hole_merger: BLACK_HOLE_MERGER_PROBABILITY,
        }
    }
}

/// Half-extents of the cubes each body kind spawns in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScales {
    pub star: Length,
    pub black_hole: Length,
    pub galaxy: Length,
    pub comet: Length,
    pub neutron_star: Length,
}

/// Display radii of each body kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRadii {
    pub star: Length,
    pub planet: Length,
    pub moon: Length,
    pub black_hole: Length,
    pub galaxy_star: Length,
    pub comet: Length,
    pub neutron_star: Length,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinRates {
    pub star: AngularVelocity,
    pub black_hole: AngularVelocity,
    pub galaxy: AngularVelocity,
}

/// Everything that shapes a universe, assembled from `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    pub star_count: usize,
    pub planet_count: usize,
    pub max_moons_per_planet: usize,
    pub black_hole_count: usize,
    pub galaxy_count: usize,
    pub galaxy_star_count: usize,

    pub spawn: SpawnScales,
    pub radii: BodyRadii,
    pub planet_orbit: OrbitRanges,
    pub moon_orbit: OrbitRanges,
    pub galaxy_disk: GalaxyDisk,
    pub galaxy_pivot: GalaxyPivot,
    pub spin: SpinRates,

    /// Per-axis bound on comet velocity, scene units per tick
    pub comet_max_speed: f64,
    pub max_comets: usize,
    pub max_neutron_stars: usize,

    pub events: EventRates,
    pub tick_rate: u32,
    pub scene: SceneSettings,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            planet_count: PLANET_COUNT,
            max_moons_per_planet: MAX_MOONS_PER_PLANET,
            black_hole_count: BLACK_HOLE_COUNT,
            galaxy_count: GALAXY_COUNT,
            galaxy_star_count: GALAXY_STAR_COUNT,
            spawn: SpawnScales {
                star: Length::from_light_years(STAR_SPAWN_LY),
                black_hole: Length::from_light_years(BLACK_HOLE_SPAWN_LY),
                galaxy: Length::from_light_years(GALAXY_SPAWN_LY),
                comet: Length::from_light_years(COMET_SPAWN_LY),
                neutron_star: Length::from_light_years(NEUTRON_STAR_SPAWN_LY),
            },
            radii: BodyRadii {
                star: Length::from_light_years(STAR_RADIUS_LY).to_display_radius(),
                planet: Length::from_au(PLANET_RADIUS_AU).to_display_radius(),
                moon: Length::from_au(MOON_RADIUS_AU).to_display_radius(),
                black_hole: Length::from_light_years(BLACK_HOLE_RADIUS_LY).to_display_radius(),
                galaxy_star: Length::from_light_years(GALAXY_STAR_RADIUS_LY).to_display_radius(),
                comet: Length::from_au(COMET_RADIUS_AU).to_display_radius(),
                neutron_star: Length::from_light_years(NEUTRON_STAR_RADIUS_LY)
                    .to_display_radius(),
            },
            planet_orbit: orbit_ranges(PLANET_ORBIT_RADIUS_AU, PLANET_ORBIT_SPEED, PLANET_SPIN),
            moon_orbit: orbit_ranges(MOON_ORBIT_RADIUS_AU, MOON_ORBIT_SPEED, MOON_SPIN),
            galaxy_disk: GalaxyDisk {
                inner_radius: Length::from_scene_units(GALAXY_INNER_RADIUS),
                outer_radius: Length::from_scene_units(GALAXY_OUTER_RADIUS),
                half_thickness: Length::from_scene_units(GALAXY_HALF_THICKNESS),
                arm_turns: GALAXY_ARM_TURNS,
            },
            galaxy_pivot: GalaxyPivot::default(),
            spin: SpinRates {
                star: AngularVelocity::from_rad_per_tick(STAR_SPIN),
                black_hole: AngularVelocity::from_rad_per_tick(BLACK_HOLE_SPIN),
                galaxy: AngularVelocity::from_rad_per_tick(GALAXY_SPIN),
            },
            comet_max_speed: COMET_MAX_SPEED,
            max_comets: MAX_COMETS,
            max_neutron_stars: MAX_NEUTRON_STARS,
            events: EventRates::default(),
            tick_rate: TICK_RATE,
            scene: SceneSettings::default(),
        }
    }
}

fn orbit_ranges(radius_au: (f64, f64), speed: (f64, f64), spin: (f64, f64)) -> OrbitRanges {
    OrbitRanges {
        radius: Range::new(Length::from_au(radius_au.0), Length::from_au(radius_au.1)),
        speed: Range::new(
            AngularVelocity::from_rad_per_tick(speed.0),
            AngularVelocity::from_rad_per_tick(speed.1),
        ),
        spin: Range::new(
            AngularVelocity::from_rad_per_tick(spin.0),
            AngularVelocity::from_rad_per_tick(spin.1),
        ),
    }
}

impl UniverseConfig {
    /// Reject configurations that cannot describe a universe.
    ///
    /// Called before generation touches the renderer, so a bad configuration
    /// never leaves half a scene behind.
    pub fn validate(&self) -> CosmosResult<()> {
        if self.planet_count > 0 && self.star_count == 0 {
            return Err(invalid(format!(
                "{} planets requested but there are no stars to orbit",
                self.planet_count
            )));
        }
        if self.tick_rate == 0 {
            return Err(invalid("tick rate must be positive".to_string()));
        }

        let extents = [
            ("spawn.star", self.spawn.star),
            ("spawn.black_hole", self.spawn.black_hole),
            ("spawn.galaxy", self.spawn.galaxy),
            ("spawn.comet", self.spawn.comet),
            ("spawn.neutron_star", self.spawn.neutron_star),
            ("radii.star", self.radii.star),
            ("radii.planet", self.radii.planet),
            ("radii.moon", self.radii.moon),
            ("radii.black_hole", self.radii.black_hole),
            ("radii.galaxy_star", self.radii.galaxy_star),
            ("radii.comet", self.radii.comet),
            ("radii.neutron_star", self.radii.neutron_star),
            ("galaxy_disk.inner_radius", self.galaxy_disk.inner_radius),
            ("galaxy_disk.outer_radius", self.galaxy_disk.outer_radius),
            ("galaxy_disk.half_thickness", self.galaxy_disk.half_thickness),
        ];
        for (name, length) in extents {
            if !length.is_valid_extent() {
                return Err(invalid(format!(
                    "{name} must be finite and non-negative, got {}",
                    length.to_scene_units()
                )));
            }
        }

        validate_orbit("planet_orbit", &self.planet_orbit)?;
        validate_orbit("moon_orbit", &self.moon_orbit)?;

        if self.galaxy_disk.inner_radius > self.galaxy_disk.outer_radius {
            return Err(invalid(
                "galaxy_disk.inner_radius exceeds galaxy_disk.outer_radius".to_string(),
            ));
        }
        if !(self.galaxy_disk.arm_turns.is_finite() && self.galaxy_disk.arm_turns >= 0.0) {
            return Err(invalid(format!(
                "galaxy_disk.arm_turns must be finite and non-negative, got {}",
                self.galaxy_disk.arm_turns
            )));
        }

        for (name, rate) in [
            ("spin.star", self.spin.star),
            ("spin.black_hole", self.spin.black_hole),
            ("spin.galaxy", self.spin.galaxy),
        ] {
            if !rate.is_finite() {
                return Err(invalid(format!("{name} must be finite")));
            }
        }

        if !(self.comet_max_speed.is_finite() && self.comet_max_speed >= 0.0) {
            return Err(invalid(format!(
                "comet_max_speed must be finite and non-negative, got {}",
                self.comet_max_speed
            )));
        }

        for (name, p) in self.events.iter() {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(format!(
                    "events.{name} must be a probability in [0, 1], got {p}"
                )));
            }
        }

        Ok(())
    }
}

fn validate_orbit(tier: &str, orbit: &OrbitRanges) -> CosmosResult<()> {
    let radius = orbit.radius;
    if !radius.min.is_valid_extent() || !radius.max.is_valid_extent() {
        return Err(invalid(format!(
            "{tier}.radius must be finite and non-negative"
        )));
    }
    if radius.min > radius.max {
        return Err(invalid(format!("{tier}.radius min exceeds max")));
    }

    for (name, range) in [("speed", orbit.speed), ("spin", orbit.spin)] {
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(invalid(format!("{tier}.{name} must be finite")));
        }
        if range.min > range.max {
            return Err(invalid(format!("{tier}.{name} min exceeds max")));
        }
    }
    Ok(())
}

fn invalid(message: String) -> CosmosError {
    CosmosError::InvalidConfiguration(message)
}
