//! Construction of every body kind.
//!
//! Each function draws its parameters from the configured ranges, registers
//! the body with the renderer and hands back the attribute bundle. Nothing
//! here touches `UniverseState`; callers decide where the body lives.

use nalgebra::Point3;
use rand_chacha::ChaChaRng;
use units::{AngularVelocity, Length};

use crate::bodies::{
    BlackHole, CelestialPoint, Comet, Moon, NeutronStar, Orbit, Planet, PlanetId, Star, StarId,
};
use crate::color::BodyColor;
use crate::config::{OrbitRanges, UniverseConfig};
use crate::error::CosmosResult;
use crate::render::RenderAdapter;
use crate::sampling::{random_point, random_vector, sample_count, sample_phase, sample_uniform};

/// Builds bodies according to a `UniverseConfig`.
#[derive(Debug, Clone, Copy)]
pub struct BodyFactory<'a> {
    config: &'a UniverseConfig,
}

impl<'a> BodyFactory<'a> {
    pub fn new(config: &'a UniverseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UniverseConfig {
        self.config
    }

    /// A star somewhere in the star cube, with a white point light on top of
    /// it so nearby planets are lit.
    pub fn create_star<R: RenderAdapter>(
        &self,
        rng: &mut ChaChaRng,
        renderer: &mut R,
    ) -> CosmosResult<Star> {
        let position = random_point(rng, self.config.spawn.star);
        let body = emissive_sphere(renderer, position, self.config.radii.star, BodyColor::STAR)?;
        let light = renderer.create_point_light(position, BodyColor::STAR_LIGHT)?;
        Ok(Star { body, light })
    }

    /// A planet orbiting `star` at a random radius, speed and phase.
    ///
    /// The sphere is first placed at phase zero (directly along +X from the
    /// star) whatever phase was drawn; the first tick moves it onto its orbit.
    pub fn create_planet<R: RenderAdapter>(
        &self,
        rng: &mut ChaChaRng,
        renderer: &mut R,
        star: StarId,
        star_position: Point3<f64>,
    ) -> CosmosResult<Planet> {
        let orbit = sample_orbit(rng, &self.config.planet_orbit);
        let position = star_position + orbit.resting_offset();
        let body = emissive_sphere(
            renderer,
            position,
            self.config.radii.planet,
            BodyColor::PLANET,
        )?;
        Ok(Planet { body, star, orbit })
    }

    /// One moon around `planet`, placed the same way planets are.
    pub fn create_moon<R: RenderAdapter>(
        &self,
        rng: &mut ChaChaRng,
        renderer: &mut R,
        planet: PlanetId,
        planet_position: Point3<f64>,
    ) -> CosmosResult<Moon> {
        let orbit = sample_orbit(rng, &self.config.moon_orbit);
        let position = planet_position + orbit.resting_offset();
        let body = emissive_sphere(renderer, position, self.config.radii.moon, BodyColor::MOON)?;
        Ok(Moon {
            body,
            planet,
            orbit,
        })
    }

    /// Between zero and `max_moons_per_planet` moons, count drawn uniformly.
    pub fn create_moons<R: RenderAdapter>(
        &self,
        rng: &mut ChaChaRng,
        renderer: &mut R,
        planet: PlanetId,
        planet_position: Point3<f64>,
    ) -> CosmosResult<Vec<Moon>> {
        let count = sample_count(rng, self.config.max_moons_per_planet);
        (0..count)
            .map(|_| self.create_moon(rng, renderer, planet, planet_position))
            .collect()
    }

    pub fn create_black_hole<R: RenderAdapter>(
        &self,
        rng: &mut ChaChaRng,
        renderer: &mut R,
    ) -> CosmosResult<BlackHole> {
        let position = random_point(rng, self.config.spawn.black_hole);
        let body = emissive_sphere(
            renderer,
            position,
            self.config.radii.black_hole,
            BodyColor::BLACK_HOLE,
        )?;
        Ok(BlackHole { body })
    }

    /// A comet with a slow constant drift.
    pub fn create_comet<R: RenderAdapter>(
        &self,
        rng: &mut ChaChaRng,
        renderer: &mut R,
    ) -> CosmosResult<Comet> {
        let position = random_point(rng, self.config.spawn.comet);
        let body = emissive_sphere(
            renderer,
            position,
            self.config.radii.comet,
            BodyColor::COMET,
        )?;
        let velocity = random_vector(rng, self.config.comet_max_speed);
        Ok(Comet { body, velocity })
    }

    pub fn create_neutron_star<R: RenderAdapter>(
        &self,
        rng: &mut ChaChaRng,
        renderer: &mut R,
    ) -> CosmosResult<NeutronStar> {
        let position = random_point(rng, self.config.spawn.neutron_star);
        let body = emissive_sphere(
            renderer,
            position,
            self.config.radii.neutron_star,
            BodyColor::NEUTRON_STAR,
        )?;
        Ok(NeutronStar { body })
    }
}

/// Register an emissive sphere and wrap it as a `CelestialPoint`.
pub(crate) fn emissive_sphere<R: RenderAdapter>(
    renderer: &mut R,
    position: Point3<f64>,
    radius: Length,
    color: BodyColor,
) -> CosmosResult<CelestialPoint> {
    let handle = renderer.create_sphere(position, radius, color, true)?;
    Ok(CelestialPoint {
        position,
        radius,
        color,
        handle,
    })
}

fn sample_orbit(rng: &mut ChaChaRng, ranges: &OrbitRanges) -> Orbit {
    let radius = sample_uniform(
        rng,
        ranges.radius.min.to_scene_units(),
        ranges.radius.max.to_scene_units(),
    );
    let speed = sample_uniform(
        rng,
        ranges.speed.min.to_rad_per_tick(),
        ranges.speed.max.to_rad_per_tick(),
    );
    let angle = sample_phase(rng, 1.0);
    let spin = sample_uniform(
        rng,
        ranges.spin.min.to_rad_per_tick(),
        ranges.spin.max.to_rad_per_tick(),
    );

    Orbit::new(
        Length::from_scene_units(radius),
        angle,
        AngularVelocity::from_rad_per_tick(speed),
        AngularVelocity::from_rad_per_tick(spin),
    )
}
