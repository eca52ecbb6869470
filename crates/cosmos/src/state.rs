//! The universe's entity collections and its random stream.

use nalgebra::Point3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::info;

use crate::bodies::{BlackHole, Comet, Galaxy, Moon, NeutronStar, Planet, PlanetId, Star, StarId};
use crate::config::UniverseConfig;
use crate::error::CosmosResult;
use crate::factory::BodyFactory;
use crate::galaxy::generate_galaxy;
use crate::render::RenderAdapter;
use crate::sampling::random_point;

/// Complete state of a running universe.
///
/// Collections only ever grow, so a `StarId` or `PlanetId` handed out once
/// stays valid for the whole run.
#[derive(Debug, Clone)]
pub struct UniverseState {
    /// Ticks completed so far
    pub tick: u64,
    pub config: UniverseConfig,
    pub stars: Vec<Star>,
    pub planets: Vec<Planet>,
    pub moons: Vec<Moon>,
    pub black_holes: Vec<BlackHole>,
    pub galaxies: Vec<Galaxy>,
    pub comets: Vec<Comet>,
    pub neutron_stars: Vec<NeutronStar>,
    /// The one random stream every draw comes from
    pub rng: ChaChaRng,
}

impl UniverseState {
    /// An empty universe. Bodies are added by hand or via `generate`.
    pub fn empty(config: UniverseConfig, seed: u64) -> Self {
        Self {
            tick: 0,
            config,
            stars: Vec::new(),
            planets: Vec::new(),
            moons: Vec::new(),
            black_holes: Vec::new(),
            galaxies: Vec::new(),
            comets: Vec::new(),
            neutron_stars: Vec::new(),
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Validate `config`, set up the scene and populate every startup
    /// collection.
    ///
    /// Stars come first, then planets (planet `i` orbits star
    /// `i % star_count`) each followed by its moons, then black holes, then
    /// galaxies.
    ///
    /// # Example
    /// ```
    /// use cosmos::{SceneRecorder, UniverseConfig, UniverseState};
    ///
    /// let mut scene = SceneRecorder::new();
    /// let state = UniverseState::generate(UniverseConfig::default(), 42, &mut scene).unwrap();
    ///
    /// assert_eq!(state.stars.len(), 30);
    /// assert_eq!(state.planets.len(), 60);
    /// ```
    pub fn generate<R: RenderAdapter>(
        config: UniverseConfig,
        seed: u64,
        renderer: &mut R,
    ) -> CosmosResult<Self> {
        config.validate()?;
        renderer.configure_scene(&config.scene)?;

        let mut state = Self::empty(config, seed);
        let factory = BodyFactory::new(&state.config);

        for _ in 0..state.config.star_count {
            let star = factory.create_star(&mut state.rng, renderer)?;
            state.stars.push(star);
        }

        for i in 0..state.config.planet_count {
            let star = StarId(i % state.config.star_count);
            let star_position = state.stars[star.0].body.position;
            let planet = factory.create_planet(&mut state.rng, renderer, star, star_position)?;

            let planet_id = PlanetId(state.planets.len());
            let planet_position = planet.body.position;
            state.planets.push(planet);

            let moons = factory.create_moons(&mut state.rng, renderer, planet_id, planet_position)?;
            state.moons.extend(moons);
        }

        for _ in 0..state.config.black_hole_count {
            let black_hole = factory.create_black_hole(&mut state.rng, renderer)?;
            state.black_holes.push(black_hole);
        }

        for _ in 0..state.config.galaxy_count {
            let center = random_point(&mut state.rng, state.config.spawn.galaxy);
            let galaxy = generate_galaxy(
                &mut state.rng,
                renderer,
                center,
                state.config.galaxy_star_count,
                &state.config.galaxy_disk,
                state.config.radii.galaxy_star,
            )?;
            state.galaxies.push(galaxy);
        }

        info!(
            seed,
            stars = state.stars.len(),
            planets = state.planets.len(),
            moons = state.moons.len(),
            black_holes = state.black_holes.len(),
            galaxies = state.galaxies.len(),
            galaxy_stars = state.galaxy_star_count(),
            "universe generated"
        );

        Ok(state)
    }

    pub fn add_star(&mut self, star: Star) -> StarId {
        self.stars.push(star);
        StarId(self.stars.len() - 1)
    }

    /// # Panics
    /// If the planet's star has not been added yet.
    pub fn add_planet(&mut self, planet: Planet) -> PlanetId {
        assert!(
            planet.star.0 < self.stars.len(),
            "planet references missing star {}",
            planet.star.0
        );
        self.planets.push(planet);
        PlanetId(self.planets.len() - 1)
    }

    /// # Panics
    /// If the moon's planet has not been added yet.
    pub fn add_moon(&mut self, moon: Moon) {
        assert!(
            moon.planet.0 < self.planets.len(),
            "moon references missing planet {}",
            moon.planet.0
        );
        self.moons.push(moon);
    }

    pub fn add_black_hole(&mut self, black_hole: BlackHole) -> usize {
        self.black_holes.push(black_hole);
        self.black_holes.len() - 1
    }

    pub fn add_galaxy(&mut self, galaxy: Galaxy) {
        self.galaxies.push(galaxy);
    }

    pub fn add_comet(&mut self, comet: Comet) -> usize {
        self.comets.push(comet);
        self.comets.len() - 1
    }

    pub fn add_neutron_star(&mut self, neutron_star: NeutronStar) -> usize {
        self.neutron_stars.push(neutron_star);
        self.neutron_stars.len() - 1
    }

    pub fn star_position(&self, id: StarId) -> Option<Point3<f64>> {
        self.stars.get(id.0).map(|s| s.body.position)
    }

    pub fn planet_position(&self, id: PlanetId) -> Option<Point3<f64>> {
        self.planets.get(id.0).map(|p| p.body.position)
    }

    /// Moons orbiting the given planet
    pub fn moons_of(&self, id: PlanetId) -> impl Iterator<Item = &Moon> {
        self.moons.iter().filter(move |m| m.planet == id)
    }

    pub fn galaxy_star_count(&self) -> usize {
        self.galaxies.iter().map(Galaxy::star_count).sum()
    }

    /// Every drawable body, galaxy stars included
    pub fn body_count(&self) -> usize {
        self.stars.len()
            + self.planets.len()
            + self.moons.len()
            + self.black_holes.len()
            + self.galaxy_star_count()
            + self.comets.len()
            + self.neutron_stars.len()
    }
}
