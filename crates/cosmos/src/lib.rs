//! A procedurally generated toy universe.
//!
//! Stars, planets, moons, black holes, galaxies, comets and neutron stars are
//! generated once from a seeded random stream and then advanced tick by tick:
//! planets and moons follow closed-form circular orbits, and a handful of
//! memoryless random events (supernovae, flares, spawns, mergers) mutate the
//! universe as it runs. Drawing is delegated to a `RenderAdapter`.

pub mod bodies;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod events;
pub mod factory;
pub mod galaxy;
pub mod kinematics;
pub mod pacing;
pub mod render;
pub mod sampling;
pub mod state;

#[cfg(test)]
mod bodies_test;
#[cfg(test)]
mod events_test;

pub use bodies::{
    BlackHole, CelestialPoint, Comet, Galaxy, GalaxyStar, Moon, NeutronStar, Orbit, Planet,
    PlanetId, Star, StarId,
};
pub use color::{BodyColor, Rgb};
pub use config::{GalaxyPivot, UniverseConfig};
pub use driver::{run, run_ticks, step};
pub use error::{CosmosError, CosmosResult};
pub use events::{CosmicEvent, EventTally};
pub use factory::BodyFactory;
pub use pacing::FramePacer;
pub use render::{RenderAdapter, RenderError, RenderHandle, SceneRecorder, SceneSettings};
pub use state::UniverseState;
