//! Plain attribute bundles for everything in the universe.
//!
//! Parents are referenced by index into the owning collection of
//! `UniverseState`, never by pointer, so a planet cannot keep its star alive
//! and a star never needs to know about its planets.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use units::{AngularVelocity, Length};

use crate::color::BodyColor;
use crate::render::RenderHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetId(pub usize);

/// A drawable sphere: where it is, how big, what color, and the renderer's
/// handle for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPoint {
    pub position: Point3<f64>,
    pub radius: Length,
    pub color: BodyColor,
    pub handle: RenderHandle,
}

/// Circular orbit in the horizontal (XZ) plane of a parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub radius: Length,
    /// Current phase in radians. Grows without wrapping.
    pub angle: f64,
    pub speed: AngularVelocity,
    /// Cosmetic self-rotation, unrelated to the orbit
    pub spin: AngularVelocity,
}

impl Orbit {
    pub fn new(radius: Length, angle: f64, speed: AngularVelocity, spin: AngularVelocity) -> Self {
        Self {
            radius,
            angle,
            speed,
            spin,
        }
    }

    /// Advance the phase by one tick.
    pub fn advance(&mut self) {
        self.angle += self.speed.to_rad_per_tick();
    }

    /// Polar offset from the parent at the current phase.
    pub fn offset(&self) -> Vector3<f64> {
        let r = self.radius.to_scene_units();
        Vector3::new(r * self.angle.cos(), 0.0, r * self.angle.sin())
    }

    /// Offset used for first placement, before any tick has run.
    pub fn resting_offset(&self) -> Vector3<f64> {
        Vector3::new(self.radius.to_scene_units(), 0.0, 0.0)
    }

    pub fn position_about(&self, parent: &Point3<f64>) -> Point3<f64> {
        parent + self.offset()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub body: CelestialPoint,
    /// Point light co-located with the star
    pub light: RenderHandle,
}

impl Star {
    pub fn has_gone_supernova(&self) -> bool {
        self.body.color == BodyColor::SUPERNOVA
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub body: CelestialPoint,
    pub star: StarId,
    pub orbit: Orbit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moon {
    pub body: CelestialPoint,
    pub planet: PlanetId,
    pub orbit: Orbit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackHole {
    pub body: CelestialPoint,
}

impl BlackHole {
    pub fn is_active(&self) -> bool {
        self.body.color == BodyColor::ACTIVE_BLACK_HOLE
    }
}

/// One star of a galaxy disk.
///
/// The offset from the galaxy centre is authoritative. Galaxy centres sit far
/// enough out that a world coordinate cannot resolve the disk, so
/// `body.position` is only ever derived as centre plus offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyStar {
    pub body: CelestialPoint,
    pub offset: Vector3<f64>,
}

impl GalaxyStar {
    pub fn position_about(&self, center: &Point3<f64>) -> Point3<f64> {
        center + self.offset
    }
}

/// Stars scattered over one galaxy disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    pub center: Point3<f64>,
    pub stars: Vec<GalaxyStar>,
}

impl Galaxy {
    pub fn star_count(&self) -> usize {
        self.stars.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comet {
    pub body: CelestialPoint,
    /// Scene units per tick
    pub velocity: Vector3<f64>,
}

impl Comet {
    /// Move one tick along the velocity. Nothing clamps or slows it.
    pub fn drift(&mut self) {
        self.body.position += self.velocity;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutronStar {
    pub body: CelestialPoint,
}
