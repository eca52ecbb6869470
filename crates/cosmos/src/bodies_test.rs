use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use units::{AngularVelocity, Length};

use crate::bodies::{BlackHole, CelestialPoint, Comet, Orbit};
use crate::color::BodyColor;
use crate::render::RenderHandle;

fn point(position: Point3<f64>, color: BodyColor) -> CelestialPoint {
    CelestialPoint {
        position,
        radius: Length::from_scene_units(1.0),
        color,
        handle: RenderHandle(0),
    }
}

#[test]
fn orbit_offset_follows_phase() {
    let mut orbit = Orbit::new(
        Length::from_scene_units(10.0),
        0.0,
        AngularVelocity::from_rad_per_tick(FRAC_PI_2),
        AngularVelocity::zero(),
    );

    assert_eq!(orbit.offset(), Vector3::new(10.0, 0.0, 0.0));

    orbit.advance();
    let offset = orbit.offset();
    assert_relative_eq!(offset.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(offset.z, 10.0, epsilon = 1e-12);
    assert_eq!(offset.y, 0.0);
}

#[test]
fn resting_offset_ignores_phase() {
    let orbit = Orbit::new(
        Length::from_scene_units(3.0),
        1.2,
        AngularVelocity::zero(),
        AngularVelocity::zero(),
    );
    assert_eq!(orbit.resting_offset(), Vector3::new(3.0, 0.0, 0.0));
}

#[test]
fn position_about_parent() {
    let orbit = Orbit::new(
        Length::from_scene_units(2.0),
        0.0,
        AngularVelocity::zero(),
        AngularVelocity::zero(),
    );
    let parent = Point3::new(1.0, 5.0, -3.0);
    assert_eq!(orbit.position_about(&parent), Point3::new(3.0, 5.0, -3.0));
}

#[test]
fn comet_drift_is_linear() {
    let mut comet = Comet {
        body: point(Point3::new(1.0, 2.0, 3.0), BodyColor::COMET),
        velocity: Vector3::new(0.5, -0.25, 2.0),
    };

    for _ in 0..4 {
        comet.drift();
    }
    assert_eq!(comet.body.position, Point3::new(3.0, 1.0, 11.0));
}

#[test]
fn black_hole_activity_tracks_color() {
    let mut hole = BlackHole {
        body: point(Point3::origin(), BodyColor::BLACK_HOLE),
    };
    assert!(!hole.is_active());

    hole.body.color = BodyColor::ACTIVE_BLACK_HOLE;
    assert!(hole.is_active());
}
