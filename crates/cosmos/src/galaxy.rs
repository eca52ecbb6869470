//! Galaxy disks.
//!
//! Points are scattered over a flat annulus: the polar angle covers
//! `arm_turns` full turns and the radius is drawn independently of it, so the
//! result is a filled disk rather than a true logarithmic spiral. Extra turns
//! only change how the draws are distributed over the angle range.

use nalgebra::{Point3, Rotation3, Vector3};
use rand_chacha::ChaChaRng;
use units::Length;

use crate::bodies::{Galaxy, GalaxyStar};
use crate::color::BodyColor;
use crate::config::GalaxyDisk;
use crate::error::CosmosResult;
use crate::factory::emissive_sphere;
use crate::render::RenderAdapter;
use crate::sampling::{sample_phase, sample_uniform};

/// Sample one point of a galaxy disk as an offset from the galaxy centre.
pub fn sample_disk_offset(rng: &mut ChaChaRng, disk: &GalaxyDisk) -> Vector3<f64> {
    let angle = sample_phase(rng, disk.arm_turns);
    let radius = sample_uniform(
        rng,
        disk.inner_radius.to_scene_units(),
        disk.outer_radius.to_scene_units(),
    );
    let half = disk.half_thickness.to_scene_units();
    let height = sample_uniform(rng, -half, half);

    Vector3::new(radius * angle.cos(), height, radius * angle.sin())
}

/// Generate `star_count` galaxy stars around `center` and register each one
/// with the renderer.
///
/// Each call is an independent draw; there is no way to regenerate the same
/// galaxy other than reseeding the RNG.
pub fn generate_galaxy<R: RenderAdapter>(
    rng: &mut ChaChaRng,
    renderer: &mut R,
    center: Point3<f64>,
    star_count: usize,
    disk: &GalaxyDisk,
    star_radius: Length,
) -> CosmosResult<Galaxy> {
    let mut stars = Vec::with_capacity(star_count);
    for _ in 0..star_count {
        let offset = sample_disk_offset(rng, disk);
        let body = emissive_sphere(
            renderer,
            center + offset,
            star_radius,
            BodyColor::GALAXY_STAR,
        )?;
        stars.push(GalaxyStar { body, offset });
    }
    Ok(Galaxy { center, stars })
}

/// Rotation by `angle` radians about the vertical (+Y) axis.
pub fn vertical_rotation(angle: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle)
}
