use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_chacha::ChaChaRng;
use units::Length;

/// Sample a vector whose components are independently uniform in [-scale, scale]
///
/// # Arguments
/// * `rng` - Random number generator
/// * `scale` - Half-extent of the sampling cube; zero yields the zero vector
///
/// # Panics
/// If `scale` is negative or not finite. `UniverseConfig::validate` rejects
/// such extents before any sampling happens.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use cosmos::sampling::random_vector;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let v = random_vector(&mut rng, 2.0);
/// assert!(v.iter().all(|c| c.abs() <= 2.0));
/// ```
pub fn random_vector(rng: &mut ChaChaRng, scale: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-scale..=scale),
        rng.random_range(-scale..=scale),
        rng.random_range(-scale..=scale),
    )
}

/// Sample a position inside the cube of half-extent `scale` around the origin
pub fn random_point(rng: &mut ChaChaRng, scale: Length) -> Point3<f64> {
    Point3::from(random_vector(rng, scale.to_scene_units()))
}

/// Uniform draw in [min, max]. A degenerate range returns `min`.
pub fn sample_uniform(rng: &mut ChaChaRng, min: f64, max: f64) -> f64 {
    if min >= max {
        min
    } else {
        rng.random_range(min..=max)
    }
}

/// Uniform phase in [0, 2π * turns)
pub fn sample_phase(rng: &mut ChaChaRng, turns: f64) -> f64 {
    let upper = TAU * turns;
    if upper <= 0.0 {
        0.0
    } else {
        rng.random_range(0.0..upper)
    }
}

/// Uniform integer count in 0..=max
pub fn sample_count(rng: &mut ChaChaRng, max: usize) -> usize {
    rng.random_range(0..=max)
}

/// A single Bernoulli trial with success probability `probability`
pub fn bernoulli(rng: &mut ChaChaRng, probability: f64) -> bool {
    rng.random::<f64>() < probability
}
