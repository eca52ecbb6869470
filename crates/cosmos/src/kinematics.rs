//! Deterministic per-tick motion.
//!
//! Planets must be advanced before moons: a moon is placed relative to its
//! planet's position from the same tick. Comet drift lives here too but runs
//! from the event pass, after the tick's spawns.

use nalgebra::Vector3;

use crate::config::GalaxyPivot;
use crate::error::CosmosResult;
use crate::galaxy::vertical_rotation;
use crate::render::RenderAdapter;
use crate::state::UniverseState;

/// Run the orbital part of a tick: galaxies, star and black hole spin,
/// planets, moons.
pub fn advance<R: RenderAdapter>(state: &mut UniverseState, renderer: &mut R) -> CosmosResult<()> {
    rotate_galaxies(state, renderer)?;
    spin_stars_and_black_holes(state, renderer)?;
    advance_planets(state, renderer)?;
    advance_moons(state, renderer)
}

/// Turn every galaxy about the vertical axis through the configured pivot.
///
/// Star offsets always turn; the centre only moves when the pivot is the
/// world origin. World positions are re-derived from centre and offset, so
/// rounding never accumulates in them.
pub fn rotate_galaxies<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<()> {
    let angle = state.config.spin.galaxy.to_rad_per_tick();
    if angle == 0.0 {
        return Ok(());
    }
    let rotation = vertical_rotation(angle);
    let pivot = state.config.galaxy_pivot;

    for galaxy in &mut state.galaxies {
        if pivot == GalaxyPivot::WorldOrigin {
            galaxy.center = rotation * galaxy.center;
        }
        for star in &mut galaxy.stars {
            star.offset = rotation * star.offset;
            star.body.position = star.position_about(&galaxy.center);
            renderer.set_position(star.body.handle, star.body.position)?;
            renderer.rotate(star.body.handle, angle, Vector3::y_axis())?;
        }
    }
    Ok(())
}

/// Cosmetic self-rotation. Positions do not change.
pub fn spin_stars_and_black_holes<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<()> {
    let star_spin = state.config.spin.star.to_rad_per_tick();
    for star in &state.stars {
        renderer.rotate(star.body.handle, star_spin, Vector3::y_axis())?;
    }

    let hole_spin = state.config.spin.black_hole.to_rad_per_tick();
    for black_hole in &state.black_holes {
        renderer.rotate(black_hole.body.handle, hole_spin, Vector3::y_axis())?;
    }
    Ok(())
}

/// Advance each planet's phase and re-derive its position from its star's
/// current position.
pub fn advance_planets<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<()> {
    let stars = &state.stars;
    for planet in &mut state.planets {
        planet.orbit.advance();
        let star_position = stars[planet.star.0].body.position;
        planet.body.position = planet.orbit.position_about(&star_position);

        renderer.set_position(planet.body.handle, planet.body.position)?;
        renderer.rotate(
            planet.body.handle,
            planet.orbit.spin.to_rad_per_tick(),
            Vector3::y_axis(),
        )?;
    }
    Ok(())
}

/// Same as `advance_planets`, one level down.
pub fn advance_moons<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<()> {
    let planets = &state.planets;
    for moon in &mut state.moons {
        moon.orbit.advance();
        let planet_position = planets[moon.planet.0].body.position;
        moon.body.position = moon.orbit.position_about(&planet_position);

        renderer.set_position(moon.body.handle, moon.body.position)?;
        renderer.rotate(
            moon.body.handle,
            moon.orbit.spin.to_rad_per_tick(),
            Vector3::y_axis(),
        )?;
    }
    Ok(())
}

/// Move every comet one tick along its velocity.
pub fn drift_comets<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<()> {
    for comet in &mut state.comets {
        comet.drift();
        renderer.set_position(comet.body.handle, comet.body.position)?;
    }
    Ok(())
}
