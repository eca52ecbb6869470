//! Stochastic per-tick events.
//!
//! Every tick rolls one independent Bernoulli trial per event kind, in a
//! fixed order. A triggered event is applied immediately and never undone.

use nalgebra::Point3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bodies::StarId;
use crate::color::BodyColor;
use crate::error::CosmosResult;
use crate::factory::BodyFactory;
use crate::kinematics::drift_comets;
use crate::render::RenderAdapter;
use crate::sampling::bernoulli;
use crate::state::UniverseState;

/// Something that happened to the universe during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CosmicEvent {
    Supernova {
        star: StarId,
    },
    BlackHoleFlare {
        black_hole: usize,
    },
    CometSpawned {
        comet: usize,
    },
    NeutronStarSpawned {
        neutron_star: usize,
    },
    BlackHoleMerger {
        first: usize,
        second: usize,
        midpoint: Point3<f64>,
    },
}

/// Running count of events by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTally {
    pub supernovae: u64,
    pub black_hole_flares: u64,
    pub comets_spawned: u64,
    pub neutron_stars_spawned: u64,
    pub black_hole_mergers: u64,
}

impl EventTally {
    pub fn record(&mut self, event: &CosmicEvent) {
        match event {
            CosmicEvent::Supernova { .. } => self.supernovae += 1,
            CosmicEvent::BlackHoleFlare { .. } => self.black_hole_flares += 1,
            CosmicEvent::CometSpawned { .. } => self.comets_spawned += 1,
            CosmicEvent::NeutronStarSpawned { .. } => self.neutron_stars_spawned += 1,
            CosmicEvent::BlackHoleMerger { .. } => self.black_hole_mergers += 1,
        }
    }

    pub fn record_all<'a>(&mut self, events: impl IntoIterator<Item = &'a CosmicEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn total(&self) -> u64 {
        self.supernovae
            + self.black_hole_flares
            + self.comets_spawned
            + self.neutron_stars_spawned
            + self.black_hole_mergers
    }
}

/// Roll all five trials for this tick and apply whichever succeed.
///
/// Order: supernova, black-hole flare, comet spawn, neutron-star spawn,
/// comet drift, black-hole merger. A comet spawned this tick drifts this
/// tick. Each trial consumes a draw even when its target collection is
/// empty, so the random stream does not depend on state.
pub fn roll_events<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<Vec<CosmicEvent>> {
    let rates = state.config.events.clone();
    let mut events = Vec::new();

    if bernoulli(&mut state.rng, rates.supernova) && !state.stars.is_empty() {
        let star = StarId(state.rng.random_range(0..state.stars.len()));
        events.push(trigger_supernova(state, renderer, star)?);
    }

    if bernoulli(&mut state.rng, rates.black_hole_flare) && !state.black_holes.is_empty() {
        let index = state.rng.random_range(0..state.black_holes.len());
        events.push(trigger_black_hole_flare(state, renderer, index)?);
    }

    if bernoulli(&mut state.rng, rates.comet_spawn) {
        events.extend(spawn_comet(state, renderer)?);
    }

    if bernoulli(&mut state.rng, rates.neutron_star_spawn) {
        events.extend(spawn_neutron_star(state, renderer)?);
    }

    drift_comets(state, renderer)?;

    if bernoulli(&mut state.rng, rates.black_hole_merger) && state.black_holes.len() >= 2 {
        let picked = rand::seq::index::sample(&mut state.rng, state.black_holes.len(), 2);
        events.push(merge_black_holes(
            state,
            renderer,
            picked.index(0),
            picked.index(1),
        )?);
    }

    Ok(events)
}

/// Turn a star red for good. Repeat supernovae on the same star are allowed
/// and change nothing visible.
pub fn trigger_supernova<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
    star: StarId,
) -> CosmosResult<CosmicEvent> {
    let body = &mut state.stars[star.0].body;
    body.color = BodyColor::SUPERNOVA;
    renderer.set_color(body.handle, body.color)?;

    info!(tick = state.tick, star = star.0, "supernova");
    Ok(CosmicEvent::Supernova { star })
}

pub fn trigger_black_hole_flare<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
    index: usize,
) -> CosmosResult<CosmicEvent> {
    let body = &mut state.black_holes[index].body;
    body.color = BodyColor::ACTIVE_BLACK_HOLE;
    renderer.set_color(body.handle, body.color)?;

    info!(tick = state.tick, black_hole = index, "black hole flare");
    Ok(CosmicEvent::BlackHoleFlare { black_hole: index })
}

/// Append a new comet, unless the comet cap has been reached.
pub fn spawn_comet<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<Option<CosmicEvent>> {
    if state.comets.len() >= state.config.max_comets {
        debug!(
            tick = state.tick,
            cap = state.config.max_comets,
            "comet cap reached, spawn skipped"
        );
        return Ok(None);
    }

    let comet = BodyFactory::new(&state.config).create_comet(&mut state.rng, renderer)?;
    let index = state.add_comet(comet);

    info!(tick = state.tick, comet = index, "comet spawned");
    Ok(Some(CosmicEvent::CometSpawned { comet: index }))
}

/// Append a new neutron star, unless the neutron star cap has been reached.
pub fn spawn_neutron_star<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<Option<CosmicEvent>> {
    if state.neutron_stars.len() >= state.config.max_neutron_stars {
        debug!(
            tick = state.tick,
            cap = state.config.max_neutron_stars,
            "neutron star cap reached, spawn skipped"
        );
        return Ok(None);
    }

    let neutron_star =
        BodyFactory::new(&state.config).create_neutron_star(&mut state.rng, renderer)?;
    let index = state.add_neutron_star(neutron_star);

    info!(
        tick = state.tick,
        neutron_star = index,
        "neutron star spawned"
    );
    Ok(Some(CosmicEvent::NeutronStarSpawned {
        neutron_star: index,
    }))
}

/// Move two black holes to their common midpoint and light both up.
///
/// Both survive the merger; there is no removal path.
pub fn merge_black_holes<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
    first: usize,
    second: usize,
) -> CosmosResult<CosmicEvent> {
    let midpoint = nalgebra::center(
        &state.black_holes[first].body.position,
        &state.black_holes[second].body.position,
    );

    for index in [first, second] {
        let body = &mut state.black_holes[index].body;
        body.position = midpoint;
        body.color = BodyColor::ACTIVE_BLACK_HOLE;
        renderer.set_position(body.handle, midpoint)?;
        renderer.set_color(body.handle, body.color)?;
    }

    info!(
        tick = state.tick,
        first,
        second,
        x = midpoint.x,
        y = midpoint.y,
        z = midpoint.z,
        "black hole merger"
    );
    Ok(CosmicEvent::BlackHoleMerger {
        first,
        second,
        midpoint,
    })
}
