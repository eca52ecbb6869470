//! Main loop.
//!
//! Each tick: wait for the frame boundary, advance orbits, then roll events
//! (which also drift comets, spawned ones included).

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::error::CosmosResult;
use crate::events::{CosmicEvent, EventTally, roll_events};
use crate::kinematics;
use crate::render::RenderAdapter;
use crate::state::UniverseState;

/// Seconds of simulated wall-clock time between progress summaries
const SUMMARY_INTERVAL_SECONDS: u64 = 60;

/// Execute one tick without pacing.
///
/// # Returns
/// Events that fired during the tick
pub fn step<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
) -> CosmosResult<Vec<CosmicEvent>> {
    kinematics::advance(state, renderer)?;
    let events = roll_events(state, renderer)?;
    state.tick += 1;
    Ok(events)
}

/// Run exactly `ticks` paced ticks.
pub fn run_ticks<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
    ticks: u64,
) -> CosmosResult<EventTally> {
    let mut tally = EventTally::default();
    for _ in 0..ticks {
        paced_step(state, renderer, &mut tally)?;
    }
    Ok(tally)
}

/// Run paced ticks until `stop` is set.
///
/// The flag is checked before every tick, so at most one tick runs after it
/// is raised.
pub fn run<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
    stop: &AtomicBool,
) -> CosmosResult<EventTally> {
    let mut tally = EventTally::default();
    let start_tick = state.tick;
    info!(tick_rate = state.config.tick_rate, "simulation started");

    while !stop.load(Ordering::Relaxed) {
        paced_step(state, renderer, &mut tally)?;
    }

    info!(
        ticks = state.tick - start_tick,
        events = tally.total(),
        "simulation stopped"
    );
    Ok(tally)
}

fn paced_step<R: RenderAdapter>(
    state: &mut UniverseState,
    renderer: &mut R,
    tally: &mut EventTally,
) -> CosmosResult<()> {
    renderer.pace(state.config.tick_rate);
    let events = step(state, renderer)?;
    tally.record_all(&events);

    let interval = u64::from(state.config.tick_rate) * SUMMARY_INTERVAL_SECONDS;
    if interval > 0 && state.tick % interval == 0 {
        debug!(
            tick = state.tick,
            comets = state.comets.len(),
            neutron_stars = state.neutron_stars.len(),
            supernovae = tally.supernovae,
            mergers = tally.black_hole_mergers,
            "progress"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EventRates, UniverseConfig};
    use crate::render::SceneRecorder;

    fn quiet_universe(scene: &mut SceneRecorder) -> UniverseState {
        let config = UniverseConfig {
            events: EventRates::quiet(),
            ..UniverseConfig::default()
        };
        UniverseState::generate(config, 42, scene).unwrap()
    }

    #[test]
    fn step_advances_tick() {
        let mut scene = SceneRecorder::new();
        let mut state = quiet_universe(&mut scene);

        let events = step(&mut state, &mut scene).unwrap();

        assert!(events.is_empty());
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn run_ticks_paces_every_tick() {
        let mut scene = SceneRecorder::new();
        let mut state = quiet_universe(&mut scene);

        let tally = run_ticks(&mut state, &mut scene, 25).unwrap();

        assert_eq!(state.tick, 25);
        assert_eq!(scene.frames(), 25);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn run_returns_immediately_when_already_stopped() {
        let mut scene = SceneRecorder::new();
        let mut state = quiet_universe(&mut scene);
        let stop = AtomicBool::new(true);

        run(&mut state, &mut scene, &stop).unwrap();

        assert_eq!(state.tick, 0);
    }

    #[test]
    fn run_stops_when_flag_is_raised_by_renderer() {
        use crate::render::{RenderError, RenderHandle};
        use crate::color::BodyColor;
        use nalgebra::{Point3, Unit, Vector3};
        use units::Length;

        /// Raises the stop flag after a fixed number of frames.
        struct StopAfter<'a> {
            inner: SceneRecorder,
            remaining: u32,
            stop: &'a AtomicBool,
        }

        impl RenderAdapter for StopAfter<'_> {
            fn create_sphere(
                &mut self,
                position: Point3<f64>,
                radius: Length,
                color: BodyColor,
                emissive: bool,
            ) -> Result<RenderHandle, RenderError> {
                self.inner.create_sphere(position, radius, color, emissive)
            }

            fn create_point_light(
                &mut self,
                position: Point3<f64>,
                color: BodyColor,
            ) -> Result<RenderHandle, RenderError> {
                self.inner.create_point_light(position, color)
            }

            fn set_position(
                &mut self,
                handle: RenderHandle,
                position: Point3<f64>,
            ) -> Result<(), RenderError> {
                self.inner.set_position(handle, position)
            }

            fn set_color(
                &mut self,
                handle: RenderHandle,
                color: BodyColor,
            ) -> Result<(), RenderError> {
                self.inner.set_color(handle, color)
            }

            fn rotate(
                &mut self,
                handle: RenderHandle,
                angle: f64,
                axis: Unit<Vector3<f64>>,
            ) -> Result<(), RenderError> {
                self.inner.rotate(handle, angle, axis)
            }

            fn pace(&mut self, tick_rate: u32) {
                self.inner.pace(tick_rate);
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.stop.store(true, Ordering::Relaxed);
                }
            }
        }

        let stop = AtomicBool::new(false);
        let mut renderer = StopAfter {
            inner: SceneRecorder::new(),
            remaining: 10,
            stop: &stop,
        };
        let config = UniverseConfig {
            events: EventRates::quiet(),
            ..UniverseConfig::default()
        };
        let mut state = UniverseState::generate(config, 42, &mut renderer).unwrap();

        run(&mut state, &mut renderer, &stop).unwrap();

        // The tick in flight when the flag goes up still completes
        assert_eq!(state.tick, 10);
    }
}
