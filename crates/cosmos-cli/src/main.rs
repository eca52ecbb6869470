//! Headless universe viewer.
//!
//! Generates a universe from a fresh random seed and drives it at the target
//! tick rate against an in-memory scene until the process is terminated.

use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use cosmos::{SceneRecorder, UniverseConfig, UniverseState};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let seed: u64 = rand::random();
    let mut scene = SceneRecorder::realtime();
    let mut state = UniverseState::generate(UniverseConfig::default(), seed, &mut scene)
        .context("failed to generate universe")?;

    info!(
        seed,
        bodies = state.body_count(),
        scene_objects = scene.object_count(),
        "starting universe"
    );

    // Never raised here; the process runs until it is killed.
    let stop = AtomicBool::new(false);
    let tally = cosmos::run(&mut state, &mut scene, &stop).context("simulation failed")?;

    info!(
        ticks = state.tick,
        events = tally.total(),
        "universe finished"
    );
    Ok(())
}
