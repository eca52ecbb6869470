//! Generate a universe, run it for ten simulated seconds without pacing and
//! print what happened.
//!
//! Run with: `cargo run -p cosmos --example bounded_run`

use cosmos::{SceneRecorder, UniverseConfig, UniverseState, run_ticks};

fn main() {
    let mut scene = SceneRecorder::new();
    let config = UniverseConfig::default();
    let ticks = u64::from(config.tick_rate) * 10;

    let mut state = match UniverseState::generate(config, 42, &mut scene) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Failed to generate universe: {err}");
            return;
        }
    };

    println!("=== Initial Universe ===");
    println!("Stars: {}", state.stars.len());
    println!("Planets: {}", state.planets.len());
    println!("Moons: {}", state.moons.len());
    println!("Black holes: {}", state.black_holes.len());
    println!("Galaxy stars: {}", state.galaxy_star_count());

    let tally = match run_ticks(&mut state, &mut scene, ticks) {
        Ok(tally) => tally,
        Err(err) => {
            eprintln!("Simulation failed: {err}");
            return;
        }
    };

    println!("\n=== After {} ticks ===", state.tick);
    println!("Supernovae: {}", tally.supernovae);
    println!("Black hole flares: {}", tally.black_hole_flares);
    println!("Comets: {}", state.comets.len());
    println!("Neutron stars: {}", state.neutron_stars.len());
    println!("Black hole mergers: {}", tally.black_hole_mergers);
    println!("Scene objects: {}", scene.object_count());
}
