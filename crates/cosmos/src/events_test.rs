use nalgebra::Point3;
use units::Length;

use crate::bodies::{BlackHole, CelestialPoint, Star, StarId};
use crate::color::BodyColor;
use crate::config::{EventRates, UniverseConfig};
use crate::driver::step;
use crate::events::{
    CosmicEvent, EventTally, merge_black_holes, roll_events, spawn_comet, spawn_neutron_star,
    trigger_black_hole_flare, trigger_supernova,
};
use crate::factory::emissive_sphere;
use crate::render::{RenderAdapter, SceneRecorder};
use crate::state::UniverseState;

fn state_with(events: EventRates) -> UniverseState {
    let config = UniverseConfig {
        events,
        ..UniverseConfig::default()
    };
    UniverseState::empty(config, 42)
}

fn sphere(scene: &mut SceneRecorder, position: Point3<f64>, color: BodyColor) -> CelestialPoint {
    emissive_sphere(scene, position, Length::from_scene_units(1.0), color).unwrap()
}

fn add_black_hole(state: &mut UniverseState, scene: &mut SceneRecorder, position: Point3<f64>) {
    let body = sphere(scene, position, BodyColor::BLACK_HOLE);
    state.add_black_hole(BlackHole { body });
}

fn add_star(state: &mut UniverseState, scene: &mut SceneRecorder) {
    let body = sphere(scene, Point3::origin(), BodyColor::STAR);
    let light = scene.create_point_light(Point3::origin(), BodyColor::White).unwrap();
    state.add_star(Star { body, light });
}

#[test]
fn merger_moves_both_to_midpoint() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates::quiet());
    add_black_hole(&mut state, &mut scene, Point3::new(0.0, 0.0, 0.0));
    add_black_hole(&mut state, &mut scene, Point3::new(10.0, 0.0, 0.0));

    let event = merge_black_holes(&mut state, &mut scene, 0, 1).unwrap();

    let midpoint = Point3::new(5.0, 0.0, 0.0);
    assert_eq!(
        event,
        CosmicEvent::BlackHoleMerger {
            first: 0,
            second: 1,
            midpoint
        }
    );
    for hole in &state.black_holes {
        assert_eq!(hole.body.position, midpoint);
        assert!(hole.is_active());
        let recorded = scene.object(hole.body.handle).unwrap();
        assert_eq!(recorded.position, midpoint);
        assert_eq!(recorded.color, BodyColor::White);
    }
}

#[test]
fn certain_merger_triggers_from_roll() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        black_hole_merger: 1.0,
        ..EventRates::quiet()
    });
    add_black_hole(&mut state, &mut scene, Point3::new(0.0, 0.0, 0.0));
    add_black_hole(&mut state, &mut scene, Point3::new(10.0, 0.0, 0.0));

    let events = roll_events(&mut state, &mut scene).unwrap();

    assert_eq!(events.len(), 1);
    match &events[0] {
        CosmicEvent::BlackHoleMerger { first, second, .. } => assert_ne!(first, second),
        other => panic!("Expected merger, got {:?}", other),
    }
    assert!(
        state
            .black_holes
            .iter()
            .all(|h| h.body.position == Point3::new(5.0, 0.0, 0.0))
    );
}

#[test]
fn merger_needs_two_black_holes() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        black_hole_merger: 1.0,
        ..EventRates::quiet()
    });
    add_black_hole(&mut state, &mut scene, Point3::new(3.0, 3.0, 3.0));

    let events = roll_events(&mut state, &mut scene).unwrap();

    assert!(events.is_empty());
    assert_eq!(
        state.black_holes[0].body.position,
        Point3::new(3.0, 3.0, 3.0)
    );
    assert!(!state.black_holes[0].is_active());
}

#[test]
fn merger_picks_distinct_pairs() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        black_hole_merger: 1.0,
        ..EventRates::quiet()
    });
    for i in 0..5 {
        add_black_hole(&mut state, &mut scene, Point3::new(i as f64, 0.0, 0.0));
    }

    for _ in 0..200 {
        for event in roll_events(&mut state, &mut scene).unwrap() {
            if let CosmicEvent::BlackHoleMerger { first, second, .. } = event {
                assert_ne!(first, second);
                assert!(first < 5 && second < 5);
            }
        }
    }
}

#[test]
fn supernova_is_permanent() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates::quiet());
    add_star(&mut state, &mut scene);
    add_star(&mut state, &mut scene);

    let event = trigger_supernova(&mut state, &mut scene, StarId(1)).unwrap();
    assert_eq!(event, CosmicEvent::Supernova { star: StarId(1) });

    for _ in 0..100 {
        roll_events(&mut state, &mut scene).unwrap();
    }
    assert!(state.stars[1].has_gone_supernova());
    assert!(!state.stars[0].has_gone_supernova());
    assert_eq!(
        scene.object(state.stars[1].body.handle).unwrap().color,
        BodyColor::Red
    );
}

#[test]
fn certain_supernova_hits_some_star() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        supernova: 1.0,
        ..EventRates::quiet()
    });
    for _ in 0..3 {
        add_star(&mut state, &mut scene);
    }

    let events = roll_events(&mut state, &mut scene).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(
        state.stars.iter().filter(|s| s.has_gone_supernova()).count(),
        1
    );
}

#[test]
fn events_without_targets_do_nothing() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        supernova: 1.0,
        black_hole_flare: 1.0,
        black_hole_merger: 1.0,
        ..EventRates::quiet()
    });

    let events = roll_events(&mut state, &mut scene).unwrap();

    assert!(events.is_empty());
    assert_eq!(scene.object_count(), 0);
}

#[test]
fn flare_activates_black_hole() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates::quiet());
    add_black_hole(&mut state, &mut scene, Point3::origin());

    trigger_black_hole_flare(&mut state, &mut scene, 0).unwrap();

    assert!(state.black_holes[0].is_active());
    assert_eq!(state.black_holes[0].body.position, Point3::origin());
}

#[test]
fn spawns_append_and_respect_caps() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates::quiet());
    state.config.max_comets = 2;
    state.config.max_neutron_stars = 1;

    assert!(spawn_comet(&mut state, &mut scene).unwrap().is_some());
    assert!(spawn_comet(&mut state, &mut scene).unwrap().is_some());
    assert!(spawn_comet(&mut state, &mut scene).unwrap().is_none());
    assert_eq!(state.comets.len(), 2);

    assert_eq!(
        spawn_neutron_star(&mut state, &mut scene).unwrap(),
        Some(CosmicEvent::NeutronStarSpawned { neutron_star: 0 })
    );
    assert!(
        spawn_neutron_star(&mut state, &mut scene)
            .unwrap()
            .is_none()
    );
    assert_eq!(state.neutron_stars.len(), 1);
    assert_eq!(scene.object_count(), 3);
}

#[test]
fn certain_spawns_grow_collections_every_tick() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        comet_spawn: 1.0,
        neutron_star_spawn: 1.0,
        ..EventRates::quiet()
    });

    for tick in 1..=20 {
        roll_events(&mut state, &mut scene).unwrap();
        assert_eq!(state.comets.len(), tick);
        assert_eq!(state.neutron_stars.len(), tick);
    }
}

#[test]
fn comet_drifts_on_its_spawn_tick() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        comet_spawn: 1.0,
        ..EventRates::quiet()
    });

    step(&mut state, &mut scene).unwrap();

    let first = state.comets[0].clone();
    let first_spawn = scene.object(first.body.handle).unwrap().spawn_position;
    assert_eq!(first.body.position, first_spawn + first.velocity);

    step(&mut state, &mut scene).unwrap();

    // The older comet has drifted twice, the new one once
    let first = &state.comets[0];
    assert_eq!(
        first.body.position,
        first_spawn + first.velocity + first.velocity
    );
    let second = &state.comets[1];
    let second_spawn = scene.object(second.body.handle).unwrap().spawn_position;
    assert_eq!(second.body.position, second_spawn + second.velocity);
    assert_eq!(
        scene.object(second.body.handle).unwrap().position,
        second.body.position
    );
}

#[test]
fn spawn_rates_match_probabilities() {
    let mut scene = SceneRecorder::new();
    let mut state = state_with(EventRates {
        comet_spawn: 0.1,
        ..EventRates::quiet()
    });

    let mut tally = EventTally::default();
    for _ in 0..10_000 {
        tally.record_all(&roll_events(&mut state, &mut scene).unwrap());
    }

    assert!(
        (800..1200).contains(&tally.comets_spawned),
        "Spawned {} comets, expected about 1000",
        tally.comets_spawned
    );
    assert_eq!(tally.total(), tally.comets_spawned);
}

#[test]
fn tally_counts_by_kind() {
    let mut tally = EventTally::default();
    tally.record(&CosmicEvent::Supernova { star: StarId(0) });
    tally.record(&CosmicEvent::CometSpawned { comet: 0 });
    tally.record(&CosmicEvent::CometSpawned { comet: 1 });

    assert_eq!(tally.supernovae, 1);
    assert_eq!(tally.comets_spawned, 2);
    assert_eq!(tally.total(), 3);
}
