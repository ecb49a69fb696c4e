use tower_content::{EquipmentLoader, NamePool};
use tower_core::GameConfig;
use tower_runtime::{Outcome, RuntimeError, SimConfig, Simulation};

fn settings(stories: usize, dudes: usize) -> SimConfig {
    SimConfig {
        seed: Some(7),
        stories,
        rooms_per_story: 6,
        dudes,
        max_ticks: 20_000,
        ..SimConfig::default()
    }
}

fn simulation(settings: &SimConfig, seed: u64) -> Simulation {
    let catalog = EquipmentLoader::builtin().expect("builtin equipment parses");
    let mut names = NamePool::builtin();
    Simulation::new(settings, GameConfig::default(), catalog, &mut names, seed)
        .expect("simulation builds")
}

#[test]
fn seeded_run_finishes() {
    let summary = simulation(&settings(2, 3), 42).run();
    assert!(summary.ticks > 0);
    assert_eq!(summary.seed, 42);
    assert_eq!(summary.survivors.len() + summary.fallen.len(), 3);
    match summary.outcome {
        Outcome::Won => assert!(!summary.survivors.is_empty()),
        Outcome::Lost => assert!(summary.survivors.is_empty()),
        Outcome::TimedOut => assert_eq!(summary.ticks, 20_000),
    }
}

#[test]
fn same_seed_same_run() {
    let settings = settings(2, 4);
    let first = simulation(&settings, 1234).run();
    let second = simulation(&settings, 1234).run();

    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.ticks, second.ticks);
    assert_eq!(first.gold, second.gold);
    assert_eq!(first.items.len(), second.items.len());

    let names = |dudes: &[tower_core::Dude]| -> Vec<String> {
        dudes.iter().map(|dude| dude.name().to_string()).collect()
    };
    assert_eq!(names(&first.survivors), names(&second.survivors));
    assert_eq!(names(&first.fallen), names(&second.fallen));
}

#[test]
fn invincible_roster_always_makes_it_out() {
    let settings = SimConfig {
        invincible: true,
        ..settings(3, 4)
    };
    for seed in [1, 2, 3] {
        let summary = simulation(&settings, seed).run();
        assert_eq!(summary.outcome, Outcome::Won, "seed {seed}");
        assert!(summary.fallen.is_empty());
        assert_eq!(summary.survivors.len(), 4);
        assert!(summary.survivors.iter().all(|dude| dude.gold() == 0));
    }
}

#[test]
fn survivors_hand_over_their_gold() {
    let settings = SimConfig {
        invincible: true,
        ..settings(1, 2)
    };
    let mut sim = simulation(&settings, 99);
    while sim.step().is_none() {}
    assert!(sim.tower().returned().len() == 2);
    let carried: i32 = sim.tower().returned().iter().map(|dude| dude.gold()).sum();

    let summary = sim.run();
    assert_eq!(summary.gold, carried);
}

#[test]
fn feed_is_bounded_by_capacity() {
    let settings = SimConfig {
        invincible: true,
        message_capacity: 5,
        ..settings(2, 4)
    };
    let mut sim = simulation(&settings, 5);
    while sim.step().is_none() {}
    assert!(sim.messages().len() <= 5);
    assert!(sim.messages().total() >= sim.messages().len());
}

#[test]
fn tick_limit_stops_the_run() {
    let settings = SimConfig {
        max_ticks: 10,
        ..settings(3, 2)
    };
    let summary = simulation(&settings, 8).run();
    assert_eq!(summary.outcome, Outcome::TimedOut);
    assert_eq!(summary.ticks, 10);
    assert_eq!(summary.survivors.len(), 2);
    assert_eq!(summary.gold, 0);
}

#[test]
fn empty_roster_is_rejected() {
    let catalog = EquipmentLoader::builtin().unwrap();
    let mut names = NamePool::builtin();
    let err = Simulation::new(&settings(1, 0), GameConfig::default(), catalog, &mut names, 1)
        .err()
        .unwrap();
    assert!(matches!(err, RuntimeError::NoDudes));
}
