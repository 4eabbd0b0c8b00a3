//! Engine-level tests
//!
//! The wait-metric formula, run determinism, the step cap on
//! non-converging elevator runs, and config serialization.

use mobility_simulator_core_rs::{
    ElevatorConfig, ElevatorKind, Event, Passenger, RobotConfig, RobotStrategy, SimulationEngine,
    CoverageEngine, MAX_STEPS, STOP_TIME, TIME_PER_FLOOR,
};

#[test]
fn test_wait_metric_hand_computed() {
    // One passenger, origin 3 -> destination 0, Ordinary dispatch:
    //
    //   step 0 (at floor 0, prev distance 0): accrue 0*1.5 + 6   =  6.0
    //           move 0 -> 3 (distance 3)
    //   step 1 (at floor 3, prev distance 3): accrue 3*1.5 + 6   = 10.5
    //           pickup; move 3 -> 0 (distance 3)
    //   step 2 (at floor 0, prev distance 3): accrue 3*1.5 + 6   = 10.5
    //           dropoff; all served
    //
    // Total 27.0 person-minutes; the serving step still accrues.
    let config = ElevatorConfig {
        num_floors: 5,
        total_passengers: 0,
        kind: ElevatorKind::Ordinary,
        capacity: 5,
        rng_seed: 1,
    };
    let passengers = vec![Passenger::with_journey(1, 3, 0)];
    let mut engine = SimulationEngine::with_passengers(config, passengers).unwrap();

    let result = engine.run();
    assert!(result.converged);
    assert_eq!(result.steps, 2);
    assert_eq!(result.total_wait_time, 27.0);
    assert_eq!(result.average_journey_time, 27.0);

    // Sanity on the constants the computation above is built from.
    assert_eq!(TIME_PER_FLOOR, 1.5);
    assert_eq!(STOP_TIME, 6.0);
}

#[test]
fn test_wait_metric_counts_all_unserved_each_step() {
    // Two passengers with the same journey double the accrual while both
    // are unserved: the metric is aggregate person-time, not elapsed time.
    let config = ElevatorConfig {
        num_floors: 5,
        total_passengers: 0,
        kind: ElevatorKind::Ordinary,
        capacity: 5,
        rng_seed: 1,
    };
    let passengers = vec![
        Passenger::with_journey(1, 3, 0),
        Passenger::with_journey(2, 3, 0),
    ];
    let mut engine = SimulationEngine::with_passengers(config, passengers).unwrap();

    let result = engine.run();
    assert_eq!(result.total_wait_time, 54.0);
    assert_eq!(result.average_journey_time, 27.0);
}

#[test]
fn test_elevator_runs_are_deterministic() {
    let config = ElevatorConfig {
        num_floors: 8,
        total_passengers: 25,
        kind: ElevatorKind::Ordinary,
        capacity: 4,
        rng_seed: 987,
    };

    let result1 = SimulationEngine::new(config.clone()).unwrap().run();
    let result2 = SimulationEngine::new(config).unwrap().run();
    assert_eq!(result1, result2);
}

#[test]
fn test_shabbat_and_ordinary_serve_the_same_passengers() {
    for kind in [ElevatorKind::Shabbat, ElevatorKind::Ordinary] {
        let config = ElevatorConfig {
            num_floors: 6,
            total_passengers: 15,
            kind,
            capacity: 5,
            rng_seed: 55,
        };

        let mut engine = SimulationEngine::new(config).unwrap();
        let result = engine.run();
        assert!(result.converged, "{:?} did not finish", kind);
        assert!(engine.building().all_served());
        assert_eq!(engine.building().served_count(), 15);
    }
}

#[test]
fn test_distant_passenger_caps_the_run() {
    // A Shabbat elevator moves one floor per step; a passenger waiting
    // beyond the step cap can never be served inside it.
    let config = ElevatorConfig {
        num_floors: MAX_STEPS + 2,
        total_passengers: 0,
        kind: ElevatorKind::Shabbat,
        capacity: 5,
        rng_seed: 1,
    };
    let passengers = vec![Passenger::with_journey(1, MAX_STEPS + 1, 0)];
    let mut engine = SimulationEngine::with_passengers(config, passengers).unwrap();

    let result = engine.run();
    assert!(!result.converged);
    assert_eq!(result.steps, MAX_STEPS);
    assert!(!engine.building().all_served());
}

#[test]
fn test_move_events_are_contiguous() {
    let config = ElevatorConfig {
        num_floors: 7,
        total_passengers: 12,
        kind: ElevatorKind::Ordinary,
        capacity: 3,
        rng_seed: 31,
    };
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.run();

    let mut previous_to: Option<usize> = None;
    for event in engine.event_log().events() {
        if let Event::ElevatorMoved {
            from_floor,
            to_floor,
            floors_traversed,
            ..
        } = event
        {
            if let Some(prev) = previous_to {
                assert_eq!(*from_floor, prev, "moves must chain floor to floor");
            }
            assert_eq!(from_floor.abs_diff(*to_floor), *floors_traversed);
            previous_to = Some(*to_floor);
        }
    }
}

#[test]
fn test_configs_round_trip_through_json() {
    let elevator = ElevatorConfig {
        num_floors: 5,
        total_passengers: 10,
        kind: ElevatorKind::Shabbat,
        capacity: 5,
        rng_seed: 7,
    };
    let json = serde_json::to_string(&elevator).unwrap();
    let back: ElevatorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.num_floors, 5);
    assert_eq!(back.kind, ElevatorKind::Shabbat);

    let robot = RobotConfig {
        width: 5,
        height: 5,
        num_obstacles: 5,
        velocity: 1.0,
        min_coverage: 0.8,
        strategy: RobotStrategy::WallFollowing,
        rng_seed: 7,
    };
    let json = serde_json::to_string(&robot).unwrap();
    let back: RobotConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.strategy, RobotStrategy::WallFollowing);

    // The engines accept deserialized configs unchanged.
    assert!(CoverageEngine::new(back).is_ok());
}
