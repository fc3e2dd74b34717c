//! Tests for EventGenerator, SpikeEvent, and stream merging

use neural_sim_core_rs::{
    merge_events, CellMember, EventGenerator, Schedule, TimeWindow,
};

#[test]
fn test_generator_with_regular_schedule() {
    let target = CellMember::new(42, 3);
    let schedule = Schedule::regular(Some(2.0), 1.0, Some(100.0)).unwrap();
    let generator = EventGenerator::new(target, 3.14, schedule);

    assert_eq!(generator.target().gid, 42);
    assert_eq!(generator.target().index, 3);
    assert_eq!(generator.weight(), 3.14);
}

#[test]
fn test_generator_with_explicit_schedule_and_negative_weight() {
    let target = CellMember::new(0, 42);
    let schedule = Schedule::explicit(vec![0.0, 1.0, 2.0, 3.0, 4.4]).unwrap();
    let generator = EventGenerator::new(target, -0.01, schedule);

    assert_eq!(generator.target().gid, 0);
    assert_eq!(generator.target().index, 42);
    // Inhibitory weights pass through exactly
    assert_eq!(generator.weight(), -0.01);
}

#[test]
fn test_generator_with_poisson_schedule() {
    let target = CellMember::new(4, 2);
    let schedule = Schedule::poisson(Some(0.0), 10.0, 0).unwrap();
    let generator = EventGenerator::new(target, 42.0, schedule);

    assert_eq!(generator.target().gid, 4);
    assert_eq!(generator.target().index, 2);
    assert_eq!(generator.weight(), 42.0);
}

#[test]
fn test_generator_events_carry_target_and_weight() {
    let target = CellMember::new(7, 1);
    let schedule = Schedule::explicit(vec![0.5, 1.5, 2.5]).unwrap();
    let generator = EventGenerator::new(target, -2.0, schedule);

    let events = generator.events(TimeWindow::new(0.0, 10.0));
    assert_eq!(events.len(), 3);

    for (event, expected_time) in events.iter().zip([0.5, 1.5, 2.5]) {
        assert_eq!(event.target, target);
        assert_eq!(event.time, expected_time);
        assert_eq!(event.weight, -2.0);
    }
}

#[test]
fn test_generator_events_respect_window() {
    let schedule = Schedule::explicit(vec![0.5, 1.5, 2.5]).unwrap();
    let generator = EventGenerator::new(CellMember::new(0, 0), 1.0, schedule);

    let events = generator.events(TimeWindow::new(1.0, 2.0));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].time, 1.5);
}

#[test]
fn test_schedule_accessor_exposes_variant() {
    let generator = EventGenerator::new(
        CellMember::new(0, 0),
        1.0,
        Schedule::poisson(None, 5.0, 42).unwrap(),
    );
    assert!(matches!(generator.schedule(), Schedule::Poisson(_)));
}

#[test]
fn test_generators_get_distinct_ids() {
    let make = || {
        EventGenerator::new(
            CellMember::new(1, 1),
            1.0,
            Schedule::explicit(vec![]).unwrap(),
        )
    };
    let a = make();
    let b = make();

    assert!(!a.id().is_empty());
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_merge_interleaves_by_time() {
    let window = TimeWindow::new(0.0, 5.0);
    let even = EventGenerator::new(
        CellMember::new(1, 0),
        1.0,
        Schedule::regular(Some(0.0), 2.0, None).unwrap(),
    );
    let odd = EventGenerator::new(
        CellMember::new(2, 0),
        -1.0,
        Schedule::explicit(vec![1.0, 3.0]).unwrap(),
    );

    let merged = merge_events(&[even, odd], window);

    let times: Vec<f64> = merged.iter().map(|e| e.time).collect();
    assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0]);

    let gids: Vec<u64> = merged.iter().map(|e| e.target.gid).collect();
    assert_eq!(gids, vec![1, 2, 1, 2, 1]);
}

#[test]
fn test_merge_ties_keep_generator_order() {
    let window = TimeWindow::new(0.0, 10.0);
    let first = EventGenerator::new(
        CellMember::new(1, 0),
        1.0,
        Schedule::explicit(vec![5.0]).unwrap(),
    );
    let second = EventGenerator::new(
        CellMember::new(2, 0),
        1.0,
        Schedule::explicit(vec![5.0]).unwrap(),
    );

    let merged = merge_events(&[first, second], window);
    let gids: Vec<u64> = merged.iter().map(|e| e.target.gid).collect();
    assert_eq!(gids, vec![1, 2]);
}

#[test]
fn test_merge_of_no_generators_is_empty() {
    assert!(merge_events(&[], TimeWindow::new(0.0, 10.0)).is_empty());
}
