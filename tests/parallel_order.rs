use tickrun::{ParallelGroup, Task, TaskRunner};
use tickrun_test_utils::fakes::CountedTask;
use tickrun_test_utils::recorder::EventLog;
use tickrun_test_utils::{init_tracing, ticks_to_idle};

#[test]
fn test_all_children_started_in_first_tick() {
    init_tracing();

    let log = EventLog::new();
    let mut group = ParallelGroup::new();
    group.add(CountedTask::named("a", 3).with_log(&log));
    group.add(CountedTask::named("b", 5).with_log(&log));

    let mut runner = TaskRunner::new();
    runner.schedule(Box::new(group));
    runner.tick().unwrap();

    assert_eq!(log.count_of("a:step"), 1);
    assert_eq!(log.count_of("b:step"), 1);
}

#[test]
fn test_group_completes_on_slowest_child_tick() {
    let log = EventLog::new();
    let mut group = ParallelGroup::new();
    group.add(CountedTask::named("a", 3).with_log(&log));
    group.add(CountedTask::named("b", 5).with_log(&log));
    {
        let log = log.clone();
        group.on_complete(Box::new(move || log.record("group:done")));
    }

    let mut runner = TaskRunner::new();
    runner.schedule(Box::new(group));

    for tick in 1..=4 {
        runner.tick().unwrap();
        assert!(!runner.is_idle(), "group completed early, on tick {tick}");
        if tick == 3 {
            // The shorter task has already notified by now.
            assert_eq!(log.count_of("a:done"), 1);
        }
    }

    // Tick 5 is exactly when the slowest child, and thus the group, finishes.
    runner.tick().unwrap();
    assert!(runner.is_idle());
    assert_eq!(log.count_of("group:done"), 1);
    assert!(log.happened_before("a:done", "group:done"));
    assert!(log.happened_before("b:done", "group:done"));
}

#[test]
fn test_group_notification_after_every_child() {
    let log = EventLog::new();
    let mut group = ParallelGroup::new();
    for (name, ticks) in [("a", 2), ("b", 4), ("c", 1)] {
        group.add(CountedTask::named(name, ticks).with_log(&log));
    }
    {
        let log = log.clone();
        group.on_complete(Box::new(move || log.record("group:done")));
    }

    let mut runner = TaskRunner::new();
    runner.run_to_completion(&mut group).unwrap();

    for child in ["a:done", "b:done", "c:done"] {
        assert_eq!(log.count_of(child), 1);
        assert!(log.happened_before(child, "group:done"));
    }
}

#[test]
fn test_empty_group_done_on_first_drive() {
    let log = EventLog::new();
    let mut group = ParallelGroup::new();
    {
        let log = log.clone();
        group.on_complete(Box::new(move || log.record("group:done")));
    }

    assert!(group.is_empty());
    group.step().unwrap();

    assert!(group.is_done());
    assert_eq!(log.events(), vec!["group:done"]);
}

#[test]
fn test_synchronous_child_does_not_starve_siblings() {
    // A child that completes during the very first step must still let
    // the remaining children be started within that same tick.
    let log = EventLog::new();
    let mut group = ParallelGroup::new();
    group.add(CountedTask::named("instant", 0).with_log(&log));
    group.add(CountedTask::named("slow", 2).with_log(&log));

    let mut runner = TaskRunner::new();
    runner.schedule(Box::new(group));
    runner.tick().unwrap();

    assert_eq!(log.count_of("instant:done"), 1);
    assert_eq!(log.count_of("slow:step"), 1);
    assert!(!runner.is_idle());

    runner.tick().unwrap();
    assert!(runner.is_idle());
}
