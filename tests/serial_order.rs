use tickrun::{SerialGroup, Task, TaskRunner};
use tickrun_test_utils::fakes::CountedTask;
use tickrun_test_utils::recorder::EventLog;
use tickrun_test_utils::{init_tracing, ticks_to_idle};

#[test]
fn test_children_run_in_insertion_order() {
    init_tracing();

    let log = EventLog::new();
    let mut group = SerialGroup::new();
    group.add(CountedTask::named("a", 2).with_log(&log));
    group.add(CountedTask::named("b", 3).with_log(&log));
    {
        let log = log.clone();
        group.on_complete(Box::new(move || log.record("group:done")));
    }

    let mut runner = TaskRunner::new();
    runner.run_to_completion(&mut group).unwrap();

    assert!(group.is_done());
    // a finishes (and notifies) strictly before b is first driven.
    assert!(log.happened_before("a:done", "b:step"));
    assert!(log.happened_before("a:done", "b:done"));
    // The group's own notification is last of all.
    assert_eq!(log.events().last().unwrap().as_str(), "group:done");
}

#[test]
fn test_first_task_done_before_second_ever_driven() {
    // Two tasks of k ticks each: the runner must deliver k steps to each,
    // and none of the second task's steps may precede the first task's
    // completion.
    let k = 4;
    let log = EventLog::new();
    let mut group = SerialGroup::new();
    group.add(CountedTask::named("a", k).with_log(&log));
    group.add(CountedTask::named("b", k).with_log(&log));

    let mut runner = TaskRunner::new();
    runner.run_to_completion(&mut group).unwrap();

    assert_eq!(log.count_of("a:step"), k);
    assert_eq!(log.count_of("b:step"), k);
    assert!(log.happened_before("a:done", "b:step"));
}

#[test]
fn test_next_child_starts_within_same_tick() {
    // Transitions are back-to-back: when a child finishes during a tick,
    // the next child receives a step in that same tick. Two 2-tick
    // children therefore need 3 external ticks, not 4.
    let mut group = SerialGroup::new();
    group.add(CountedTask::named("a", 2));
    group.add(CountedTask::named("b", 2));

    let mut runner = TaskRunner::new();
    runner.schedule(Box::new(group));

    assert_eq!(ticks_to_idle(&mut runner), 3);
}

#[test]
fn test_empty_group_done_on_first_drive() {
    let log = EventLog::new();
    let mut group = SerialGroup::new();
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
fn test_three_children_chain_in_order() {
    let log = EventLog::new();
    let mut group = SerialGroup::new();
    group.add(CountedTask::named("a", 1).with_log(&log));
    group.add(CountedTask::named("b", 1).with_log(&log));
    group.add(CountedTask::named("c", 1).with_log(&log));

    let mut runner = TaskRunner::new();
    runner.run_to_completion(&mut group).unwrap();

    assert!(log.happened_before("a:done", "b:step"));
    assert!(log.happened_before("b:done", "c:step"));
    assert!(log.happened_before("c:step", "c:done"));
}
