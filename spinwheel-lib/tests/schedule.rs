use std::time::Duration;

use spinwheel_lib::Scheduler;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_frame_request_runs_on_next_tick() {
    let mut scheduler = Scheduler::new();
    scheduler.request_frame("frame");

    assert!(scheduler.has_frame_request());
    let due = scheduler.take_due(ms(16));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].1, "frame");
    assert!(!scheduler.has_frame_request());
}

#[test]
fn test_timeout_waits_for_deadline() {
    let mut scheduler = Scheduler::new();
    scheduler.set_timeout("timer", ms(200), ms(1000));

    assert_eq!(scheduler.next_deadline(), Some(ms(1200)));
    assert!(scheduler.take_due(ms(1199)).is_empty());
    assert_eq!(scheduler.take_due(ms(1200)).len(), 1);
    assert!(scheduler.take_due(ms(5000)).is_empty());
}

#[test]
fn test_due_tasks_keep_scheduling_order() {
    let mut scheduler = Scheduler::new();
    scheduler.set_timeout(1, ms(10), ms(0));
    scheduler.request_frame(2);
    scheduler.set_timeout(3, ms(50), ms(0));
    scheduler.set_timeout(4, ms(5), ms(0));

    let due: Vec<i32> = scheduler
        .take_due(ms(20))
        .into_iter()
        .map(|(_, task)| task)
        .collect();
    assert_eq!(due, vec![1, 2, 4]);
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn test_cancel_removes_task_and_clears_slot() {
    let mut scheduler = Scheduler::new();
    let mut slot = Some(scheduler.set_timeout((), ms(10), ms(0)));

    assert!(scheduler.cancel(&mut slot));
    assert!(slot.is_none());
    assert!(scheduler.take_due(ms(100)).is_empty());
}

#[test]
fn test_cancel_empty_slot_is_noop() {
    let mut scheduler: Scheduler<()> = Scheduler::new();
    let mut slot = None;
    assert!(!scheduler.cancel(&mut slot));
}

#[test]
fn test_cancel_after_run_is_noop() {
    let mut scheduler = Scheduler::new();
    let handle = scheduler.request_frame("a");
    scheduler.request_frame("b");
    scheduler.take_due(ms(16));

    let mut slot = Some(handle);
    assert!(!scheduler.is_pending(handle));
    assert!(!scheduler.cancel(&mut slot));
    assert!(slot.is_none());
}

#[test]
fn test_cancel_all() {
    let mut scheduler = Scheduler::new();
    scheduler.request_frame(());
    scheduler.set_timeout((), ms(10), ms(0));

    assert_eq!(scheduler.cancel_all(), 2);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.next_deadline(), None);
}
