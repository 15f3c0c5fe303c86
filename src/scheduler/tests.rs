// src/scheduler/tests.rs

use super::*;
use crate::validation::validate;

const DEBOUNCE: Duration = Duration::from_millis(300);

fn request(cols: f64, rows: f64) -> RenderRequest {
    RenderRequest::new(GridConfiguration::new(20.0, cols, rows), Mode::Random)
}

fn checked(request: RenderRequest) -> ValidationResult {
    validate(&request.config, request.mode)
}

#[test_log::test]
fn starts_idle() {
    let scheduler = RenderScheduler::default();
    assert_eq!(scheduler.state(), &SchedulerState::Idle);
    assert_eq!(scheduler.debounce(), DEBOUNCE);
    assert_eq!(scheduler.next_deadline(), None);
}

#[test_log::test]
fn valid_change_arms_and_fires_after_debounce() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let req = request(15.0, 10.0);

    let decision = scheduler.on_change(true, &checked(req), req, t0);

    assert!(matches!(decision, ScheduleDecision::Armed(_)));
    assert_eq!(scheduler.next_deadline(), Some(t0 + DEBOUNCE));
    assert_eq!(scheduler.poll(t0 + Duration::from_millis(299)), None);
    assert!(scheduler.is_armed());
    assert_eq!(scheduler.poll(t0 + DEBOUNCE), Some(req));
    assert_eq!(scheduler.state(), &SchedulerState::Idle);
    assert_eq!(scheduler.poll(t0 + DEBOUNCE * 2), None);
}

#[test_log::test]
fn rapid_changes_collapse_into_the_last_one() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let mut fired = Vec::new();

    for i in 0..10u32 {
        let now = t0 + Duration::from_millis(50 * u64::from(i));
        fired.extend(scheduler.poll(now));
        let req = request(f64::from(10 + i), 10.0);
        scheduler.on_change(true, &checked(req), req, now);
    }
    let last_change = t0 + Duration::from_millis(450);
    fired.extend(scheduler.poll(last_change + Duration::from_millis(299)));
    fired.extend(scheduler.poll(last_change + DEBOUNCE));

    assert_eq!(fired, vec![request(19.0, 10.0)]);
}

#[test_log::test]
fn superseded_handle_never_fires() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let first = request(15.0, 10.0);
    let second = request(16.0, 10.0);

    let ScheduleDecision::Armed(old) = scheduler.on_change(true, &checked(first), first, t0) else {
        panic!("expected the first change to arm");
    };
    let ScheduleDecision::Armed(new) = scheduler.on_change(true, &checked(second), second, t0) else {
        panic!("expected the second change to arm");
    };

    assert_ne!(old, new);
    assert_eq!(scheduler.fire(old), None);
    assert!(scheduler.is_armed());
    assert_eq!(scheduler.fire(new), Some(second));
    assert_eq!(scheduler.fire(new), None);
}

#[test_log::test]
fn invalid_change_cancels_pending_render() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let good = request(15.0, 10.0);
    let bad = request(-1.0, 10.0);

    scheduler.on_change(true, &checked(good), good, t0);
    let decision = scheduler.on_change(true, &checked(bad), bad, t0 + Duration::from_millis(100));

    assert_eq!(decision, ScheduleDecision::Suppressed);
    assert_eq!(scheduler.state(), &SchedulerState::Idle);
    assert_eq!(scheduler.poll(t0 + Duration::from_secs(10)), None);
}

#[test_log::test]
fn auto_preview_off_suppresses_and_cancels() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let req = request(15.0, 10.0);

    scheduler.on_change(true, &checked(req), req, t0);
    assert_eq!(
        scheduler.on_change(false, &checked(req), req, t0),
        ScheduleDecision::Suppressed
    );
    assert_eq!(scheduler.poll(t0 + DEBOUNCE), None);
}

#[test_log::test]
fn fire_captures_request_at_arm_time() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let armed = request(15.0, 10.0);

    scheduler.on_change(true, &checked(armed), armed, t0);

    match scheduler.state() {
        SchedulerState::Armed { request, deadline, .. } => {
            assert_eq!(*request, armed);
            assert_eq!(*deadline, t0 + DEBOUNCE);
        }
        SchedulerState::Idle => panic!("expected armed state"),
    }
    assert_eq!(scheduler.poll(t0 + DEBOUNCE), Some(armed));
}

#[test_log::test]
fn submit_valid_renders_now_and_drops_the_timer() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let pending = request(15.0, 10.0);
    let submitted = request(20.0, 10.0);

    scheduler.on_change(true, &checked(pending), pending, t0);

    assert_eq!(scheduler.submit(&checked(submitted), submitted), Some(submitted));
    assert_eq!(scheduler.state(), &SchedulerState::Idle);
    assert_eq!(scheduler.poll(t0 + DEBOUNCE), None);
}

#[test_log::test]
fn submit_invalid_is_a_no_op() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let t0 = Instant::now();
    let pending = request(15.0, 10.0);
    let invalid = request(0.0, 10.0);

    scheduler.on_change(true, &checked(pending), pending, t0);

    assert_eq!(scheduler.submit(&checked(invalid), invalid), None);
    assert!(scheduler.is_armed());
    assert_eq!(scheduler.poll(t0 + DEBOUNCE), Some(pending));
}

#[test_log::test]
fn cancel_reports_whether_anything_was_pending() {
    let mut scheduler = RenderScheduler::new(DEBOUNCE);
    let req = request(15.0, 10.0);
    assert!(!scheduler.cancel());
    scheduler.on_change(true, &checked(req), req, Instant::now());
    assert!(scheduler.cancel());
    assert!(!scheduler.is_armed());
}

#[test_log::test]
fn unrepresentable_debounce_is_never_due() {
    let mut scheduler = RenderScheduler::new(Duration::MAX);
    let req = request(15.0, 10.0);
    let t0 = Instant::now();
    scheduler.on_change(true, &checked(req), req, t0);
    let decision = scheduler.on_change(true, &checked(req), req, t0);
    assert_eq!(decision, ScheduleDecision::Suppressed);
    assert!(!scheduler.is_armed());
    assert_eq!(scheduler.next_deadline(), None);
    assert_eq!(scheduler.poll(t0 + Duration::from_secs(3_600)), None);
}
