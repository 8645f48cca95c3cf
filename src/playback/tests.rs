use super::*;
use crate::library::Track;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const SEC: Duration = Duration::from_secs(1);

#[test]
fn progress_is_zero_when_duration_is_zero() {
    assert_eq!(progress_percent(0.0, 0.0), 0.0);
    assert_eq!(progress_percent(42.0, 0.0), 0.0);
}

#[test]
fn progress_is_position_over_duration() {
    assert_eq!(progress_percent(50.0, 200.0), 25.0);
}

#[test]
fn progress_is_not_clamped_past_the_end() {
    assert_eq!(progress_percent(150.0, 100.0), 150.0);
}

#[test]
fn progress_cell_follows_position_and_duration() {
    let state = PlaybackState::default();
    assert_eq!(state.progress.get(), 0.0);

    state.set_position(50.0);
    assert_eq!(state.progress.get(), 0.0);

    state.set_duration(200.0);
    assert_eq!(state.progress.get(), 25.0);

    state.set_position(150.0);
    state.set_duration(100.0);
    assert_eq!(state.progress.get(), 150.0);
}

#[test]
fn progress_subscribers_see_each_recomputation() {
    let state = PlaybackState::default();
    state.set_duration(10.0);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = state.progress.subscribe(move |p| sink.borrow_mut().push(*p));

    state.set_position(1.0);
    state.set_position(5.0);
    assert_eq!(*seen.borrow(), vec![0.0, 10.0, 50.0]);
}

#[test]
fn timer_adds_one_second_per_elapsed_tick() {
    let mut state = PlaybackState::default();
    state.set_position(7.0);
    let t0 = Instant::now();

    state.start_timer_at(t0);
    assert_eq!(state.advance_timer(t0 + SEC * 3), 3);
    assert_eq!(state.position.get(), 10.0);
}

#[test]
fn starting_twice_keeps_a_single_ticker() {
    let mut state = PlaybackState::default();
    let t0 = Instant::now();

    state.start_timer_at(t0);
    state.start_timer_at(t0);
    state.advance_timer(t0 + SEC);
    assert_eq!(state.position.get(), 1.0);
}

#[test]
fn restart_begins_a_fresh_cadence() {
    let mut timer = PlaybackTimer::default();
    let t0 = Instant::now();
    timer.start(t0);
    // Restart mid-period: the old phase is discarded.
    timer.start(t0 + Duration::from_millis(600));
    assert_eq!(timer.poll(t0 + SEC), 0);
    assert_eq!(timer.poll(t0 + Duration::from_millis(1600)), 1);
}

#[test]
fn poll_before_first_deadline_fires_nothing() {
    let mut timer = PlaybackTimer::default();
    let t0 = Instant::now();
    timer.start(t0);
    assert_eq!(timer.poll(t0 + Duration::from_millis(999)), 0);
    assert_eq!(timer.next_deadline(), Some(t0 + SEC));
}

#[test]
fn stop_is_idempotent_and_halts_ticks() {
    let mut state = PlaybackState::default();
    state.stop_timer();
    assert!(!state.timer_running());

    let t0 = Instant::now();
    state.start_timer_at(t0);
    state.advance_timer(t0 + SEC);
    state.stop_timer();
    state.stop_timer();

    assert_eq!(state.advance_timer(t0 + SEC * 10), 0);
    assert_eq!(state.position.get(), 1.0);
    assert_eq!(state.next_tick(), None);
}

#[test]
fn timer_keeps_counting_past_track_end() {
    let mut state = PlaybackState::default();
    state.set_duration(2.0);
    let t0 = Instant::now();
    state.start_timer_at(t0);

    state.advance_timer(t0 + SEC * 3);
    assert_eq!(state.position.get(), 3.0);
    assert_eq!(state.progress.get(), 150.0);
    assert!(state.at_end());
}

#[test]
fn reset_for_rewinds_and_takes_track_duration() {
    let state = PlaybackState::default();
    state.set_position(33.0);

    let track = Track {
        duration_secs: Some(180),
        ..Track::from_path("/m/a.mp3")
    };
    state.reset_for(Some(&track));
    assert_eq!(state.position.get(), 0.0);
    assert_eq!(state.duration.get(), 180.0);

    state.reset_for(Some(&Track::from_path("/m/b.mp3")));
    assert_eq!(state.duration.get(), 0.0);
    assert!(!state.at_end());
}

#[test]
fn player_timer_period_is_one_second() {
    let mut state = PlaybackState::new();
    let t0 = Instant::now();
    state.start_timer_at(t0);

    assert_eq!(state.next_tick(), Some(t0 + TICK));
    assert_eq!(state.advance_timer(t0 + Duration::from_millis(1500)), 1);
    assert_eq!(state.position.get(), 1.0);
    assert_eq!(state.advance_timer(t0 + SEC * 2), 1);
    assert_eq!(state.position.get(), 2.0);
}

#[test]
fn late_poll_counts_missed_ticks_and_keeps_cadence() {
    let mut timer = PlaybackTimer::default();
    let t0 = Instant::now();
    timer.start(t0);

    assert_eq!(timer.poll(t0 + Duration::from_millis(3400)), 3);
    assert_eq!(timer.next_deadline(), Some(t0 + SEC * 4));
    assert_eq!(timer.poll(t0 + SEC * 4), 1);
    assert_eq!(timer.next_deadline(), Some(t0 + SEC * 5));
}

#[test]
fn long_gap_saturates_tick_count() {
    let period = Duration::from_millis(1);
    let mut timer = PlaybackTimer::new(period);
    let t0 = Instant::now();
    timer.start(t0);

    // Roughly 5.2e9 periods, more than fits in a u32.
    let later = t0 + Duration::from_secs(60 * 24 * 60 * 60);
    assert_eq!(timer.poll(later), u32::MAX);
    assert_eq!(timer.next_deadline(), Some(later + period));
}

#[test]
fn catch_up_lands_as_one_position_update() {
    let mut state = PlaybackState::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = state.position.subscribe(move |p| sink.borrow_mut().push(*p));

    let t0 = Instant::now();
    state.start_timer_at(t0);
    assert_eq!(state.advance_timer(t0 + SEC * 5), 5);
    assert_eq!(*seen.borrow(), vec![0.0, 5.0]);
}
