use super::*;

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn restart_ticks_immediately() {
    let poller = Poller::new();
    let ticks = Rc::new(Cell::new(0));
    let counter = ticks.clone();
    poller.restart(Duration::from_secs(60), move || counter.set(counter.get() + 1));
    assert_eq!(ticks.get(), 1);
}

#[test]
fn restart_supersedes_previous_loop() {
    let poller = Poller::new();
    let first = poller.restart(Duration::from_secs(60), || {});
    let second = poller.restart(Duration::from_secs(60), || {});
    assert!(!poller.is_current(first));
    assert!(poller.is_current(second));
}

#[test]
fn stop_invalidates_current_loop() {
    let poller = Poller::new();
    let epoch = poller.restart(Duration::from_secs(300), || {});
    poller.stop();
    assert!(!poller.is_current(epoch));
}

#[test]
fn clones_share_epoch() {
    let poller = Poller::new();
    let handle = poller.clone();
    let epoch = poller.restart(Duration::from_secs(60), || {});
    handle.stop();
    assert!(!poller.is_current(epoch));
}
