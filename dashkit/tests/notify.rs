use std::time::{Duration, Instant};

use dashkit::notify::{DEFAULT_DISMISS_AFTER, DEFAULT_FADE_DURATION, NotificationLevel, Notifications};
use pagedom::Document;

#[test]
fn test_auto_dismiss_phases() {
    let mut doc = Document::default();
    let mut notifications = Notifications::new();
    let start = Instant::now();
    let id = notifications.show(&mut doc, "Import finished", NotificationLevel::Info, start);
    assert!(doc.get(&id).unwrap().has_class("alert-info"));

    // Still fully shown just before the timeout.
    let removed = notifications.tick(&mut doc, start + DEFAULT_DISMISS_AFTER - Duration::from_millis(1));
    assert!(removed.is_empty());
    assert!(doc.get(&id).unwrap().has_class("show"));

    // Fading: `show` removed, element still present.
    let removed = notifications.tick(&mut doc, start + DEFAULT_DISMISS_AFTER);
    assert!(removed.is_empty());
    let alert = doc.get(&id).unwrap();
    assert!(!alert.has_class("show"));
    assert!(alert.has_class("fade"));

    // Gone after the fade.
    let removed = notifications.tick(&mut doc, start + DEFAULT_DISMISS_AFTER + DEFAULT_FADE_DURATION);
    assert_eq!(removed, vec![id.clone()]);
    assert!(!doc.contains(&id));
    assert!(notifications.is_empty());
}

#[test]
fn test_late_tick_runs_both_phases() {
    let mut doc = Document::default();
    let mut notifications = Notifications::new();
    let start = Instant::now();
    let id = notifications.show(&mut doc, "x", NotificationLevel::Danger, start);

    let removed = notifications.tick(&mut doc, start + Duration::from_secs(60));
    assert_eq!(removed, vec![id]);
}

#[test]
fn test_notifications_expire_independently() {
    let mut doc = Document::default();
    let mut notifications = Notifications::new()
        .with_timings(Duration::from_secs(2), Duration::from_millis(100));
    let start = Instant::now();
    let first = notifications.show(&mut doc, "one", NotificationLevel::Info, start);
    let second = notifications.show(&mut doc, "two", NotificationLevel::Info, start + Duration::from_secs(1));

    let removed = notifications.tick(&mut doc, start + Duration::from_millis(2100));
    assert_eq!(removed, vec![first]);
    assert_eq!(notifications.active(), vec![second.as_str()]);
}

#[test]
fn test_dismiss() {
    let mut doc = Document::default();
    let mut notifications = Notifications::new();
    let id = notifications.show(&mut doc, "bye", NotificationLevel::default(), Instant::now());

    assert!(notifications.dismiss(&mut doc, &id));
    assert!(!doc.contains(&id));
    assert!(!notifications.dismiss(&mut doc, &id));
}
