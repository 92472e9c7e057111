use crate::core::reveal::{
    reveal_threshold, should_reveal, RevealTracker, HIDDEN_CLASS, REVEAL_THRESHOLD_DIVISOR,
};

#[test]
fn test_threshold_is_viewport_over_divisor() {
    assert_eq!(REVEAL_THRESHOLD_DIVISOR, 1.1);

    // 1100px viewport → threshold at 1000px
    let threshold = reveal_threshold(1100.0);
    assert!(
        (threshold - 1000.0).abs() < 1e-9,
        "Expected threshold 1000.0, got {}",
        threshold
    );
}

#[test]
fn test_element_above_threshold_reveals() {
    // Top edge at 500px in an 800px viewport (threshold ≈ 727px)
    assert!(should_reveal(500.0, 800.0));
}

#[test]
fn test_element_below_threshold_stays_hidden() {
    // Top edge at 750px is below the ≈727px threshold
    assert!(!should_reveal(750.0, 800.0));
}

#[test]
fn test_element_exactly_at_threshold_stays_hidden() {
    // The comparison is strict, matching "above the threshold"
    let viewport = 1100.0;
    assert!(!should_reveal(reveal_threshold(viewport), viewport));
}

#[test]
fn test_element_scrolled_past_top_reveals() {
    // Negative top: the element has been scrolled above the viewport
    assert!(should_reveal(-200.0, 800.0));
}

#[test]
fn test_tracker_registration() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.is_empty());

    let first = tracker.register();
    let second = tracker.register();

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker.hidden_count(), 2, "New targets start hidden");
}

#[test]
fn test_tracker_marking_is_monotone() {
    let mut tracker = RevealTracker::new();
    let index = tracker.register();
    tracker.register();

    assert!(!tracker.is_revealed(index));

    tracker.mark_revealed(index);
    assert!(tracker.is_revealed(index));
    assert_eq!(tracker.hidden_count(), 1);

    // Marking again changes nothing; there is no way to re-hide
    tracker.mark_revealed(index);
    assert!(tracker.is_revealed(index));
    assert_eq!(tracker.hidden_count(), 1);
}

#[test]
fn test_tracker_ignores_out_of_range_indices() {
    let mut tracker = RevealTracker::new();
    tracker.register();

    tracker.mark_revealed(99);

    assert!(!tracker.is_revealed(99), "Unregistered index reports hidden");
    assert_eq!(tracker.len(), 1, "Marking out of range must not grow the tracker");
}

#[test]
fn test_hidden_class_name() {
    assert_eq!(HIDDEN_CLASS, "reveal-hidden");
}
