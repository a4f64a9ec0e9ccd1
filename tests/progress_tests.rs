// Host-side tests for the loading progress mapping.

use array_core::ProgressDisplay;

#[test]
fn progress_bar_tracks_fraction() {
    let d = ProgressDisplay::from_fraction(0.25);
    assert_eq!(d.width_percent, 25.0);
    assert!(!d.hidden);
    assert_eq!(d.css_width(), "25%");
}

#[test]
fn progress_bar_hides_at_completion() {
    let d = ProgressDisplay::from_fraction(1.0);
    assert!(d.hidden);
    assert_eq!(d.css_width(), "100%");
}

#[test]
fn progress_is_clamped() {
    assert_eq!(ProgressDisplay::from_fraction(-0.5).width_percent, 0.0);
    assert!(ProgressDisplay::from_fraction(3.0).hidden);
    let nan = ProgressDisplay::from_fraction(f32::NAN);
    assert_eq!(nan.width_percent, 0.0);
    assert!(!nan.hidden);
}
