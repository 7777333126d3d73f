use super::*;

// =============================================================
// Navbar background
// =============================================================

#[test]
fn threshold_is_strictly_greater_than_one_hundred() {
    assert_eq!(navbar_background(Theme::Light, 100.0), "rgba(255, 255, 255, 0.95)");
    assert_eq!(navbar_background(Theme::Light, 101.0), "rgba(255, 255, 255, 0.98)");
}

#[test]
fn dark_theme_uses_its_own_pair() {
    assert_eq!(navbar_background(Theme::Dark, 0.0), "rgba(17, 24, 39, 0.95)");
    assert_eq!(navbar_background(Theme::Dark, 100.0), "rgba(17, 24, 39, 0.95)");
    assert_eq!(navbar_background(Theme::Dark, 101.0), "rgba(17, 24, 39, 0.98)");
}

#[test]
fn background_takes_one_of_two_values_per_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        let mut seen: Vec<&str> = (0..400)
            .map(|y| navbar_background(theme, f64::from(y)))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 2);
    }
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_is_half_the_offset_without_clamping() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert_eq!(parallax_offset(300.0), 150.0);
    assert_eq!(parallax_offset(10_000.0), 5_000.0);
}

#[test]
fn parallax_transform_formats_pixels() {
    assert_eq!(parallax_transform(0.0), "translateY(0px)");
    assert_eq!(parallax_transform(41.0), "translateY(20.5px)");
}

#[test]
fn scroll_state_drives_both_effects() {
    let top = ScrollState::default();
    let down = ScrollState { y: 240.0 };
    assert_eq!(top.navbar_background(Theme::Dark), "rgba(17, 24, 39, 0.95)");
    assert_eq!(down.navbar_background(Theme::Dark), "rgba(17, 24, 39, 0.98)");
    assert_eq!(down.parallax_transform(), "translateY(120px)");
}

// =============================================================
// Debouncer
// =============================================================

#[test]
fn only_latest_ticket_is_current() {
    let mut debounce = Debouncer::default();
    let first = debounce.schedule();
    let second = debounce.schedule();
    assert!(!debounce.is_current(first));
    assert!(debounce.is_current(second));
}

#[test]
fn single_ticket_fires() {
    let mut debounce = Debouncer::default();
    let ticket = debounce.schedule();
    assert!(debounce.is_current(ticket));
}
