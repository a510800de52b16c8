use super::*;

fn flags(offset: f64) -> ScrollFlags {
    ScrollFlags::for_offset(offset, ScrollThresholds::default())
}

#[test]
fn header_threshold_is_strict() {
    assert!(!flags(49.0).header_scrolled);
    assert!(!flags(50.0).header_scrolled);
    assert!(flags(51.0).header_scrolled);
}

#[test]
fn back_to_top_threshold_is_strict() {
    assert!(!flags(299.0).back_to_top_visible);
    assert!(!flags(300.0).back_to_top_visible);
    assert!(flags(301.0).back_to_top_visible);
}

#[test]
fn flags_are_independent() {
    assert_eq!(flags(0.0), ScrollFlags { header_scrolled: false, back_to_top_visible: false });
    assert_eq!(flags(120.0), ScrollFlags { header_scrolled: true, back_to_top_visible: false });
    assert_eq!(flags(1200.0), ScrollFlags { header_scrolled: true, back_to_top_visible: true });
}

#[test]
fn custom_thresholds_are_honored() {
    let thresholds = ScrollThresholds { header_offset: 10.0, back_to_top_offset: 20.0 };
    let flags = ScrollFlags::for_offset(15.0, thresholds);
    assert!(flags.header_scrolled);
    assert!(!flags.back_to_top_visible);
}

#[test]
fn controller_tracks_last_offset_and_flags() {
    let mut scroll = ScrollController::new(ScrollThresholds::default());
    assert_eq!(scroll.flags(), ScrollFlags::default());

    let down = scroll.on_scroll(400.0);
    assert!(down.header_scrolled && down.back_to_top_visible);
    assert_eq!(scroll.last_offset(), 400.0);

    let up = scroll.on_scroll(10.0);
    assert_eq!(up, ScrollFlags::default());
    assert_eq!(scroll.flags(), up);
    assert_eq!(scroll.last_offset(), 10.0);
}

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Escape"));
    assert!(!is_activation_key("Spacebar"));
}
