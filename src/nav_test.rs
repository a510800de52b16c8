use super::*;

// =============================================================
// MenuState / MenuView
// =============================================================

#[test]
fn menu_starts_closed() {
    let nav = NavController::new();
    assert_eq!(nav.state(), MenuState::Closed);
    let view = MenuView::from(nav.state());
    assert!(!view.aria_expanded);
    assert!(!view.active);
    assert!(!view.scroll_locked);
}

#[test]
fn view_fields_agree_for_every_state() {
    for state in [MenuState::Closed, MenuState::Open] {
        let view = MenuView::from(state);
        assert_eq!(view.aria_expanded, view.active);
        assert_eq!(view.active, view.scroll_locked);
        assert_eq!(view.aria_expanded, state.is_open());
    }
}

#[test]
fn aria_expanded_value_is_a_string_bool() {
    assert_eq!(MenuView::from(MenuState::Open).aria_expanded_value(), "true");
    assert_eq!(MenuView::from(MenuState::Closed).aria_expanded_value(), "false");
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn toggle_alternates_open_and_closed() {
    let mut nav = NavController::new();
    assert!(nav.toggle().active);
    assert_eq!(nav.state(), MenuState::Open);
    assert!(!nav.toggle().active);
    assert_eq!(nav.state(), MenuState::Closed);
}

#[test]
fn outside_click_closes_open_menu() {
    let mut nav = NavController::new();
    nav.toggle();
    let view = nav.document_click(false, false).expect("menu should close");
    assert!(!view.aria_expanded);
    assert!(!view.active);
    assert_eq!(nav.state(), MenuState::Closed);
}

#[test]
fn clicks_inside_menu_or_toggle_keep_it_open() {
    let mut nav = NavController::new();
    nav.toggle();
    assert!(nav.document_click(true, false).is_none());
    assert!(nav.document_click(false, true).is_none());
    assert_eq!(nav.state(), MenuState::Open);
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut nav = NavController::new();
    assert!(nav.document_click(false, false).is_none());
    assert_eq!(nav.state(), MenuState::Closed);
}

#[test]
fn escape_closes_only_when_open() {
    let mut nav = NavController::new();
    assert!(nav.key_down("Escape").is_none());
    nav.toggle();
    assert!(nav.key_down("Enter").is_none());
    assert_eq!(nav.state(), MenuState::Open);
    assert!(nav.key_down("Escape").is_some());
    assert_eq!(nav.state(), MenuState::Closed);
}

// =============================================================
// Current page
// =============================================================

#[test]
fn current_page_matches_exact_path() {
    assert!(is_current_page("/about.html", "/about.html"));
    assert!(!is_current_page("/about.html", "/contact.html"));
}

#[test]
fn root_matches_root_and_empty_path() {
    assert!(is_current_page("/", "/"));
    assert!(is_current_page("", "/"));
    assert!(!is_current_page("/", "/index.html"));
}

#[test]
fn unresolved_link_does_not_hide_later_matches() {
    let links = [None, Some("/index.html".to_owned()), None, Some("/about.html".to_owned())];
    assert_eq!(current_page_links("/about.html", &links), vec![false, false, false, true]);
}
