//! Property tests for the pure controllers: validation rules, scroll flags,
//! and the menu/theme invariants.

use proptest::prelude::*;

use sitekit::config::ScrollThresholds;
use sitekit::form::{Field, FieldError, FormController, FormEffect, FormEvent, FormTimer, FormValues, validate_field};
use sitekit::nav::{MenuView, NavController};
use sitekit::scroll::ScrollFlags;
use sitekit::theme::{Theme, ThemeController};

#[derive(Clone, Debug)]
enum NavInput {
    Toggle,
    Click { inside_menu: bool, inside_toggle: bool },
    Key(&'static str),
}

fn nav_input() -> impl Strategy<Value = NavInput> {
    prop_oneof![
        Just(NavInput::Toggle),
        (any::<bool>(), any::<bool>())
            .prop_map(|(inside_menu, inside_toggle)| NavInput::Click { inside_menu, inside_toggle }),
        prop_oneof![Just("Escape"), Just("Enter"), Just("a")].prop_map(NavInput::Key),
    ]
}

proptest! {
    #[test]
    fn short_names_are_rejected(name in "\\s{0,3}[a-zA-Z]?\\s{0,3}") {
        prop_assert_eq!(validate_field(Field::Name, &name), Err(FieldError::NameTooShort));
    }

    #[test]
    fn names_of_two_or_more_characters_pass(name in "\\s{0,3}[a-zA-Z]{2,20}\\s{0,3}") {
        prop_assert_eq!(validate_field(Field::Name, &name), Ok(()));
    }

    #[test]
    fn message_rule_follows_trimmed_length(body in "[a-z ]{0,30}") {
        let expected = if body.trim().chars().count() >= 10 { Ok(()) } else { Err(FieldError::MessageTooShort) };
        prop_assert_eq!(validate_field(Field::Message, &body), expected);
    }

    #[test]
    fn well_formed_emails_pass(local in "[a-z0-9._]{1,10}", domain in "[a-z0-9]{1,10}", tld in "[a-z]{2,5}") {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert_eq!(validate_field(Field::Email, &email), Ok(()));
    }

    #[test]
    fn emails_with_whitespace_fail(left in "[a-z]{1,5}", right in "[a-z]{1,5}") {
        let email = format!("{left} {right}@example.com");
        prop_assert_eq!(validate_field(Field::Email, &email), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn at_most_one_error_effect_per_field(name in ".{0,12}", email in ".{0,12}", message in ".{0,12}") {
        let mut form = FormController::default();
        let effects = form.handle(FormEvent::Submit(FormValues { name, email, message }));
        for field in Field::ALL {
            let touching = effects
                .iter()
                .filter(|effect| matches!(
                    effect,
                    FormEffect::ShowError { field: f, .. } | FormEffect::ClearError(f) if *f == field
                ))
                .count();
            prop_assert_eq!(touching, 1);
        }
    }

    #[test]
    fn scroll_flags_match_strict_thresholds(offset in 0.0f64..2000.0) {
        let flags = ScrollFlags::for_offset(offset, ScrollThresholds::default());
        prop_assert_eq!(flags.header_scrolled, offset > 50.0);
        prop_assert_eq!(flags.back_to_top_visible, offset > 300.0);
        prop_assert!(!flags.back_to_top_visible || flags.header_scrolled);
    }

    #[test]
    fn menu_view_stays_consistent(inputs in proptest::collection::vec(nav_input(), 0..40)) {
        let mut nav = NavController::new();
        for input in inputs {
            let was_open = nav.state().is_open();
            let view = match input {
                NavInput::Toggle => Some(nav.toggle()),
                NavInput::Click { inside_menu, inside_toggle } => {
                    let view = nav.document_click(inside_menu, inside_toggle);
                    if was_open && !inside_menu && !inside_toggle {
                        prop_assert!(!nav.state().is_open());
                    }
                    view
                }
                NavInput::Key(key) => nav.key_down(key),
            };
            let current = MenuView::from(nav.state());
            prop_assert_eq!(current.aria_expanded, current.active);
            if let Some(view) = view {
                prop_assert_eq!(view, current);
            }
        }
    }

    #[test]
    fn stored_theme_always_wins(stored_dark in any::<bool>(), os_changes in proptest::collection::vec(any::<bool>(), 0..10)) {
        let stored = if stored_dark { Theme::Dark } else { Theme::Light };
        let mut theme = ThemeController::new(Some(stored), !stored_dark);
        prop_assert_eq!(theme.active(), stored);
        for os_dark in os_changes {
            prop_assert_eq!(theme.on_os_change(os_dark), None);
            prop_assert_eq!(theme.active(), stored);
        }
    }
}

#[test]
fn full_submission_cycle_without_interaction() {
    let mut form = FormController::default();
    let values = FormValues {
        name: "Budi".to_owned(),
        email: "budi@example.id".to_owned(),
        message: "Halo, saya tertarik dengan layanan Anda.".to_owned(),
    };

    let submit = form.handle(FormEvent::Submit(values));
    assert!(submit.contains(&FormEffect::Schedule { timer: FormTimer::SubmitDelay, delay_ms: 1500 }));

    let done = form.handle(FormEvent::TimerFired(FormTimer::SubmitDelay));
    assert!(done.contains(&FormEffect::ResetFields));
    assert!(done.contains(&FormEffect::Schedule { timer: FormTimer::BannerExpiry, delay_ms: 5000 }));

    assert_eq!(form.handle(FormEvent::TimerFired(FormTimer::BannerExpiry)), vec![FormEffect::RemoveBanner]);
    assert_eq!(form.banner(), None);
}
