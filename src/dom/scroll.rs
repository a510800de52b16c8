//! Header shadow on scroll and the back-to-top button.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions};

use super::{cast, document, listen, log_failure, set_class, window};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::scroll::{
    BACK_TO_TOP_CLASS, BACK_TO_TOP_GLYPH, BACK_TO_TOP_LABEL, BACK_TO_TOP_VISIBLE_CLASS, HEADER_SCROLLED_CLASS,
    ScrollController, ScrollFlags, is_activation_key,
};

pub(super) fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let window = window()?;
    let document = document()?;
    let body = document.body().ok_or_else(|| SiteError::MissingElement("body".to_owned()))?;
    let header = document.query_selector(&config.selectors.header)?;
    if header.is_none() {
        log::debug!("scroll: no {} found, header effect disabled", config.selectors.header);
    }

    let button = cast::<HtmlElement>(document.create_element("button")?, "back-to-top button")?;
    button.set_class_name(BACK_TO_TOP_CLASS);
    button.set_text_content(Some(BACK_TO_TOP_GLYPH));
    button.set_attribute("aria-label", BACK_TO_TOP_LABEL)?;
    body.append_child(&button)?;

    let controller = Rc::new(RefCell::new(ScrollController::new(config.scroll)));
    {
        let window_for_offset = window.clone();
        let button: Element = button.clone().into();
        listen::<Event>(&window, "scroll", move |_| {
            let offset = match window_for_offset.scroll_y() {
                Ok(offset) => offset,
                Err(err) => {
                    log_failure("scroll: offset", Err(err.into()));
                    return;
                }
            };
            let flags = controller.borrow_mut().on_scroll(offset);
            log_failure("scroll", render(header.as_ref(), &button, flags));
        })?;
    }

    {
        let main_content_id = config.selectors.main_content_id.clone();
        listen::<Event>(&button, "click", move |_| {
            log_failure("scroll: back to top", scroll_to_top(&main_content_id));
        })?;
    }

    let target = button.clone();
    listen::<KeyboardEvent>(&button, "keydown", move |event| {
        if is_activation_key(&event.key()) {
            event.prevent_default();
            target.click();
        }
    })
}

fn render(header: Option<&Element>, button: &Element, flags: ScrollFlags) -> Result<(), SiteError> {
    if let Some(header) = header {
        set_class(header, HEADER_SCROLLED_CLASS, flags.header_scrolled)?;
    }
    set_class(button, BACK_TO_TOP_VISIBLE_CLASS, flags.back_to_top_visible)
}

/// Smooth-scroll to the top, then move focus to the main content region.
fn scroll_to_top(main_content_id: &str) -> Result<(), SiteError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);

    if let Some(main) = document()?.get_element_by_id(main_content_id) {
        if let Some(main) = main.dyn_ref::<HtmlElement>() {
            main.focus()?;
        }
    }
    Ok(())
}
