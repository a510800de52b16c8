//! Mobile menu toggle and current-page marking.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAnchorElement, HtmlElement, KeyboardEvent, Node, Url};

use super::{document, listen, log_failure, query_all, require, set_class, set_style, window};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::nav::{
    ACTIVE_CLASS, MenuView, NavController, TOGGLE_ARIA_CONTROLS, TOGGLE_ARIA_LABEL, TOGGLE_CLASS, TOGGLE_INNER_HTML,
    current_page_links,
};

struct NavBinding {
    controller: NavController,
    toggle: Element,
    nav: Element,
    body: Option<HtmlElement>,
}

impl NavBinding {
    fn render(&self, view: MenuView) -> Result<(), SiteError> {
        self.toggle.set_attribute("aria-expanded", view.aria_expanded_value())?;
        set_class(&self.toggle, ACTIVE_CLASS, view.active)?;
        set_class(&self.nav, ACTIVE_CLASS, view.active)?;
        if let Some(body) = &self.body {
            set_style(body, "overflow", if view.scroll_locked { "hidden" } else { "" })?;
        }
        Ok(())
    }
}

pub(super) fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let document = document()?;
    log_failure("nav: current page", mark_current_page(&document, &config.selectors.nav_links));

    let nav = require(&document, &config.selectors.nav)?;
    let parent = nav
        .parent_node()
        .ok_or_else(|| SiteError::MissingElement(format!("parent of {}", config.selectors.nav)))?;

    let toggle = document.create_element("button")?;
    toggle.set_class_name(TOGGLE_CLASS);
    toggle.set_inner_html(TOGGLE_INNER_HTML);
    toggle.set_attribute("aria-label", TOGGLE_ARIA_LABEL)?;
    toggle.set_attribute("aria-expanded", "false")?;
    toggle.set_attribute("aria-controls", TOGGLE_ARIA_CONTROLS)?;
    parent.insert_before(&toggle, Some(&*nav))?;

    let binding = Rc::new(RefCell::new(NavBinding {
        controller: NavController::new(),
        toggle: toggle.clone(),
        nav,
        body: document.body(),
    }));

    {
        let binding = Rc::clone(&binding);
        listen::<Event>(&toggle, "click", move |_| {
            let mut binding = binding.borrow_mut();
            let view = binding.controller.toggle();
            log_failure("nav: toggle", binding.render(view));
        })?;
    }

    {
        let binding = Rc::clone(&binding);
        listen::<Event>(&document, "click", move |event| {
            let mut binding = binding.borrow_mut();
            let target = event.target();
            let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
            let inside_menu = binding.nav.contains(node);
            let inside_toggle = binding.toggle.contains(node);
            if let Some(view) = binding.controller.document_click(inside_menu, inside_toggle) {
                log_failure("nav: outside click", binding.render(view));
            }
        })?;
    }

    listen::<KeyboardEvent>(&document, "keydown", move |event| {
        let mut binding = binding.borrow_mut();
        if let Some(view) = binding.controller.key_down(&event.key()) {
            log_failure("nav: escape", binding.render(view));
        }
    })
}

/// Set `aria-current="page"` on the nav link for the current path.
pub(super) fn mark_current_page(document: &Document, links_selector: &str) -> Result<(), SiteError> {
    let current_path = window()?.location().pathname()?;
    let links = query_all(document, links_selector)?;
    let paths: Vec<Option<String>> = links.iter().map(link_path).collect();
    for (link, current) in links.iter().zip(current_page_links(&current_path, &paths)) {
        if current {
            link.set_attribute("aria-current", "page")?;
        } else {
            link.remove_attribute("aria-current")?;
        }
    }
    Ok(())
}

/// Resolved path of an anchor's `href`, or `None` when it has none or it does not parse.
fn link_path(link: &Element) -> Option<String> {
    let anchor = link.dyn_ref::<HtmlAnchorElement>()?;
    match Url::new(&anchor.href()) {
        Ok(url) => Some(url.pathname()),
        Err(err) => {
            log::debug!("nav: skipping link with unusable href: {}", SiteError::from(err));
            None
        }
    }
}
