//! Browser bindings: element lookup, listener registration, and startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule wires one controller to the document. Bindings translate
//! browser events into controller calls and apply the controller's answer to
//! the DOM; they hold no behavior of their own. Listeners live for the whole
//! page, so their closures are leaked with `Closure::forget`.

mod app;
mod errors;
mod form;
mod lazy;
mod nav;
mod observe;
mod reveal;
mod scroll;
mod theme;
mod year;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::{SiteError, log_init_outcome};

/// Module entry point: install logging, then run every initializer once the
/// DOM has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match read_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.log_level.into()) {
        log::debug!("logger already installed: {err}");
    }
    if let Some(err) = config_error {
        log::warn!("using default configuration: {err}");
    }

    log_init_outcome("errors", errors::init());

    if let Err(err) = when_ready(move || init_all(&config)) {
        log::error!("startup aborted: {err}");
    }
}

fn init_all(config: &SiteConfig) {
    log_init_outcome("nav", nav::init(config));
    log_init_outcome("form", form::init(config));
    log_init_outcome("scroll", scroll::init(config));
    log_init_outcome("reveal", reveal::init(config));
    log_init_outcome("lazy", lazy::init(config));
    log_init_outcome("year", year::init(config));
    log_init_outcome("theme", theme::init(config));
    log::info!("site behaviors ready");
}

fn read_config() -> Result<SiteConfig, SiteError> {
    let document = document()?;
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(block) => SiteConfig::from_json(&block.text_content().unwrap_or_default()),
        None => Ok(SiteConfig::default()),
    }
}

/// Run `f` now if the DOM is parsed, otherwise on `DOMContentLoaded`.
fn when_ready(f: impl FnOnce() + 'static) -> Result<(), SiteError> {
    let document = document()?;
    let state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?;
    if state.as_string().as_deref() != Some("loading") {
        f();
        return Ok(());
    }
    let mut pending = Some(f);
    listen::<Event>(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}

// --- Lookup helpers ---

pub(crate) fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::MissingElement("window".to_owned()))
}

pub(crate) fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or_else(|| SiteError::MissingElement("document".to_owned()))
}

/// First element matching `selector`, or [`SiteError::MissingElement`].
pub(crate) fn require(document: &Document, selector: &str) -> Result<Element, SiteError> {
    document.query_selector(selector)?.ok_or_else(|| SiteError::MissingElement(selector.to_owned()))
}

/// First descendant of `root` matching `selector`, or [`SiteError::MissingElement`].
pub(crate) fn require_in(root: &Element, selector: &str) -> Result<Element, SiteError> {
    root.query_selector(selector)?.ok_or_else(|| SiteError::MissingElement(selector.to_owned()))
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

pub(crate) fn cast<T: JsCast>(element: Element, what: &str) -> Result<T, SiteError> {
    element
        .dyn_into::<T>()
        .map_err(|_| SiteError::Dom(format!("{what} has an unexpected element type")))
}

// --- Mutation helpers ---

pub(crate) fn set_class(element: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    let list = element.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Set an inline style property; an empty value removes it.
pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), SiteError> {
    let style = element.style();
    if value.is_empty() {
        style.remove_property(property)?;
    } else {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub(crate) fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) -> Result<(), SiteError> {
    for (property, value) in properties {
        set_style(element, property, value)?;
    }
    Ok(())
}

pub(crate) fn append_style_sheet(document: &Document, css: &str) -> Result<(), SiteError> {
    let head = document.head().ok_or_else(|| SiteError::MissingElement("head".to_owned()))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

// --- Listeners ---

/// Register a page-lifetime listener for `event` on `target`.
///
/// Events that are not of type `E` are skipped.
pub(crate) fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static) -> Result<(), SiteError>
where
    E: JsCast + 'static,
{
    let name = event.to_owned();
    let closure = Closure::<dyn FnMut(Event)>::new(move |raw: Event| match raw.dyn_into::<E>() {
        Ok(event) => handler(event),
        Err(_) => log::trace!("{name}: unexpected event type"),
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Log a failure raised inside an event handler.
pub(crate) fn log_failure(context: &str, outcome: Result<(), SiteError>) {
    if let Err(err) = outcome {
        log::warn!("{context}: {err}");
    }
}
