//! Theme marker, OS preference tracking, and the opt-in toggle button.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event, MediaQueryList, MediaQueryListEvent, Storage, Window};

use super::{document, listen, log_failure, require, window};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::theme::{DARK_MEDIA_QUERY, THEME_ATTRIBUTE, TOGGLE_CLASS, Theme, ThemeController, ToggleView};

/// `localStorage` access for the single theme key. Storage may be disabled
/// (private browsing, sandboxed frames); the theme then simply isn't persisted.
struct ThemeStore {
    storage: Option<Storage>,
    key: String,
}

impl ThemeStore {
    fn open(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("theme: localStorage unavailable: {}", SiteError::from(err));
                None
            }
        };
        Self { storage, key: key.to_owned() }
    }

    fn read(&self) -> Option<Theme> {
        let raw = self.storage.as_ref()?.get_item(&self.key).unwrap_or(None);
        Theme::parse(raw.as_deref())
    }

    fn write(&self, theme: Theme) -> Result<(), SiteError> {
        let Some(storage) = &self.storage else {
            return Err(SiteError::Storage("localStorage is not available".to_owned()));
        };
        storage
            .set_item(&self.key, theme.as_str())
            .map_err(|err| SiteError::Storage(crate::error::describe_js_value(&err)))
    }
}

pub(super) fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let window = window()?;
    let document = document()?;
    let root = document
        .document_element()
        .ok_or_else(|| SiteError::MissingElement("document element".to_owned()))?;

    let store = Rc::new(ThemeStore::open(&window, &config.theme.storage_key));
    let media = window.match_media(DARK_MEDIA_QUERY)?;
    let os_prefers_dark = media.as_ref().is_some_and(MediaQueryList::matches);

    let controller = Rc::new(RefCell::new(ThemeController::new(store.read(), os_prefers_dark)));
    apply_marker(&root, controller.borrow().active())?;
    log::debug!("theme: starting in {} mode", controller.borrow().active().as_str());

    if let Some(media) = media {
        let controller = Rc::clone(&controller);
        let root = root.clone();
        listen::<MediaQueryListEvent>(&media, "change", move |event| {
            if let Some(theme) = controller.borrow_mut().on_os_change(event.matches()) {
                log_failure("theme: os change", apply_marker(&root, theme));
            }
        })?;
    }

    if config.theme.toggle_enabled {
        add_toggle(&document, &config.selectors.theme_toggle_host, root, controller, store)?;
    }
    Ok(())
}

/// Set or clear the `data-theme` marker on `<html>`.
fn apply_marker(root: &Element, theme: Theme) -> Result<(), SiteError> {
    match theme.marker() {
        Some(value) => root.set_attribute(THEME_ATTRIBUTE, value)?,
        None => root.remove_attribute(THEME_ATTRIBUTE)?,
    }
    Ok(())
}

fn add_toggle(
    document: &Document,
    host_selector: &str,
    root: Element,
    controller: Rc<RefCell<ThemeController>>,
    store: Rc<ThemeStore>,
) -> Result<(), SiteError> {
    let host = require(document, host_selector)?;
    let button = document.create_element("button")?;
    button.set_class_name(TOGGLE_CLASS);
    render_toggle(&button, controller.borrow().active())?;
    host.append_child(&button)?;

    let target = button.clone();
    listen::<Event>(&button, "click", move |_| {
        let theme = controller.borrow_mut().toggle();
        log_failure("theme: toggle", apply_marker(&root, theme));
        log_failure("theme: persist", store.write(theme));
        log_failure("theme: toggle view", render_toggle(&target, theme));
    })
}

fn render_toggle(button: &Element, active: Theme) -> Result<(), SiteError> {
    let view = ToggleView::for_theme(active);
    button.set_text_content(Some(view.icon));
    button.set_attribute("aria-label", view.aria_label)?;
    Ok(())
}
