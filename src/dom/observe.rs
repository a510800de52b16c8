//! Shared `IntersectionObserver` wiring for reveal and lazy-load.

use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::error::SiteError;

/// Observer tuning; `None` fields keep the browser defaults.
#[derive(Default)]
pub(super) struct ObserveOptions<'a> {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'a str>,
}

/// Whether this browser exposes `IntersectionObserver`.
pub(super) fn supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observe `targets`; `on_entry(element, is_intersecting)` returns `true` to
/// stop observing that element.
pub(super) fn observe(
    targets: &[Element],
    options: &ObserveOptions<'_>,
    mut on_entry: impl FnMut(&Element, bool) -> bool + 'static,
) -> Result<(), SiteError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for value in entries.iter() {
                let Some(entry) = value.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if on_entry(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(threshold) = options.threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}
