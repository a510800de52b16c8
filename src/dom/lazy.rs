//! `img[data-src]` lazy loading.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use super::observe::{self, ObserveOptions};
use super::{document, log_failure, query_all, set_class, window};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::lazy::{DATA_SRC_ATTRIBUTE, LOADED_CLASS, LazySwap};

pub(super) fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let document = document()?;
    let images = query_all(&document, &config.selectors.lazy_images)?;
    if images.is_empty() {
        return Err(SiteError::MissingElement(config.selectors.lazy_images.clone()));
    }

    if !observe::supported(&window()?) {
        log::debug!("lazy: IntersectionObserver unavailable, loading {} image(s) now", images.len());
        for image in &images {
            load(image)?;
        }
        return Ok(());
    }

    observe::observe(&images, &ObserveOptions::default(), |image, is_intersecting| {
        if !is_intersecting {
            return false;
        }
        log_failure("lazy", load(image));
        true
    })
}

fn load(image: &Element) -> Result<(), SiteError> {
    let Some(swap) = LazySwap::resolve(image.get_attribute(DATA_SRC_ATTRIBUTE).as_deref()) else {
        return Ok(());
    };
    match image.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.set_src(&swap.src),
        None => image.set_attribute("src", &swap.src)?,
    }
    image.remove_attribute(DATA_SRC_ATTRIBUTE)?;
    set_class(image, LOADED_CLASS, true)
}
