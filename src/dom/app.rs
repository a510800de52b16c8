//! Functions exported to page scripts, for debugging from the console.
//!
//! Each call routes through the bindings already installed by `start`; none of
//! them registers listeners of its own.

use wasm_bindgen::prelude::*;

use super::{document, form, nav, read_config};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::form::{BannerKind, Field};

/// Re-run current-page marking over the nav links.
///
/// # Errors
///
/// Fails when the document or the page location is unavailable.
#[wasm_bindgen(js_name = highlightCurrentPage)]
pub fn highlight_current_page() -> Result<(), JsValue> {
    let config = site_config();
    nav::mark_current_page(&document()?, &config.selectors.nav_links)?;
    Ok(())
}

/// Validate `value` as the contact form field named `field`. Returns the
/// message the form would show, or `undefined` when the value is accepted.
///
/// # Errors
///
/// Fails when `field` is not one of `name`, `email`, `message`.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, value: &str) -> Result<Option<String>, JsValue> {
    let field = Field::from_input_name(field).ok_or_else(|| SiteError::Dom(format!("unknown form field: {field}")))?;
    let copy = site_config().form;
    Ok(crate::form::validate_field(field, value).err().map(|err| err.user_message(&copy).to_owned()))
}

/// Show a `success` or `error` banner on the contact form.
///
/// # Errors
///
/// Fails on an unknown `kind`, or when no contact form was initialized.
#[wasm_bindgen(js_name = showFormMessage)]
pub fn show_form_message(message: &str, kind: &str) -> Result<(), JsValue> {
    let kind = BannerKind::parse(kind).ok_or_else(|| SiteError::Dom(format!("unknown banner kind: {kind}")))?;
    form::show_message(kind, message)?;
    Ok(())
}

fn site_config() -> SiteConfig {
    match read_config() {
        Ok(config) => config,
        Err(err) => {
            log::debug!("using default configuration: {err}");
            SiteConfig::default()
        }
    }
}
