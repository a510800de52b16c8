//! Error types and the global error report.
//!
//! Setup failures surface as [`SiteError`] and are logged per initializer so a
//! broken section of markup never stops the other controllers. Uncaught
//! runtime errors from the page are formatted as an [`ErrorReport`] and
//! logged; nothing is forwarded off the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Failure while wiring a controller to the document.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("required element not found: {0}")]
    MissingElement(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(describe_js_value(&value))
    }
}

#[cfg(feature = "browser")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort human description of a thrown JS value.
#[cfg(feature = "browser")]
#[must_use]
pub fn describe_js_value(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// An uncaught page error, as delivered by the window `error` event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub source: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = if self.message.is_empty() { "unknown error" } else { self.message.as_str() };
        match self.source.as_deref().filter(|s| !s.is_empty()) {
            Some(source) => write!(f, "{message} ({source}:{}:{})", self.line, self.column),
            None => f.write_str(message),
        }
    }
}

/// Log the outcome of one initializer.
///
/// Initializers are independent; a failure is reported and the caller moves on.
pub fn log_init_outcome(name: &str, outcome: Result<(), SiteError>) {
    match outcome {
        Ok(()) => log::debug!("{name}: initialized"),
        Err(SiteError::MissingElement(what)) => log::debug!("{name}: skipped, missing {what}"),
        Err(err) => log::warn!("{name}: {err}"),
    }
}
