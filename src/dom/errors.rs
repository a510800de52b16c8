use web_sys::ErrorEvent;

use super::{listen, window};
use crate::error::{ErrorReport, SiteError};

/// Log uncaught page errors. Nothing else is done with them.
pub(super) fn init() -> Result<(), SiteError> {
    let window = window()?;
    listen::<ErrorEvent>(&window, "error", |event| {
        let report = ErrorReport {
            message: event.message(),
            source: Some(event.filename()),
            line: event.lineno(),
            column: event.colno(),
        };
        log::error!("uncaught error: {report}");
    })
}
