use super::{document, query_all};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::year::stamp_year;

pub(super) fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let document = document()?;
    let year = js_sys::Date::new_0().get_full_year();
    let token = config.year_token.as_str();

    let mut stamped = 0_usize;
    for paragraph in query_all(&document, &config.selectors.footer_paragraphs)? {
        let text = paragraph.text_content().unwrap_or_default();
        if let Some(updated) = stamp_year(&text, token, year) {
            paragraph.set_text_content(Some(&updated));
            stamped += 1;
        }
    }
    log::debug!("year: stamped {year} into {stamped} footer paragraph(s)");
    Ok(())
}
