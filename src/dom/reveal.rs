//! Reveal-on-scroll animations for feature blocks and articles.

use super::observe::{self, ObserveOptions};
use super::{append_style_sheet, document, log_failure, query_all, set_class, window};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::reveal::{ANIMATED_CLASS, INDEX_ATTRIBUTE, RevealAction, reveal_css, RevealTracker};

pub(super) fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let document = document()?;
    append_style_sheet(&document, &reveal_css(&config.selectors.reveal_targets))?;

    let targets = query_all(&document, &config.selectors.reveal_targets)?;
    if targets.is_empty() {
        return Err(SiteError::MissingElement(config.selectors.reveal_targets.clone()));
    }

    let mut tracker = RevealTracker::new();
    if !observe::supported(&window()?) {
        log::debug!("reveal: IntersectionObserver unavailable, revealing {} element(s) now", targets.len());
        for index in tracker.reveal_all(targets.len()) {
            set_class(&targets[index], ANIMATED_CLASS, true)?;
        }
        return Ok(());
    }

    for (index, target) in targets.iter().enumerate() {
        target.set_attribute(INDEX_ATTRIBUTE, &index.to_string())?;
    }

    let options = ObserveOptions {
        threshold: Some(config.reveal.threshold),
        root_margin: Some(&config.reveal.root_margin),
    };
    observe::observe(&targets, &options, move |element, is_intersecting| {
        let parsed = element.get_attribute(INDEX_ATTRIBUTE).map(|raw| raw.parse::<usize>());
        let Some(Ok(index)) = parsed else {
            return true;
        };
        match tracker.on_intersection(index, is_intersecting) {
            RevealAction::Reveal => {
                log_failure("reveal", set_class(element, ANIMATED_CLASS, true));
                true
            }
            RevealAction::Ignore => false,
        }
    })
}
