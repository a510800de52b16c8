//! Scroll-into-view reveal animations.
//!
//! Elements start transparent and offset downward (see [`reveal_css`]) and
//! get a permanent `animated` class the first time they intersect the
//! viewport. Once revealed, an element is unobserved and never reset.
//!
//! When the browser has no `IntersectionObserver`, every target is revealed
//! immediately so content is never left invisible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// What to do with an element after an intersection callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the `animated` class and stop observing.
    Reveal,
    /// Leave it as is.
    Ignore,
}

/// One-way reveal bookkeeping, keyed by the element's index among the targets.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        if self.revealed.insert(index) { RevealAction::Reveal } else { RevealAction::Ignore }
    }

    /// Reveal every target at once, for browsers without intersection support.
    pub fn reveal_all(&mut self, count: usize) -> Vec<usize> {
        (0..count).filter(|index| self.revealed.insert(*index)).collect()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Data attribute stamped on each target so callbacks can find its index.
pub const INDEX_ATTRIBUTE: &str = "data-reveal-index";
pub const ANIMATED_CLASS: &str = "animated";

/// Children after this many get no extra delay.
const STAGGERED_CHILDREN: u32 = 3;

/// Transition styles injected into `<head>` for a comma-separated target
/// selector list. Each selector gets the hidden start state, the `animated`
/// end state, and staggered delays for its first children.
#[must_use]
pub fn reveal_css(targets: &str) -> String {
    let selectors: Vec<&str> = targets.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    if selectors.is_empty() {
        return String::new();
    }

    let hidden = selectors.join(", ");
    let shown = selectors.iter().map(|s| format!("{s}.{ANIMATED_CLASS}")).collect::<Vec<_>>().join(", ");
    let mut css = format!(
        "\n{hidden} {{\n  opacity: 0;\n  transform: translateY(20px);\n  transition: opacity 0.6s ease, transform 0.6s ease;\n}}\n\n\
         {shown} {{\n  opacity: 1;\n  transform: translateY(0);\n}}\n\n"
    );
    for selector in &selectors {
        for child in 1..=STAGGERED_CHILDREN {
            css.push_str(&format!("{selector}:nth-child({child}) {{ transition-delay: 0.{child}s; }}\n"));
        }
    }
    css
}
