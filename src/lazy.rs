//! Deferred image loading.
//!
//! Images are authored as `<img data-src="...">` and receive their real `src`
//! once they intersect the viewport.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

pub const DATA_SRC_ATTRIBUTE: &str = "data-src";
pub const LOADED_CLASS: &str = "loaded";

/// The attribute swap to perform on an image entering the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazySwap {
    pub src: String,
}

impl LazySwap {
    /// Build the swap for an image's `data-src` value. Blank sources are skipped.
    #[must_use]
    pub fn resolve(data_src: Option<&str>) -> Option<Self> {
        let src = data_src?.trim();
        if src.is_empty() {
            return None;
        }
        Some(Self { src: src.to_owned() })
    }
}
