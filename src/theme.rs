//! Light/dark theme resolution and toggle.
//!
//! The active theme is marked on `<html>`: `data-theme="dark"` means dark,
//! no attribute means light. An explicit choice stored in `localStorage`
//! wins over the OS `prefers-color-scheme` signal until it is cleared.
//!
//! TRADE-OFFS
//! ==========
//! Unrecognized stored values are treated as "no preference" rather than
//! errors, so a stale or hand-edited key just falls back to the OS.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Attribute set on the document element while dark mode is active.
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const TOGGLE_CLASS: &str = "theme-toggle";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference. Anything but `"dark"`/`"light"` is unset.
    #[must_use]
    pub fn parse(stored: Option<&str>) -> Option<Self> {
        match stored? {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Value for [`THEME_ATTRIBUTE`]; `None` means remove the attribute.
    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("dark"),
            Self::Light => None,
        }
    }
}

/// Startup resolution: stored preference, then OS preference, then light.
#[must_use]
pub fn resolve(stored: Option<Theme>, os_prefers_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_os(os_prefers_dark))
}

/// Theme state for one page.
#[derive(Clone, Debug, Default)]
pub struct ThemeController {
    stored: Option<Theme>,
    active: Theme,
}

impl ThemeController {
    #[must_use]
    pub fn new(stored: Option<Theme>, os_prefers_dark: bool) -> Self {
        Self { stored, active: resolve(stored, os_prefers_dark) }
    }

    #[must_use]
    pub fn active(&self) -> Theme {
        self.active
    }

    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.stored
    }

    /// OS preference changed. Returns the theme to apply, if it should follow.
    pub fn on_os_change(&mut self, os_prefers_dark: bool) -> Option<Theme> {
        if self.stored.is_some() {
            return None;
        }
        self.active = Theme::from_os(os_prefers_dark);
        Some(self.active)
    }

    /// Manual toggle. The result becomes the stored preference.
    pub fn toggle(&mut self) -> Theme {
        self.active = self.active.opposite();
        self.stored = Some(self.active);
        self.active
    }
}

/// Icon and label for the toggle button; both describe the action it performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleView {
    pub icon: &'static str,
    pub aria_label: &'static str,
}

impl ToggleView {
    #[must_use]
    pub fn for_theme(active: Theme) -> Self {
        match active {
            Theme::Dark => Self { icon: "\u{2600}\u{fe0f}", aria_label: "Switch to light mode" },
            Theme::Light => Self { icon: "\u{1f319}", aria_label: "Switch to dark mode" },
        }
    }
}
