//! Mobile navigation menu state.
//!
//! DESIGN
//! ======
//! The menu is a single [`MenuState`] value. Everything the page shows about
//! it (the toggle's `aria-expanded`, the `active` classes, the body scroll
//! lock) is derived from that value through [`MenuView`], so the ARIA
//! attribute and the classes cannot drift apart.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Everything the DOM needs to render a [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    /// Value of `aria-expanded` on the toggle button.
    pub aria_expanded: bool,
    /// Whether toggle and nav carry the `active` class.
    pub active: bool,
    /// Whether `<body>` scrolling is disabled.
    pub scroll_locked: bool,
}

impl From<MenuState> for MenuView {
    fn from(state: MenuState) -> Self {
        let open = state.is_open();
        Self { aria_expanded: open, active: open, scroll_locked: open }
    }
}

impl MenuView {
    #[must_use]
    pub fn aria_expanded_value(self) -> &'static str {
        if self.aria_expanded { "true" } else { "false" }
    }
}

/// Menu state plus its transitions.
#[derive(Clone, Debug, Default)]
pub struct NavController {
    state: MenuState,
}

impl NavController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Toggle button activated.
    pub fn toggle(&mut self) -> MenuView {
        self.state = self.state.toggled();
        self.state.into()
    }

    /// A click anywhere in the document. Returns the new view if the menu closed.
    pub fn document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> Option<MenuView> {
        if inside_menu || inside_toggle {
            return None;
        }
        self.close()
    }

    /// A key press anywhere in the document. Returns the new view if the menu closed.
    pub fn key_down(&mut self, key: &str) -> Option<MenuView> {
        if key == "Escape" { self.close() } else { None }
    }

    fn close(&mut self) -> Option<MenuView> {
        if !self.state.is_open() {
            return None;
        }
        self.state = MenuState::Closed;
        Some(self.state.into())
    }
}

/// Whether a nav link points at the page currently displayed.
///
/// Both arguments are URL pathnames; an empty path is the site root.
#[must_use]
pub fn is_current_page(current_path: &str, link_path: &str) -> bool {
    normalize_path(current_path) == normalize_path(link_path)
}

/// Which links point at the current page. A link whose path could not be
/// resolved (`None`) is never current and does not affect the others.
#[must_use]
pub fn current_page_links(current_path: &str, link_paths: &[Option<String>]) -> Vec<bool> {
    link_paths
        .iter()
        .map(|path| path.as_deref().is_some_and(|path| is_current_page(current_path, path)))
        .collect()
}

fn normalize_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

/// Markup for the injected menu toggle button.
pub const TOGGLE_INNER_HTML: &str = r#"<span class="hamburger"></span><span class="sr-only">Menu</span>"#;
pub const TOGGLE_CLASS: &str = "nav-toggle";
pub const TOGGLE_ARIA_LABEL: &str = "Toggle navigation menu";
pub const TOGGLE_ARIA_CONTROLS: &str = "nav";
pub const ACTIVE_CLASS: &str = "active";
