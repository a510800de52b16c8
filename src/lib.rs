//! # sitekit
//!
//! Client-side behavior for the static site, compiled to WebAssembly. Each
//! page behavior is an independent controller initialized once the DOM is
//! ready; controllers share nothing but the document itself.
//!
//! Every controller is split in two. The pure half (the modules below) holds
//! explicit state and turns events into decisions, and is tested on the host.
//! The `dom` half (behind the `browser` feature) looks up elements,
//! registers listeners, and applies those decisions to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Mobile menu open/closed state and current-page matching |
//! | [`form`] | Contact form validation and simulated submission |
//! | [`scroll`] | Header and back-to-top flags derived from scroll offset |
//! | [`reveal`] | One-way reveal animation tracking and its CSS |
//! | [`lazy`] | `data-src` image swapping |
//! | [`year`] | Footer year stamping |
//! | [`theme`] | Light/dark resolution, OS tracking, manual toggle |
//! | [`config`] | Page configuration block |
//! | [`error`] | Error types and uncaught error reports |

pub mod config;
pub mod error;
pub mod form;
pub mod lazy;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod year;

#[cfg(feature = "browser")]
pub mod dom;
