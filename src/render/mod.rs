//! HTML rendering: the Tera engine, page context builders, and the embedded
//! static assets the pages reference.

mod engine;
pub mod pages;

pub use engine::SiteRenderer;
pub use pages::{HomeOptions, NO_LINK_NOTICE};

/// Stylesheet served at `/assets/site.css`.
pub const SITE_CSS: &str = include_str!("assets/site.css");

/// Scroll-reveal script served at `/assets/reveal.js`. Implements the same
/// one-shot latch as `view::reveal::RevealLatch`, per section, in the
/// browser.
pub const REVEAL_JS: &str = include_str!("assets/reveal.js");
