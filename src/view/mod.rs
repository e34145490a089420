//! Typed models of the client-side interaction state.
//!
//! Every interactive behavior on the rendered pages — the scroll-reveal
//! latch, the image carousel cursor, link-intent resolution, and the contact
//! form lifecycle — is defined here as a plain state machine. The gateway
//! drives these from query parameters; the served `reveal.js` mirrors the
//! latch contract in the browser.

pub mod carousel;
pub mod form;
pub mod nav;
pub mod reveal;

pub use carousel::Carousel;
pub use form::{ContactMessage, SubmissionStatus};
pub use nav::NavIntent;
pub use reveal::{Observation, RevealLatch};
