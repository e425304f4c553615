//! In-view reveal model shared by the site server and its browser binding.
//!
//! The server renders a `data-reveal` attribute on every element that should
//! animate in when it scrolls into view. The browser binding (feature `web`)
//! decodes those attributes, feeds `IntersectionObserver` entries into a
//! [`RevealScene`], and toggles the `in-view` class on each transition.
//!
//! Everything except the binding is plain Rust so the visibility rules can be
//! tested natively.

mod observable;
mod options;
mod scene;
mod tracker;

#[cfg(feature = "web")]
pub mod web;

pub use observable::{Observable, Subscription};
pub use options::{Direction, RevealOptions, RevealParseError};
pub use scene::{RevealEvent, RevealScene};
pub use tracker::{InViewTracker, Transition};

/// Attribute carrying encoded [`RevealOptions`].
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";

/// Attribute the browser binding stamps with the scene target index.
pub const REVEAL_INDEX_ATTRIBUTE: &str = "data-reveal-index";

/// Class toggled on elements currently revealed.
pub const IN_VIEW_CLASS: &str = "in-view";

/// Class added to the document root once the binding is mounted. Styles only
/// hide unrevealed elements under this class, so pages without the binding
/// stay fully visible.
pub const ROOT_ACTIVE_CLASS: &str = "js-reveal";
