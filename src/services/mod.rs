//! Domain services.
//!
//! DESIGN
//! ======
//! Services hold the site's rules and stay free of HTTP types so routes and
//! views can share them and tests can drive them against an in-memory store.

pub mod accent;
pub mod highlight;
pub mod image;
pub mod milestone;
pub mod pagination;
pub mod portfolio;
pub mod section;
