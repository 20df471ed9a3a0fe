//! Controller state machines.
//!
//! DESIGN
//! ======
//! Each controller keeps its decisions in a small plain-Rust state type here
//! and only the DOM side effects in `controllers`. That split keeps every
//! transition testable without a browser.

pub mod modal;
pub mod nav;
pub mod theme;
