//! Browser-side controllers (csr only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller is built from explicit references to the elements it
//! needs, owns its listeners for the life of the page, and delegates every
//! decision to the matching `crate::state` type. Missing required elements
//! fail at `mount`.

pub mod contact_form;
pub mod modal;
pub mod nav;
pub mod renderer;
pub mod theme;
