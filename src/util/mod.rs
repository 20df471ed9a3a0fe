//! Utility helpers shared across controllers and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controller and
//! component logic to improve reuse and testability.

#[cfg(feature = "csr")]
pub mod dom;
pub mod markdown;
pub mod storage;
pub mod text;
pub mod url;
