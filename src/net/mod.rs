//! Portfolio data loading.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` or a read of an inline
//! script element. Parsing is plain `serde_json` and runs everywhere.

pub mod source;
