//! Ceph client bootstrap file materializer.
//!
//! Renders cluster config, keyring, and secret files from fixed templates
//! and writes them under `/etc/ceph` (or an alternate root), creating each
//! file at most once. Existing files are never overwritten.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Rendering, path resolution, materialization
//! - `models` — Data records and the bootstrap file format
//! - `util` — System utilities (fs, privilege)

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
