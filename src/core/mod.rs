//! Rendering, path resolution, and file materialization.

pub mod materialize;
pub mod paths;
pub mod render;
