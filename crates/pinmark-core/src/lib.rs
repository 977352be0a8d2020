pub mod annotator;
pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod io;
pub mod points;
pub mod scene;
pub mod selection;
pub mod viewport;
