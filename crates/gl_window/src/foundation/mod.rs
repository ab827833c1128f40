//! Foundation module - Core utilities and types
//!
//! - Pixel coordinates and sizes
//! - Logging utilities

pub mod coord;
pub mod logging;

pub use coord::{xy, Coord};
