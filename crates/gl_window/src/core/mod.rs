//! # Core Module
//!
//! Shared configuration for window construction.

pub mod config;

pub use crate::config::{Config, ConfigError};
pub use config::WindowConfig;
