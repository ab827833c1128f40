//! # Window Configuration
//!
//! Serializable window settings, loadable from TOML or RON files and turned
//! into the option list the window constructor consumes.
//!
//! ```toml
//! title = "Hello"
//! width = 800
//! height = 600
//! vsync = true
//! profile = "core"
//! ```
//!
//! Missing fields take the same defaults as a window opened without options.

use crate::config::Config;
use crate::window::descriptor::{DEFAULT_SIZE, DEFAULT_TITLE};
use crate::window::options::{self, WindowOption};
use crate::window::ContextProfile;
use serde::{Deserialize, Serialize};

/// Window settings as stored in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Target monitor index
    pub monitor: i32,
    /// Multisample level, 0 disables it
    pub multisample: i32,
    /// Request a debug context
    pub debug: bool,
    /// Request vertical synchronisation
    pub vsync: bool,
    /// Open fullscreen
    pub fullscreen: bool,
    /// Exclusive fullscreen instead of desktop resolution
    pub windowed: bool,
    /// Context profile
    pub profile: ContextProfile,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_SIZE.x,
            height: DEFAULT_SIZE.y,
            monitor: 0,
            multisample: 0,
            debug: cfg!(debug_assertions),
            vsync: false,
            fullscreen: false,
            windowed: true,
            profile: ContextProfile::default(),
        }
    }
}

impl WindowConfig {
    /// Create a configuration with defaults and the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the window size
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable vertical synchronisation
    pub fn with_vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }

    /// Options reproducing this configuration
    ///
    /// Values are not checked here; the constructor validates them when it
    /// applies the options.
    pub fn options(&self) -> Vec<WindowOption> {
        vec![
            options::title(self.title.clone()),
            options::size(self.width, self.height),
            options::monitor(self.monitor),
            options::multisample(self.multisample),
            options::debug(self.debug),
            options::vsync(self.vsync),
            options::fullscreen(self.fullscreen, self.windowed),
            options::profile(self.profile),
        ]
    }
}

impl Config for WindowConfig {}
