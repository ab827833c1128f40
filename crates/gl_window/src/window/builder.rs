//! Builder-style window configuration

use crate::window::backend::{ContextProfile, Platform};
use crate::window::error::WindowResult;
use crate::window::handle::Window;
use crate::window::options::{self, WindowOption};

/// Collects options through a setter chain and opens the window
///
/// Setters record options in call order; values are validated when
/// [`WindowBuilder::build`] applies them, with the same last-write-wins
/// and first-error-aborts rules as [`Window::new`].
#[derive(Debug, Clone, Default)]
pub struct WindowBuilder {
    options: Vec<WindowOption>,
}

impl WindowBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary option
    pub fn with_option(mut self, option: WindowOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the window title
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_option(options::title(title))
    }

    /// Set the window size in pixels
    pub fn with_size(self, width: i32, height: i32) -> Self {
        self.with_option(options::size(width, height))
    }

    /// Configure fullscreen mode
    pub fn with_fullscreen(self, enabled: bool, windowed: bool) -> Self {
        self.with_option(options::fullscreen(enabled, windowed))
    }

    /// Choose the target monitor
    pub fn with_monitor(self, index: i32) -> Self {
        self.with_option(options::monitor(index))
    }

    /// Enable or disable vertical synchronisation
    pub fn with_vsync(self, enabled: bool) -> Self {
        self.with_option(options::vsync(enabled))
    }

    /// Request a debug context
    pub fn with_debug(self, enabled: bool) -> Self {
        self.with_option(options::debug(enabled))
    }

    /// Set the multisample level
    pub fn with_multisample(self, level: i32) -> Self {
        self.with_option(options::multisample(level))
    }

    /// Select the context profile
    pub fn with_profile(self, profile: ContextProfile) -> Self {
        self.with_option(options::profile(profile))
    }

    /// Options recorded so far
    pub fn options(&self) -> &[WindowOption] {
        &self.options
    }

    /// Open the window on `platform`
    pub fn build<P: Platform>(self, platform: P) -> WindowResult<Window<P>> {
        Window::new(platform, self.options)
    }
}
