//! Window descriptor
//!
//! The configuration record of one window, mutated by options until the
//! window is opened and frozen afterwards.

use crate::foundation::Coord;
use crate::window::backend::{ContextProfile, WindowFlags, WindowPosition, WindowRequest};
use crate::window::error::ConfigurationError;
use crate::window::options::WindowOption;

/// Default window title
pub const DEFAULT_TITLE: &str = "Untitled";

/// Default window size in pixels
pub const DEFAULT_SIZE: Coord = Coord::new(1280, 720);

/// Configuration and lifecycle state of a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub(crate) title: String,
    pub(crate) size: Coord,
    pub(crate) monitor: i32,
    pub(crate) multisample: i32,
    pub(crate) debug: bool,
    pub(crate) vsync: bool,
    pub(crate) fullscreen: bool,
    pub(crate) desktop: bool,
    pub(crate) profile: ContextProfile,
    pub(crate) opened: bool,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            size: DEFAULT_SIZE,
            monitor: 0,
            multisample: 0,
            debug: cfg!(debug_assertions),
            vsync: false,
            fullscreen: false,
            desktop: false,
            profile: ContextProfile::default(),
            opened: false,
        }
    }
}

impl WindowDescriptor {
    /// Create a descriptor with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one option
    ///
    /// Validates before committing, so a rejected option leaves the
    /// descriptor untouched. Once opened, every option except the title is
    /// rejected with [`ConfigurationError::ClosedWindowOnly`].
    pub fn apply(&mut self, option: &WindowOption) -> Result<(), ConfigurationError> {
        if self.opened && option.is_pre_open_only() {
            return Err(ConfigurationError::ClosedWindowOnly(option.name()));
        }

        match *option {
            WindowOption::Title(ref title) => self.title.clone_from(title),
            WindowOption::Size(size) => {
                if !size.is_positive() {
                    return Err(ConfigurationError::InvalidSize(size));
                }
                self.size = size;
            }
            WindowOption::Fullscreen { enabled, windowed } => {
                self.fullscreen = enabled;
                self.desktop = !windowed;
            }
            WindowOption::Monitor(index) => {
                if index < 0 {
                    return Err(ConfigurationError::InvalidMonitor(index));
                }
                self.monitor = index;
            }
            WindowOption::VSync(enabled) => self.vsync = enabled,
            WindowOption::Debug(enabled) => self.debug = enabled,
            WindowOption::Multisample(level) => {
                if level < 0 {
                    return Err(ConfigurationError::InvalidMultisample(level));
                }
                self.multisample = level;
            }
            WindowOption::Profile(profile) => self.profile = profile,
        }
        Ok(())
    }

    /// Apply options in order, stopping at the first rejected one
    pub fn apply_all<'a, I>(&mut self, options: I) -> Result<(), ConfigurationError>
    where
        I: IntoIterator<Item = &'a WindowOption>,
    {
        options.into_iter().try_for_each(|option| self.apply(option))
    }

    /// Native window creation flags for this configuration
    pub fn window_flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::OPENGL | WindowFlags::RESIZABLE;
        if self.fullscreen {
            flags |= if self.desktop {
                WindowFlags::FULLSCREEN_DESKTOP
            } else {
                WindowFlags::FULLSCREEN
            };
        }
        flags
    }

    /// Native window request for this configuration
    pub fn window_request(&self) -> WindowRequest {
        WindowRequest {
            title: self.title.clone(),
            position: WindowPosition::Centered { monitor: self.monitor },
            size: self.size,
            flags: self.window_flags(),
        }
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Requested size in pixels
    pub const fn size(&self) -> Coord {
        self.size
    }

    /// Target monitor index
    pub const fn monitor(&self) -> i32 {
        self.monitor
    }

    /// Multisample level
    pub const fn multisample(&self) -> i32 {
        self.multisample
    }

    /// Whether a debug context is requested
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Whether vertical synchronisation is requested
    pub const fn vsync(&self) -> bool {
        self.vsync
    }

    /// Whether the window is fullscreen
    pub const fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether fullscreen uses the desktop resolution
    pub const fn desktop(&self) -> bool {
        self.desktop
    }

    /// Requested context profile
    pub const fn profile(&self) -> ContextProfile {
        self.profile
    }

    /// Whether the window has been opened
    pub const fn is_opened(&self) -> bool {
        self.opened
    }
}
