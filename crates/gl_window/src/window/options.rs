//! Window options
//!
//! Options are applied in order to a [`WindowDescriptor`] before the window is
//! opened. Later options for the same field overwrite earlier ones, and the
//! first rejected option aborts the whole construction.
//!
//! ```rust,ignore
//! let window = Window::new(platform, [
//!     options::title("Hello"),
//!     options::size(800, 600),
//!     options::vsync(true),
//! ])?;
//! ```
//!
//! [`WindowDescriptor`]: crate::window::WindowDescriptor

use crate::foundation::Coord;
use crate::window::backend::ContextProfile;

/// A single deferred configuration change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOption {
    /// Window title; the only option accepted on an opened window
    Title(String),
    /// Client area size in pixels
    Size(Coord),
    /// Fullscreen mode
    Fullscreen {
        /// Whether the window is fullscreen at all
        enabled: bool,
        /// Exclusive fullscreen with its own video mode when true,
        /// desktop-resolution fullscreen otherwise
        windowed: bool,
    },
    /// Index of the monitor the window is centered on
    Monitor(i32),
    /// Request vertical synchronisation
    VSync(bool),
    /// Request a debug context
    Debug(bool),
    /// Multisample level; 0 disables multisampling
    Multisample(i32),
    /// Context profile
    Profile(ContextProfile),
}

impl WindowOption {
    /// Name used in error messages and logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Size(_) => "size",
            Self::Fullscreen { .. } => "fullscreen",
            Self::Monitor(_) => "monitor",
            Self::VSync(_) => "vsync",
            Self::Debug(_) => "debug",
            Self::Multisample(_) => "multisample",
            Self::Profile(_) => "profile",
        }
    }

    /// Whether the option is rejected once the window is open
    pub const fn is_pre_open_only(&self) -> bool {
        !matches!(self, Self::Title(_))
    }
}

/// Set the window title
pub fn title(title: impl Into<String>) -> WindowOption {
    WindowOption::Title(title.into())
}

/// Set the window size in pixels
pub const fn size(width: i32, height: i32) -> WindowOption {
    WindowOption::Size(Coord::new(width, height))
}

/// Configure fullscreen mode
pub const fn fullscreen(enabled: bool, windowed: bool) -> WindowOption {
    WindowOption::Fullscreen { enabled, windowed }
}

/// Choose the monitor the window opens on
pub const fn monitor(index: i32) -> WindowOption {
    WindowOption::Monitor(index)
}

/// Enable or disable vertical synchronisation
pub const fn vsync(enabled: bool) -> WindowOption {
    WindowOption::VSync(enabled)
}

/// Request a debug context
pub const fn debug(enabled: bool) -> WindowOption {
    WindowOption::Debug(enabled)
}

/// Set the multisample level
pub const fn multisample(level: i32) -> WindowOption {
    WindowOption::Multisample(level)
}

/// Select the context profile
pub const fn profile(profile: ContextProfile) -> WindowOption {
    WindowOption::Profile(profile)
}
