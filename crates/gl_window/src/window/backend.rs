//! Platform capability surface
//!
//! This module defines the trait that native windowing/graphics subsystems
//! implement. The window construction code only talks to the platform through
//! this trait, which keeps it testable against a fake backend.
//!
//! # Thread Safety
//! Implementations are not required to be `Send`. Native windowing subsystems
//! are typically bound to the thread that owns the event loop, and every call
//! on a [`Platform`] must happen on that thread.

use crate::foundation::Coord;
use bitflags::bitflags;
use std::fmt;
use thiserror::Error;

/// Errors reported by the native platform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The native call failed; carries the platform's own message
    #[error("{0}")]
    Failed(String),

    /// The platform cannot perform or answer this request
    #[error("not supported: {0}")]
    Unsupported(&'static str),
}

impl PlatformError {
    /// Wrap a platform error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Opaque identifier of a native window allocated by a [`Platform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawWindow(pub u64);

/// Opaque identifier of a native graphics context allocated by a [`Platform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawContext(pub u64);

/// Graphics context attributes that can be requested before window creation
/// and queried once a context is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlAttribute {
    /// Requested context major version
    ContextMajorVersion,
    /// Requested context minor version
    ContextMinorVersion,
    /// Context profile mask (see [`ContextProfile::mask`])
    ContextProfileMask,
    /// Context creation flags (see [`CONTEXT_DEBUG_FLAG`])
    ContextFlags,
    /// Double buffering (0 or 1)
    DoubleBuffer,
    /// Number of multisample buffers (0 or 1)
    MultisampleBuffers,
    /// Number of samples per pixel
    MultisampleSamples,
    /// Hardware acceleration (0 or 1)
    AcceleratedVisual,
}

impl GlAttribute {
    /// Critical attributes abort the construction when they cannot be set
    pub const fn is_critical(self) -> bool {
        matches!(
            self,
            Self::ContextMajorVersion | Self::ContextMinorVersion | Self::ContextProfileMask
        )
    }
}

impl fmt::Display for GlAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ContextMajorVersion => "context major version",
            Self::ContextMinorVersion => "context minor version",
            Self::ContextProfileMask => "context profile",
            Self::ContextFlags => "context flags",
            Self::DoubleBuffer => "double buffer",
            Self::MultisampleBuffers => "multisample buffers",
            Self::MultisampleSamples => "multisample samples",
            Self::AcceleratedVisual => "accelerated visual",
        };
        f.write_str(name)
    }
}

/// Context flag requesting a debug context
pub const CONTEXT_DEBUG_FLAG: i32 = 0x0001;

/// OpenGL context profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextProfile {
    /// Core profile, desktop OpenGL
    #[default]
    Core,
    /// Compatibility profile, desktop OpenGL with deprecated features
    Compatibility,
    /// Embedded systems profile (OpenGL ES)
    Es,
}

impl ContextProfile {
    /// Value of the profile mask attribute for this profile
    pub const fn mask(self) -> i32 {
        match self {
            Self::Core => 0x0001,
            Self::Compatibility => 0x0002,
            Self::Es => 0x0004,
        }
    }

    /// Profile matching a profile mask value
    pub const fn from_mask(mask: i32) -> Option<Self> {
        match mask {
            0x0001 => Some(Self::Core),
            0x0002 => Some(Self::Compatibility),
            0x0004 => Some(Self::Es),
            _ => None,
        }
    }

    /// Highest context version targeted for this profile
    pub const fn target_version(self) -> (i32, i32) {
        match self {
            Self::Core | Self::Compatibility => (4, 6),
            Self::Es => (3, 2),
        }
    }
}

impl fmt::Display for ContextProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Core => "Core",
            Self::Compatibility => "Compatibility",
            Self::Es => "ES",
        };
        f.write_str(name)
    }
}

/// Buffer swap synchronisation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapInterval {
    /// Never wait for vertical sync
    Immediate,
    /// Always wait for vertical sync
    Vsync,
    /// Wait for vertical sync, but swap immediately (and tear) on a missed frame
    Adaptive,
}

impl SwapInterval {
    /// Native interval value
    pub const fn value(self) -> i32 {
        match self {
            Self::Immediate => 0,
            Self::Vsync => 1,
            Self::Adaptive => -1,
        }
    }

    /// Interval matching a native value
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Immediate),
            1 => Some(Self::Vsync),
            -1 => Some(Self::Adaptive),
            _ => None,
        }
    }
}

bitflags! {
    /// Native window creation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        /// Exclusive fullscreen, changing the video mode
        const FULLSCREEN = 0x0000_0001;
        /// Window usable with an OpenGL context
        const OPENGL = 0x0000_0002;
        /// Window can be resized by the user
        const RESIZABLE = 0x0000_0020;
        /// Fullscreen at the desktop resolution
        const FULLSCREEN_DESKTOP = Self::FULLSCREEN.bits() | 0x0000_1000;
    }
}

/// Where a new native window is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPosition {
    /// Centered on the given monitor
    Centered {
        /// Monitor index
        monitor: i32,
    },
}

/// Everything the platform needs to allocate a native window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    /// Title bar text
    pub title: String,
    /// Placement on screen
    pub position: WindowPosition,
    /// Client area size in pixels
    pub size: Coord,
    /// Creation flags
    pub flags: WindowFlags,
}

/// Native windowing and graphics subsystem
///
/// Calls are only made from the thread owning the native event loop. The
/// window construction sequence drives them in this order: `init`,
/// `set_context_attribute`*, `create_window`, `create_context`,
/// `set_swap_interval`.
pub trait Platform {
    /// Bring up the subsystem; must be a no-op when already initialized
    fn init(&mut self) -> Result<(), PlatformError>;

    /// Request a context attribute for the next window creation
    fn set_context_attribute(&mut self, attribute: GlAttribute, value: i32) -> Result<(), PlatformError>;

    /// Query an attribute of the current context
    fn context_attribute(&self, attribute: GlAttribute) -> Result<i32, PlatformError>;

    /// Allocate a native window
    fn create_window(&mut self, request: &WindowRequest) -> Result<RawWindow, PlatformError>;

    /// Create a graphics context bound to `window` and make it current
    fn create_context(&mut self, window: RawWindow) -> Result<RawContext, PlatformError>;

    /// Set the swap interval of the current context
    fn set_swap_interval(&mut self, interval: SwapInterval) -> Result<(), PlatformError>;

    /// Native swap interval of the current context
    fn swap_interval(&self) -> Result<i32, PlatformError>;

    /// Display the back buffer of `window`
    fn swap_buffers(&mut self, window: RawWindow);

    /// Change the title of a live window
    fn set_window_title(&mut self, window: RawWindow, title: &str) -> Result<(), PlatformError>;

    /// Release a graphics context
    fn destroy_context(&mut self, context: RawContext);

    /// Release a native window
    fn destroy_window(&mut self, window: RawWindow);
}
