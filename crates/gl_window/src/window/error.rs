//! Window errors
//!
//! Every construction failure records the [`Stage`] at which it happened and
//! keeps the underlying platform message.

use crate::foundation::Coord;
use crate::window::backend::{GlAttribute, PlatformError};
use std::fmt;
use thiserror::Error;

/// Step of the window lifecycle at which an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Platform subsystem bring-up
    PlatformInit,
    /// Option application, before or after open
    Options,
    /// Graphics context attribute setting
    Attributes,
    /// Native window allocation
    NativeWindow,
    /// Graphics context creation
    Context,
    /// Swap interval negotiation
    SwapInterval,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlatformInit => "platform init",
            Self::Options => "options",
            Self::Attributes => "attributes",
            Self::NativeWindow => "native window",
            Self::Context => "context",
            Self::SwapInterval => "swap interval",
        };
        f.write_str(name)
    }
}

/// Rejected window option
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The option can only be applied before the window is opened
    #[error("{0} cannot be changed on an opened window")]
    ClosedWindowOnly(&'static str),

    /// Window sizes must be strictly positive
    #[error("invalid window size {0}")]
    InvalidSize(Coord),

    /// Monitor indices start at zero
    #[error("invalid monitor index {0}")]
    InvalidMonitor(i32),

    /// Multisample level cannot be negative
    #[error("invalid multisample level {0}")]
    InvalidMultisample(i32),
}

/// Native resource whose creation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Native window
    Window,
    /// Graphics context
    Context,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window => f.write_str("window"),
            Self::Context => f.write_str("context"),
        }
    }
}

/// Window construction and configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// An option was rejected; no native resource was allocated
    #[error("window options: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The platform subsystem failed to initialize
    #[error("window platform init: {0}")]
    PlatformInit(PlatformError),

    /// A critical context attribute could not be set
    #[error("window attributes: failed to set {attribute}: {source}")]
    Attribute {
        /// Attribute being set
        attribute: GlAttribute,
        /// Platform failure
        source: PlatformError,
    },

    /// Native window or context creation failed
    #[error("native {resource} creation failed: {source}")]
    ResourceCreation {
        /// Resource being created
        resource: Resource,
        /// Platform failure
        source: PlatformError,
    },

    /// The platform refused a change pushed to the live window
    #[error("window live update: {0}")]
    LiveUpdate(PlatformError),

    /// No acceptable swap interval could be set
    #[error("window swap interval: {source}")]
    SwapNegotiation {
        /// Failure of the adaptive attempt, when one was made
        adaptive: Option<PlatformError>,
        /// Failure of the final attempt
        source: PlatformError,
    },
}

impl WindowError {
    /// Stage at which the error occurred
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Configuration(_) | Self::LiveUpdate(_) => Stage::Options,
            Self::PlatformInit(_) => Stage::PlatformInit,
            Self::Attribute { .. } => Stage::Attributes,
            Self::ResourceCreation { resource: Resource::Window, .. } => Stage::NativeWindow,
            Self::ResourceCreation { resource: Resource::Context, .. } => Stage::Context,
            Self::SwapNegotiation { .. } => Stage::SwapInterval,
        }
    }

    /// True for errors raised by option validation
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_of_each_error() {
        let platform = PlatformError::failed("boom");
        assert_eq!(
            WindowError::from(ConfigurationError::InvalidMonitor(-1)).stage(),
            Stage::Options
        );
        assert_eq!(WindowError::PlatformInit(platform.clone()).stage(), Stage::PlatformInit);
        assert_eq!(
            WindowError::ResourceCreation { resource: Resource::Context, source: platform.clone() }.stage(),
            Stage::Context
        );
        assert_eq!(
            WindowError::SwapNegotiation { adaptive: None, source: platform }.stage(),
            Stage::SwapInterval
        );
    }

    #[test]
    fn test_messages_wrap_platform_error() {
        let err = WindowError::ResourceCreation {
            resource: Resource::Window,
            source: PlatformError::failed("No available video device"),
        };
        assert_eq!(err.to_string(), "native window creation failed: No available video device");

        let err = WindowError::Attribute {
            attribute: GlAttribute::ContextProfileMask,
            source: PlatformError::failed("bad profile"),
        };
        assert_eq!(err.to_string(), "window attributes: failed to set context profile: bad profile");
    }
}
