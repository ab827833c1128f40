//! # GL Window
//!
//! Creation, configuration and lifecycle of a single application window and
//! its OpenGL context.
//!
//! ## Features
//!
//! - **Deferred Options**: Composable options applied before the window opens
//! - **Staged Construction**: Attributes, window, context and swap interval,
//!   with cleanup of partially created resources on failure
//! - **VSync Negotiation**: Adaptive sync first, strict sync as fallback
//! - **Pluggable Platform**: GLFW backend, or any [`Platform`] implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gl_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = Window::new(
//!         GlfwPlatform::new(),
//!         [options::title("Hello"), options::size(800, 600), options::vsync(true)],
//!     )?;
//!     println!("{}", window.info_string());
//!     window.present();
//!     window.close();
//!     Ok(())
//! }
//! ```
//!
//! [`Platform`]: window::Platform

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod platform;
pub mod window;

/// Common imports for window users
pub mod prelude {
    #[cfg(feature = "glfw")]
    pub use crate::platform::GlfwPlatform;
    pub use crate::{
        core::{Config, WindowConfig},
        foundation::{xy, Coord},
        window::{
            options, ContextProfile, Platform, SwapInterval, Window, WindowBuilder, WindowError,
            WindowOption,
        },
    };
}
