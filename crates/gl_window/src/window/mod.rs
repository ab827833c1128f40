//! Window management subsystem
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ options / builder
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API (handle.rs)
//!         └─────┬─────┘
//!               │ construction.rs
//!      ┌────────▼────────┐
//!      │ Platform trait  │ ← Capability surface (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ platform::glfw        │ ← Native backend
//!   │ test fake             │
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`options`**: Deferred configuration changes
//! - **`descriptor`**: Configuration record, frozen once opened
//! - **`builder`**: Setter-chain front end over the options
//! - **`construction`**: The staged open sequence
//! - **`handle`**: The open window and its lifecycle
//! - **`info`**: Context summary line
//! - **`backend`**: The platform trait and its value types
//! - **`error`**: Error taxonomy

pub mod backend;
pub mod builder;
pub mod construction;
pub mod descriptor;
pub mod error;
pub mod handle;
pub mod info;
pub mod options;

#[cfg(test)]
mod tests;

pub use backend::{
    ContextProfile, GlAttribute, Platform, PlatformError, RawContext, RawWindow, SwapInterval,
    WindowFlags, WindowPosition, WindowRequest,
};
pub use builder::WindowBuilder;
pub use construction::{AttributeDegradation, ConstructionState};
pub use descriptor::WindowDescriptor;
pub use error::{ConfigurationError, Resource, Stage, WindowError, WindowResult};
pub use handle::Window;
pub use options::WindowOption;
