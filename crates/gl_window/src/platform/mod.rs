//! Native platform implementations
//!
//! - **`glfw`**: GLFW windows and OpenGL contexts (cargo feature `glfw`)

#[cfg(feature = "glfw")]
pub mod glfw;

#[cfg(feature = "glfw")]
pub use self::glfw::GlfwPlatform;
