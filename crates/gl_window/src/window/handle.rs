//! Application-facing window handle
//!
//! A [`Window`] owns its platform, its descriptor and the native window and
//! context created for it. The native resources are held in an `Option` and
//! moved out on [`Window::close`], so they are released exactly once whether
//! the window is closed explicitly, closed twice, or simply dropped.

use crate::foundation::Coord;
use crate::window::backend::{Platform, SwapInterval};
use crate::window::builder::WindowBuilder;
use crate::window::construction::{AttributeDegradation, Construction, LiveResources};
use crate::window::descriptor::WindowDescriptor;
use crate::window::error::{WindowError, WindowResult};
use crate::window::info;
use crate::window::options::WindowOption;

/// Summary returned by [`Window::info_string`] once the context is released
pub const NO_CONTEXT_INFO: &str = "OpenGL (no context)";

/// An open window and its graphics context
///
/// Must be used on the thread that owns the native event loop.
pub struct Window<P: Platform> {
    platform: P,
    descriptor: WindowDescriptor,
    resources: Option<LiveResources>,
    swap_interval: SwapInterval,
    degraded: Vec<AttributeDegradation>,
    has_focus: bool,
    has_mouse_focus: bool,
}

impl<P: Platform> Window<P> {
    /// Open a window on `platform`, applying `options` in order
    ///
    /// Options are applied to a fresh descriptor before any native resource
    /// is allocated. If any step fails, everything allocated so far is
    /// released and the error names the failing stage.
    pub fn new<I>(mut platform: P, options: I) -> WindowResult<Self>
    where
        I: IntoIterator<Item = WindowOption>,
    {
        let opened = Construction::new(&mut platform).run(options)?;

        let window = Self {
            platform,
            descriptor: opened.descriptor,
            resources: Some(opened.resources),
            swap_interval: opened.swap_interval,
            degraded: opened.degraded,
            has_focus: false,
            has_mouse_focus: false,
        };
        log::info!(
            "Opened window \"{}\" ({}): {}",
            window.descriptor.title,
            window.descriptor.size,
            window.info_string()
        );
        Ok(window)
    }

    /// Start a builder
    pub fn builder() -> WindowBuilder {
        WindowBuilder::new()
    }

    /// Apply an option to the open window
    ///
    /// Only the title can change after open; it is pushed to the native
    /// window first and recorded only if the platform accepted it. Every
    /// other option fails with a configuration error and changes nothing.
    pub fn apply(&mut self, option: WindowOption) -> WindowResult<()> {
        if let (WindowOption::Title(title), Some(resources)) = (&option, &self.resources) {
            self.platform
                .set_window_title(resources.window, title)
                .map_err(WindowError::LiveUpdate)?;
        }
        self.descriptor.apply(&option)?;
        Ok(())
    }

    /// Change the window title
    pub fn set_title(&mut self, title: impl Into<String>) -> WindowResult<()> {
        self.apply(WindowOption::Title(title.into()))
    }

    /// Display the rendered frame; does nothing once closed
    pub fn present(&mut self) {
        if let Some(resources) = &self.resources {
            self.platform.swap_buffers(resources.window);
        }
    }

    /// Release the context, then the native window
    ///
    /// Closing an already closed window does nothing.
    pub fn close(&mut self) {
        match self.resources.take() {
            Some(resources) => {
                self.platform.destroy_context(resources.context);
                self.platform.destroy_window(resources.window);
                log::info!("Closed window \"{}\"", self.descriptor.title);
            }
            None => log::debug!("Window \"{}\" already closed", self.descriptor.title),
        }
    }

    /// Whether the native window and context are live
    pub const fn is_open(&self) -> bool {
        self.resources.is_some()
    }

    /// Record focus changes observed by the event pump
    pub fn record_focus(&mut self, has_focus: bool, has_mouse_focus: bool) {
        self.has_focus = has_focus;
        self.has_mouse_focus = has_mouse_focus;
    }

    /// Whether the window has keyboard focus
    pub const fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the mouse is inside the window
    pub const fn has_mouse_focus(&self) -> bool {
        self.has_mouse_focus
    }

    /// Size of the window in screen pixels
    pub const fn size(&self) -> Coord {
        self.descriptor.size
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    /// Frozen configuration of the window
    pub const fn descriptor(&self) -> &WindowDescriptor {
        &self.descriptor
    }

    /// Swap interval accepted during construction
    pub const fn swap_interval(&self) -> SwapInterval {
        self.swap_interval
    }

    /// Non-critical attributes the platform refused
    pub fn degraded_attributes(&self) -> &[AttributeDegradation] {
        &self.degraded
    }

    /// Summary of the context profile, version, buffering, acceleration and sync
    pub fn info_string(&self) -> String {
        if self.resources.is_some() {
            info::info_string(&self.platform)
        } else {
            NO_CONTEXT_INFO.to_string()
        }
    }

    /// The underlying platform
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// The underlying platform, mutably
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

impl<P: Platform> Drop for Window<P> {
    fn drop(&mut self) {
        self.close();
    }
}
