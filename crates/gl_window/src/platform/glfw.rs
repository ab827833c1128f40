//! Native platform using GLFW
//!
//! Context attributes become GLFW window hints applied to the next window.
//! GLFW reports failures through its error callback rather than return
//! values, so every call clears the last recorded error, performs the native
//! call, and turns a newly recorded error into a [`PlatformError`].

use crate::foundation::{xy, Coord};
use crate::window::backend::{
    ContextProfile, GlAttribute, Platform, PlatformError, RawContext, RawWindow, SwapInterval,
    WindowFlags, WindowPosition, WindowRequest, CONTEXT_DEBUG_FLAG,
};
use glfw::{ClientApiHint, Context, OpenGlProfileHint, WindowHint, WindowMode};
use std::cell::RefCell;
use std::collections::HashMap;

// GLFW enum values returned by the context queries
const OPENGL_ES_API: i32 = 0x0003_0002;
const OPENGL_CORE_PROFILE: i32 = 0x0003_2001;
const OPENGL_COMPAT_PROFILE: i32 = 0x0003_2002;

const ADAPTIVE_SYNC_EXTENSIONS: [&str; 2] = ["WGL_EXT_swap_control_tear", "GLX_EXT_swap_control_tear"];

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn record_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
    LAST_ERROR.with(|last| *last.borrow_mut() = Some(description));
}

fn clear_error() {
    LAST_ERROR.with(|last| last.borrow_mut().take());
}

fn check_error() -> Result<(), PlatformError> {
    LAST_ERROR
        .with(|last| last.borrow_mut().take())
        .map_or(Ok(()), |message| Err(PlatformError::Failed(message)))
}

fn not_initialized() -> PlatformError {
    PlatformError::failed("GLFW is not initialized")
}

fn to_u32(attribute: GlAttribute, value: i32) -> Result<u32, PlatformError> {
    u32::try_from(value).map_err(|_| PlatformError::failed(format!("invalid {attribute} value {value}")))
}

fn profile_hints(mask: i32) -> Result<Vec<WindowHint>, PlatformError> {
    match ContextProfile::from_mask(mask) {
        Some(ContextProfile::Core) => Ok(vec![
            WindowHint::ClientApi(ClientApiHint::OpenGl),
            WindowHint::OpenGlProfile(OpenGlProfileHint::Core),
        ]),
        Some(ContextProfile::Compatibility) => Ok(vec![
            WindowHint::ClientApi(ClientApiHint::OpenGl),
            WindowHint::OpenGlProfile(OpenGlProfileHint::Compat),
        ]),
        Some(ContextProfile::Es) => Ok(vec![
            WindowHint::ClientApi(ClientApiHint::OpenGlEs),
            WindowHint::OpenGlProfile(OpenGlProfileHint::Any),
        ]),
        None => Err(PlatformError::failed(format!("unknown profile mask {mask:#x}"))),
    }
}

/// A GLFW window and its event queue
struct NativeWindow {
    window: glfw::PWindow,
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

/// GLFW implementation of the platform surface
pub struct GlfwPlatform {
    windows: HashMap<u64, NativeWindow>,
    glfw: Option<glfw::Glfw>,
    current: Option<u64>,
    double_buffer: bool,
    swap_interval: i32,
    next_id: u64,
}

impl Default for GlfwPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl GlfwPlatform {
    /// Create an uninitialized platform; GLFW is brought up by [`Platform::init`]
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            glfw: None,
            current: None,
            double_buffer: true,
            swap_interval: 0,
            next_id: 0,
        }
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        if let Some(glfw) = self.glfw.as_mut() {
            glfw.poll_events();
        }
    }

    fn glfw_mut(&mut self) -> Result<&mut glfw::Glfw, PlatformError> {
        self.glfw.as_mut().ok_or_else(not_initialized)
    }

    fn current_window(&self) -> Result<&glfw::PWindow, PlatformError> {
        self.current
            .and_then(|id| self.windows.get(&id))
            .map(|native| &native.window)
            .ok_or_else(|| PlatformError::failed("no current context"))
    }

    fn native_mut(&mut self, window: RawWindow) -> Result<&mut NativeWindow, PlatformError> {
        self.windows
            .get_mut(&window.0)
            .ok_or_else(|| PlatformError::failed(format!("unknown window {}", window.0)))
    }

    fn hint(&mut self, hints: Vec<WindowHint>) -> Result<(), PlatformError> {
        let glfw = self.glfw_mut()?;
        clear_error();
        for hint in hints {
            glfw.window_hint(hint);
        }
        check_error()
    }
}

impl Platform for GlfwPlatform {
    fn init(&mut self) -> Result<(), PlatformError> {
        if self.glfw.is_some() {
            return Ok(());
        }
        let glfw = glfw::init(record_error)
            .map_err(|e| PlatformError::failed(format!("failed to initialize GLFW: {e:?}")))?;
        log::info!("GLFW {} initialized", glfw::get_version_string());
        self.glfw = Some(glfw);
        Ok(())
    }

    fn set_context_attribute(&mut self, attribute: GlAttribute, value: i32) -> Result<(), PlatformError> {
        let hints = match attribute {
            GlAttribute::ContextMajorVersion => vec![WindowHint::ContextVersionMajor(to_u32(attribute, value)?)],
            GlAttribute::ContextMinorVersion => vec![WindowHint::ContextVersionMinor(to_u32(attribute, value)?)],
            GlAttribute::ContextProfileMask => profile_hints(value)?,
            GlAttribute::ContextFlags => vec![WindowHint::OpenGlDebugContext(value & CONTEXT_DEBUG_FLAG != 0)],
            GlAttribute::DoubleBuffer => {
                self.double_buffer = value != 0;
                vec![WindowHint::DoubleBuffer(value != 0)]
            }
            GlAttribute::MultisampleBuffers if value == 0 => vec![WindowHint::Samples(None)],
            GlAttribute::MultisampleBuffers => Vec::new(),
            GlAttribute::MultisampleSamples => vec![WindowHint::Samples(Some(to_u32(attribute, value)?))],
            GlAttribute::AcceleratedVisual => return Err(PlatformError::Unsupported("accelerated visual hint")),
        };
        self.hint(hints)
    }

    fn context_attribute(&self, attribute: GlAttribute) -> Result<i32, PlatformError> {
        let window = self.current_window()?;
        match attribute {
            GlAttribute::ContextMajorVersion => i32::try_from(window.get_context_version().major)
                .map_err(|_| PlatformError::failed("context major version out of range")),
            GlAttribute::ContextMinorVersion => i32::try_from(window.get_context_version().minor)
                .map_err(|_| PlatformError::failed("context minor version out of range")),
            GlAttribute::ContextProfileMask => {
                if window.get_client_api() == OPENGL_ES_API {
                    return Ok(ContextProfile::Es.mask());
                }
                Ok(match window.get_opengl_profile() {
                    OPENGL_CORE_PROFILE => ContextProfile::Core.mask(),
                    OPENGL_COMPAT_PROFILE => ContextProfile::Compatibility.mask(),
                    _ => 0,
                })
            }
            GlAttribute::ContextFlags => Ok(if window.is_opengl_debug_context() { CONTEXT_DEBUG_FLAG } else { 0 }),
            // Double buffering is a hard constraint in GLFW: a live context has what was hinted
            GlAttribute::DoubleBuffer => Ok(i32::from(self.double_buffer)),
            GlAttribute::MultisampleBuffers | GlAttribute::MultisampleSamples => {
                Err(PlatformError::Unsupported("multisample query"))
            }
            GlAttribute::AcceleratedVisual => Err(PlatformError::Unsupported("accelerated visual query")),
        }
    }

    fn create_window(&mut self, request: &WindowRequest) -> Result<RawWindow, PlatformError> {
        let width = u32::try_from(request.size.x).map_err(|_| PlatformError::failed("invalid width"))?;
        let height = u32::try_from(request.size.y).map_err(|_| PlatformError::failed("invalid height"))?;
        let WindowPosition::Centered { monitor } = request.position;
        let monitor = usize::try_from(monitor).unwrap_or_default();
        let fullscreen = request.flags.contains(WindowFlags::FULLSCREEN);
        let desktop = request.flags.contains(WindowFlags::FULLSCREEN_DESKTOP);
        let size = request.size;
        let title = request.title.as_str();

        let glfw = self.glfw_mut()?;
        clear_error();
        glfw.window_hint(WindowHint::Resizable(request.flags.contains(WindowFlags::RESIZABLE)));

        let created = glfw.with_connected_monitors(|glfw, monitors| {
            let target = monitors.get(monitor).or_else(|| monitors.first());
            let mode = target.and_then(glfw::Monitor::get_video_mode);

            if fullscreen {
                let target = target?;
                let (w, h) = match mode {
                    Some(mode) if desktop => (mode.width, mode.height),
                    _ => (width, height),
                };
                return glfw
                    .create_window(w, h, title, WindowMode::FullScreen(target))
                    .map(|created| (created, None));
            }

            let center = target.zip(mode).and_then(|(target, mode)| {
                let (x, y) = target.get_pos();
                let extent = xy(i32::try_from(mode.width).ok()?, i32::try_from(mode.height).ok()?);
                Some(Coord::new(x, y) + (extent - size) / xy(2, 2))
            });
            glfw.create_window(width, height, title, WindowMode::Windowed)
                .map(|created| (created, center))
        });

        let ((mut window, events), center) = created.ok_or_else(|| {
            check_error()
                .err()
                .unwrap_or_else(|| PlatformError::failed("GLFW could not create the window"))
        })?;
        if let Some(center) = center {
            window.set_pos(center.x, center.y);
        }

        self.next_id += 1;
        let id = self.next_id;
        self.windows.insert(id, NativeWindow { window, _events: events });
        log::debug!("Created GLFW window {id} ({size}, {:?})", request.flags);
        Ok(RawWindow(id))
    }

    fn create_context(&mut self, window: RawWindow) -> Result<RawContext, PlatformError> {
        let native = self.native_mut(window)?;
        clear_error();
        native.window.make_current();
        check_error()?;
        self.current = Some(window.0);
        Ok(RawContext(window.0))
    }

    fn set_swap_interval(&mut self, interval: SwapInterval) -> Result<(), PlatformError> {
        let glfw = self.glfw_mut()?;
        let native = match interval {
            SwapInterval::Immediate => glfw::SwapInterval::None,
            SwapInterval::Vsync => glfw::SwapInterval::Sync(1),
            SwapInterval::Adaptive => {
                if !ADAPTIVE_SYNC_EXTENSIONS.iter().any(|ext| glfw.extension_supported(ext)) {
                    return Err(PlatformError::Unsupported("adaptive vsync"));
                }
                glfw::SwapInterval::Adaptive
            }
        };
        clear_error();
        glfw.set_swap_interval(native);
        check_error()?;
        self.swap_interval = interval.value();
        Ok(())
    }

    fn swap_interval(&self) -> Result<i32, PlatformError> {
        self.current_window().map(|_| self.swap_interval)
    }

    fn swap_buffers(&mut self, window: RawWindow) {
        if let Ok(native) = self.native_mut(window) {
            native.window.swap_buffers();
        }
    }

    fn set_window_title(&mut self, window: RawWindow, title: &str) -> Result<(), PlatformError> {
        let native = self.native_mut(window)?;
        clear_error();
        native.window.set_title(title);
        check_error()
    }

    fn destroy_context(&mut self, context: RawContext) {
        if self.current == Some(context.0) {
            glfw::make_context_current(None);
            self.current = None;
        }
    }

    fn destroy_window(&mut self, window: RawWindow) {
        if self.windows.remove(&window.0).is_some() {
            log::debug!("Destroyed GLFW window {}", window.0);
        }
    }
}
