//! Window construction sequence
//!
//! Turns a list of options into a live native window and graphics context:
//!
//! ```text
//! Unconfigured ─► Configuring ─► AttributesSet ─► NativeWindowCreated
//!      ─► ContextCreated ─► SwapNegotiated ─► Opened
//! ```
//!
//! Any step may end in `Failed(stage)`. Nothing is retried, and resources
//! allocated by earlier steps are released before an error is returned.

use crate::window::backend::{
    GlAttribute, Platform, PlatformError, RawContext, RawWindow, SwapInterval, CONTEXT_DEBUG_FLAG,
};
use crate::window::descriptor::WindowDescriptor;
use crate::window::error::{Resource, Stage, WindowError, WindowResult};
use crate::window::options::WindowOption;
use std::fmt;

/// Progress of a window construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionState {
    /// Nothing done yet
    Unconfigured,
    /// Platform initialized, options being applied
    Configuring,
    /// Options applied and context attributes requested
    AttributesSet,
    /// Native window allocated
    NativeWindowCreated,
    /// Graphics context created
    ContextCreated,
    /// Swap interval accepted by the platform
    SwapNegotiated,
    /// Window fully open
    Opened,
    /// Construction aborted at the given stage
    Failed(Stage),
}

impl fmt::Display for ConstructionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(stage) => write!(f, "Failed({stage})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// A non-critical attribute the platform refused; the window opened without it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDegradation {
    /// Attribute that could not be set
    pub attribute: GlAttribute,
    /// Requested value
    pub value: i32,
    /// Platform failure
    pub error: PlatformError,
}

/// Native resources owned by an open window
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct LiveResources {
    pub(crate) window: RawWindow,
    pub(crate) context: RawContext,
}

/// Result of a successful construction
#[derive(Debug)]
pub(crate) struct OpenedWindow {
    pub(crate) descriptor: WindowDescriptor,
    pub(crate) resources: LiveResources,
    pub(crate) swap_interval: SwapInterval,
    pub(crate) degraded: Vec<AttributeDegradation>,
}

/// Drives one window construction against a platform
pub(crate) struct Construction<'p, P: Platform> {
    platform: &'p mut P,
    state: ConstructionState,
}

impl<'p, P: Platform> Construction<'p, P> {
    pub(crate) fn new(platform: &'p mut P) -> Self {
        Self {
            platform,
            state: ConstructionState::Unconfigured,
        }
    }

    #[cfg(test)]
    pub(crate) const fn state(&self) -> ConstructionState {
        self.state
    }

    pub(crate) fn run<I>(&mut self, options: I) -> WindowResult<OpenedWindow>
    where
        I: IntoIterator<Item = WindowOption>,
    {
        let result = self.try_run(options);
        if let Err(err) = &result {
            log::warn!("Window construction failed in {:?}: {}", self.state, err);
            self.state = ConstructionState::Failed(err.stage());
        }
        result
    }

    fn advance(&mut self, next: ConstructionState) {
        log::debug!("Window construction: {} -> {}", self.state, next);
        self.state = next;
    }

    fn try_run<I>(&mut self, options: I) -> WindowResult<OpenedWindow>
    where
        I: IntoIterator<Item = WindowOption>,
    {
        self.platform.init().map_err(WindowError::PlatformInit)?;
        self.advance(ConstructionState::Configuring);

        let mut descriptor = WindowDescriptor::new();
        for option in options {
            descriptor.apply(&option)?;
        }
        let degraded = set_attributes(&mut *self.platform, &descriptor)?;
        self.advance(ConstructionState::AttributesSet);

        let request = descriptor.window_request();
        let window = self
            .platform
            .create_window(&request)
            .map_err(|source| WindowError::ResourceCreation { resource: Resource::Window, source })?;
        self.advance(ConstructionState::NativeWindowCreated);

        let context = match self.platform.create_context(window) {
            Ok(context) => context,
            Err(source) => {
                self.platform.destroy_window(window);
                return Err(WindowError::ResourceCreation { resource: Resource::Context, source });
            }
        };
        self.advance(ConstructionState::ContextCreated);

        let swap_interval = match negotiate_swap_interval(&mut *self.platform, descriptor.vsync) {
            Ok(interval) => interval,
            Err(err) => {
                self.platform.destroy_context(context);
                self.platform.destroy_window(window);
                return Err(err);
            }
        };
        self.advance(ConstructionState::SwapNegotiated);

        descriptor.opened = true;
        self.advance(ConstructionState::Opened);

        Ok(OpenedWindow {
            descriptor,
            resources: LiveResources { window, context },
            swap_interval,
            degraded,
        })
    }
}

/// Context attributes requested for a descriptor, in the order they are set
pub fn context_attributes(descriptor: &WindowDescriptor) -> Vec<(GlAttribute, i32)> {
    let (major, minor) = descriptor.profile.target_version();
    let mut attributes = vec![
        (GlAttribute::ContextMajorVersion, major),
        (GlAttribute::ContextMinorVersion, minor),
        (GlAttribute::ContextProfileMask, descriptor.profile.mask()),
        (GlAttribute::DoubleBuffer, 1),
    ];
    if descriptor.multisample > 0 {
        attributes.push((GlAttribute::MultisampleBuffers, 1));
        attributes.push((GlAttribute::MultisampleSamples, descriptor.multisample));
    }
    if descriptor.debug {
        attributes.push((GlAttribute::ContextFlags, CONTEXT_DEBUG_FLAG));
    }
    attributes
}

fn set_attributes<P: Platform>(
    platform: &mut P,
    descriptor: &WindowDescriptor,
) -> WindowResult<Vec<AttributeDegradation>> {
    let mut degraded = Vec::new();
    for (attribute, value) in context_attributes(descriptor) {
        match platform.set_context_attribute(attribute, value) {
            Ok(()) => {}
            Err(source) if attribute.is_critical() => {
                return Err(WindowError::Attribute { attribute, source });
            }
            Err(error) => {
                log::warn!("Could not set {attribute} to {value}, continuing without it: {error}");
                degraded.push(AttributeDegradation { attribute, value, error });
            }
        }
    }
    Ok(degraded)
}

/// Set the swap interval matching the vsync request
///
/// With vsync, adaptive sync is tried first and strict sync is the fallback.
/// Without vsync, the immediate interval is required.
fn negotiate_swap_interval<P: Platform>(platform: &mut P, vsync: bool) -> WindowResult<SwapInterval> {
    if !vsync {
        return platform
            .set_swap_interval(SwapInterval::Immediate)
            .map(|()| SwapInterval::Immediate)
            .map_err(|source| WindowError::SwapNegotiation { adaptive: None, source });
    }

    match platform.set_swap_interval(SwapInterval::Adaptive) {
        Ok(()) => Ok(SwapInterval::Adaptive),
        Err(adaptive) => {
            log::warn!("Adaptive vsync unavailable ({adaptive}), falling back to strict vsync");
            platform
                .set_swap_interval(SwapInterval::Vsync)
                .map(|()| SwapInterval::Vsync)
                .map_err(|source| WindowError::SwapNegotiation { adaptive: Some(adaptive), source })
        }
    }
}
