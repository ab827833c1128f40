//! Context information summary

use crate::window::backend::{ContextProfile, GlAttribute, Platform, PlatformError};

/// Placeholder for a query the platform cannot answer or that failed
fn placeholder(error: &PlatformError) -> &'static str {
    match error {
        PlatformError::Unsupported(_) => "(unknown)",
        PlatformError::Failed(_) => "(error)",
    }
}

/// One-line summary of the current context
///
/// Each query that fails degrades to a placeholder in its own field; this
/// never fails as a whole.
pub fn info_string<P: Platform + ?Sized>(platform: &P) -> String {
    let profile = match platform.context_attribute(GlAttribute::ContextProfileMask) {
        Ok(mask) => ContextProfile::from_mask(mask)
            .map_or_else(|| "(unknown)".to_string(), |p| p.to_string()),
        Err(e) => placeholder(&e).to_string(),
    };

    let version = match (
        platform.context_attribute(GlAttribute::ContextMajorVersion),
        platform.context_attribute(GlAttribute::ContextMinorVersion),
    ) {
        (Ok(major), Ok(minor)) => format!("{major}.{minor}"),
        (Err(e), _) | (_, Err(e)) => placeholder(&e).to_string(),
    };

    let double_buffer = match platform.context_attribute(GlAttribute::DoubleBuffer) {
        Ok(0) => "NO double buffer".to_string(),
        Ok(_) => "double buffer".to_string(),
        Err(e) => format!("double buffer {}", placeholder(&e)),
    };

    let accelerated = match platform.context_attribute(GlAttribute::AcceleratedVisual) {
        Ok(0) => "NOT accelerated".to_string(),
        Ok(_) => "accelerated".to_string(),
        Err(e) => format!("acceleration {}", placeholder(&e)),
    };

    let sync = match platform.swap_interval() {
        Ok(-1) => "adaptive vsync".to_string(),
        Ok(0) => "NO vsync".to_string(),
        Ok(n) if n > 0 => "vsync".to_string(),
        Ok(_) => "vsync (unknown)".to_string(),
        Err(e) => format!("vsync {}", placeholder(&e)),
    };

    format!("OpenGL {profile} {version}, {double_buffer}, {accelerated}, {sync}")
}
