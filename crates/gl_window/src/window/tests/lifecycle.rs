//! Post-open behaviour: frozen options, presentation, close and info

use super::fake_platform::{Call, FakePlatform};
use crate::foundation::Coord;
use crate::window::backend::RawWindow;
use crate::window::error::{ConfigurationError, WindowError};
use crate::window::handle::NO_CONTEXT_INFO;
use crate::window::options::{debug, fullscreen, monitor, multisample, size, title, vsync};
use crate::window::Window;

fn open(platform: &FakePlatform) -> Window<FakePlatform> {
    Window::new(platform.clone(), [title("Hello"), size(800, 600)]).unwrap()
}

#[test]
fn test_size_rejected_after_open() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);

    let err = window.apply(size(-10, 600)).unwrap_err();

    assert_eq!(err, WindowError::Configuration(ConfigurationError::ClosedWindowOnly("size")));
    assert_eq!(window.size(), Coord::new(800, 600));
}

#[test]
fn test_every_pre_open_option_rejected_after_open() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);
    let before = window.descriptor().clone();

    for option in [
        size(1024, 768),
        fullscreen(true, true),
        monitor(2),
        vsync(true),
        debug(true),
        multisample(2),
    ] {
        let err = window.apply(option).unwrap_err();
        assert!(err.is_configuration());
    }

    assert_eq!(window.descriptor(), &before);
}

#[test]
fn test_title_is_pushed_to_live_window() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);

    window.set_title("Renamed").unwrap();

    assert_eq!(window.title(), "Renamed");
    assert!(platform
        .calls()
        .iter()
        .any(|c| matches!(c, Call::SetTitle(_, t) if t == "Renamed")));
}

#[test]
fn test_refused_live_title_keeps_old_title() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);
    platform.configure(|s| s.fail_title = true);

    let err = window.set_title("Refused").unwrap_err();

    assert!(matches!(err, WindowError::LiveUpdate(_)));
    assert_eq!(window.title(), "Hello");
}

#[test]
fn test_title_after_close_only_updates_descriptor() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);
    window.close();

    window.set_title("Offline").unwrap();

    assert_eq!(window.title(), "Offline");
    assert_eq!(platform.count(|c| matches!(c, Call::SetTitle(..))), 0);
}

#[test]
fn test_present_swaps_only_while_open() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);

    window.present();
    window.present();
    window.close();
    window.present();

    assert_eq!(platform.count(|c| matches!(c, Call::SwapBuffers(_))), 2);
}

#[test]
fn test_close_releases_context_before_window() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);

    window.close();

    let releases: Vec<_> = platform
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::DestroyContext(_) | Call::DestroyWindow(_)))
        .collect();
    assert!(matches!(
        releases.as_slice(),
        [Call::DestroyContext(_), Call::DestroyWindow(RawWindow(_))]
    ));
    assert!(!window.is_open());
    assert!(window.descriptor().is_opened());
}

#[test]
fn test_double_close_is_noop() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);

    window.close();
    window.close();
    drop(window);

    assert_eq!(platform.destroyed_contexts(), 1);
    assert_eq!(platform.destroyed_windows(), 1);
}

#[test]
fn test_drop_closes_open_window() {
    let platform = FakePlatform::new();
    {
        let _window = open(&platform);
    }
    assert_eq!(platform.destroyed_contexts(), 1);
    assert_eq!(platform.destroyed_windows(), 1);
}

#[test]
fn test_focus_is_recorded_not_queried() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);
    assert!(!window.has_focus());
    assert!(!window.has_mouse_focus());

    window.record_focus(true, false);

    assert!(window.has_focus());
    assert!(!window.has_mouse_focus());
}

#[test]
fn test_info_string_full() {
    let platform = FakePlatform::new();
    let window = open(&platform);

    assert_eq!(
        window.info_string(),
        "OpenGL Core 4.6, double buffer, accelerated, NO vsync"
    );
}

#[test]
fn test_info_string_survives_every_query_failing() {
    let platform = FakePlatform::new();
    let window = open(&platform);
    platform.configure(|s| s.fail_queries = true);

    assert_eq!(
        window.info_string(),
        "OpenGL (error) (error), double buffer (error), acceleration (error), vsync (error)"
    );
}

#[test]
fn test_info_string_unsupported_queries() {
    let platform = FakePlatform::new();
    let window = open(&platform);
    platform.configure(|s| s.unsupported_queries = true);

    assert_eq!(
        window.info_string(),
        "OpenGL (unknown) (unknown), double buffer (unknown), acceleration (unknown), vsync (unknown)"
    );
}

#[test]
fn test_info_string_unexpected_values() {
    let platform = FakePlatform::new();
    let window = open(&platform);
    platform.configure(|s| {
        s.attributes.insert(crate::window::GlAttribute::ContextProfileMask, 0x40);
        s.attributes.insert(crate::window::GlAttribute::AcceleratedVisual, 0);
        s.swap_interval = -7;
    });

    assert_eq!(
        window.info_string(),
        "OpenGL (unknown) 4.6, double buffer, NOT accelerated, vsync (unknown)"
    );
}

#[test]
fn test_info_string_after_close() {
    let platform = FakePlatform::new();
    let mut window = open(&platform);
    window.close();
    assert_eq!(window.info_string(), NO_CONTEXT_INFO);
}
