//! Construction sequence tests
//!
//! Every failure path is checked for the stage it reports and for leaked
//! native resources.

use super::fake_platform::{Call, FakePlatform};
use crate::foundation::Coord;
use crate::window::backend::{
    ContextProfile, GlAttribute, PlatformError, SwapInterval, WindowFlags, WindowPosition,
};
use crate::window::construction::{Construction, ConstructionState};
use crate::window::error::{ConfigurationError, Resource, Stage, WindowError};
use crate::window::options::{debug, fullscreen, monitor, multisample, size, title, vsync};
use crate::window::{Window, WindowBuilder, WindowOption};

fn no_options() -> Vec<WindowOption> {
    Vec::new()
}

#[test]
fn test_hello_window_scenario() {
    let platform = FakePlatform::new();
    let probe = platform.clone();

    let window = Window::new(platform, [title("Hello"), size(800, 600), vsync(true)]).unwrap();

    assert_eq!(window.size(), Coord::new(800, 600));
    assert_eq!(window.title(), "Hello");
    assert!(window.is_open());
    assert!(window.descriptor().is_opened());
    assert_eq!(window.swap_interval(), SwapInterval::Adaptive);
    assert_eq!(probe.swap_attempts(), vec![SwapInterval::Adaptive]);
    assert!(window.info_string().contains("vsync"));
}

#[test]
fn test_call_order() {
    let platform = FakePlatform::new();
    let probe = platform.clone();

    let _window = Window::new(platform, [debug(false)]).unwrap();
    let calls = probe.calls();

    assert_eq!(calls.first(), Some(&Call::Init));
    let position = |wanted: fn(&Call) -> bool| calls.iter().position(wanted).unwrap();
    let last_attribute = calls
        .iter()
        .rposition(|c| matches!(c, Call::SetAttribute(..)))
        .unwrap();
    assert!(last_attribute < position(|c| matches!(c, Call::CreateWindow(_))));
    assert!(
        position(|c| matches!(c, Call::CreateWindow(_))) < position(|c| matches!(c, Call::CreateContext(_)))
    );
    assert!(
        position(|c| matches!(c, Call::CreateContext(_)))
            < position(|c| matches!(c, Call::SetSwapInterval(_)))
    );
}

#[test]
fn test_window_request_reflects_options() {
    let platform = FakePlatform::new();
    let probe = platform.clone();

    let _window = Window::new(
        platform,
        [title("Game"), size(1920, 1080), monitor(1), fullscreen(true, false)],
    )
    .unwrap();

    let request = probe
        .calls()
        .into_iter()
        .find_map(|c| match c {
            Call::CreateWindow(request) => Some(request),
            _ => None,
        })
        .unwrap();
    assert_eq!(request.title, "Game");
    assert_eq!(request.size, Coord::new(1920, 1080));
    assert_eq!(request.position, WindowPosition::Centered { monitor: 1 });
    assert!(request.flags.contains(WindowFlags::OPENGL | WindowFlags::FULLSCREEN_DESKTOP));
}

#[test]
fn test_invalid_option_allocates_nothing() {
    let platform = FakePlatform::new();
    let probe = platform.clone();

    let err = Window::new(platform, [title("x"), size(-10, 600), vsync(true)])
        .err()
        .unwrap();

    assert_eq!(
        err,
        WindowError::Configuration(ConfigurationError::InvalidSize(Coord::new(-10, 600)))
    );
    assert!(err.is_configuration());
    assert_eq!(err.stage(), Stage::Options);
    assert_eq!(probe.created_windows(), 0);
    assert!(probe.swap_attempts().is_empty());
}

#[test]
fn test_platform_init_failure() {
    let platform = FakePlatform::new();
    platform.configure(|s| s.fail_init = true);
    let probe = platform.clone();

    let err = Window::new(platform, no_options()).err().unwrap();

    assert!(matches!(err, WindowError::PlatformInit(_)));
    assert_eq!(err.stage(), Stage::PlatformInit);
    assert_eq!(probe.calls(), vec![Call::Init]);
}

#[test]
fn test_critical_attribute_failure_is_fatal() {
    let platform = FakePlatform::new();
    platform.configure(|s| {
        s.fail_attributes.insert(GlAttribute::ContextProfileMask);
    });
    let probe = platform.clone();

    let err = Window::new(platform, no_options()).err().unwrap();

    assert_eq!(err.stage(), Stage::Attributes);
    assert!(matches!(
        err,
        WindowError::Attribute { attribute: GlAttribute::ContextProfileMask, .. }
    ));
    assert_eq!(probe.created_windows(), 0);
}

#[test]
fn test_non_critical_attribute_failure_degrades() {
    let platform = FakePlatform::new();
    platform.configure(|s| {
        s.fail_attributes.insert(GlAttribute::MultisampleSamples);
        s.fail_attributes.insert(GlAttribute::ContextFlags);
    });

    let window = Window::new(platform, [multisample(4), debug(true)]).unwrap();

    let degraded: Vec<_> = window.degraded_attributes().iter().map(|d| (d.attribute, d.value)).collect();
    assert_eq!(
        degraded,
        vec![(GlAttribute::MultisampleSamples, 4), (GlAttribute::ContextFlags, 1)]
    );
    assert!(window.is_open());
}

#[test]
fn test_multisample_attributes_only_when_requested() {
    let platform = FakePlatform::new();
    let probe = platform.clone();
    let _window = Window::new(platform, no_options()).unwrap();
    assert_eq!(
        probe.count(|c| matches!(c, Call::SetAttribute(GlAttribute::MultisampleBuffers, _))),
        0
    );

    let platform = FakePlatform::new();
    let probe = platform.clone();
    let _window = Window::new(platform, [multisample(8)]).unwrap();
    assert!(probe.calls().contains(&Call::SetAttribute(GlAttribute::MultisampleSamples, 8)));
}

#[test]
fn test_window_creation_failure() {
    let platform = FakePlatform::new();
    platform.configure(|s| s.fail_window = true);
    let probe = platform.clone();

    let err = Window::new(platform, no_options()).err().unwrap();

    assert_eq!(
        err,
        WindowError::ResourceCreation {
            resource: Resource::Window,
            source: PlatformError::failed("window creation refused"),
        }
    );
    assert_eq!(err.stage(), Stage::NativeWindow);
    assert_eq!(probe.count(|c| matches!(c, Call::CreateContext(_))), 0);
}

#[test]
fn test_context_failure_destroys_window() {
    let platform = FakePlatform::new();
    platform.configure(|s| s.fail_context = true);
    let probe = platform.clone();

    let err = Window::new(platform, [title("leak check")]).err().unwrap();

    assert_eq!(err.stage(), Stage::Context);
    assert_eq!(probe.created_windows(), 1);
    assert_eq!(probe.destroyed_windows(), 1);
    assert_eq!(probe.destroyed_contexts(), 0);
    assert!(probe.swap_attempts().is_empty());
}

#[test]
fn test_vsync_falls_back_to_strict_sync() {
    let platform = FakePlatform::new();
    platform.configure(|s| {
        s.rejected_intervals.insert(SwapInterval::Adaptive);
    });
    let probe = platform.clone();

    let window = Window::new(platform, [vsync(true)]).unwrap();

    assert_eq!(probe.swap_attempts(), vec![SwapInterval::Adaptive, SwapInterval::Vsync]);
    assert_eq!(window.swap_interval(), SwapInterval::Vsync);
    assert!(window.info_string().ends_with(", vsync"));
}

#[test]
fn test_vsync_fails_when_both_intervals_rejected() {
    let platform = FakePlatform::new();
    platform.configure(|s| {
        s.rejected_intervals.insert(SwapInterval::Adaptive);
        s.rejected_intervals.insert(SwapInterval::Vsync);
    });
    let probe = platform.clone();

    let err = Window::new(platform, [vsync(true)]).err().unwrap();

    assert_eq!(probe.swap_attempts(), vec![SwapInterval::Adaptive, SwapInterval::Vsync]);
    match err {
        WindowError::SwapNegotiation { adaptive, source } => {
            assert_eq!(adaptive, Some(PlatformError::failed("interval -1 rejected")));
            assert_eq!(source, PlatformError::failed("interval 1 rejected"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(probe.destroyed_contexts(), 1);
    assert_eq!(probe.destroyed_windows(), 1);
}

#[test]
fn test_no_vsync_requests_immediate_swap() {
    let platform = FakePlatform::new();
    let probe = platform.clone();

    let window = Window::new(platform, [vsync(false)]).unwrap();

    assert_eq!(probe.swap_attempts(), vec![SwapInterval::Immediate]);
    assert!(window.info_string().ends_with("NO vsync"));
}

#[test]
fn test_immediate_swap_failure_is_fatal_without_fallback() {
    let platform = FakePlatform::new();
    platform.configure(|s| {
        s.rejected_intervals.insert(SwapInterval::Immediate);
    });
    let probe = platform.clone();

    let err = Window::new(platform, no_options()).err().unwrap();

    assert!(matches!(err, WindowError::SwapNegotiation { adaptive: None, .. }));
    assert_eq!(probe.swap_attempts(), vec![SwapInterval::Immediate]);
    assert_eq!(probe.destroyed_windows(), 1);
}

#[test]
fn test_construction_state_tracking() {
    let mut platform = FakePlatform::new();
    let mut construction = Construction::new(&mut platform);
    assert_eq!(construction.state(), ConstructionState::Unconfigured);
    assert!(construction.run([size(640, 480)]).is_ok());
    assert_eq!(construction.state(), ConstructionState::Opened);

    let mut platform = FakePlatform::new();
    platform.configure(|s| s.fail_context = true);
    let mut construction = Construction::new(&mut platform);
    assert!(construction.run(no_options()).is_err());
    assert_eq!(construction.state(), ConstructionState::Failed(Stage::Context));
}

#[test]
fn test_platform_init_runs_on_every_construction() {
    let platform = FakePlatform::new();
    let probe = platform.clone();

    let mut first = Window::new(platform.clone(), no_options()).unwrap();
    first.close();
    let _second = Window::new(platform, no_options()).unwrap();

    assert_eq!(probe.count(|c| *c == Call::Init), 2);
    probe.configure(|s| assert!(s.initialized));
}

#[test]
fn test_builder_matches_option_list() {
    let platform = FakePlatform::new();

    let window = WindowBuilder::new()
        .with_title("Built")
        .with_size(640, 480)
        .with_profile(ContextProfile::Es)
        .with_size(800, 600)
        .build(platform)
        .unwrap();

    assert_eq!(window.title(), "Built");
    assert_eq!(window.size(), Coord::new(800, 600));
    assert_eq!(window.descriptor().profile(), ContextProfile::Es);
    assert!(window.info_string().starts_with("OpenGL ES 3.2"));
}
