//! Opens a window for a few seconds and prints its context summary

use gl_window::foundation::logging;
use gl_window::prelude::*;
use std::time::{Duration, Instant};

fn main() -> Result<(), WindowError> {
    logging::init("info");

    let mut window = Window::new(
        GlfwPlatform::new(),
        [
            options::title("Hello, World"),
            options::size(800, 600),
            options::vsync(true),
        ],
    )?;
    println!("{}", window.info_string());
    window.present();

    print!("Window opened...");
    let shown = Instant::now();
    while shown.elapsed() < Duration::from_secs(4) {
        window.platform_mut().poll_events();
        std::thread::sleep(Duration::from_millis(16));
    }

    window.close();
    println!(" and closed.");
    Ok(())
}
