//! Finger Ball entry point
//!
//! On the web the finger runs on the page canvas forever; natively it runs a
//! fixed number of frames against a recording surface and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();

    let settings = finger_ball::Settings::load();
    if let Err(e) = console_log::init_with_level(settings.log_level()) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    log::info!("Finger Ball starting...");

    match finger_ball::platform::web::start(settings) {
        Ok(()) => log::info!("Finger Ball running!"),
        Err(e) => log::error!("Finger Ball failed to start: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use finger_ball::consts::{HEADLESS_FRAME_MS, HEADLESS_HEIGHT, HEADLESS_WIDTH};
    use finger_ball::platform::{Animation, FixedStepScheduler};
    use finger_ball::renderer::RecordingSurface;

    const FRAMES: u32 = 600;

    let settings = finger_ball::Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.log_level().to_level_filter())
        .parse_default_env()
        .init();

    log::info!("Finger Ball (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the canvas version");

    let surface = RecordingSurface::new(HEADLESS_WIDTH, HEADLESS_HEIGHT);
    let mut animation = Animation::new(settings, surface);
    let mut scheduler = FixedStepScheduler::new(HEADLESS_FRAME_MS);
    scheduler.run(&mut animation, FRAMES);

    let disc = &animation.disc;
    log::info!(
        "{} frames over {:.1}s: pos ({:.2}, {:.2}), vel ({:.4}, {:.4}) px/ms, {} bounces, {} draw calls",
        animation.frames,
        scheduler.now_ms() / 1000.0,
        disc.pos.x,
        disc.pos.y,
        disc.vel.x,
        disc.vel.y,
        animation.bounces,
        animation.surface.commands().len()
    );
}
