//! Circle Morph entry point
//!
//! Headless driver: builds the engine from system entropy and paces it at
//! the configured frame rate through the logging renderer. A windowed build
//! would swap `TraceRenderer` for a real `FrameRenderer` and let the
//! display callback pace the loop instead of `thread::sleep`.

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use circle_morph::render::{FrameRenderer, TraceRenderer};
use circle_morph::{Config, Engine};

fn main() -> ExitCode {
    env_logger::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "circle-morph.json".into());
    let config = Config::load_or_default(Path::new(&config_path));

    let mut engine = match Engine::from_entropy(&config) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::from(2);
        }
    };
    log::info!("Traversal order: {:?}", engine.arrangements().order());

    let mut renderer = TraceRenderer;
    let frame_interval = Duration::from_secs(1) / config.frame_rate;
    loop {
        let output = engine.frame();
        renderer.draw_frame(&output);
        std::thread::sleep(frame_interval);
    }
}
