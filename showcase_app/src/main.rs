//! Interactive scene showcase
//!
//! Builds the demo scene, then hands it to a host: the scripted headless
//! host by default, or a GLFW window with the `windowed` feature.
//!
//! Usage: `showcase [config.toml|config.ron]`

mod config;
#[cfg(not(feature = "windowed"))]
mod headless_host;
mod population;
#[cfg(feature = "windowed")]
mod window_host;

use std::path::PathBuf;
use std::time::Duration;

use scene_engine::config::Config;
use scene_engine::foundation::logging;
use scene_engine::input::EventQueue;
use scene_engine::render::FixedTargetControls;
use scene_engine::runtime::{RenderLoop, SceneContext};

use config::ShowcaseConfig;

/// Simulated time for the model to finish loading
const MODEL_LOAD_DELAY: Duration = Duration::from_millis(50);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ShowcaseConfig::load_or_default(config_path.as_deref())?;
    match &config_path {
        Some(path) => log::info!("Loaded configuration from {}", path.display()),
        None => log::info!("Using default configuration"),
    }

    let mut ctx = SceneContext::from_settings(&config.scene);
    let demo = population::populate(&mut ctx, &config.population, config.scene.animation.spin_step_vec());
    log::debug!(
        "Demo scene: spinner {:?}, cube {:?}, {} shapes, {} billboards",
        demo.spinner,
        demo.textured_cube,
        demo.shapes.len(),
        demo.billboards.len()
    );

    let queue = EventQueue::new();
    let loader = config
        .population
        .load_model
        .then(|| population::load_model_async(queue.sender(), MODEL_LOAD_DELAY));

    let mut render_loop = RenderLoop::new().with_frame_delta(config.scene.animation.use_frame_delta);
    let mut controls = FixedTargetControls::new(config.scene.camera.target_vec());

    run_host(&config, &mut ctx, &mut render_loop, &mut controls, &queue)?;

    if let Some(loader) = loader {
        if loader.join().is_err() {
            log::warn!("Model loader thread panicked");
        }
    }
    log::info!(
        "Showcase finished: {} frames, selection {:?}",
        render_loop.frame_count(),
        ctx.selected()
    );
    Ok(())
}

#[cfg(not(feature = "windowed"))]
fn run_host(
    config: &ShowcaseConfig,
    ctx: &mut SceneContext,
    render_loop: &mut RenderLoop,
    controls: &mut FixedTargetControls,
    queue: &EventQueue,
) -> Result<(), scene_engine::EngineError> {
    let skipped = headless_host::unreachable_events(&config.host);
    if !skipped.is_empty() {
        log::warn!("{} scripted events fall after the last frame and will not run", skipped.len());
    }

    let window = &config.scene.window;
    let mut host = headless_host::HeadlessHost::new(config.host.clone(), window.width, window.height);
    let summary = host.run(ctx, render_loop, controls, queue);
    log::info!(
        "Headless run: {:?}, {} frames rendered",
        summary,
        host.renderer().frames_rendered()
    );
    Ok(())
}

#[cfg(feature = "windowed")]
fn run_host(
    config: &ShowcaseConfig,
    ctx: &mut SceneContext,
    render_loop: &mut RenderLoop,
    controls: &mut FixedTargetControls,
    queue: &EventQueue,
) -> Result<(), scene_engine::EngineError> {
    let mut host = window_host::WindowHost::new(&config.scene.window)?;
    host.run(ctx, render_loop, controls, queue);
    Ok(())
}
