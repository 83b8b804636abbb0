use anyhow::{Context, Result};
use glam::Vec2;
use log::info;
use simple_logger::SimpleLogger;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use bloksel_sandbox::{
    player::InteractionOutcome, FirstPersonCamera, InputState, Sandbox, SandboxConfig,
};

const FRAME_DELTA: f32 = 1.0 / 60.0;

fn load_config() -> Result<SandboxConfig> {
    match std::env::args().nth(1) {
        Some(path) => SandboxConfig::load(&path)
            .with_context(|| format!("Failed to load config from {path}")),
        None => Ok(SandboxConfig::default()),
    }
}

fn run_frames(
    sandbox: &mut Sandbox,
    input: &mut InputState,
    camera: &FirstPersonCamera,
    frames: usize,
) -> Vec<InteractionOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..frames {
        outcomes.extend(sandbox.frame(FRAME_DELTA, input, camera));
    }
    outcomes
}

fn main() -> Result<()> {
    let config = load_config()?;
    SimpleLogger::new()
        .with_level(config.level_filter())
        .init()
        .context("Failed to initialise logger")?;

    let mut sandbox = Sandbox::new(config);
    let mut input = InputState::new();
    let mut camera = FirstPersonCamera::new();
    camera.set_locked(true);

    // Settle onto the terrain
    run_frames(&mut sandbox, &mut input, &camera, 180);
    info!("Landed at {:?}", sandbox.player().position);

    // Walk forward for two seconds, jumping halfway
    input.handle_key(KeyCode::KeyW, true);
    run_frames(&mut sandbox, &mut input, &camera, 60);
    input.handle_key(KeyCode::Space, true);
    run_frames(&mut sandbox, &mut input, &camera, 1);
    input.handle_key(KeyCode::Space, false);
    run_frames(&mut sandbox, &mut input, &camera, 59);
    input.handle_key(KeyCode::KeyW, false);
    run_frames(&mut sandbox, &mut input, &camera, 60);
    info!("Walked to {:?}", sandbox.player().position);

    // Look down, dig one block, then place a log back
    camera.rotate(Vec2::new(0.0, 600.0));
    input.handle_mouse_button(MouseButton::Left, true);
    input.handle_mouse_button(MouseButton::Left, false);
    input.handle_key(KeyCode::Digit4, true);
    input.handle_key(KeyCode::Digit4, false);
    let mut outcomes = run_frames(&mut sandbox, &mut input, &camera, 30);
    input.handle_mouse_button(MouseButton::Right, true);
    input.handle_mouse_button(MouseButton::Right, false);
    outcomes.extend(run_frames(&mut sandbox, &mut input, &camera, 30));

    for outcome in &outcomes {
        info!("Click: {:?}", outcome);
    }

    let stats = sandbox.generation_stats();
    info!(
        "Done after {} frames: {} blocks ({} visible), {} trees generated, player at {:?}",
        sandbox.frame_count(),
        sandbox.world().len(),
        sandbox.visible_blocks().count(),
        stats.trees,
        sandbox.player().position
    );

    Ok(())
}
