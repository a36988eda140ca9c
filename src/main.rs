//! Game Studio desktop host.
//!
//! Opens a window the size of the game canvas and drives a [`FrameLoop`]
//! from the SDL event pump at ~60 Hz.
//!
//! Return toggles Play/Pause, Backspace is Stop, Escape quits. The player
//! moves with the arrow keys or WASD and jumps with Up, W or Space.
//!
//! The config path comes from the first CLI argument or `GAME_STUDIO_CONFIG`.
//! Setting `GAME_STUDIO_SCENE` to a saved scene name replaces the coin layout
//! with that scene's coins.

use std::time::Duration;

use anyhow::{Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use game_studio::sdl_backend::{SdlSurface, key_from_keycode};
use game_studio::scene::SceneManager;
use game_studio::{FrameEvent, FrameLoop, GameConfig, RenderSurface, SessionPhase};

const FRAME_TIME: Duration = Duration::new(0, 1_000_000_000u32 / 60);

fn load_config() -> Result<GameConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GAME_STUDIO_CONFIG").ok());
    let mut config = match path {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => GameConfig::default(),
    };

    if let Ok(scene_name) = std::env::var("GAME_STUDIO_SCENE") {
        let scenes = SceneManager::new(SceneManager::default_dir()?)?;
        let registry = scenes
            .load(&scene_name)
            .with_context(|| format!("loading scene {scene_name}"))?;
        config = config.with_coin_layout(registry.coin_positions());
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let (width, height) = (config.canvas_width as u32, config.canvas_height as u32);
    log::info!("Starting Game Studio ({width}x{height}, {} coins)", config.coins.len());

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
    let window = video_subsystem
        .window("Game Studio", width, height)
        .position_centered()
        .build()?;
    let canvas = window.into_canvas().build()?;
    let mut surface = SdlSurface::new(canvas);
    let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;

    let mut frame_loop = FrameLoop::new(config);
    // Redraw the idle screen only when something changed
    let mut idle_dirty = true;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    repeat: false,
                    ..
                } => {
                    if frame_loop.phase() == SessionPhase::Running {
                        frame_loop.pause();
                    } else {
                        frame_loop.play(true);
                    }
                    idle_dirty = true;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Backspace),
                    ..
                } => {
                    frame_loop.stop();
                    idle_dirty = true;
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = key_from_keycode(keycode) {
                        frame_loop.key_down(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = key_from_keycode(keycode) {
                        frame_loop.key_up(key);
                    }
                }
                _ => {}
            }
        }

        match frame_loop.on_frame(&mut surface)? {
            Some(output) => {
                for event in &output.events {
                    if let FrameEvent::GameOver { score } = event {
                        log::info!("Final score: {score}");
                    }
                }
            }
            None if idle_dirty => {
                surface.submit(&frame_loop.world().preview())?;
                idle_dirty = false;
            }
            None => {}
        }

        std::thread::sleep(FRAME_TIME);
    }

    log::info!("Exiting (score {})", frame_loop.score());
    Ok(())
}
