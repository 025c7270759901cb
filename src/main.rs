use std::path::Path;

use anyhow::Result;
use log::{debug, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Fullscreen, Window, WindowBuilder},
};

mod core;
mod engine;

use engine::input::{
    BuiltinDefaults, DefaultsSource, EventQueue, GamepadEvents, InputEngine, LogicalAction,
    MetaCommand, TomlDefaults,
};

const DEFAULT_BINDINGS_PATH: &str = "config/input_defaults.toml";

fn defaults_source(path: &Path) -> Box<dyn DefaultsSource> {
    if path.exists() {
        info!("Loading default bindings from {}", path.display());
        Box::new(TomlDefaults::new(path))
    } else {
        warn!(
            "{} not found, using built-in default bindings",
            path.display()
        );
        Box::new(BuiltinDefaults)
    }
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }
}

/// React to the input published for this frame
fn handle_frame(input: &InputEngine, window: &Window, paused: &mut bool) -> bool {
    for command in input.meta_commands() {
        match command {
            MetaCommand::ToggleFullscreen => toggle_fullscreen(window),
            MetaCommand::Screenshot => warn!("Screenshots need a renderer, ignoring"),
        }
    }

    if input.press(LogicalAction::Pause) {
        *paused = !*paused;
        info!("Game {}", if *paused { "paused" } else { "resumed" });
    }

    for action in LogicalAction::ALL {
        if input.press(action) {
            debug!(
                "frame {}: {:?} pressed ({})",
                input.frame(),
                action,
                input.key_name(action).unwrap_or_default()
            );
        }
        if input.release(action) {
            debug!("frame {}: {:?} released", input.frame(), action);
        }
    }

    input.press(LogicalAction::Quit)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let bindings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BINDINGS_PATH.to_string());

    let mut input = InputEngine::new(defaults_source(Path::new(&bindings_path)));
    let mut gamepads = if input.initialize_joysticks() {
        GamepadEvents::new()
    } else {
        None
    };
    if gamepads.is_none() {
        input.deinitialize_joysticks();
    }
    let mut queue = EventQueue::new();
    let mut paused = false;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Input Engine")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => {
                queue.push_window_event(&event);
                if let WindowEvent::RedrawRequested = event {
                    window.request_redraw();
                }
            }
            Event::AboutToWait => {
                if let Some(gamepads) = gamepads.as_mut() {
                    gamepads.pump(&mut queue);
                }
                input.poll(&mut queue);
                if handle_frame(&input, &window, &mut paused) {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
