//! # VESSEL Host Binary
//!
//! Startup order: logging, working directory, config, window, GPU, initial
//! module load. Any failure in that sequence is fatal and exits non-zero.
//! After that, winit drives the frame scheduler until a close request.
//!
//! The process takes no command-line arguments; configuration comes from an
//! optional `vessel.toml` beside the executable.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use vessel::{FrameOutcome, Host, HostConfig, SetupError};
use vessel_rendering::PaletteRenderer;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fatal setup error");
            eprintln!("vessel: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SetupError> {
    vessel::workdir::enter_exe_dir()?;
    let config = HostConfig::load_or_default(Path::new("vessel.toml"))?;
    let idle_sleep = Duration::from_millis(config.idle_sleep_ms);

    let event_loop = EventLoop::new().map_err(|e| SetupError::Window(e.to_string()))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&config.window_title)
            .with_inner_size(PhysicalSize::new(1280, 720))
            .build(&event_loop)
            .map_err(|e| SetupError::Window(e.to_string()))?,
    );

    let size = window.inner_size();
    let mut renderer = PaletteRenderer::new(Arc::clone(&window), size.width, size.height)?;
    let mut host = Host::new(&config)?;

    info!("setup complete, entering frame loop");

    let loop_window = Arc::clone(&window);
    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, window_id } if window_id == loop_window.id() => {
                    match event {
                        WindowEvent::CloseRequested => host.handle_close_requested(),
                        WindowEvent::Resized(new_size) => {
                            renderer.resize(new_size.width, new_size.height);
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let size = loop_window.inner_size();
                    match host.run_frame(size.width, size.height, &mut renderer) {
                        FrameOutcome::Presented => {}
                        FrameOutcome::Skipped => std::thread::sleep(idle_sleep),
                        FrameOutcome::ShuttingDown => {
                            let stats = host.stats();
                            info!(
                                frames = stats.frame_count,
                                frame_arena_peak = stats.frame_arena_high_watermark,
                                "shutting down"
                            );
                            elwt.exit();
                        }
                    }
                }
                _ => {}
            }
        })
        .map_err(|e| SetupError::Window(e.to_string()))?;

    Ok(())
}
