// File: crates/window-viewer/src/main.rs
// Summary: Windowed host that loads the chart once and blits it with winit + softbuffer (CPU RGBA).

mod session;

use std::num::NonZeroU32;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;
use idle_viewer::config::ChartArgs;
use idle_viewer::{logging, HttpLoader, Viewer};
use session::{animation_progress, wheel_scroll, Session};
use tracing::{error, info};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Show the idle chart in a window.
#[derive(Debug, Parser)]
#[command(name = "idle-window-viewer", version, about)]
struct Args {
    #[command(flatten)]
    chart: ChartArgs,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = format!("{e:#}").as_str(), "no chart shown");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let base = args.chart.render_options();
    let viewer = Viewer::new(HttpLoader::new(&args.chart.base_url)?, base);

    // Load before any window exists; a failed load never opens one.
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let chart = runtime.block_on(viewer.prepare())?;
    drop(runtime);
    info!(series = chart.series.len(), "chart ready");

    let mut session = Session::new(chart, base.insets);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(session_title(&session))
        .with_inner_size(winit::dpi::LogicalSize::new(base.width as f64, base.height as f64))
        .build(&event_loop)
        .map_err(|e| anyhow!("creating window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let started = Instant::now();
    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;
    let mut dragging = false;

    event_loop.run(move |event, _, cf| {
        let _ = &context;
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if let (true, Some((px, _))) = (dragging, cursor) {
                        session.pan(position.x - px, size.width as i32);
                        window.request_redraw();
                    }
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    dragging = state == ElementState::Pressed;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some((cx, _)) = cursor {
                        session.zoom(wheel_scroll(delta), cx, size.width as i32);
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    session.reset();
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if animation_progress(started.elapsed(), session.animation_enabled()) < 1.0 {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let progress = animation_progress(started.elapsed(), session.animation_enabled());
                if let Err(e) = draw(&mut surface, &mut session, &base, size, progress) {
                    error!(error = format!("{e:#}").as_str(), "drawing frame failed");
                    *cf = ControlFlow::ExitWithCode(1);
                }
            }
            _ => {}
        }
    })
}

fn session_title(session: &Session) -> String {
    let mut title = idle_viewer::renderer::TITLE.to_owned();
    if session.zoom_enabled() {
        title.push_str(" (wheel: zoom, drag: pan, any key: reset)");
    }
    title
}

fn draw(
    surface: &mut softbuffer::Surface,
    session: &mut Session,
    base: &idle_chart::RenderOptions,
    size: winit::dpi::PhysicalSize<u32>,
    progress: f32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resizing surface: {e}"))?;

    let opts = session.options(base, size.width, size.height, progress);
    let (rgba, _, _, _) = session.frame().render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("acquiring frame: {e}"))?;
    // softbuffer pixels are 0RGB.
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("presenting frame: {e}"))?;
    Ok(())
}
