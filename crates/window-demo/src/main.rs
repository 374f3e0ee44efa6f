// File: crates/window-demo/src/main.rs
// Summary: Windowed demo rendering scatter-core to a window via RGBA blit (CPU) using winit + softbuffer.
// Every Resized event starts a new render pass: bump the load generation,
// re-read the CSV on a worker thread, and blit a freshly rendered frame when
// the matching result arrives. Stale generations are dropped, so a resize
// racing an in-flight load can never paint a mismatched chart.

use scatter_core::chart::render_notice_rgba8;
use scatter_core::{load_csv_path, DataError, DataPoint, LoadReport, RenderOptions, ScatterChart};
use std::num::NonZeroU32;
use std::path::PathBuf;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use winit::window::WindowBuilder;

/// Completion of one background load, tagged with the generation that
/// requested it.
struct LoadResult {
    generation: u64,
    outcome: Result<(Vec<DataPoint>, LoadReport), DataError>,
}

enum FrameState {
    Loading,
    Ready(ScatterChart),
    Failed(String),
}

fn spawn_load(path: PathBuf, generation: u64, proxy: EventLoopProxy<LoadResult>) {
    std::thread::spawn(move || {
        let outcome = load_csv_path(&path);
        // Send fails only after the event loop is gone.
        proxy.send_event(LoadResult { generation, outcome }).ok();
    });
}

fn main() {
    // Arg: CSV path, defaulting to the bundled sample data.
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/data.csv".to_string());
    let path = PathBuf::from(raw);

    // Window + softbuffer setup
    let event_loop = EventLoopBuilder::<LoadResult>::with_user_event().build();
    let proxy = event_loop.create_proxy();
    let window = WindowBuilder::new()
        .with_title("Meridian Scatter - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut state = FrameState::Loading;
    let mut generation: u64 = 1;

    // Initial load trigger.
    spawn_load(path.clone(), generation, proxy.clone());

    event_loop.run(move |event, _, cf| {
        if *cf != ControlFlow::Exit {
            *cf = ControlFlow::Wait;
        }
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    // Resize trigger: a full render pass, including a fresh
                    // data load, exactly like the initial load.
                    generation += 1;
                    spawn_load(path.clone(), generation, proxy.clone());
                    window.request_redraw();
                }
                _ => {}
            },
            Event::UserEvent(res) => {
                if res.generation != generation {
                    // A newer trigger superseded this load.
                    return;
                }
                state = match res.outcome {
                    Ok((points, report)) => {
                        println!(
                            "Loaded {} points ({} rows rejected)",
                            report.rows, report.rejected
                        );
                        FrameState::Ready(ScatterChart::new(points))
                    }
                    Err(e) => {
                        eprintln!("load failed: {e}");
                        FrameState::Failed(format!("Could not load data: {e}"))
                    }
                };
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let mut opts = RenderOptions::default();
                opts.width = w as i32;
                opts.height = h as i32;

                let rendered = match &state {
                    FrameState::Ready(chart) => chart.render_to_rgba8(&opts),
                    FrameState::Loading => render_notice_rgba8(&opts, "Loading data..."),
                    FrameState::Failed(msg) => render_notice_rgba8(&opts, msg),
                };
                let (rgba, _, _, _) = match rendered {
                    Ok(frame) => frame,
                    Err(e) => {
                        eprintln!("render error: {e:?}");
                        return;
                    }
                };

                // Convert RGBA to packed u32 for softbuffer.
                let mut frame = surface.buffer_mut().expect("frame");
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    let a = px[3] as u32;
                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
