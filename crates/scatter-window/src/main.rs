// File: crates/scatter-window/src/main.rs
// Summary: Interactive scatter/regression window: winit input drives the controller, the raster surface is blitted via softbuffer.
// Keys: M switch mode, 1-4 toggle mean/fit/residuals/squares, C clear, Esc quit.
// While the pointer is inside, a translucent disc shows the pick radius around it.

use anyhow::{anyhow, Context, Result};
use scatter_core::{
    theme, Controls, InteractionController, InteractionOptions, Mode, PixelPoint, PointerButton, RasterSurface,
    RenderOptions, RenderPipeline, Summary, Viewport,
};
use std::num::NonZeroU32;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

fn main() -> Result<()> {
    env_logger::init();
    let theme_name = std::env::args().nth(1).unwrap_or_else(|| "light".to_string());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Scatter Lab")
        .with_inner_size(LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut frame = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut raster = RasterSurface::new(viewport_of(window.inner_size(), window.scale_factor()))?;
    let pipeline = RenderPipeline::new(RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() });
    let mut ctl = InteractionController::new(pipeline, InteractionOptions::default());
    let mut controls = Controls::default();
    let mut cursor = PixelPoint::default();
    // A primary release only counts as a click if the press happened inside the window.
    let mut pressed_inside = false;
    let mut cursor_inside = false;

    let summary = ctl.redraw(&mut raster, &controls);
    update_title(&window, &controls, &summary);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let summary = match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(size) => {
                        resize(&mut ctl, &mut raster, &controls, viewport_of(size, window.scale_factor()))
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                        resize(&mut ctl, &mut raster, &controls, viewport_of(*new_inner_size, scale_factor))
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        let logical = position.to_logical::<f32>(window.scale_factor());
                        cursor = PixelPoint::new(logical.x, logical.y);
                        cursor_inside = true;
                        // Without a drag the old pick disc still has to be painted over.
                        ctl.pointer_move(&mut raster, &controls, cursor)
                            .or_else(|| Some(ctl.refresh(&mut raster, &controls)))
                    }
                    WindowEvent::CursorLeft { .. } => {
                        pressed_inside = false;
                        cursor_inside = false;
                        ctl.pointer_leave();
                        Some(ctl.refresh(&mut raster, &controls))
                    }
                    WindowEvent::MouseInput { state: ElementState::Pressed, button, .. } => {
                        let button = map_button(button);
                        if button == PointerButton::Primary {
                            pressed_inside = true;
                        }
                        ctl.pointer_down(&mut raster, &controls, cursor, button)
                    }
                    WindowEvent::MouseInput { state: ElementState::Released, button, .. } => {
                        ctl.pointer_up();
                        if map_button(button) == PointerButton::Primary && std::mem::take(&mut pressed_inside) {
                            ctl.click(&mut raster, &controls, cursor)
                        } else {
                            None
                        }
                    }
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } => match key {
                        VirtualKeyCode::Escape => {
                            *control_flow = ControlFlow::Exit;
                            None
                        }
                        VirtualKeyCode::M => {
                            controls.mode = match controls.mode {
                                Mode::AddPoint => Mode::DrawLine,
                                Mode::DrawLine => Mode::AddPoint,
                            };
                            Some(ctl.mode_changed(&mut raster, &controls))
                        }
                        VirtualKeyCode::C => Some(ctl.clear(&mut raster, &controls)),
                        VirtualKeyCode::Key1 | VirtualKeyCode::Key2 | VirtualKeyCode::Key3 | VirtualKeyCode::Key4 => {
                            let t = &mut controls.toggles;
                            match key {
                                VirtualKeyCode::Key1 => t.show_mean = !t.show_mean,
                                VirtualKeyCode::Key2 => t.show_regression = !t.show_regression,
                                VirtualKeyCode::Key3 => t.show_residuals = !t.show_residuals,
                                _ => t.show_squares = !t.show_squares,
                            }
                            Some(ctl.toggles_changed(&mut raster, &controls))
                        }
                        _ => None,
                    },
                    _ => None,
                };
                if let Some(summary) = summary {
                    if cursor_inside {
                        ctl.pipeline().render_pick_cursor(&mut raster, cursor, ctl.options().pick_radius);
                    }
                    update_title(&window, &controls, &summary);
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut raster, &mut frame) {
                    log::error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

fn viewport_of(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let logical: LogicalSize<f32> = size.to_logical(scale_factor);
    Viewport::with_scale(logical.width, logical.height, scale_factor as f32)
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

fn resize(ctl: &mut InteractionController, raster: &mut RasterSurface, controls: &Controls, viewport: Viewport) -> Option<Summary> {
    match ctl.resize(raster, controls, viewport) {
        Ok(summary) => Some(summary),
        Err(e) => {
            log::error!("resize to {viewport:?} failed: {e:#}");
            None
        }
    }
}

fn update_title(window: &Window, controls: &Controls, summary: &Summary) {
    let mode = match controls.mode {
        Mode::AddPoint => "add points",
        Mode::DrawLine => "draw line",
    };
    window.set_title(&format!("Scatter Lab | {mode} | {summary}"));
}

/// Copy the raster surface into the window as 0RGB pixels.
fn present(raster: &mut RasterSurface, frame: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, _) = raster.to_rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    frame.resize(nw, nh).map_err(|e| anyhow!("resize frame: {e}"))?;
    let mut buffer = frame.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    for (dst, px) in buffer.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
