use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::Window;

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{ButtonState, InputEvent, InputFrame, InputState, Key, KeyState, Modifiers, MouseButton};
use crate::time::FrameClock;

/// Logical pixels per wheel line when the platform reports pixel deltas.
const PIXELS_PER_LINE: f32 = 40.0;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "stellate".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Runtime commands issued from a frame callback.
///
/// Commands are buffered and applied after the callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it exits or the window closes.
    ///
    /// Returns an error if the event loop, the window, or the GPU cannot be
    /// brought up.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A: App + 'static> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A: App + 'static> AppState<A> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.entry = None;
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (app, Some(entry)) = (&mut self.app, self.entry.as_mut()) else {
            return;
        };

        let mut runtime_ctx = RuntimeCtx::default();
        let mut control = AppControl::Continue;

        entry.with_mut(|fields| {
            let time = fields.clock.tick();
            {
                let mut ctx = FrameCtx {
                    window: WindowCtx { window: fields.window },
                    gpu: fields.gpu,
                    input: fields.input_state,
                    input_frame: fields.input_frame,
                    time,
                    runtime: &mut runtime_ctx,
                };
                control = app.on_frame(&mut ctx);
            }
            fields.input_frame.clear();
        });

        if control == AppControl::Exit || runtime_ctx.exit_requested() {
            log::info!("exit requested by application");
            self.shutdown(event_loop);
        }
    }
}

impl<A: App + 'static> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| {
                    log::info!("window opened: {:?} physical px", w.inner_size());
                    w.request_redraw();
                });
                self.entry = Some(entry);
            }
            Err(err) => {
                log::error!("startup failed: {err:#}");
                self.startup_error = Some(err);
                self.shutdown(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw; the star may be animating.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows so the ouroboros closure doesn't capture `self`.
        let (app, Some(entry)) = (&mut self.app, self.entry.as_mut()) else {
            return;
        };

        let mut exit_from_event = false;
        entry.with_mut(|fields| {
            if let Some(ev) = translate_input_event(fields.window, &event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }
            if app.on_window_event(&event) == AppControl::Exit {
                exit_from_event = true;
            }
        });

        if exit_from_event {
            self.shutdown(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn translate_input_event(window: &Window, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            Some(InputEvent::ModifiersChanged(map_modifiers(m.state())))
        }

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::PointerButton {
            button: map_mouse_button(*button),
            state: match state {
                ElementState::Pressed => ButtonState::Pressed,
                ElementState::Released => ButtonState::Released,
            },
        }),

        WindowEvent::MouseWheel { delta, .. } => {
            let lines = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(p) => {
                    let (_, y) = to_logical_f32(window, *p);
                    pixels_to_lines(y)
                }
            };
            Some(InputEvent::Wheel { lines })
        }

        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            },
            repeat: event.repeat,
        }),

        _ => None,
    }
}

fn pixels_to_lines(px: f32) -> f32 {
    px / PIXELS_PER_LINE
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

        KeyCode::Equal | KeyCode::NumpadAdd => Key::Equal,
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,

        KeyCode::KeyR => Key::R,
        KeyCode::KeyW => Key::W,

        other => Key::Unknown(other as u32),
    }
}
