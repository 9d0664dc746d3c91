//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Winit-backed desktop adapter for the bridge.
//
// The bridge core is callback-driven and platform-agnostic: anything
// that can deliver surface lifecycle events, render ticks, and gesture
// frames can drive it (an Android activity over FFI, a test harness,
// or this module). `DesktopDriver` is the batteries-included desktop
// option: it owns the window and translates winit events into bridge
// calls on the main thread.
//
// Event mapping:
// ```text
//  winit                          bridge
//  ─────────────────────────────  ─────────────────────────────
//  resumed (first)              → surface_created + surface_resized
//  resumed (again)              → resume
//  suspended                    → pause
//  WindowEvent::Resized         → surface_resized
//  WindowEvent::RedrawRequested → render_tick (+ request next frame)
//  WindowEvent::CloseRequested  → surface_destroyed + exit
//  WindowEvent::Touch           → touch (native touch hardware)
//  CursorMoved / MouseInput     → touch (synthetic pointer id 0)
//  WindowEvent::Focused(false)  → touch (cancel mid-drag)
// ```
//
// Key design decisions:
// - **RedrawRequested = render tick**: the compositor owns the frame
//   rate; the driver re-requests a redraw after each tick and never
//   sleeps or paces on its own.
// - **Mouse = one finger**: desktop input degrades to a single synthetic
//   contact so engines written against the touch facade run unchanged.
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so `run()` must be called from the thread that owns the
//   process entry point.
//
//=========================================================================

//=== Submodules ==========================================================

mod pointer_mapper;

//=== External Crates =====================================================

use log::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::bridge::SharedBridge;
use crate::core::facade::EngineFacade;
use crate::core::gesture::{GestureFrame, PointerSample};
use pointer_mapper::PointerMapper;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created, the
/// driver cannot run. Nothing inside the bridge core produces them.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (rare, indicates an OS-level
    /// issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Touch Conversion ====================================================

//--- gesture_from_touch() ------------------------------------------------
//
// Maps one winit touch report to a gesture frame. Winit reports single
// pointer samples rather than full batches; the dispatcher handles a
// one-sample move batch the same way.
//
fn gesture_from_touch(id: u64, x: f32, y: f32, phase: TouchPhase) -> GestureFrame {
    let id = id as i32;
    match phase {
        TouchPhase::Started => GestureFrame::down(id, x, y),
        TouchPhase::Moved => GestureFrame::moved(vec![PointerSample::new(id, x, y)]),
        TouchPhase::Ended => GestureFrame::up(id),
        TouchPhase::Cancelled => GestureFrame::cancel(),
    }
}

//=== DesktopDriver =======================================================

/// Window manager and event translator for desktop targets.
///
/// Owns the OS window and a [`SharedBridge`] handle; every winit event
/// becomes at most one bridge call, made synchronously on the main
/// thread.
///
/// # Lifecycle
///
/// 1. **Construction**: `DesktopDriver::new(bridge)`
/// 2. **Execution**: `driver.run()` - blocks in the winit event loop
/// 3. **Shutdown**: window close → `surface_destroyed` → loop exits
pub struct DesktopDriver<E: EngineFacade> {
    /// OS window handle (`None` until the first `resumed`).
    window: Option<Window>,

    /// The shared mutual-exclusion domain driving the engine.
    bridge: SharedBridge<E>,

    /// Mouse-to-contact synthesis for non-touch hardware.
    mapper: PointerMapper,

    /// Window title, settable before `run()`.
    title: String,
}

impl<E: EngineFacade> DesktopDriver<E> {
    //--- Construction -----------------------------------------------------

    pub fn new(bridge: SharedBridge<E>) -> Self {
        info!(target: "platform", "Desktop driver initialized");
        Self {
            window: None,
            bridge,
            mapper: PointerMapper::new(),
            title: String::from("Lucid Bridge"),
        }
    }

    /// Sets the window title used at creation time.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while executing. Everything else is handled internally: the
    /// bridge drops illegal calls by design.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (winit requirement on
    /// macOS/iOS).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Forwards a synthesized gesture frame, if the mapper produced one.
    fn forward(&self, frame: Option<GestureFrame>) {
        if let Some(frame) = frame {
            self.bridge.touch(&frame);
        }
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl<E: EngineFacade> ApplicationHandler for DesktopDriver<E> {
    /// Called when the app becomes active (startup or mobile-style
    /// resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Resumed with existing window");
            self.bridge.resume();
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );

                // Fresh surface generation: init, then first size.
                self.bridge.surface_created();
                self.bridge.surface_resized(size.width, size.height);

                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.bridge.surface_destroyed();
                event_loop.exit();
            }
        }
    }

    /// Called when the OS backgrounds the app.
    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        debug!(target: "platform", "Suspended");

        // A drag can't outlive the foreground session; cancel it before
        // the gate closes so the engine isn't left with a stuck contact.
        let frame = self.mapper.interrupt();
        self.forward(frame);
        self.bridge.pause();
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.bridge.surface_destroyed();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.bridge.surface_resized(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                self.bridge.render_tick();

                // The compositor owns the rate; just ask for the next one.
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            //--- Native touch hardware -------------------------------
            WindowEvent::Touch(touch) => {
                let frame = gesture_from_touch(
                    touch.id,
                    touch.location.x as f32,
                    touch.location.y as f32,
                    touch.phase,
                );
                self.bridge.touch(&frame);
            }

            //--- Mouse as a synthetic contact ------------------------
            WindowEvent::CursorMoved { position, .. } => {
                let frame = self
                    .mapper
                    .cursor_moved(position.x as f32, position.y as f32);
                self.forward(frame);
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let frame = self.mapper.primary_button(state == ElementState::Pressed);
                self.forward(frame);
            }

            WindowEvent::Focused(false) => {
                // A release that happens outside the window never
                // arrives; cancel any in-flight drag.
                let frame = self.mapper.interrupt();
                self.forward(frame);
            }

            _ => {
                // Ignore: Moved, ScaleFactorChanged, keyboard, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
