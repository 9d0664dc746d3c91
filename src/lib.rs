//=========================================================================
// Lucid Bridge — Library Root
//
// This crate is the bridge between a platform's windowing/input layer
// and a native real-time rendering engine. It owns the graphics surface
// lifecycle, converts platform touch events into a normalized
// multi-pointer stream, computes inter-frame timing, and drives one
// render tick per display refresh.
//
// Responsibilities:
// - Expose the engine contract (`EngineFacade`) and the bridge assembly
//   (`Bridge`, `SharedBridge`)
// - Keep the surface lifecycle, pointer tracking, and frame timing in
//   one explicitly owned, independently testable object
// - Provide a winit-backed desktop driver for targets without a native
//   shell
//
// What this crate deliberately does NOT do: produce pixels. The engine
// behind the facade is an opaque collaborator; the bridge only decides
// how and when it is told to render, and how input reaches it with
// correct identity and ordering.
//
// Typical usage:
// ```no_run
// use lucid_bridge::{Bridge, EngineFacade, GestureFrame};
//
// struct MyEngine;
// impl EngineFacade for MyEngine {
//     fn init(&mut self) {}
//     fn resize(&mut self, _width: u32, _height: u32) {}
//     fn update_time(&mut self, _delta: f32) {}
//     fn render(&mut self) {}
//     fn touch_down(&mut self, _id: i32, _x: f32, _y: f32) {}
//     fn touch_move(&mut self, _id: i32, _x: f32, _y: f32) {}
//     fn touch_up(&mut self, _id: i32) {}
// }
//
// let mut bridge = Bridge::new(MyEngine);
// bridge.surface_created();
// bridge.surface_resized(800, 600);
// bridge.render_tick();
// bridge.touch(&GestureFrame::down(0, 10.0, 10.0));
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the platform-independent systems (facade contract,
// pointer table, frame clock, lifecycle machine, dispatcher). It is
// exposed publicly for embedding in custom shells, but most code only
// needs the re-exports below.
//
pub mod core;

//--- Internal Modules ----------------------------------------------------
//
// `bridge` defines the top-level assembly; `platform` the winit desktop
// adapter. Their public types are re-exported, the modules themselves
// stay private.
//
mod bridge;
mod platform;

pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use crate::core::facade::EngineFacade;
pub use crate::core::gesture::{GestureFrame, PointerSample, TouchAction};
pub use crate::core::surface::SurfaceState;
pub use bridge::{Bridge, SharedBridge};
pub use platform::{DesktopDriver, PlatformError};
