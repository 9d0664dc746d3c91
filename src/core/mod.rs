//=========================================================================
// Bridge Core
//=========================================================================
//
// The platform-independent heart of the bridge.
//
// Components, leaf-first:
// - `facade`: the fixed contract to the external rendering engine
// - `gesture`: platform-boundary touch types (one callback's worth)
// - `pointer`: the table of active touch contacts
// - `clock`: inter-tick delta timing
// - `surface`: the lifecycle state machine gating all engine calls
// - `dispatch`: gesture frame → ordered facade calls
//
// None of these modules performs I/O or depends on a real windowing
// system; everything here is testable with plain values. The assembly
// that wires them to platform callbacks lives in `crate::bridge`, and
// the winit-backed adapter in `crate::platform`.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod clock;
pub mod dispatch;
pub mod facade;
pub mod gesture;
pub mod pointer;
pub mod surface;

//=== Public Re-exports ===================================================

pub use clock::FrameClock;
pub use dispatch::InputDispatcher;
pub use facade::EngineFacade;
pub use gesture::{GestureFrame, PointerSample, TouchAction};
pub use pointer::{Pointer, PointerTable};
pub use surface::{SurfaceLifecycle, SurfaceState};
