//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use lucid_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Bridge assembly
pub use crate::bridge::{Bridge, SharedBridge};

// Engine contract
pub use crate::core::facade::EngineFacade;

// Platform boundary types
pub use crate::core::gesture::{GestureFrame, PointerSample, TouchAction};

// Surface lifecycle
pub use crate::core::surface::{SurfaceLifecycle, SurfaceState};

// Timing and pointer state
pub use crate::core::clock::FrameClock;
pub use crate::core::pointer::{Pointer, PointerTable};

// Desktop driver
pub use crate::platform::{DesktopDriver, PlatformError};
