//=========================================================================
// Gesture Frame Types
//=========================================================================
//
// Defines the platform-boundary representation of one touch callback.
//
// This module abstracts away platform-specific touch delivery (Android
// MotionEvent, winit mouse synthesis, test fixtures) into a unified,
// bridge-friendly format consumed by the input dispatcher.
//
// A platform touch callback reports three things:
// - which kind of action occurred (down / move / up / cancel),
// - which pointer triggered it,
// - the full set of currently active pointers, in batch order.
//
// The batch order is significant: it is the order in which the engine
// observes simultaneous moves, and it reflects the platform's own event
// batching, not any internal table order.
//
//=========================================================================

//=== TouchAction =========================================================

/// Kind of touch action reported by one platform gesture callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// A finger touched down, either the first or an additional one.
    Down,

    /// One or more active pointers moved. The platform reports the full
    /// pointer set even if only one changed position.
    Move,

    /// A finger lifted, possibly leaving others down.
    Up,

    /// The platform interrupted the gesture; every active pointer is to
    /// be treated as lifted.
    Cancel,
}

//=== PointerSample =======================================================

/// One pointer's state as sampled by the platform at callback time.
///
/// `id` is the platform-assigned identifier: unique among currently
/// active pointers, reused only after the previous pointer with that id
/// has been released. Coordinates are surface-space floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

//=== GestureFrame ========================================================

/// One platform touch callback's worth of data.
///
/// `pointers` lists every currently active pointer in the platform's
/// batch order; `action_id` names the pointer that triggered the action
/// (meaningful for `Down` and `Up`, ignored for `Move` and `Cancel`).
#[derive(Debug, Clone, PartialEq)]
pub struct GestureFrame {
    pub action: TouchAction,
    pub action_id: i32,
    pub pointers: Vec<PointerSample>,
}

impl GestureFrame {
    pub fn new(action: TouchAction, action_id: i32, pointers: Vec<PointerSample>) -> Self {
        Self {
            action,
            action_id,
            pointers,
        }
    }

    /// Convenience constructor for a single-pointer down frame.
    pub fn down(id: i32, x: f32, y: f32) -> Self {
        Self::new(TouchAction::Down, id, vec![PointerSample::new(id, x, y)])
    }

    /// Convenience constructor for a move frame over the given batch.
    pub fn moved(pointers: Vec<PointerSample>) -> Self {
        Self::new(TouchAction::Move, 0, pointers)
    }

    /// Convenience constructor for a single-pointer up frame.
    pub fn up(id: i32) -> Self {
        Self::new(TouchAction::Up, id, Vec::new())
    }

    /// Convenience constructor for a cancel frame.
    pub fn cancel() -> Self {
        Self::new(TouchAction::Cancel, 0, Vec::new())
    }

    /// Returns the sample for the pointer that triggered this action,
    /// if the platform included it in the batch.
    pub fn action_sample(&self) -> Option<PointerSample> {
        self.pointers.iter().copied().find(|p| p.id == self.action_id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
