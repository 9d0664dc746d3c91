//=========================================================================
// Pointer Mapper
//=========================================================================
//
// Converts desktop mouse input into the bridge's gesture frames.
//
// Desktop windows have no touch digitizer in the common case, so the
// mapper synthesizes a single touch contact from the primary mouse
// button: press becomes a down frame, dragging becomes move frames,
// release becomes an up frame. Cursor motion with the button up produces
// nothing; a hover is not a contact.
//
// The synthetic contact always uses pointer id 0, matching what a
// single-finger gesture reports on touch hardware.
//
//=========================================================================

//=== Internal Imports ====================================================

use crate::core::gesture::{GestureFrame, PointerSample};

//=== PointerMapper =======================================================

/// Tracks cursor position and button state, emitting a gesture frame
/// whenever the synthetic contact changes.
pub(crate) struct PointerMapper {
    cursor: (f32, f32),
    pressed: bool,
}

impl PointerMapper {
    /// Id of the synthetic mouse contact.
    pub(crate) const MOUSE_POINTER_ID: i32 = 0;

    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            cursor: (0.0, 0.0),
            pressed: false,
        }
    }

    //--- cursor_moved() ---------------------------------------------------
    //
    // Always records the position (the next press needs it); emits a
    // move frame only while the button is held.
    //
    pub(crate) fn cursor_moved(&mut self, x: f32, y: f32) -> Option<GestureFrame> {
        self.cursor = (x, y);
        if self.pressed {
            Some(GestureFrame::moved(vec![PointerSample::new(
                Self::MOUSE_POINTER_ID,
                x,
                y,
            )]))
        } else {
            None
        }
    }

    //--- primary_button() -------------------------------------------------
    //
    // Edge-triggered: repeated press or release reports of the same
    // state emit nothing.
    //
    pub(crate) fn primary_button(&mut self, pressed: bool) -> Option<GestureFrame> {
        if pressed == self.pressed {
            return None;
        }
        self.pressed = pressed;

        if pressed {
            let (x, y) = self.cursor;
            Some(GestureFrame::down(Self::MOUSE_POINTER_ID, x, y))
        } else {
            Some(GestureFrame::up(Self::MOUSE_POINTER_ID))
        }
    }

    //--- interrupt() ------------------------------------------------------
    //
    // The window lost focus or the OS grabbed the cursor mid-drag: the
    // release will never arrive, so the contact is cancelled.
    //
    pub(crate) fn interrupt(&mut self) -> Option<GestureFrame> {
        if self.pressed {
            self.pressed = false;
            Some(GestureFrame::cancel())
        } else {
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
