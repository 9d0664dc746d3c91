//=========================================================================
// Input Dispatcher
//=========================================================================
//
// Translates one platform gesture frame into zero or more ordered engine
// facade calls, keeping the pointer table consistent with every call.
//
// Responsibilities:
// - Down: one `touch_down` for the newly added pointer only
// - Move: one `touch_move` per active pointer in the batch, batch order
// - Up: one `touch_up` for the lifted pointer
// - Cancel: one `touch_up` per live pointer, exhaustively, table cleared
//
// All dispatch is synchronous and completes before the platform callback
// returns; there is no queuing or deferred delivery. Pointer table
// mutation happens immediately before the corresponding facade call, so
// the engine never observes a table state inconsistent with the call it
// just received.
//
// The dispatcher does not gate on surface state; the bridge checks the
// lifecycle gate before handing a frame over.
//
//=========================================================================

//=== External Crates =====================================================

use log::{trace, warn};

//=== Internal Imports ====================================================

use crate::core::facade::EngineFacade;
use crate::core::gesture::{GestureFrame, TouchAction};
use crate::core::pointer::PointerTable;

//=== InputDispatcher =====================================================

/// Owns the pointer table and feeds normalized touch calls to the engine.
pub struct InputDispatcher {
    table: PointerTable,
}

impl InputDispatcher {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            table: PointerTable::new(),
        }
    }

    //--- dispatch() -------------------------------------------------------
    //
    // Consumes one gesture frame. Each arm mutates the table first, then
    // makes the matching facade call with values copied out of the frame
    // or table.
    //
    pub fn dispatch<E: EngineFacade>(&mut self, frame: &GestureFrame, engine: &mut E) {
        match frame.action {
            //--- Down: only the pointer that triggered the action --------
            TouchAction::Down => match frame.action_sample() {
                Some(sample) => {
                    self.table.on_down(sample.id, sample.x, sample.y);
                    engine.touch_down(sample.id, sample.x, sample.y);
                }
                None => {
                    warn!(
                        target: "bridge::input",
                        "Down frame without a sample for pointer {}, dropped",
                        frame.action_id
                    );
                }
            },

            //--- Move: full batch, batch order ---------------------------
            TouchAction::Move => {
                for sample in &frame.pointers {
                    if self.table.on_move(sample.id, sample.x, sample.y) {
                        engine.touch_move(sample.id, sample.x, sample.y);
                    } else {
                        // Benign race: release beat an in-flight move.
                        trace!(
                            target: "bridge::input",
                            "Move for unknown pointer {}, ignored", sample.id
                        );
                    }
                }
            }

            //--- Up: only the pointer that lifted ------------------------
            TouchAction::Up => {
                if let Some(pointer) = self.table.on_up(frame.action_id) {
                    engine.touch_up(pointer.id);
                } else {
                    trace!(
                        target: "bridge::input",
                        "Up for unknown pointer {}, ignored", frame.action_id
                    );
                }
            }

            //--- Cancel: lift everything, exhaustively -------------------
            TouchAction::Cancel => {
                for pointer in self.table.drain() {
                    engine.touch_up(pointer.id);
                }
            }
        }
    }

    //--- reset() ----------------------------------------------------------
    //
    // Forgets all pointer state without telling the engine. Used on
    // surface re-creation: the old context's contacts are meaningless to
    // the freshly initialized engine.
    //
    pub fn reset(&mut self) {
        self.table.drain();
    }

    //--- Queries ----------------------------------------------------------

    pub fn table(&self) -> &PointerTable {
        &self.table
    }
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
