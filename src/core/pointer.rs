//=========================================================================
// Pointer Table
//=========================================================================
//
// Tracks the set of active touch contacts by platform-assigned id.
//
// Pure data structure: no I/O, no facade calls. The input dispatcher
// mutates it immediately before (or atomically with) the corresponding
// engine call, so the engine never observes a table state inconsistent
// with the call it just received.
//
// Responsibilities:
// - Maintain id uniqueness among live pointers
// - Tolerate the platform's known races (duplicate down, stale move/up)
//   without corrupting that invariant
// - Preserve insertion order so cancel delivery is deterministic
//
// Notes:
// The table is the sole owner of pointer state. Consumers receive copies
// only, never references into the table.
//
//=========================================================================

//=== External Crates =====================================================

use log::warn;

//=== Pointer =============================================================

/// One active touch contact.
///
/// `x`/`y` hold the surface coordinates at the last observed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

//=== PointerTable ========================================================

/// Insertion-ordered table of active pointers, keyed by platform id.
///
/// Backed by a `Vec` with linear scans: real gestures hold a handful of
/// contacts, and insertion order gives cancel delivery a stable order.
pub struct PointerTable {
    pointers: Vec<Pointer>,
}

impl PointerTable {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        // Ten simultaneous contacts is already beyond most hardware.
        const POINTER_BASE: usize = 10;
        Self {
            pointers: Vec::with_capacity(POINTER_BASE),
        }
    }

    //--- on_down() --------------------------------------------------------
    //
    // Inserts a new pointer for `id`. A duplicate down means the platform
    // never reported the previous release; the platform is authoritative,
    // so the stale entry is overwritten and the anomaly logged rather
    // than escalated. Id uniqueness cannot be violated either way.
    //
    pub fn on_down(&mut self, id: i32, x: f32, y: f32) {
        if let Some(existing) = self.pointers.iter_mut().find(|p| p.id == id) {
            warn!(
                target: "bridge::input",
                "Duplicate down for pointer {} (stale release?), overwriting at ({}, {})",
                id, x, y
            );
            existing.x = x;
            existing.y = y;
            return;
        }
        self.pointers.push(Pointer { id, x, y });
    }

    //--- on_move() --------------------------------------------------------
    //
    // Updates position for an existing pointer. Returns `true` if the id
    // was known. An unknown id is a benign race between a release and an
    // in-flight move and is tolerated silently.
    //
    pub fn on_move(&mut self, id: i32, x: f32, y: f32) -> bool {
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(pointer) => {
                pointer.x = x;
                pointer.y = y;
                true
            }
            None => false,
        }
    }

    //--- on_up() ----------------------------------------------------------
    //
    // Removes the pointer for `id`, returning its last state. Removing an
    // unknown id is a no-op (`None`).
    //
    pub fn on_up(&mut self, id: i32) -> Option<Pointer> {
        let index = self.pointers.iter().position(|p| p.id == id)?;
        Some(self.pointers.remove(index))
    }

    //--- drain() ----------------------------------------------------------
    //
    // Removes and returns every active pointer in insertion order. Used
    // by gesture cancellation, which must lift all contacts exhaustively.
    //
    pub fn drain(&mut self) -> Vec<Pointer> {
        std::mem::take(&mut self.pointers)
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if a pointer with `id` is currently active.
    pub fn contains(&self, id: i32) -> bool {
        self.pointers.iter().any(|p| p.id == id)
    }

    /// Returns a copy of the pointer for `id`, if active.
    pub fn get(&self, id: i32) -> Option<Pointer> {
        self.pointers.iter().copied().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

impl Default for PointerTable {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
