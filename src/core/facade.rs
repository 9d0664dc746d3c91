//=========================================================================
// Engine Facade
//=========================================================================
//
// The fixed, narrow contract to the external native rendering engine.
//
// The bridge never looks inside the engine: it only drives it through
// these seven operations, in the ordering guaranteed by the surface
// lifecycle and the input dispatcher. Any backend (an FFI adapter over a
// C/GL engine, a software renderer, a test recorder) implements this
// trait, enabling engines to be swapped without changing bridge code.
//
// Call ordering contract (enforced by the bridge, relied on by engines):
// - `init` is called first for every surface generation, and again on
//   re-creation; it must be safe to call repeatedly.
// - `resize` is only called after at least one `init` for the current
//   surface generation.
// - Per render tick: `update_time(delta)` immediately followed by
//   `render()`, never reordered, never interleaved with another tick.
// - Touch calls carry values copied out of the pointer table, never
//   references into it.
//
//=========================================================================

//=== EngineFacade ========================================================

/// Contract implemented by the external rendering engine.
///
/// All operations are synchronous and assumed to return promptly; the
/// bridge performs no timeout, retry, or cancellation around them. Slow
/// engine calls simply back up frame and input processing behind them.
pub trait EngineFacade {
    /// Re-initializes all engine-side state for a fresh graphics context.
    ///
    /// Called once per surface generation. Must be safe to call multiple
    /// times across the process lifetime (the platform may destroy and
    /// recreate the surface at will).
    fn init(&mut self);

    /// Updates the engine viewport/projection for new surface dimensions.
    ///
    /// Both dimensions are positive; the bridge drops degenerate sizes
    /// before they reach the engine.
    fn resize(&mut self, width: u32, height: u32);

    /// Advances engine simulation time by `delta` seconds (>= 0).
    ///
    /// Called exactly once per render tick, immediately before
    /// [`render`](EngineFacade::render). The first tick after `init`
    /// always receives `0.0`.
    fn update_time(&mut self, delta: f32);

    /// Produces one frame into the current surface.
    fn render(&mut self);

    /// A new touch contact appeared at surface coordinates `(x, y)`.
    fn touch_down(&mut self, id: i32, x: f32, y: f32);

    /// An active touch contact moved to surface coordinates `(x, y)`.
    fn touch_move(&mut self, id: i32, x: f32, y: f32);

    /// The touch contact identified by `id` ended.
    ///
    /// Also delivered once per live contact when the platform cancels a
    /// gesture; the engine cannot distinguish a lift from a cancel.
    fn touch_up(&mut self, id: i32);
}

//=========================================================================
// Test Support
//=========================================================================
