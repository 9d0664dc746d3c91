//=========================================================================
// Bridge
//=========================================================================
//
// Top-level assembly: owns the engine facade, the surface lifecycle
// machine, the frame clock, and the input dispatcher, and exposes one
// entry point per platform callback.
//
// Architecture:
// ```text
//  Platform callbacks              Bridge                    Engine
//  ┌─────────────────────┐   ┌──────────────────┐   ┌────────────────┐
//  │ surface_created ────┼──►│ SurfaceLifecycle ├──►│ init()         │
//  │ surface_resized ────┼──►│   (the gate)     ├──►│ resize(w, h)   │
//  │ pause / resume ─────┼──►│                  │   │                │
//  │                     │   │                  │   │                │
//  │ render_tick ────────┼──►│ FrameClock ──────┼──►│ update_time(dt)│
//  │                     │   │                  │   │ render()       │
//  │ touch(frame) ───────┼──►│ InputDispatcher ─┼──►│ touch_*(...)   │
//  └─────────────────────┘   └──────────────────┘   └────────────────┘
// ```
//
// Every entry point checks the lifecycle gate first; outside the active
// window, render ticks and gesture frames are dropped, never queued.
// There is no event replay on resume: stale input applied to a context
// the user no longer perceives as current would be worse than none.
//
// The bridge is an explicitly owned object with documented reset points
// (engine init on surface creation), not ambient global state, so tests
// construct independent instances freely. For the two platform execution
// contexts (input/lifecycle and render), wrap it in [`SharedBridge`].
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

//=== External Crates =====================================================

use log::{info, trace};

//=== Internal Imports ====================================================

use crate::core::clock::FrameClock;
use crate::core::dispatch::InputDispatcher;
use crate::core::facade::EngineFacade;
use crate::core::gesture::GestureFrame;
use crate::core::pointer::PointerTable;
use crate::core::surface::{SurfaceLifecycle, SurfaceState, Transition};

//=== Bridge ==============================================================

/// The bridge between a platform's windowing/input layer and a native
/// rendering engine.
///
/// Drives the engine through its [`EngineFacade`] in response to the
/// platform's surface lifecycle, refresh, and touch callbacks, with the
/// ordering and gating guarantees the engine relies on:
///
/// - `init` on every surface (re)creation, clock and pointer state reset
/// - `resize` only after `init` for the current surface generation
/// - per tick, `update_time(delta)` then `render()`, delta >= 0, first
///   tick after (re)creation exactly 0
/// - touch calls only inside the active lifecycle window
pub struct Bridge<E: EngineFacade> {
    engine: E,
    lifecycle: SurfaceLifecycle,
    clock: FrameClock,
    dispatcher: InputDispatcher,
}

impl<E: EngineFacade> Bridge<E> {
    //--- Construction -----------------------------------------------------

    /// Wraps an engine. No facade call is made until the platform
    /// reports its first `surface_created`.
    pub fn new(engine: E) -> Self {
        info!(target: "bridge", "Bridge created");
        Self {
            engine,
            lifecycle: SurfaceLifecycle::new(),
            clock: FrameClock::new(),
            dispatcher: InputDispatcher::new(),
        }
    }

    //--- Surface Lifecycle Entry Points ----------------------------------

    /// Platform reports a (re)created drawable surface.
    ///
    /// The graphics context is treated as invalidated: the engine is
    /// (re)initialized, the frame clock forgets its last tick, and any
    /// pointer state from the previous surface generation is discarded.
    pub fn surface_created(&mut self) {
        if self.lifecycle.surface_created() == Transition::InitEngine {
            self.clock.reset();
            self.dispatcher.reset();
            self.engine.init();
        }
    }

    /// Platform reports new surface dimensions.
    ///
    /// Forwarded as `resize` when the lifecycle allows it; a resize that
    /// arrives before creation, after destruction, or while paused is
    /// dropped (dimensions are still recorded where meaningful).
    pub fn surface_resized(&mut self, width: u32, height: u32) {
        if let Transition::ResizeEngine(w, h) = self.lifecycle.surface_sized(width, height) {
            self.engine.resize(w, h);
        }
    }

    /// Platform reports the surface is gone for good. Terminal: every
    /// later callback is dropped.
    pub fn surface_destroyed(&mut self) {
        self.lifecycle.surface_destroyed();
    }

    /// System pause: closes the gate. Render ticks and gesture frames
    /// arriving while paused are dropped, not buffered.
    pub fn pause(&mut self) {
        self.lifecycle.system_pause();
    }

    /// System resume: reopens the gate if the surface had been sized.
    /// No `init` or `resize` is repeated; the engine context survived.
    pub fn resume(&mut self) {
        self.lifecycle.system_resume();
    }

    //--- Render Loop Driver -----------------------------------------------

    /// One platform-driven render tick.
    ///
    /// Outside the active window this is a complete no-op: no facade
    /// interaction and no clock advance, so paused time never shows up
    /// as a delta on resume. Otherwise the clock advances and the engine
    /// receives `update_time(delta)` immediately followed by `render()`.
    pub fn render_tick(&mut self) {
        self.render_tick_at(Instant::now());
    }

    /// [`render_tick`](Bridge::render_tick) with an explicit timestamp,
    /// for deterministic tests and headless drivers.
    pub fn render_tick_at(&mut self, now: Instant) {
        if !self.lifecycle.is_engine_callable() {
            trace!(
                target: "bridge",
                "Render tick in {:?}, dropped", self.lifecycle.state()
            );
            return;
        }

        let delta = self.clock.tick_at(now);
        self.engine.update_time(delta);
        self.engine.render();
    }

    //--- Input Entry Point ------------------------------------------------

    /// One platform touch callback.
    ///
    /// Dispatch is synchronous and completes before this returns. Frames
    /// arriving outside the active window are dropped whole: the pointer
    /// table is not mutated either, so the engine and the table stay
    /// consistent when the gate reopens.
    pub fn touch(&mut self, frame: &GestureFrame) {
        if !self.lifecycle.is_engine_callable() {
            trace!(
                target: "bridge::input",
                "{:?} frame in {:?}, dropped", frame.action, self.lifecycle.state()
            );
            return;
        }

        self.dispatcher.dispatch(frame, &mut self.engine);
    }

    //--- Queries ----------------------------------------------------------

    pub fn surface_state(&self) -> SurfaceState {
        self.lifecycle.state()
    }

    /// Current surface dimensions, once sized for this surface
    /// generation.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.lifecycle.size()
    }

    /// Read-only view of the active pointers.
    pub fn pointers(&self) -> &PointerTable {
        self.dispatcher.table()
    }

    /// Access to the wrapped engine, e.g. for engine-side queries.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consumes the bridge and returns the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

//=== SharedBridge ========================================================

/// The single mutual-exclusion domain shared by the platform's two
/// execution contexts.
///
/// The input/lifecycle context and the render context may live on
/// different threads depending on platform; both go through this handle
/// so a touch update is never interleaved with a render tick. Locking is
/// uncontended in the common case and every critical section is bounded
/// (no operation inside blocks on I/O).
///
/// A poisoned lock is recovered rather than propagated: a panic in the
/// engine must not take the platform callbacks down with it.
pub struct SharedBridge<E: EngineFacade> {
    inner: Arc<Mutex<Bridge<E>>>,
}

impl<E: EngineFacade> Clone for SharedBridge<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: EngineFacade> SharedBridge<E> {
    //--- Construction -----------------------------------------------------

    pub fn new(engine: E) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Bridge::new(engine))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Bridge<E>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    //--- Forwarded Entry Points -------------------------------------------

    pub fn surface_created(&self) {
        self.lock().surface_created();
    }

    pub fn surface_resized(&self, width: u32, height: u32) {
        self.lock().surface_resized(width, height);
    }

    pub fn surface_destroyed(&self) {
        self.lock().surface_destroyed();
    }

    pub fn pause(&self) {
        self.lock().pause();
    }

    pub fn resume(&self) {
        self.lock().resume();
    }

    pub fn render_tick(&self) {
        self.lock().render_tick();
    }

    pub fn touch(&self, frame: &GestureFrame) {
        self.lock().touch(frame);
    }

    //--- Queries ----------------------------------------------------------

    pub fn surface_state(&self) -> SurfaceState {
        self.lock().surface_state()
    }

    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.lock().surface_size()
    }

    /// Runs `f` with exclusive access to the bridge, for compound
    /// operations that must not interleave with either context.
    pub fn with<R>(&self, f: impl FnOnce(&mut Bridge<E>) -> R) -> R {
        f(&mut self.lock())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::facade::recording::{Call, RecordingEngine};
    use crate::core::gesture::PointerSample;
    use std::time::Duration;

    fn live_bridge() -> Bridge<RecordingEngine> {
        let mut bridge = Bridge::new(RecordingEngine::new());
        bridge.surface_created();
        bridge.surface_resized(800, 600);
        bridge
    }

    fn calls(bridge: &Bridge<RecordingEngine>) -> &[Call] {
        &bridge.engine().calls
    }

    #[test]
    fn creation_makes_no_facade_calls() {
        let bridge = Bridge::new(RecordingEngine::new());
        assert!(calls(&bridge).is_empty());
        assert_eq!(bridge.surface_state(), SurfaceState::Uninitialized);
        assert_eq!(bridge.surface_size(), None);
    }

    #[test]
    fn created_then_sized_calls_init_then_resize() {
        let bridge = live_bridge();
        assert_eq!(calls(&bridge), &[Call::Init, Call::Resize(800, 600)]);
        assert_eq!(bridge.surface_size(), Some((800, 600)));
    }

    #[test]
    fn resize_is_never_forwarded_before_init() {
        let mut bridge = Bridge::new(RecordingEngine::new());
        bridge.surface_resized(800, 600);

        assert!(calls(&bridge).is_empty());
        assert_eq!(bridge.surface_size(), None);
    }

    #[test]
    fn first_tick_after_init_has_zero_delta() {
        let mut bridge = live_bridge();
        bridge.engine_mut().clear();

        bridge.render_tick_at(Instant::now());

        assert_eq!(calls(&bridge), &[Call::UpdateTime(0.0), Call::Render]);
    }

    #[test]
    fn tick_delta_measures_time_between_ticks() {
        let mut bridge = live_bridge();
        let start = Instant::now();

        bridge.render_tick_at(start);
        bridge.engine_mut().clear();
        bridge.render_tick_at(start + Duration::from_millis(16));

        match calls(&bridge) {
            [Call::UpdateTime(delta), Call::Render] => {
                assert!((delta - 0.016).abs() < 1e-4, "Expected ~16ms, got {}", delta);
            }
            other => panic!("Expected update+render, got {:?}", other),
        }
    }

    #[test]
    fn update_time_always_immediately_precedes_render() {
        let mut bridge = live_bridge();
        let start = Instant::now();

        for i in 0..5 {
            bridge.render_tick_at(start + Duration::from_millis(16 * i));
        }

        let ticks: Vec<&Call> = calls(&bridge)
            .iter()
            .filter(|c| matches!(c, Call::UpdateTime(_) | Call::Render))
            .collect();
        assert_eq!(ticks.len(), 10);
        for pair in ticks.chunks(2) {
            assert!(matches!(pair[0], Call::UpdateTime(_)));
            assert!(matches!(pair[1], Call::Render));
        }
    }

    #[test]
    fn reinit_resets_delta_even_after_prior_ticks() {
        let mut bridge = live_bridge();
        let start = Instant::now();

        bridge.render_tick_at(start);
        bridge.render_tick_at(start + Duration::from_millis(16));

        // Surface torn down and recreated: fresh generation.
        bridge.surface_created();
        bridge.surface_resized(800, 600);
        bridge.engine_mut().clear();

        bridge.render_tick_at(start + Duration::from_secs(5));

        assert_eq!(calls(&bridge), &[Call::UpdateTime(0.0), Call::Render]);
    }

    #[test]
    fn no_facade_call_while_paused() {
        let mut bridge = live_bridge();
        bridge.pause();
        bridge.engine_mut().clear();

        bridge.render_tick_at(Instant::now());
        bridge.touch(&GestureFrame::down(1, 0.0, 0.0));
        bridge.surface_resized(640, 480);

        assert!(calls(&bridge).is_empty(), "Paused bridge must stay silent");
    }

    #[test]
    fn paused_ticks_do_not_advance_the_clock() {
        let mut bridge = live_bridge();
        let start = Instant::now();

        bridge.render_tick_at(start);
        bridge.pause();

        // Ticks keep arriving while paused; all must be dropped whole.
        bridge.render_tick_at(start + Duration::from_secs(1));
        bridge.render_tick_at(start + Duration::from_secs(2));

        bridge.resume();
        bridge.engine_mut().clear();
        bridge.render_tick_at(start + Duration::from_secs(3));

        // Delta spans the pause because the clock froze at `start`;
        // what matters is that the dropped ticks emitted nothing and the
        // pipeline resumes with a single well-formed tick.
        match calls(&bridge) {
            [Call::UpdateTime(delta), Call::Render] => {
                assert!((delta - 3.0).abs() < 0.01, "Got {}", delta);
            }
            other => panic!("Expected one tick, got {:?}", other),
        }
    }

    #[test]
    fn pause_resume_without_resize_is_active_without_new_init() {
        let mut bridge = live_bridge();
        bridge.pause();
        bridge.engine_mut().clear();
        bridge.resume();

        assert_eq!(bridge.surface_state(), SurfaceState::Active);
        assert!(
            calls(&bridge).is_empty(),
            "Resume must not repeat init or resize"
        );

        bridge.render_tick_at(Instant::now());
        assert!(matches!(calls(&bridge)[0], Call::UpdateTime(_)));
    }

    #[test]
    fn touch_scenario_down_move_up() {
        let mut bridge = live_bridge();
        bridge.engine_mut().clear();

        bridge.touch(&GestureFrame::down(1, 10.0, 10.0));
        bridge.touch(&GestureFrame::moved(vec![PointerSample::new(1, 12.0, 12.0)]));
        bridge.touch(&GestureFrame::up(1));

        assert_eq!(
            calls(&bridge),
            &[
                Call::TouchDown(1, 10.0, 10.0),
                Call::TouchMove(1, 12.0, 12.0),
                Call::TouchUp(1),
            ]
        );
        assert!(bridge.pointers().is_empty());
    }

    #[test]
    fn touch_after_destroy_is_dropped_whole() {
        let mut bridge = live_bridge();
        bridge.touch(&GestureFrame::down(1, 0.0, 0.0));
        bridge.surface_destroyed();
        bridge.engine_mut().clear();

        bridge.touch(&GestureFrame::moved(vec![PointerSample::new(1, 5.0, 5.0)]));
        bridge.touch(&GestureFrame::up(1));
        bridge.render_tick_at(Instant::now());

        assert!(calls(&bridge).is_empty());
        // Table untouched too: no mutation without a matching call.
        assert_eq!(bridge.pointers().len(), 1);
    }

    #[test]
    fn recreate_discards_stale_pointers_silently() {
        let mut bridge = live_bridge();
        bridge.touch(&GestureFrame::down(1, 0.0, 0.0));

        bridge.surface_created();

        assert!(bridge.pointers().is_empty());
        assert_eq!(
            calls(&bridge).last(),
            Some(&Call::Init),
            "No touch_up for pointers of a dead surface generation"
        );
    }

    //--- SharedBridge -----------------------------------------------------

    #[test]
    fn shared_bridge_serializes_both_contexts() {
        let shared = SharedBridge::new(RecordingEngine::new());
        shared.surface_created();
        shared.surface_resized(320, 240);

        // Lifecycle context and render context interleave through the
        // same handle.
        let render_handle = shared.clone();
        render_handle.render_tick();
        shared.touch(&GestureFrame::down(1, 1.0, 1.0));
        render_handle.render_tick();

        shared.with(|bridge| {
            assert_eq!(bridge.surface_state(), SurfaceState::Sized);
            assert_eq!(bridge.pointers().len(), 1);
            let downs = bridge
                .engine()
                .calls
                .iter()
                .filter(|c| matches!(c, Call::TouchDown(..)))
                .count();
            assert_eq!(downs, 1);
        });
    }

    #[test]
    fn shared_bridge_clone_observes_same_state() {
        let shared = SharedBridge::new(RecordingEngine::new());
        let other = shared.clone();

        shared.surface_created();
        other.surface_resized(100, 100);

        assert_eq!(shared.surface_size(), Some((100, 100)));
        assert_eq!(other.surface_state(), SurfaceState::Sized);
    }

    #[test]
    fn shared_bridge_usable_across_threads() {
        let shared = SharedBridge::new(RecordingEngine::new());
        shared.surface_created();
        shared.surface_resized(64, 64);

        let render = shared.clone();
        let handle = std::thread::spawn(move || {
            for _ in 0..10 {
                render.render_tick();
            }
        });

        for i in 0..10 {
            shared.touch(&GestureFrame::down(i, 0.0, 0.0));
            shared.touch(&GestureFrame::up(i));
        }

        handle.join().expect("render thread panicked");
        assert!(shared.with(|b| b.pointers().is_empty()));
    }
}
