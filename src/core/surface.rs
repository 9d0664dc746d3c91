//=========================================================================
// Surface Lifecycle State Machine
//=========================================================================
//
// Models creation, resize, pause, and resume of the drawable surface.
//
// The machine is the gate that decides when render ticks and touch
// dispatch are allowed to reach the engine. It is an explicit transition
// function, not a set of platform callbacks, so the transition table is
// testable without a real display surface.
//
// State graph:
// ```text
// Uninitialized --(surface_created)--> Created
// Created       --(surface_created)--> Created        (idempotent re-init)
// Created       --(surface_sized)----> Sized
// Sized         --(surface_sized)----> Sized          (resize while live)
// Sized/Active  --(system_pause)-----> Paused
// Paused        --(system_resume)----> Active         (only if ever sized)
// any           --(surface_destroyed)-> Destroyed     (terminal)
// ```
//
// The "active window" in which engine calls are legal is {Sized, Active}:
// the first resize after creation makes the surface drawable immediately
// (the platform delivers the first frame right after the size callback),
// and a resumed surface re-enters via Active.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, warn};

//=== SurfaceState ========================================================

/// Lifecycle state of the drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceState {
    /// No surface exists yet; nothing is legal.
    Uninitialized,

    /// Surface exists and the engine is initialized, but dimensions are
    /// not yet known; rendering is not legal.
    Created,

    /// Surface has dimensions; rendering and touch dispatch are legal.
    Sized,

    /// Surface resumed after a pause; rendering and touch dispatch are
    /// legal.
    Active,

    /// System paused the surface; all engine calls are dropped, never
    /// buffered.
    Paused,

    /// Surface is gone for good. Terminal: no transition leaves this.
    Destroyed,
}

//=== Transition ==========================================================

//--- Outcome of feeding one lifecycle event into the machine -------------
//
// The machine itself never touches the engine; it tells the bridge what
// facade action (if any) the accepted transition requires.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// State updated; no facade action required.
    Accepted,

    /// State updated; the engine must be (re)initialized and the frame
    /// clock reset for the fresh graphics context.
    InitEngine,

    /// State updated; the engine must be told the new dimensions.
    ResizeEngine(u32, u32),

    /// Event dropped; nothing reaches the engine.
    Dropped,
}

//=== SurfaceLifecycle ====================================================

/// The lifecycle machine plus the surface attributes it guards.
pub struct SurfaceLifecycle {
    state: SurfaceState,

    /// Latest accepted dimensions; `None` until sized at least once for
    /// the current surface generation.
    size: Option<(u32, u32)>,

    /// State to restore if a pause happens before the surface was ever
    /// sized (resume promotes to `Active` only for a sized surface).
    pre_pause: SurfaceState,
}

impl SurfaceLifecycle {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            state: SurfaceState::Uninitialized,
            size: None,
            pre_pause: SurfaceState::Uninitialized,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Latest accepted surface dimensions, if sized at least once in the
    /// current surface generation.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// `true` while render ticks and touch dispatch may reach the engine.
    pub fn is_engine_callable(&self) -> bool {
        matches!(self.state, SurfaceState::Sized | SurfaceState::Active)
    }

    //--- surface_created() ------------------------------------------------
    //
    // A (re)created surface means the graphics context is invalidated:
    // the engine must re-init, and previously known dimensions no longer
    // describe anything real.
    //
    pub(crate) fn surface_created(&mut self) -> Transition {
        if self.state == SurfaceState::Destroyed {
            warn!(target: "bridge", "surface_created after destroy, dropped");
            return Transition::Dropped;
        }

        debug!(target: "bridge", "Surface created (was {:?})", self.state);
        self.state = SurfaceState::Created;
        self.size = None;
        Transition::InitEngine
    }

    //--- surface_sized() --------------------------------------------------
    //
    // Records dimensions and forwards them to the engine when legal.
    // First size after creation opens the active window. A resize while
    // paused only records: nothing is forwarded and nothing is replayed
    // on resume.
    //
    pub(crate) fn surface_sized(&mut self, width: u32, height: u32) -> Transition {
        if width == 0 || height == 0 {
            warn!(
                target: "bridge",
                "Degenerate surface size {}x{}, dropped", width, height
            );
            return Transition::Dropped;
        }

        match self.state {
            SurfaceState::Created | SurfaceState::Sized | SurfaceState::Active => {
                debug!(
                    target: "bridge",
                    "Surface sized {}x{} (state {:?})", width, height, self.state
                );
                if self.state == SurfaceState::Created {
                    self.state = SurfaceState::Sized;
                }
                self.size = Some((width, height));
                Transition::ResizeEngine(width, height)
            }

            SurfaceState::Paused => {
                debug!(
                    target: "bridge",
                    "Surface sized {}x{} while paused, recorded only", width, height
                );
                self.size = Some((width, height));
                Transition::Dropped
            }

            SurfaceState::Uninitialized | SurfaceState::Destroyed => {
                warn!(
                    target: "bridge",
                    "Surface sized in {:?} before any init, dropped", self.state
                );
                Transition::Dropped
            }
        }
    }

    //--- system_pause() ---------------------------------------------------
    //
    // Closes the active window. Accepted from any non-terminal state so
    // an early pause (before the surface was sized) is remembered rather
    // than lost.
    //
    pub(crate) fn system_pause(&mut self) -> Transition {
        match self.state {
            SurfaceState::Destroyed => Transition::Dropped,
            SurfaceState::Paused => Transition::Accepted,
            prior => {
                debug!(target: "bridge", "System pause (was {:?})", prior);
                self.pre_pause = prior;
                self.state = SurfaceState::Paused;
                Transition::Accepted
            }
        }
    }

    //--- system_resume() --------------------------------------------------
    //
    // Reopens the active window, but only if the surface was sized before
    // the pause; otherwise the pre-pause state is restored and the
    // surface waits for its first size as before.
    //
    pub(crate) fn system_resume(&mut self) -> Transition {
        if self.state != SurfaceState::Paused {
            return Transition::Dropped;
        }

        if self.size.is_some() {
            debug!(target: "bridge", "System resume, surface active");
            self.state = SurfaceState::Active;
        } else {
            debug!(
                target: "bridge",
                "System resume before first size, back to {:?}", self.pre_pause
            );
            self.state = self.pre_pause;
        }
        Transition::Accepted
    }

    //--- surface_destroyed() ----------------------------------------------

    pub(crate) fn surface_destroyed(&mut self) -> Transition {
        if self.state == SurfaceState::Destroyed {
            return Transition::Dropped;
        }
        debug!(target: "bridge", "Surface destroyed (was {:?})", self.state);
        self.state = SurfaceState::Destroyed;
        Transition::Accepted
    }
}

impl Default for SurfaceLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn live_surface() -> SurfaceLifecycle {
        let mut lc = SurfaceLifecycle::new();
        assert_eq!(lc.surface_created(), Transition::InitEngine);
        assert_eq!(lc.surface_sized(800, 600), Transition::ResizeEngine(800, 600));
        lc
    }

    #[test]
    fn initial_state_forbids_engine_calls() {
        let lc = SurfaceLifecycle::new();
        assert_eq!(lc.state(), SurfaceState::Uninitialized);
        assert!(!lc.is_engine_callable());
        assert_eq!(lc.size(), None);
    }

    #[test]
    fn created_then_sized_opens_active_window() {
        let lc = live_surface();
        assert_eq!(lc.state(), SurfaceState::Sized);
        assert!(lc.is_engine_callable());
        assert_eq!(lc.size(), Some((800, 600)));
    }

    #[test]
    fn sized_before_created_is_dropped() {
        let mut lc = SurfaceLifecycle::new();
        assert_eq!(lc.surface_sized(800, 600), Transition::Dropped);
        assert_eq!(lc.state(), SurfaceState::Uninitialized);
        assert_eq!(lc.size(), None);
    }

    #[test]
    fn created_without_size_keeps_engine_gated() {
        let mut lc = SurfaceLifecycle::new();
        lc.surface_created();
        assert_eq!(lc.state(), SurfaceState::Created);
        assert!(!lc.is_engine_callable());
    }

    #[test]
    fn recreate_is_idempotent_and_resets_size() {
        let mut lc = live_surface();
        assert_eq!(lc.surface_created(), Transition::InitEngine);
        assert_eq!(lc.state(), SurfaceState::Created);
        assert_eq!(lc.size(), None, "New surface generation starts unsized");
    }

    #[test]
    fn resize_while_live_stays_in_active_window() {
        let mut lc = live_surface();
        assert_eq!(lc.surface_sized(1024, 768), Transition::ResizeEngine(1024, 768));
        assert_eq!(lc.state(), SurfaceState::Sized);
        assert_eq!(lc.size(), Some((1024, 768)));
    }

    #[test]
    fn degenerate_size_is_dropped() {
        let mut lc = live_surface();
        assert_eq!(lc.surface_sized(0, 600), Transition::Dropped);
        assert_eq!(lc.surface_sized(800, 0), Transition::Dropped);
        assert_eq!(lc.size(), Some((800, 600)), "Last good size retained");
    }

    #[test]
    fn pause_closes_and_resume_reopens_active_window() {
        let mut lc = live_surface();

        assert_eq!(lc.system_pause(), Transition::Accepted);
        assert_eq!(lc.state(), SurfaceState::Paused);
        assert!(!lc.is_engine_callable());

        assert_eq!(lc.system_resume(), Transition::Accepted);
        assert_eq!(lc.state(), SurfaceState::Active);
        assert!(lc.is_engine_callable());
    }

    #[test]
    fn resume_before_first_size_restores_prior_state() {
        let mut lc = SurfaceLifecycle::new();
        lc.surface_created();
        lc.system_pause();
        lc.system_resume();

        assert_eq!(lc.state(), SurfaceState::Created);
        assert!(!lc.is_engine_callable());
    }

    #[test]
    fn resize_while_paused_records_but_drops() {
        let mut lc = live_surface();
        lc.system_pause();

        assert_eq!(lc.surface_sized(640, 480), Transition::Dropped);
        assert_eq!(lc.size(), Some((640, 480)), "Dimensions still recorded");

        lc.system_resume();
        assert_eq!(lc.state(), SurfaceState::Active);
    }

    #[test]
    fn resume_without_pause_is_dropped() {
        let mut lc = live_surface();
        assert_eq!(lc.system_resume(), Transition::Dropped);
        assert_eq!(lc.state(), SurfaceState::Sized);
    }

    #[test]
    fn double_pause_keeps_original_pre_pause_state() {
        let mut lc = live_surface();
        lc.system_pause();
        lc.system_pause();

        assert_eq!(lc.state(), SurfaceState::Paused);
        lc.system_resume();
        assert_eq!(lc.state(), SurfaceState::Active);
    }

    #[test]
    fn destroyed_is_terminal() {
        let mut lc = live_surface();
        assert_eq!(lc.surface_destroyed(), Transition::Accepted);
        assert_eq!(lc.state(), SurfaceState::Destroyed);

        assert_eq!(lc.surface_created(), Transition::Dropped);
        assert_eq!(lc.surface_sized(800, 600), Transition::Dropped);
        assert_eq!(lc.system_pause(), Transition::Dropped);
        assert_eq!(lc.system_resume(), Transition::Dropped);
        assert_eq!(lc.surface_destroyed(), Transition::Dropped);
        assert_eq!(lc.state(), SurfaceState::Destroyed);
    }
}
