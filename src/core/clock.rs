//=========================================================================
// Frame Clock
//=========================================================================
//
// Measures wall-clock time between consecutive render ticks.
//
// The clock only advances when a tick is actually taken: the render loop
// driver skips it entirely while the surface is paused, so time spent
// paused never shows up as a giant delta on resume. Likewise, surface
// re-creation resets the clock, because a stale timestamp from the
// previous graphics context would otherwise produce a spurious first
// delta.
//
// Delta values are `f32` seconds, matching what the engine facade's
// `update_time` consumes.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== FrameClock ==========================================================

/// Inter-tick timing source for the render loop driver.
///
/// Invariants:
/// - The delta returned by a tick is always >= 0.
/// - The first tick after construction or [`reset`](FrameClock::reset)
///   yields exactly `0.0`.
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self { last_tick: None }
    }

    //--- tick() -----------------------------------------------------------
    //
    // Advances the clock to the current instant and returns the elapsed
    // seconds since the previous tick.
    //
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    //--- tick_at() --------------------------------------------------------
    //
    // Advances the clock to an explicit instant. Exists so tests can
    // drive the clock deterministically; production code goes through
    // `tick()`.
    //
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = match self.last_tick {
            // Instant is monotonic, but saturate anyway so a delta can
            // never come out negative.
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        delta
    }

    //--- reset() ----------------------------------------------------------
    //
    // Forgets the previous tick. Called on surface (re)creation, when the
    // graphics context is treated as fresh.
    //
    pub fn reset(&mut self) {
        self.last_tick = None;
    }

    /// Returns `true` if no tick has been taken since the last reset.
    pub fn is_fresh(&self) -> bool {
        self.last_tick.is_none()
    }
}

impl Default for FrameClock {
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
    use std::time::Duration;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_at(Instant::now()), 0.0);
    }

    #[test]
    fn second_tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        let start = Instant::now();

        clock.tick_at(start);
        let delta = clock.tick_at(start + Duration::from_millis(16));

        assert!((delta - 0.016).abs() < 1e-4, "Expected ~16ms, got {}", delta);
    }

    #[test]
    fn reset_makes_next_tick_zero_again() {
        let mut clock = FrameClock::new();
        let start = Instant::now();

        clock.tick_at(start);
        clock.tick_at(start + Duration::from_millis(16));
        clock.reset();

        assert!(clock.is_fresh());
        assert_eq!(clock.tick_at(start + Duration::from_secs(60)), 0.0);
    }

    #[test]
    fn delta_never_negative() {
        let mut clock = FrameClock::new();
        let start = Instant::now();

        clock.tick_at(start + Duration::from_millis(50));
        // A tick handed an earlier instant than the previous one
        // saturates to zero rather than going negative.
        assert_eq!(clock.tick_at(start), 0.0);
    }

    #[test]
    fn delta_measures_since_previous_tick_only() {
        let mut clock = FrameClock::new();
        let start = Instant::now();

        clock.tick_at(start);
        clock.tick_at(start + Duration::from_millis(10));
        let delta = clock.tick_at(start + Duration::from_millis(30));

        assert!((delta - 0.020).abs() < 1e-4, "Expected ~20ms, got {}", delta);
    }
}
