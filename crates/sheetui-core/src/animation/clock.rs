//! Tick-driven progress clock.

use std::time::Duration;

/// A normalized progress value advanced by explicit time deltas.
///
/// The clock only moves forward; direction reversal is expressed by
/// [`Progress::invert`], which re-anchors the value so the remaining
/// distance is preserved (30% through one direction becomes 70% through
/// the opposite one).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    value: f32,
}

impl Default for Progress {
    fn default() -> Self {
        Self::zero()
    }
}

impl Progress {
    /// A clock at the start.
    pub const fn zero() -> Self {
        Self { value: 0.0 }
    }

    /// A clock at completion.
    pub const fn one() -> Self {
        Self { value: 1.0 }
    }

    /// A clock at an arbitrary position, clamped to `[0.0, 1.0]`.
    pub fn at(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Current position in `[0.0, 1.0]`.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Whether the clock has reached completion.
    #[inline]
    pub fn complete(&self) -> bool {
        self.value >= 1.0
    }

    /// Restart from zero.
    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Re-anchor for the opposite direction, preserving remaining distance.
    pub fn invert(&mut self) {
        self.value = 1.0 - self.value;
    }

    /// Advance toward completion by `delta` over a total `duration`.
    ///
    /// A zero duration snaps to completion immediately. Returns `true` when
    /// the clock is complete after the advance (including when it already
    /// was).
    pub fn advance(&mut self, delta: Duration, duration: Duration) -> bool {
        let duration_secs = duration.as_secs_f32();
        if duration_secs <= 0.0 {
            self.value = 1.0;
            return true;
        }
        let delta_secs = delta.as_secs_f32().max(0.0);
        self.value = (self.value + delta_secs / duration_secs).min(1.0);
        self.complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STEP: Duration = Duration::from_millis(50);
    const TOTAL: Duration = Duration::from_millis(200);

    #[test]
    fn test_advance_accumulates() {
        let mut clock = Progress::zero();
        assert!(!clock.advance(STEP, TOTAL));
        assert!((clock.value() - 0.25).abs() < 1e-6);
        assert!(!clock.advance(STEP, TOTAL));
        assert!((clock.value() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_advance_clamps_at_one() {
        let mut clock = Progress::zero();
        assert!(clock.advance(Duration::from_secs(5), TOTAL));
        assert_eq!(clock.value(), 1.0);
        assert!(clock.complete());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut clock = Progress::zero();
        assert!(clock.advance(Duration::from_millis(1), Duration::ZERO));
        assert!(clock.complete());
    }

    #[test]
    fn test_invert_preserves_remaining_distance() {
        let mut clock = Progress::at(0.3);
        clock.invert();
        assert!((clock.value() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_at_clamps() {
        assert_eq!(Progress::at(-1.0).value(), 0.0);
        assert_eq!(Progress::at(2.0).value(), 1.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = Progress::one();
        clock.reset();
        assert_eq!(clock.value(), 0.0);
        assert!(!clock.complete());
    }

    proptest! {
        #[test]
        fn prop_value_stays_in_unit_interval(
            start in 0.0f32..=1.0,
            deltas in proptest::collection::vec(0u64..500, 0..20),
        ) {
            let mut clock = Progress::at(start);
            for ms in deltas {
                clock.advance(Duration::from_millis(ms), TOTAL);
                prop_assert!((0.0..=1.0).contains(&clock.value()));
            }
        }

        #[test]
        fn prop_many_small_steps_complete(extra in 1u64..100) {
            // Total elapsed time strictly past the duration always completes.
            let mut clock = Progress::zero();
            let steps = 8;
            let step = Duration::from_millis(TOTAL.as_millis() as u64 / steps + extra);
            for _ in 0..steps {
                clock.advance(step, TOTAL);
            }
            prop_assert!(clock.complete());
        }
    }
}
