/// Accumulation state for the measured region.
///
/// Written on every `end()`, so it is kept small enough to live in a single
/// cache line. The zero value is the idle state: no samples, `fastest_ticks`
/// unset, latch open.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RegionState {
    begin_ticks: u64,
    samples: u64,
    total_ticks: u64,
    /// 0 means no sample recorded yet.
    fastest_ticks: u64,
    saturated: bool,
}

const _: () = assert!(std::mem::size_of::<RegionState>() <= 64);

impl RegionState {
    /// Tick count captured by the most recent `begin()`.
    #[inline]
    pub fn begin_ticks(&self) -> u64 {
        self.begin_ticks
    }

    /// Completed begin/end pairs this cycle.
    #[inline]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Shortest recorded duration, or `None` before the first sample.
    #[inline]
    pub fn fastest_ticks(&self) -> Option<u64> {
        (self.samples > 0).then_some(self.fastest_ticks)
    }

    /// Whether accumulation is frozen until the next report.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    pub(crate) fn stage(&mut self, now: u64) {
        self.begin_ticks = now;
    }

    /// Folds the sample ending at `end_ticks` into the totals.
    ///
    /// Returns `false` if committing it would overflow the total or the sample
    /// count. In that case the latch is set and nothing else changes.
    #[inline]
    pub(crate) fn accumulate(&mut self, end_ticks: u64) -> bool {
        let duration = end_ticks.wrapping_sub(self.begin_ticks);

        let total = match self.total_ticks.checked_add(duration) {
            Some(total) if self.samples != u64::MAX => total,
            _ => {
                self.saturated = true;
                return false;
            }
        };

        self.total_ticks = total;
        if duration < self.fastest_ticks || self.fastest_ticks == 0 {
            self.fastest_ticks = duration;
        }
        self.samples += 1;
        true
    }

    /// Returns the current state and leaves the idle state behind.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    #[cfg(test)]
    pub(crate) fn preloaded(samples: u64, total_ticks: u64, fastest_ticks: u64) -> Self {
        Self {
            samples,
            total_ticks,
            fastest_ticks,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(state: &mut RegionState, begin: u64, end: u64) -> bool {
        state.stage(begin);
        state.accumulate(end)
    }

    // ── accumulate ────────────────────────────────────────────────────────

    #[test]
    fn default_is_idle() {
        let s = RegionState::default();
        assert!(s.is_idle());
        assert_eq!(s.fastest_ticks(), None);
    }

    #[test]
    fn accumulate_commits_duration() {
        let mut s = RegionState::default();
        assert!(sample(&mut s, 1_000, 1_250));
        assert_eq!(s.samples(), 1);
        assert_eq!(s.total_ticks(), 250);
        assert_eq!(s.fastest_ticks(), Some(250));
    }

    #[test]
    fn zero_duration_does_not_pin_fastest() {
        // A zero-length sample is indistinguishable from "unset", so the next
        // sample replaces it.
        let mut s = RegionState::default();
        assert!(sample(&mut s, 10, 10));
        assert!(sample(&mut s, 10, 40));
        assert_eq!(s.fastest_ticks(), Some(30));
        assert_eq!(s.samples(), 2);
    }

    #[test]
    fn duration_wraps_across_counter_rollover() {
        let mut s = RegionState::default();
        assert!(sample(&mut s, u64::MAX - 4, 5));
        assert_eq!(s.total_ticks(), 10);
    }

    // ── saturation ────────────────────────────────────────────────────────

    #[test]
    fn total_overflow_sets_latch_without_commit() {
        let mut s = RegionState::preloaded(3, u64::MAX - 1, 7);
        assert!(!sample(&mut s, 0, 2));
        assert!(s.is_saturated());
        assert_eq!(s.samples(), 3);
        assert_eq!(s.total_ticks(), u64::MAX - 1);
        assert_eq!(s.fastest_ticks(), Some(7));
    }

    #[test]
    fn total_reaching_max_exactly_is_allowed() {
        let mut s = RegionState::preloaded(1, u64::MAX - 2, 9);
        assert!(sample(&mut s, 0, 2));
        assert!(!s.is_saturated());
        assert_eq!(s.total_ticks(), u64::MAX);
    }

    #[test]
    fn count_limit_sets_latch() {
        let mut s = RegionState::preloaded(u64::MAX, 100, 1);
        assert!(!sample(&mut s, 0, 1));
        assert!(s.is_saturated());
        assert_eq!(s.samples(), u64::MAX);
        assert_eq!(s.total_ticks(), 100);
    }

    // ── take ──────────────────────────────────────────────────────────────

    #[test]
    fn take_resets_to_idle() {
        let mut s = RegionState::default();
        sample(&mut s, 0, 99);
        let taken = s.take();
        assert_eq!(taken.samples(), 1);
        assert!(s.is_idle());
    }
}
