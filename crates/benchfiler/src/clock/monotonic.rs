use std::time::Instant;

use super::TickSource;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Monotonic tick source backed by `std::time::Instant`.
///
/// Ticks are nanoseconds elapsed since the clock was created. `Instant` maps
/// onto the platform's high-resolution counter (QueryPerformanceCounter on
/// Windows, `CLOCK_MONOTONIC` elsewhere).
#[derive(Debug, Copy, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicClock {
    #[inline]
    fn now(&self) -> u64 {
        // u64 nanoseconds cover ~584 years of uptime.
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    #[inline]
    fn frequency(&self) -> u64 {
        NANOS_PER_SECOND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frequency_is_nanoseconds() {
        assert_eq!(MonotonicClock::new().frequency(), 1_000_000_000);
    }

    #[test]
    fn now_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let mut last = clock.now();
        for _ in 0..1_000 {
            let t = clock.now();
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn now_tracks_sleep() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        thread::sleep(Duration::from_millis(20));
        let b = clock.now();
        // Loose lower bound for scheduler variance.
        assert!(b - a >= 15_000_000, "delta was {}", b - a);
    }
}
