//! Monotonic millisecond clock.

/// Source of a monotonic, wrapping millisecond counter (Arduino `millis()` style).
///
/// The counter may wrap at `u32::MAX`; the poller compares timestamps with
/// wrapping subtraction.
pub trait Clock {
    /// Current counter value in milliseconds.
    fn now_ms(&mut self) -> u32;
}

impl<F: FnMut() -> u32> Clock for F {
    fn now_ms(&mut self) -> u32 {
        self()
    }
}

/// Milliseconds elapsed from `since` to `now`, correct across one counter wrap.
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_clock() {
        let mut ticks = 0u32;
        let mut clock = || {
            ticks += 10;
            ticks
        };
        assert_eq!(clock.now_ms(), 10);
        assert_eq!(clock.now_ms(), 20);
    }

    #[test]
    fn test_elapsed_wraps() {
        assert_eq!(elapsed_ms(1500, 500), 1000);
        assert_eq!(elapsed_ms(99, u32::MAX - 100), 200);
        assert_eq!(elapsed_ms(7, 7), 0);
    }
}
