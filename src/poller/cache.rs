//! Per-metric reading cache.

use super::report::MetricStatus;

/// Last known-valid value of one metric.
///
/// Starts empty and is only overwritten by well-defined (non-NaN) readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricCache {
    value: Option<f32>,
}

impl MetricCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Cached value, `None` until the first valid reading.
    pub const fn value(&self) -> Option<f32> {
        self.value
    }

    /// Offer a raw reading to the cache.
    ///
    /// NaN (and `None`, for a driver error) leave the cached value untouched.
    pub fn accept(&mut self, raw: Option<f32>) -> MetricStatus {
        match raw {
            Some(current) if !current.is_nan() => {
                let previous = self.value.replace(current);
                MetricStatus::Updated { previous, current }
            }
            _ => MetricStatus::Invalid,
        }
    }
}
