//! Outcome of a poll attempt.

use core::fmt;

/// Measured quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Metric {
    /// Temperature in degrees Celsius
    Temperature,
    /// Relative humidity in percent
    Humidity,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Temperature => f.write_str("temperature"),
            Metric::Humidity => f.write_str("humidity"),
        }
    }
}

/// What happened to one metric during a poll attempt.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MetricStatus {
    /// Valid reading stored in the cache
    Updated {
        /// Cached value before this reading
        previous: Option<f32>,
        /// Newly stored value
        current: f32,
    },
    /// Reading was NaN or the driver failed; cache untouched
    Invalid,
}

impl MetricStatus {
    /// True if a valid reading was stored.
    pub fn is_updated(&self) -> bool {
        matches!(self, MetricStatus::Updated { .. })
    }

    /// True if the stored value differs from the one it replaced.
    pub fn changed(&self) -> bool {
        match self {
            MetricStatus::Updated { previous, current } => *previous != Some(*current),
            MetricStatus::Invalid => false,
        }
    }
}

/// Per-metric outcome of one hardware poll.
///
/// `Poller::poll()` only says whether an attempt happened; this report says
/// what the attempt achieved.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    /// Timestamp of the attempt
    pub at_ms: u32,
    /// Temperature outcome
    pub temperature: MetricStatus,
    /// Humidity outcome
    pub humidity: MetricStatus,
}

impl PollReport {
    /// Outcome for a single metric.
    pub fn status(&self, metric: Metric) -> MetricStatus {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
        }
    }

    /// True if any cached value changed.
    pub fn changed(&self) -> bool {
        self.temperature.changed() || self.humidity.changed()
    }

    /// True if at least one metric returned a valid reading.
    pub fn any_valid(&self) -> bool {
        self.temperature.is_updated() || self.humidity.is_updated()
    }
}
