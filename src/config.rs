//! Sensor variants and poller configuration.
//!
//! All configuration is fixed at construction time. `PollerConfig::new` rejects
//! intervals that would break wraparound-safe elapsed-time comparison.

use core::fmt;

use crate::error::ConfigError;

/// Largest accepted poll interval: half the range of the `u32` millisecond counter.
///
/// Elapsed time is computed with wrapping subtraction, which is only unambiguous
/// while the interval stays below half the counter range.
pub const MAX_INTERVAL_MS: u32 = u32::MAX / 2;

/// Supported sensor models.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SensorKind {
    /// DHT11 (blue, low resolution)
    Dht11,
    /// DHT12 (one-wire mode)
    Dht12,
    /// DHT21
    Dht21,
    /// DHT22 (white, high resolution)
    Dht22,
    /// AM2301 (wired DHT21)
    Am2301,
}

impl SensorKind {
    /// Numeric type code used by vendor driver libraries.
    pub const fn code(self) -> u8 {
        match self {
            SensorKind::Dht11 => 11,
            SensorKind::Dht12 => 12,
            SensorKind::Dht21 | SensorKind::Am2301 => 21,
            SensorKind::Dht22 => 22,
        }
    }

    /// Map a vendor type code back to a kind. Code 21 maps to `Dht21`.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            11 => Some(SensorKind::Dht11),
            12 => Some(SensorKind::Dht12),
            21 => Some(SensorKind::Dht21),
            22 => Some(SensorKind::Dht22),
            _ => None,
        }
    }

    /// Minimum sampling period from the sensor datasheet.
    pub const fn min_interval_ms(self) -> u32 {
        match self {
            SensorKind::Dht11 | SensorKind::Dht12 => 1000,
            SensorKind::Dht21 | SensorKind::Dht22 | SensorKind::Am2301 => 2000,
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorKind::Dht11 => "DHT11",
            SensorKind::Dht12 => "DHT12",
            SensorKind::Dht21 => "DHT21",
            SensorKind::Dht22 => "DHT22",
            SensorKind::Am2301 => "AM2301",
        };
        f.write_str(name)
    }
}

/// Immutable poller configuration: where the sensor is, what it is, how often to read it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollerConfig {
    pin: u8,
    kind: SensorKind,
    interval_ms: u32,
}

impl PollerConfig {
    /// Create a configuration with an explicit interval.
    ///
    /// Intervals shorter than [`SensorKind::min_interval_ms`] are accepted; the
    /// sensor will then usually return stale or invalid data.
    pub const fn new(pin: u8, kind: SensorKind, interval_ms: u32) -> Result<Self, ConfigError> {
        if interval_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::IntervalTooLong {
                interval_ms,
                max_ms: MAX_INTERVAL_MS,
            });
        }

        Ok(Self {
            pin,
            kind,
            interval_ms,
        })
    }

    /// Create a configuration polling at the sensor's minimum sampling period.
    pub const fn for_kind(pin: u8, kind: SensorKind) -> Self {
        Self {
            pin,
            kind,
            interval_ms: kind.min_interval_ms(),
        }
    }

    /// Hardware pin the sensor is attached to.
    pub const fn pin(&self) -> u8 {
        self.pin
    }

    /// Sensor model.
    pub const fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Minimum milliseconds between hardware reads.
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// True if the interval is shorter than the sensor's sampling period.
    pub const fn is_faster_than_sensor(&self) -> bool {
        self.interval_ms < self.kind.min_interval_ms()
    }
}
